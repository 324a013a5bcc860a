pub mod common;
pub mod health;
pub mod measurements;
pub mod stats;

pub use health::{health, ready};
pub use measurements::{
	delete_measurement, get_measurement, patch_measurement, post_measurement, put_measurement,
};
pub use stats::get_stats;
