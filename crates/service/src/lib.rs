//! Weather Service
//!
//! Measurement repository and statistics aggregation.

pub mod measurement;
pub mod stats;

pub use measurement::{
	MeasurementService, MeasurementServiceError, MeasurementServiceResult, MeasurementServiceTrait,
};
pub use stats::{StatsService, StatsServiceError, StatsServiceResult, StatsServiceTrait};
