//! Shared constants

pub mod formats;
pub mod metrics;
