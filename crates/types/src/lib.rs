//! Weather Types
//!
//! Shared models and traits for the weather tracker.
//! This crate contains the domain models, request validation and storage traits.

pub mod constants;
pub mod measurements;
pub mod stats;
pub mod storage;

// Re-export serde_json for convenience
pub use serde_json;

pub use constants::formats::{is_date, is_utc_timestamp, MeasurementKey};

pub use measurements::{
	Measurement, MeasurementRequest, MeasurementValidationError, MeasurementValidationResult,
};

pub use stats::{Stat, StatType, StatsQuery, StatsQueryError, StatsQueryResult};

pub use storage::{MeasurementStore, MergeFn, OrderedStoreTrait, StorageError, StorageResult};
