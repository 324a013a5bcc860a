//! Core Measurement domain model

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
#[allow(unused_imports)]
use serde_json::json;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

pub mod errors;
pub mod request;

pub use errors::MeasurementValidationError;
pub use request::MeasurementRequest;

/// Result type for measurement validation
pub type MeasurementValidationResult<T> = Result<T, MeasurementValidationError>;

/// A timestamped set of named metric readings.
///
/// Measurements are immutable once built; updates produce a new value that
/// replaces the stored one. Metrics are kept in a `BTreeMap` so serialization
/// order is stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[cfg_attr(feature = "openapi", schema(example = json!({
    "timestamp": "2015-09-01T16:00:00.000Z",
    "metrics": { "temperature": 27.1, "dewPoint": 16.7, "precipitation": 0.0 }
})))]
pub struct Measurement {
	timestamp: String,
	#[serde(default)]
	metrics: BTreeMap<String, f32>,
}

impl Measurement {
	pub fn new(timestamp: impl Into<String>, metrics: BTreeMap<String, f32>) -> Self {
		Self {
			timestamp: timestamp.into(),
			metrics,
		}
	}

	/// Build a measurement from `(name, value)` pairs
	pub fn from_pairs<I, N>(timestamp: impl Into<String>, metrics: I) -> Self
	where
		I: IntoIterator<Item = (N, f32)>,
		N: Into<String>,
	{
		Self::new(
			timestamp,
			metrics
				.into_iter()
				.map(|(name, value)| (name.into(), value))
				.collect(),
		)
	}

	pub fn timestamp(&self) -> &str {
		&self.timestamp
	}

	pub fn metrics(&self) -> &BTreeMap<String, f32> {
		&self.metrics
	}

	/// Value of a single metric, if this measurement reports it
	pub fn metric(&self, name: &str) -> Option<f32> {
		self.metrics.get(name).copied()
	}

	pub fn into_parts(self) -> (String, BTreeMap<String, f32>) {
		(self.timestamp, self.metrics)
	}
}
