//! Error types for measurement validation

use thiserror::Error;

/// Validation errors for measurement payloads
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasurementValidationError {
	#[error("The timestamp must be specified.")]
	MissingTimestamp,

	#[error("Metric names must not be blank.")]
	BlankMetricName,

	#[error("Metric '{metric}' must be a finite number.")]
	NonFiniteMetric { metric: String },
}
