//! Error types for statistics queries

use thiserror::Error;

/// Validation errors for the stats query string
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsQueryError {
	#[error("Unsupported StatType: {stat}")]
	UnsupportedStat { stat: String },

	#[error("Both fromDateTime and toDateTime must be specified.")]
	MissingDateTime,

	#[error("Both fromDateTime and toDateTime must be in UTC format e.g. 2015-09-01T16:00:00.000Z")]
	InvalidDateTime { value: String },
}
