//! Timestamp and date formats accepted by the API
//!
//! Timestamps are ISO-8601 UTC with millisecond precision, e.g. `2015-09-01T16:00:00.000Z`.
//! Every field is zero-padded and fixed-width, so lexical order equals chronological order.

use std::sync::LazyLock;

use regex::Regex;

/// Pattern for a UTC millisecond timestamp
pub const UTC_TIMESTAMP_PATTERN: &str = r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{3}Z$";

/// Pattern for a calendar date
pub const DATE_PATTERN: &str = r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$";

/// Appended to a date to get the first timestamp of that day
pub const START_OF_DAY_SUFFIX: &str = "T00:00:00.000Z";

/// Appended to a date to get the last timestamp of that day
pub const END_OF_DAY_SUFFIX: &str = "T23:59:59.999Z";

static UTC_TIMESTAMP_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(UTC_TIMESTAMP_PATTERN).expect("valid timestamp pattern"));

static DATE_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(DATE_PATTERN).expect("valid date pattern"));

/// Kind of key addressed by a `/measurements/{key}` path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementKey {
	/// A single measurement timestamp
	Timestamp,
	/// A whole calendar day
	Date,
}

impl MeasurementKey {
	/// Classify a path segment, or `None` when it is neither a timestamp nor a date
	pub fn classify(value: &str) -> Option<Self> {
		if is_utc_timestamp(value) {
			Some(Self::Timestamp)
		} else if is_date(value) {
			Some(Self::Date)
		} else {
			None
		}
	}
}

pub fn is_utc_timestamp(value: &str) -> bool {
	UTC_TIMESTAMP_RE.is_match(value)
}

pub fn is_date(value: &str) -> bool {
	DATE_RE.is_match(value)
}
