//! Statistic types computed over measurement ranges

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

pub mod errors;
pub mod request;

pub use errors::StatsQueryError;
pub use request::StatsQuery;

/// Result type for stats query parsing
pub type StatsQueryResult<T> = Result<T, StatsQueryError>;

/// Supported aggregate kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum StatType {
	Min,
	Max,
	Average,
}

impl StatType {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Min => "min",
			Self::Max => "max",
			Self::Average => "average",
		}
	}
}

impl fmt::Display for StatType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Case-insensitive parse; anything else is unsupported
impl FromStr for StatType {
	type Err = StatsQueryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		[Self::Min, Self::Max, Self::Average]
			.into_iter()
			.find(|stat| stat.as_str().eq_ignore_ascii_case(s))
			.ok_or_else(|| StatsQueryError::UnsupportedStat {
				stat: s.to_string(),
			})
	}
}

/// One aggregate of one metric over a timestamp range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Stat {
	pub metric: String,
	pub stat: StatType,
	pub value: f32,
}

impl Stat {
	pub fn new(metric: impl Into<String>, stat: StatType, value: f32) -> Self {
		Self {
			metric: metric.into(),
			stat,
			value,
		}
	}
}
