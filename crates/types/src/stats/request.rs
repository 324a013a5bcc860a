//! Stats query model parsed from repeated query-string parameters

use super::{StatType, StatsQueryError, StatsQueryResult};
use crate::constants::formats::is_utc_timestamp;

pub const STAT_PARAM: &str = "stat";
pub const METRIC_PARAM: &str = "metric";
pub const FROM_DATE_TIME_PARAM: &str = "fromDateTime";
pub const TO_DATE_TIME_PARAM: &str = "toDateTime";

/// A validated `/stats` query: which aggregates of which metrics over `[from, to)`
#[derive(Debug, Clone, PartialEq)]
pub struct StatsQuery {
	pub stats: Vec<StatType>,
	pub metrics: Vec<String>,
	pub from_date_time: String,
	pub to_date_time: String,
}

impl StatsQuery {
	/// Build a query from decoded `(name, value)` pairs.
	///
	/// `stat` and `metric` may repeat and keep their order. The date-time bounds
	/// are checked before the stat names. Unknown parameters are ignored.
	pub fn from_pairs<I, K, V>(pairs: I) -> StatsQueryResult<Self>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: Into<String>,
	{
		let mut raw_stats = Vec::new();
		let mut metrics = Vec::new();
		let mut from_date_time = None;
		let mut to_date_time = None;

		for (name, value) in pairs {
			match name.as_ref() {
				STAT_PARAM => raw_stats.push(value.into()),
				METRIC_PARAM => metrics.push(value.into()),
				FROM_DATE_TIME_PARAM => {
					from_date_time.get_or_insert(value.into());
				},
				TO_DATE_TIME_PARAM => {
					to_date_time.get_or_insert(value.into());
				},
				_ => {},
			}
		}

		let from_date_time = validate_date_time(from_date_time)?;
		let to_date_time = validate_date_time(to_date_time)?;

		let stats = raw_stats
			.iter()
			.map(|s| s.parse::<StatType>())
			.collect::<StatsQueryResult<Vec<_>>>()?;

		Ok(Self {
			stats,
			metrics,
			from_date_time,
			to_date_time,
		})
	}
}

fn validate_date_time(value: Option<String>) -> StatsQueryResult<String> {
	match value {
		Some(v) if v.trim().is_empty() => Err(StatsQueryError::MissingDateTime),
		None => Err(StatsQueryError::MissingDateTime),
		Some(v) if !is_utc_timestamp(&v) => Err(StatsQueryError::InvalidDateTime { value: v }),
		Some(v) => Ok(v),
	}
}
