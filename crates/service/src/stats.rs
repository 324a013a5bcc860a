//! Stats service
//!
//! Aggregates metric values over half-open timestamp ranges.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};
use weather_types::{Measurement, Stat, StatType, StatsQuery};

use crate::measurement::{MeasurementServiceError, MeasurementServiceTrait};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StatsServiceError {
	#[error("measurement lookup failed: {0}")]
	Measurements(#[from] MeasurementServiceError),
}

pub type StatsServiceResult<T> = Result<T, StatsServiceError>;

/// Trait for statistics over stored measurements.
///
/// Every range is `[from, to)`. A metric with no values in the range yields
/// no stat rather than an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsServiceTrait: Send + Sync {
	async fn get_average(&self, metric: &str, from: &str, to: &str)
		-> StatsServiceResult<Option<Stat>>;

	async fn get_max(&self, metric: &str, from: &str, to: &str) -> StatsServiceResult<Option<Stat>>;

	async fn get_min(&self, metric: &str, from: &str, to: &str) -> StatsServiceResult<Option<Stat>>;

	/// One stat per requested metric and stat type that has data, metrics outermost
	async fn get_stats(&self, query: &StatsQuery) -> StatsServiceResult<Vec<Stat>>;
}

#[derive(Clone)]
pub struct StatsService {
	measurements: Arc<dyn MeasurementServiceTrait>,
}

impl StatsService {
	pub fn new(measurements: Arc<dyn MeasurementServiceTrait>) -> Self {
		Self { measurements }
	}

	async fn single(
		&self,
		stat: StatType,
		metric: &str,
		from: &str,
		to: &str,
	) -> StatsServiceResult<Option<Stat>> {
		let measurements = self.measurements.retrieve_by_range(from, to).await?;
		Ok(compute(stat, metric, &measurements))
	}
}

fn values<'a>(metric: &'a str, measurements: &'a [Measurement]) -> impl Iterator<Item = f32> + 'a {
	measurements.iter().filter_map(move |m| m.metric(metric))
}

fn aggregate(stat: StatType, values: impl Iterator<Item = f32>) -> Option<f32> {
	match stat {
		StatType::Min => values.min_by(|a, b| a.total_cmp(b)),
		StatType::Max => values.max_by(|a, b| a.total_cmp(b)),
		StatType::Average => {
			let (sum, count) = values.fold((0f64, 0usize), |(sum, count), v| {
				(sum + f64::from(v), count + 1)
			});
			(count > 0).then(|| (sum / count as f64) as f32)
		},
	}
}

/// Aggregate `metric` over already-fetched measurements
fn compute(stat: StatType, metric: &str, measurements: &[Measurement]) -> Option<Stat> {
	aggregate(stat, values(metric, measurements)).map(|value| Stat::new(metric, stat, value))
}

#[async_trait]
impl StatsServiceTrait for StatsService {
	async fn get_average(
		&self,
		metric: &str,
		from: &str,
		to: &str,
	) -> StatsServiceResult<Option<Stat>> {
		self.single(StatType::Average, metric, from, to).await
	}

	async fn get_max(&self, metric: &str, from: &str, to: &str) -> StatsServiceResult<Option<Stat>> {
		self.single(StatType::Max, metric, from, to).await
	}

	async fn get_min(&self, metric: &str, from: &str, to: &str) -> StatsServiceResult<Option<Stat>> {
		self.single(StatType::Min, metric, from, to).await
	}

	async fn get_stats(&self, query: &StatsQuery) -> StatsServiceResult<Vec<Stat>> {
		let measurements = self
			.measurements
			.retrieve_by_range(&query.from_date_time, &query.to_date_time)
			.await?;
		debug!(
			"Aggregating {} measurements in [{}, {})",
			measurements.len(),
			query.from_date_time,
			query.to_date_time
		);

		let mut stats = Vec::with_capacity(query.metrics.len() * query.stats.len());
		for metric in &query.metrics {
			stats.extend(
				query
					.stats
					.iter()
					.filter_map(|stat| compute(*stat, metric, &measurements)),
			);
		}

		info!(
			"Computed {} stats for {} metrics and {} stat types",
			stats.len(),
			query.metrics.len(),
			query.stats.len()
		);
		Ok(stats)
	}
}
