//! Measurement service
//!
//! Repository for measurements keyed by their timestamp.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;
use weather_types::constants::formats::{END_OF_DAY_SUFFIX, START_OF_DAY_SUFFIX};
use weather_types::{Measurement, MeasurementStore, StorageError};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeasurementServiceError {
	#[error("measurement not found: {0}")]
	NotFound(String),
	#[error("measurement already exists: {0}")]
	AlreadyExists(String),
	#[error("storage error: {0}")]
	Storage(String),
}

impl From<StorageError> for MeasurementServiceError {
	fn from(err: StorageError) -> Self {
		match err {
			StorageError::EntityNotFound { id } => Self::NotFound(id),
			StorageError::EntityExists { id } => Self::AlreadyExists(id),
			other => Self::Storage(other.to_string()),
		}
	}
}

pub type MeasurementServiceResult<T> = Result<T, MeasurementServiceError>;

/// Trait for measurement repository operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MeasurementServiceTrait: Send + Sync {
	/// Store a new measurement; fails if its timestamp is taken
	async fn create(&self, measurement: Measurement) -> MeasurementServiceResult<()>;

	async fn retrieve(&self, timestamp: &str) -> MeasurementServiceResult<Measurement>;

	/// All measurements on a `YYYY-MM-DD` date, ascending
	async fn retrieve_by_date(&self, date: &str) -> MeasurementServiceResult<Vec<Measurement>>;

	/// Measurements with `from <= timestamp < to`, ascending
	async fn retrieve_by_range(
		&self,
		from: &str,
		to: &str,
	) -> MeasurementServiceResult<Vec<Measurement>>;

	/// Replace a stored measurement wholesale
	async fn update_whole(&self, measurement: Measurement) -> MeasurementServiceResult<()>;

	/// Overlay the given metrics onto a stored measurement
	async fn update_partial(&self, measurement: Measurement) -> MeasurementServiceResult<()>;

	async fn delete(&self, timestamp: &str) -> MeasurementServiceResult<Measurement>;

	/// Drop every stored measurement
	async fn clear(&self) -> MeasurementServiceResult<()>;
}

#[derive(Clone)]
pub struct MeasurementService {
	store: Arc<MeasurementStore>,
}

impl MeasurementService {
	pub fn new(store: Arc<MeasurementStore>) -> Self {
		Self { store }
	}
}

/// Shallow merge: `incoming` metrics win, metrics only in `current` are kept
fn merge_metrics(current: &Measurement, incoming: Measurement) -> Measurement {
	let (timestamp, overlay) = incoming.into_parts();
	let mut metrics = current.metrics().clone();
	metrics.extend(overlay);
	Measurement::new(timestamp, metrics)
}

#[async_trait]
impl MeasurementServiceTrait for MeasurementService {
	async fn create(&self, measurement: Measurement) -> MeasurementServiceResult<()> {
		let key = measurement.timestamp().to_string();
		self.store.create(measurement, key).await?;
		Ok(())
	}

	async fn retrieve(&self, timestamp: &str) -> MeasurementServiceResult<Measurement> {
		Ok(self.store.retrieve(&timestamp.to_string()).await?)
	}

	async fn retrieve_by_date(&self, date: &str) -> MeasurementServiceResult<Vec<Measurement>> {
		let from = format!("{date}{START_OF_DAY_SUFFIX}");
		let to = format!("{date}{END_OF_DAY_SUFFIX}");
		let measurements = self.store.retrieve_range(&from, true, &to, true).await?;
		debug!("Found {} measurements on {}", measurements.len(), date);
		Ok(measurements)
	}

	async fn retrieve_by_range(
		&self,
		from: &str,
		to: &str,
	) -> MeasurementServiceResult<Vec<Measurement>> {
		Ok(self
			.store
			.retrieve_range(&from.to_string(), true, &to.to_string(), false)
			.await?)
	}

	async fn update_whole(&self, measurement: Measurement) -> MeasurementServiceResult<()> {
		let key = measurement.timestamp().to_string();
		self.store.update(measurement, key).await?;
		Ok(())
	}

	async fn update_partial(&self, measurement: Measurement) -> MeasurementServiceResult<()> {
		let key = measurement.timestamp().to_string();
		self.store
			.update_with(
				&key,
				Box::new(move |current: &Measurement| merge_metrics(current, measurement)),
			)
			.await?;
		Ok(())
	}

	async fn delete(&self, timestamp: &str) -> MeasurementServiceResult<Measurement> {
		Ok(self.store.delete(&timestamp.to_string()).await?)
	}

	async fn clear(&self) -> MeasurementServiceResult<()> {
		Ok(self.store.clear().await?)
	}
}
