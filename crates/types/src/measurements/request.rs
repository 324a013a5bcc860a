//! Measurement request model and validation

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use super::{Measurement, MeasurementValidationError, MeasurementValidationResult};

/// API request body for POST, PUT and PATCH on /measurements
///
/// Every field is optional at the wire level so that a missing timestamp is
/// reported as a validation error rather than a deserialization failure.
/// Non-numeric metric values still fail deserialization.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct MeasurementRequest {
	/// UTC timestamp, e.g. `2015-09-01T16:00:00.000Z`
	pub timestamp: Option<String>,
	/// Metric name to value
	pub metrics: Option<BTreeMap<String, f32>>,
}

impl MeasurementRequest {
	/// Validate the request
	///
	/// - **timestamp**: must be present and not blank
	/// - **metrics**: names must not be blank and values must be finite
	pub fn validate(&self) -> MeasurementValidationResult<()> {
		match &self.timestamp {
			Some(ts) if !ts.trim().is_empty() => {},
			_ => return Err(MeasurementValidationError::MissingTimestamp),
		}

		if let Some(metrics) = &self.metrics {
			for (name, value) in metrics {
				if name.trim().is_empty() {
					return Err(MeasurementValidationError::BlankMetricName);
				}
				if !value.is_finite() {
					return Err(MeasurementValidationError::NonFiniteMetric {
						metric: name.clone(),
					});
				}
			}
		}

		Ok(())
	}
}

impl TryFrom<MeasurementRequest> for Measurement {
	type Error = MeasurementValidationError;

	fn try_from(request: MeasurementRequest) -> Result<Self, Self::Error> {
		request.validate()?;
		let timestamp = request
			.timestamp
			.ok_or(MeasurementValidationError::MissingTimestamp)?;
		Ok(Measurement::new(timestamp, request.metrics.unwrap_or_default()))
	}
}
