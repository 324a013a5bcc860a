//! Measurement handlers
use axum::{
	extract::{Path, State},
	http::{header, HeaderValue, StatusCode},
	response::{IntoResponse, Json, Response},
};
use tracing::{debug, info};
use weather_types::{Measurement, MeasurementKey, MeasurementRequest};

use crate::handlers::common::{ApiError, JsonBody};
#[cfg(feature = "openapi")]
use crate::handlers::common::ErrorResponse;
use crate::state::AppState;

fn location_for(timestamp: &str) -> Result<HeaderValue, ApiError> {
	HeaderValue::try_from(format!("/measurements/{}", timestamp)).map_err(|_| {
		ApiError::bad_request(
			"VALIDATION_ERROR",
			format!("Timestamp {:?} cannot be used in a URL", timestamp),
		)
	})
}

/// Only a timestamp addresses a single measurement for writes
fn require_timestamp(key: &str) -> Result<(), ApiError> {
	match MeasurementKey::classify(key) {
		Some(MeasurementKey::Timestamp) => Ok(()),
		_ => Err(ApiError::not_found(format!("{} is not a timestamp", key))),
	}
}

/// Validate a PUT/PATCH body against the timestamp in the path
fn replacement(path_timestamp: &str, request: MeasurementRequest) -> Result<Measurement, ApiError> {
	let measurement = Measurement::try_from(request)?;
	if measurement.timestamp() != path_timestamp {
		return Err(ApiError::timestamp_mismatch(
			path_timestamp,
			measurement.timestamp(),
		));
	}
	Ok(measurement)
}

/// Record a new measurement
#[cfg_attr(feature = "openapi", utoipa::path(
	post,
	path = "/measurements",
	request_body = Measurement,
	responses(
		(status = 201, description = "Measurement created", headers(("Location" = String, description = "URL of the new measurement"))),
		(status = 400, description = "Invalid or duplicate measurement", body = ErrorResponse)
	),
	tag = "measurements"
))]
/// POST /measurements - Create a measurement
pub async fn post_measurement(
	State(state): State<AppState>,
	JsonBody(request): JsonBody<MeasurementRequest>,
) -> Result<impl IntoResponse, ApiError> {
	let measurement = Measurement::try_from(request)?;
	let timestamp = measurement.timestamp().to_string();
	let location = location_for(&timestamp)?;

	state.measurement_service.create(measurement).await?;

	info!("Created measurement {}", timestamp);
	Ok((StatusCode::CREATED, [(header::LOCATION, location)]))
}

/// Get one measurement by timestamp, or all measurements on a date
#[cfg_attr(feature = "openapi", utoipa::path(
	get,
	path = "/measurements/{key}",
	params(("key" = String, Path, description = "UTC timestamp (2015-09-01T16:00:00.000Z) or date (2015-09-01)")),
	responses(
		(status = 200, description = "A measurement for a timestamp, or an array for a date", body = Measurement),
		(status = 404, description = "No measurement found", body = ErrorResponse)
	),
	tag = "measurements"
))]
/// GET /measurements/{key} - Fetch by timestamp or date
pub async fn get_measurement(
	State(state): State<AppState>,
	Path(key): Path<String>,
) -> Result<Response, ApiError> {
	match MeasurementKey::classify(&key) {
		Some(MeasurementKey::Timestamp) => {
			debug!("Retrieving measurement {}", key);
			let measurement = state.measurement_service.retrieve(&key).await?;
			Ok(Json(measurement).into_response())
		},
		Some(MeasurementKey::Date) => {
			debug!("Retrieving measurements on {}", key);
			let measurements = state.measurement_service.retrieve_by_date(&key).await?;
			if measurements.is_empty() {
				return Err(ApiError::not_found(format!("No measurements on {}", key)));
			}
			Ok(Json(measurements).into_response())
		},
		None => Err(ApiError::not_found(format!(
			"{} is neither a timestamp nor a date",
			key
		))),
	}
}

/// Replace a measurement
#[cfg_attr(feature = "openapi", utoipa::path(
	put,
	path = "/measurements/{key}",
	params(("key" = String, Path, description = "UTC timestamp (2015-09-01T16:00:00.000Z)")),
	request_body = Measurement,
	responses(
		(status = 204, description = "Measurement replaced"),
		(status = 400, description = "Invalid measurement", body = ErrorResponse),
		(status = 404, description = "Measurement not found", body = ErrorResponse),
		(status = 409, description = "Body timestamp differs from path", body = ErrorResponse)
	),
	tag = "measurements"
))]
/// PUT /measurements/{key} - Replace all metrics
pub async fn put_measurement(
	State(state): State<AppState>,
	Path(timestamp): Path<String>,
	JsonBody(request): JsonBody<MeasurementRequest>,
) -> Result<StatusCode, ApiError> {
	require_timestamp(&timestamp)?;
	let measurement = replacement(&timestamp, request)?;
	state.measurement_service.update_whole(measurement).await?;

	info!("Replaced measurement {}", timestamp);
	Ok(StatusCode::NO_CONTENT)
}

/// Merge metrics into a measurement
#[cfg_attr(feature = "openapi", utoipa::path(
	patch,
	path = "/measurements/{key}",
	params(("key" = String, Path, description = "UTC timestamp (2015-09-01T16:00:00.000Z)")),
	request_body = Measurement,
	responses(
		(status = 204, description = "Measurement updated"),
		(status = 400, description = "Invalid measurement", body = ErrorResponse),
		(status = 404, description = "Measurement not found", body = ErrorResponse),
		(status = 409, description = "Body timestamp differs from path", body = ErrorResponse)
	),
	tag = "measurements"
))]
/// PATCH /measurements/{key} - Overlay the given metrics
pub async fn patch_measurement(
	State(state): State<AppState>,
	Path(timestamp): Path<String>,
	JsonBody(request): JsonBody<MeasurementRequest>,
) -> Result<StatusCode, ApiError> {
	require_timestamp(&timestamp)?;
	let measurement = replacement(&timestamp, request)?;
	state.measurement_service.update_partial(measurement).await?;

	info!("Patched measurement {}", timestamp);
	Ok(StatusCode::NO_CONTENT)
}

/// Delete a measurement
#[cfg_attr(feature = "openapi", utoipa::path(
	delete,
	path = "/measurements/{key}",
	params(("key" = String, Path, description = "UTC timestamp (2015-09-01T16:00:00.000Z)")),
	responses(
		(status = 204, description = "Measurement deleted"),
		(status = 404, description = "Measurement not found", body = ErrorResponse)
	),
	tag = "measurements"
))]
/// DELETE /measurements/{key}
pub async fn delete_measurement(
	State(state): State<AppState>,
	Path(timestamp): Path<String>,
) -> Result<StatusCode, ApiError> {
	require_timestamp(&timestamp)?;
	state.measurement_service.delete(&timestamp).await?;

	info!("Deleted measurement {}", timestamp);
	Ok(StatusCode::NO_CONTENT)
}
