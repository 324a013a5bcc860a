//! Error responses shared by handlers

use axum::{
	extract::{rejection::JsonRejection, FromRequest},
	http::StatusCode,
	response::{IntoResponse, Json, Response},
};
use serde::Serialize;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;
use weather_service::{MeasurementServiceError, StatsServiceError};
use weather_types::{MeasurementValidationError, StatsQueryError};

/// Error response format shared by handlers
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
	pub timestamp: i64,
}

/// An error status paired with its JSON body
#[derive(Debug)]
pub struct ApiError {
	pub status: StatusCode,
	pub body: ErrorResponse,
}

impl ApiError {
	pub fn new(status: StatusCode, error: &str, message: impl Into<String>) -> Self {
		Self {
			status,
			body: ErrorResponse {
				error: error.to_string(),
				message: message.into(),
				timestamp: chrono::Utc::now().timestamp(),
			},
		}
	}

	pub fn bad_request(error: &str, message: impl Into<String>) -> Self {
		Self::new(StatusCode::BAD_REQUEST, error, message)
	}

	pub fn not_found(message: impl Into<String>) -> Self {
		Self::new(StatusCode::NOT_FOUND, "MEASUREMENT_NOT_FOUND", message)
	}

	/// Body timestamp differs from the one in the path
	pub fn timestamp_mismatch(path: &str, body: &str) -> Self {
		Self::new(
			StatusCode::CONFLICT,
			"TIMESTAMP_MISMATCH",
			format!("Body timestamp {} does not match path timestamp {}", body, path),
		)
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		(self.status, Json(self.body)).into_response()
	}
}

impl From<MeasurementServiceError> for ApiError {
	fn from(err: MeasurementServiceError) -> Self {
		match err {
			MeasurementServiceError::NotFound(ts) => {
				Self::not_found(format!("Measurement {} not found", ts))
			},
			// Duplicate creation is reported as a bad request, not a conflict
			MeasurementServiceError::AlreadyExists(ts) => Self::bad_request(
				"MEASUREMENT_EXISTS",
				format!("Measurement {} already exists", ts),
			),
			MeasurementServiceError::Storage(msg) => {
				Self::new(StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR", msg)
			},
		}
	}
}

impl From<StatsServiceError> for ApiError {
	fn from(err: StatsServiceError) -> Self {
		match err {
			StatsServiceError::Measurements(inner) => inner.into(),
		}
	}
}

impl From<MeasurementValidationError> for ApiError {
	fn from(err: MeasurementValidationError) -> Self {
		Self::bad_request("VALIDATION_ERROR", err.to_string())
	}
}

impl From<StatsQueryError> for ApiError {
	fn from(err: StatsQueryError) -> Self {
		Self::bad_request("INVALID_STATS_QUERY", err.to_string())
	}
}

/// Every JSON body rejection (syntax, data, content type) is a 400
impl From<JsonRejection> for ApiError {
	fn from(rejection: JsonRejection) -> Self {
		Self::bad_request("INVALID_JSON", rejection.body_text())
	}
}

/// `Json` extractor whose rejections render as [`ApiError`]
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
