use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::state::AppState;

/// Health check endpoint
#[cfg_attr(feature = "openapi", utoipa::path(
	get,
	path = "/health",
	responses((status = 200, description = "Service healthy", body = String)),
	tag = "health"
))]
pub async fn health() -> &'static str {
	"OK"
}

/// Readiness response
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ReadinessResponse {
	pub status: String,
	pub storage_healthy: bool,
	pub measurements: usize,
}

/// GET /ready - Readiness probe with a storage check
#[cfg_attr(feature = "openapi", utoipa::path(
	get,
	path = "/ready",
	responses(
		(status = 200, description = "Ready", body = ReadinessResponse),
		(status = 503, description = "Storage unavailable", body = ReadinessResponse)
	),
	tag = "health"
))]
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
	let storage_healthy = state.store.health_check().await.unwrap_or(false);
	let measurements = state.store.len().await.unwrap_or(0);

	let status = if storage_healthy { "ready" } else { "degraded" };
	let code = if storage_healthy {
		StatusCode::OK
	} else {
		StatusCode::SERVICE_UNAVAILABLE
	};

	let body = ReadinessResponse {
		status: status.to_string(),
		storage_healthy,
		measurements,
	};
	(code, Json(body))
}
