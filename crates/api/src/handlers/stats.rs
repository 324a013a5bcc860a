//! Stats handler
use axum::{
	extract::{RawQuery, State},
	response::Json,
};
use tracing::info;
use weather_types::{Stat, StatsQuery};

use crate::handlers::common::ApiError;
#[cfg(feature = "openapi")]
use crate::handlers::common::ErrorResponse;
use crate::state::AppState;

/// Compute aggregates over `[fromDateTime, toDateTime)`
#[cfg_attr(feature = "openapi", utoipa::path(
	get,
	path = "/stats",
	params(
		("stat" = Vec<String>, Query, description = "Repeated: min, max or average (case-insensitive)"),
		("metric" = Vec<String>, Query, description = "Repeated metric names"),
		("fromDateTime" = String, Query, description = "Inclusive lower bound, UTC timestamp"),
		("toDateTime" = String, Query, description = "Exclusive upper bound, UTC timestamp")
	),
	responses(
		(status = 200, description = "One entry per metric and stat with data", body = Vec<Stat>),
		(status = 400, description = "Invalid query", body = ErrorResponse)
	),
	tag = "stats"
))]
/// GET /stats - Aggregate metrics over a time range
pub async fn get_stats(
	State(state): State<AppState>,
	RawQuery(query): RawQuery,
) -> Result<Json<Vec<Stat>>, ApiError> {
	let query = query.unwrap_or_default();
	// Repeated keys (stat=min&stat=max) need the raw pairs, not a map
	let query = StatsQuery::from_pairs(url::form_urlencoded::parse(query.as_bytes()))?;

	let stats = state.stats_service.get_stats(&query).await?;
	info!(
		"Returning {} stats for [{}, {})",
		stats.len(),
		query.from_date_time,
		query.to_date_time
	);
	Ok(Json(stats))
}
