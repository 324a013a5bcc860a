use utoipa::OpenApi;

use crate::handlers::common::ErrorResponse;
use crate::handlers::health::ReadinessResponse;
use crate::handlers::{health, measurements, stats};
use weather_types::{Measurement, MeasurementRequest, Stat, StatType};

#[derive(OpenApi)]
#[openapi(
	info(title = "Weather Tracker API", description = "Record weather measurements and compute statistics over time ranges"),
	paths(
		health::health,
		health::ready,
		measurements::post_measurement,
		measurements::get_measurement,
		measurements::put_measurement,
		measurements::patch_measurement,
		measurements::delete_measurement,
		stats::get_stats,
	),
	components(schemas(
		Measurement, MeasurementRequest, Stat, StatType, ErrorResponse, ReadinessResponse
	)),
	tags(
		(name = "measurements", description = "Measurement CRUD endpoints"),
		(name = "stats", description = "Aggregate statistics endpoints"),
		(name = "health", description = "Health and readiness endpoints")
	)
)]
pub struct ApiDoc;
