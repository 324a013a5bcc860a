use std::sync::Arc;

use weather_service::{MeasurementServiceTrait, StatsServiceTrait};
use weather_types::MeasurementStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub measurement_service: Arc<dyn MeasurementServiceTrait>,
	pub stats_service: Arc<dyn StatsServiceTrait>,
	pub store: Arc<MeasurementStore>,
}
