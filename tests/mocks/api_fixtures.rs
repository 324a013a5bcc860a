//! API request/response fixtures for e2e and integration tests

use weather_tracker::serde_json::{json, Value};

use super::entities::TestConstants;

/// API test data fixtures
#[allow(dead_code)]
pub struct ApiFixtures;

#[allow(dead_code)]
impl ApiFixtures {
	/// Full reading at 16:00
	pub fn valid_measurement() -> Value {
		json!({
			"timestamp": TestConstants::T_1600,
			"metrics": {
				"temperature": 27.1,
				"dewPoint": 16.7,
				"precipitation": 0
			}
		})
	}

	pub fn measurement(timestamp: &str, metrics: Value) -> Value {
		json!({ "timestamp": timestamp, "metrics": metrics })
	}

	pub fn temperature(timestamp: &str, value: f32) -> Value {
		Self::measurement(timestamp, json!({ "temperature": value }))
	}

	pub fn missing_timestamp() -> Value {
		json!({ "metrics": { "temperature": 27.1 } })
	}

	pub fn blank_timestamp() -> Value {
		json!({ "timestamp": "  ", "metrics": { "temperature": 27.1 } })
	}

	pub fn non_numeric_metric() -> Value {
		json!({
			"timestamp": TestConstants::T_1600,
			"metrics": { "temperature": "hot" }
		})
	}

	/// `/stats` query string built from `(name, value)` pairs
	pub fn stats_query(pairs: &[(&str, &str)]) -> String {
		pairs
			.iter()
			.map(|(name, value)| format!("{}={}", name, value))
			.collect::<Vec<_>>()
			.join("&")
	}
}
