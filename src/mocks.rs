//! Sample measurements for demos and tests

use crate::Measurement;
use weather_types::constants::metrics::{DEW_POINT, PRECIPITATION, TEMPERATURE};

/// A complete reading: temperature, dew point and precipitation
pub fn sample_measurement(timestamp: &str) -> Measurement {
	Measurement::from_pairs(
		timestamp,
		[(TEMPERATURE, 27.1), (DEW_POINT, 16.7), (PRECIPITATION, 0.0)],
	)
}

/// Ten-minute temperature readings on 2015-09-01 starting at 16:00
///
/// Their average over `[16:00, 16:30)` is 27.3.
pub fn temperature_series() -> Vec<Measurement> {
	[
		("2015-09-01T16:00:00.000Z", 27.1),
		("2015-09-01T16:10:00.000Z", 27.3),
		("2015-09-01T16:20:00.000Z", 27.5),
	]
	.into_iter()
	.map(|(timestamp, value)| Measurement::from_pairs(timestamp, [(TEMPERATURE, value)]))
	.collect()
}

/// Readings across two days with partial metrics
pub fn mixed_series() -> Vec<Measurement> {
	vec![
		Measurement::from_pairs(
			"2015-09-01T16:00:00.000Z",
			[(TEMPERATURE, 27.1), (DEW_POINT, 16.7), (PRECIPITATION, 0.0)],
		),
		Measurement::from_pairs(
			"2015-09-01T16:10:00.000Z",
			[(TEMPERATURE, 27.3), (DEW_POINT, 16.9)],
		),
		Measurement::from_pairs(
			"2015-09-01T16:20:00.000Z",
			[(TEMPERATURE, 27.5), (PRECIPITATION, 0.2)],
		),
		Measurement::from_pairs(
			"2015-09-02T16:00:00.000Z",
			[(TEMPERATURE, 28.0), (DEW_POINT, 17.0)],
		),
	]
}
