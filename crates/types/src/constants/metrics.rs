//! Well-known metric names reported by the weather stations

pub const TEMPERATURE: &str = "temperature";
pub const DEW_POINT: &str = "dewPoint";
pub const PRECIPITATION: &str = "precipitation";
