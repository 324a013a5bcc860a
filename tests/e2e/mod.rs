//! End-to-end test utilities and shared fixtures

#[allow(unused_imports)]
pub use crate::mocks::{ApiFixtures, TestConstants, TestServer};

use reqwest::{redirect::Policy, Client};

/// HTTP client that reports redirects instead of following them
#[allow(dead_code)]
pub fn client() -> Client {
	Client::builder()
		.redirect(Policy::none())
		.build()
		.expect("build reqwest client")
}

/// Read a JSON number as the f32 it was serialized from
#[allow(dead_code)]
pub fn as_f32(value: &serde_json::Value) -> f32 {
	value.as_f64().expect("numeric value") as f32
}
