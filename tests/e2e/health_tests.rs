// E2E tests for health and readiness endpoints

use crate::e2e::{client, TestServer};
use crate::mocks::entities::MeasurementBuilder;
use serde_json::Value;

#[tokio::test]
async fn test_health_endpoint() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	let resp = client().get(server.url("/health")).send().await.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::OK);
	assert_eq!(resp.text().await.unwrap(), "OK");

	server.abort();
}

#[tokio::test]
async fn test_ready_reports_measurement_count() {
	let server = TestServer::spawn_with_measurements(vec![
		MeasurementBuilder::at("2015-09-01T16:00:00.000Z")
			.temperature(27.1)
			.build(),
		MeasurementBuilder::at("2015-09-01T16:10:00.000Z")
			.temperature(27.3)
			.build(),
	])
	.await
	.expect("Failed to start test server");

	let resp = client().get(server.url("/ready")).send().await.unwrap();
	assert_eq!(resp.status(), reqwest::StatusCode::OK);

	let body: Value = resp.json().await.unwrap();
	assert_eq!(body["status"], "ready");
	assert_eq!(body["storage_healthy"], true);
	assert_eq!(body["measurements"], 2);

	server.abort();
}

#[tokio::test]
async fn test_unknown_endpoint_404() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	let resp = client()
		.get(server.url("/unknown-endpoint"))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

	server.abort();
}
