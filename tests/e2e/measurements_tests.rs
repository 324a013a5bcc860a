// E2E tests for the measurement endpoints

use crate::e2e::{as_f32, client, ApiFixtures, TestConstants, TestServer};
use crate::mocks::entities::MeasurementBuilder;
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn seeded() -> TestServer {
	TestServer::spawn_with_measurements(vec![
		MeasurementBuilder::at(TestConstants::T_1600)
			.temperature(27.1)
			.dew_point(16.7)
			.build(),
		MeasurementBuilder::at(TestConstants::T_1610)
			.temperature(27.3)
			.build(),
		MeasurementBuilder::at(TestConstants::NEXT_DAY)
			.temperature(28.0)
			.build(),
	])
	.await
	.expect("Failed to start test server")
}

#[tokio::test]
async fn test_create_then_fetch_measurement() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = client();

	let resp = client
		.post(server.url("/measurements"))
		.json(&ApiFixtures::valid_measurement())
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), StatusCode::CREATED);
	let location = resp
		.headers()
		.get("location")
		.and_then(|v| v.to_str().ok())
		.unwrap()
		.to_string();
	assert!(location.ends_with(TestConstants::T_1600));

	let resp = client.get(server.url(&location)).send().await.unwrap();
	assert_eq!(resp.status(), StatusCode::OK);

	let body: Value = resp.json().await.unwrap();
	assert_eq!(body["timestamp"], TestConstants::T_1600);
	assert_eq!(as_f32(&body["metrics"]["temperature"]), 27.1);
	assert_eq!(as_f32(&body["metrics"]["dewPoint"]), 16.7);
	assert_eq!(as_f32(&body["metrics"]["precipitation"]), 0.0);

	server.abort();
}

#[tokio::test]
async fn test_create_rejects_invalid_bodies() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = client();

	for body in [
		ApiFixtures::missing_timestamp(),
		ApiFixtures::blank_timestamp(),
		ApiFixtures::non_numeric_metric(),
	] {
		let resp = client
			.post(server.url("/measurements"))
			.json(&body)
			.send()
			.await
			.unwrap();
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {}", body);
	}

	let resp = client
		.post(server.url("/measurements"))
		.header("content-type", "application/json")
		.body("{not json")
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	let body: Value = resp.json().await.unwrap();
	assert_eq!(body["error"], "INVALID_JSON");

	server.abort();
}

#[tokio::test]
async fn test_create_duplicate_is_bad_request() {
	let server = seeded().await;

	let resp = client()
		.post(server.url("/measurements"))
		.json(&ApiFixtures::temperature(TestConstants::T_1600, 30.0))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	let body: Value = resp.json().await.unwrap();
	assert_eq!(body["error"], "MEASUREMENT_EXISTS");

	server.abort();
}

#[tokio::test]
async fn test_get_by_date_and_unknown_keys() {
	let server = seeded().await;
	let client = client();

	let resp = client
		.get(server.url(&format!("/measurements/{}", TestConstants::DATE)))
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), StatusCode::OK);
	let body: Vec<Value> = resp.json().await.unwrap();
	let timestamps: Vec<&str> = body
		.iter()
		.map(|m| m["timestamp"].as_str().unwrap())
		.collect();
	assert_eq!(timestamps, vec![TestConstants::T_1600, TestConstants::T_1610]);

	for path in [
		format!("/measurements/{}", TestConstants::EMPTY_DATE),
		format!("/measurements/{}", TestConstants::T_1630),
		"/measurements/yesterday".to_string(),
	] {
		let resp = client.get(server.url(&path)).send().await.unwrap();
		assert_eq!(resp.status(), StatusCode::NOT_FOUND, "path: {}", path);
	}

	server.abort();
}

#[tokio::test]
async fn test_put_replaces_measurement() {
	let server = seeded().await;
	let client = client();
	let path = format!("/measurements/{}", TestConstants::T_1600);

	let resp = client
		.put(server.url(&path))
		.json(&ApiFixtures::measurement(
			TestConstants::T_1600,
			json!({ "precipitation": 15.2 }),
		))
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), StatusCode::NO_CONTENT);

	let body: Value = client
		.get(server.url(&path))
		.send()
		.await
		.unwrap()
		.json()
		.await
		.unwrap();
	assert!(body["metrics"].get("temperature").is_none());
	assert_eq!(as_f32(&body["metrics"]["precipitation"]), 15.2);

	server.abort();
}

#[tokio::test]
async fn test_put_with_mismatched_timestamp_conflicts() {
	let server = seeded().await;
	let client = client();
	let path = format!("/measurements/{}", TestConstants::T_1600);

	let resp = client
		.put(server.url(&path))
		.json(&ApiFixtures::temperature(TestConstants::T_1610, 99.0))
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), StatusCode::CONFLICT);

	let body: Value = client
		.get(server.url(&path))
		.send()
		.await
		.unwrap()
		.json()
		.await
		.unwrap();
	assert_eq!(as_f32(&body["metrics"]["temperature"]), 27.1);
	assert_eq!(as_f32(&body["metrics"]["dewPoint"]), 16.7);

	server.abort();
}

#[tokio::test]
async fn test_put_and_patch_status_codes() {
	let server = seeded().await;
	let client = client();
	let missing = format!("/measurements/{}", TestConstants::T_1630);

	let resp = client
		.put(server.url(&missing))
		.json(&ApiFixtures::temperature(TestConstants::T_1630, 20.0))
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), StatusCode::NOT_FOUND);

	let resp = client
		.patch(server.url(&missing))
		.json(&ApiFixtures::temperature(TestConstants::T_1630, 20.0))
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), StatusCode::NOT_FOUND);

	let resp = client
		.patch(server.url(&format!("/measurements/{}", TestConstants::T_1600)))
		.json(&ApiFixtures::non_numeric_metric())
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

	let resp = client
		.patch(server.url(&format!("/measurements/{}", TestConstants::T_1600)))
		.json(&ApiFixtures::temperature(TestConstants::T_1610, 20.0))
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), StatusCode::CONFLICT);

	server.abort();
}

#[tokio::test]
async fn test_patch_merges_metrics() {
	let server = seeded().await;
	let client = client();
	let path = format!("/measurements/{}", TestConstants::T_1600);

	let resp = client
		.patch(server.url(&path))
		.json(&ApiFixtures::measurement(
			TestConstants::T_1600,
			json!({ "dewPoint": 18.0, "precipitation": 2.5 }),
		))
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), StatusCode::NO_CONTENT);

	let body: Value = client
		.get(server.url(&path))
		.send()
		.await
		.unwrap()
		.json()
		.await
		.unwrap();
	assert_eq!(as_f32(&body["metrics"]["temperature"]), 27.1);
	assert_eq!(as_f32(&body["metrics"]["dewPoint"]), 18.0);
	assert_eq!(as_f32(&body["metrics"]["precipitation"]), 2.5);

	server.abort();
}

#[tokio::test]
async fn test_delete_measurement() {
	let server = seeded().await;
	let client = client();
	let path = format!("/measurements/{}", TestConstants::T_1610);

	let resp = client.delete(server.url(&path)).send().await.unwrap();
	assert_eq!(resp.status(), StatusCode::NO_CONTENT);

	let resp = client.get(server.url(&path)).send().await.unwrap();
	assert_eq!(resp.status(), StatusCode::NOT_FOUND);

	let resp = client.delete(server.url(&path)).send().await.unwrap();
	assert_eq!(resp.status(), StatusCode::NOT_FOUND);

	// Neighbours are untouched
	let resp = client
		.get(server.url(&format!("/measurements/{}", TestConstants::T_1600)))
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), StatusCode::OK);

	server.abort();
}

#[tokio::test]
async fn test_trailing_slash_routes() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = client();

	let resp = client
		.post(server.url("/measurements/"))
		.json(&ApiFixtures::valid_measurement())
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), StatusCode::CREATED);

	let resp = client
		.get(server.url(&format!("/measurements/{}/", TestConstants::T_1600)))
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), StatusCode::OK);

	server.abort();
}
