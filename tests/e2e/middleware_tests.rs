// E2E tests for middleware (request ids, CORS, security headers, body limits)

use crate::e2e::{client, ApiFixtures, TestServer};

#[tokio::test]
async fn test_request_id_auto_generation() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	let resp = client()
		.post(server.url("/measurements"))
		.json(&ApiFixtures::valid_measurement())
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
	let req_id = resp.headers().get("x-request-id");
	assert!(req_id.is_some());
	assert!(!req_id.unwrap().to_str().unwrap().is_empty());

	server.abort();
}

#[tokio::test]
async fn test_request_id_propagation() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	let provided_id = "weather-req-42";
	let resp = client()
		.get(server.url("/health"))
		.header("x-request-id", provided_id)
		.send()
		.await
		.unwrap();

	let echoed_id = resp
		.headers()
		.get("x-request-id")
		.and_then(|v| v.to_str().ok())
		.unwrap_or("");
	assert_eq!(echoed_id, provided_id);

	server.abort();
}

#[tokio::test]
async fn test_cors_preflight() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	let resp = client()
		.request(reqwest::Method::OPTIONS, server.url("/measurements"))
		.header("Origin", "http://example.com")
		.header("Access-Control-Request-Method", "POST")
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());
	assert!(resp
		.headers()
		.get("access-control-allow-origin")
		.is_some());

	server.abort();
}

#[tokio::test]
async fn test_security_headers_present() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	let resp = client().get(server.url("/health")).send().await.unwrap();
	let headers = resp.headers();

	assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
	assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
	assert_eq!(headers.get("cache-control").unwrap(), "no-store");

	server.abort();
}

#[tokio::test]
async fn test_oversized_body_rejected() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	let padding = "x".repeat(2 * 1024 * 1024);
	let body = format!(
		r#"{{"timestamp":"2015-09-01T16:00:00.000Z","metrics":{{}},"padding":"{}"}}"#,
		padding
	);
	let result = client()
		.post(server.url("/measurements"))
		.header("content-type", "application/json")
		.body(body)
		.send()
		.await;

	// The server may answer before reading the body and drop the connection
	match result {
		Ok(resp) => assert_eq!(resp.status(), reqwest::StatusCode::PAYLOAD_TOO_LARGE),
		Err(e) => assert!(!e.is_timeout(), "unexpected error: {}", e),
	}

	// Nothing was stored
	let resp = client()
		.get(server.url("/measurements/2015-09-01T16:00:00.000Z"))
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

	server.abort();
}
