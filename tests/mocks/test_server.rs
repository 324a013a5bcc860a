//! Test server for integration tests
//!
//! Spawns the full router on an ephemeral port.

use tokio::task::JoinHandle;
use weather_tracker::{AppState, Measurement, TrackerBuilder};

/// Test server instance
pub struct TestServer {
	#[allow(dead_code)]
	pub base_url: String,
	#[allow(dead_code)]
	pub state: AppState,
	pub handle: JoinHandle<()>,
}

impl TestServer {
	/// Spawn a test server over an empty store
	#[allow(dead_code)]
	pub async fn spawn() -> Result<Self, Box<dyn std::error::Error>> {
		Self::spawn_with_measurements(Vec::new()).await
	}

	/// Spawn a test server whose store is seeded with `measurements`
	#[allow(dead_code)]
	pub async fn spawn_with_measurements(
		measurements: Vec<Measurement>,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let (app, state) = TrackerBuilder::new()
			.with_measurements(measurements)
			.start()
			.await?;

		let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
			.await
			.expect("bind test port");
		let addr = listener.local_addr().unwrap();
		let base_url = format!("http://{}:{}", addr.ip(), addr.port());

		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		// Give server time to start
		tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

		Ok(Self {
			base_url,
			state,
			handle,
		})
	}

	#[allow(dead_code)]
	pub fn url(&self, path: &str) -> String {
		format!("{}{}", self.base_url, path)
	}

	#[allow(dead_code)]
	pub fn abort(self) {
		self.handle.abort();
	}
}
