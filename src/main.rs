//! Weather Tracker Server
//!
//! Main entry point for the weather tracker server

use weather_tracker::TrackerBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	TrackerBuilder::new().start_server().await
}
