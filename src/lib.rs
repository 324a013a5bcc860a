//! Weather Tracker Library
//!
//! An HTTP service for recording timestamped weather measurements and
//! computing min/max/average statistics over time ranges.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use tower_http::timeout::TimeoutLayer;
use tracing::{info, warn};

// Core domain types
pub use weather_types::{
	// External dependencies for convenience
	serde_json,
	Measurement,
	MeasurementKey,
	MeasurementRequest,
	MeasurementValidationError,
	Stat,
	StatType,
	StatsQuery,
	StatsQueryError,
};

// Service layer
pub use weather_service::{
	MeasurementService, MeasurementServiceError, MeasurementServiceTrait, StatsService,
	StatsServiceError, StatsServiceTrait,
};

// Storage layer
pub use weather_storage::{MeasurementMemoryStore, SortedMemoryStore};
pub use weather_types::{MeasurementStore, OrderedStoreTrait, StorageError, StorageResult};

// API layer
pub use weather_api::{create_router, AppState};

// Config
pub use weather_config::{
	load_config, log_service_info, log_service_shutdown, log_startup_complete, Settings,
};

pub mod models {
	pub use weather_types::*;
}

pub mod storage {
	pub use weather_storage::*;
}

pub mod config {
	pub use weather_config::*;
}

pub mod api {
	pub use weather_api::*;
}

pub mod service {
	pub use weather_service::*;
}

pub mod mocks;

/// Builder for wiring storage, services and the HTTP router
pub struct TrackerBuilder<S = MeasurementMemoryStore>
where
	S: OrderedStoreTrait<String, Measurement> + 'static,
{
	settings: Option<Settings>,
	store: S,
	measurements: Vec<Measurement>,
}

impl<S> TrackerBuilder<S>
where
	S: OrderedStoreTrait<String, Measurement> + 'static,
{
	/// Create a builder over a custom store
	pub fn with_storage(store: S) -> Self {
		Self {
			settings: None,
			store,
			measurements: Vec::new(),
		}
	}

	/// Seed a measurement, created when the tracker starts
	pub fn with_measurement(mut self, measurement: Measurement) -> Self {
		self.measurements.push(measurement);
		self
	}

	pub fn with_measurements<I>(mut self, measurements: I) -> Self
	where
		I: IntoIterator<Item = Measurement>,
	{
		self.measurements.extend(measurements);
		self
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(
		&self,
		settings: &Settings,
	) -> Result<(), Box<dyn std::error::Error>> {
		use weather_config::LogFormat;

		// RUST_LOG wins over the configured level
		let log_level = &settings.logging.level;
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

		let structured = settings.logging.structured;
		let builder = tracing_subscriber::fmt()
			.with_env_filter(env_filter)
			.with_target(structured)
			.with_thread_ids(structured);

		let initialized = match settings.logging.format {
			LogFormat::Json => builder.json().try_init(),
			LogFormat::Pretty => builder.pretty().try_init(),
			LogFormat::Compact => builder.compact().try_init(),
		};
		initialized.map_err(|e| format!("Failed to initialize tracing: {}", e))?;

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			settings.logging.level, settings.logging.format, settings.logging.structured
		);

		Ok(())
	}

	/// Build the services and return the configured router with its state
	pub async fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.clone().unwrap_or_default();

		let store: Arc<MeasurementStore> = Arc::new(self.store);
		let measurement_service: Arc<dyn MeasurementServiceTrait> =
			Arc::new(MeasurementService::new(Arc::clone(&store)));

		let seeded = self.measurements.len();
		for measurement in self.measurements {
			measurement_service.create(measurement).await?;
		}
		if seeded > 0 {
			info!("Seeded {} measurement(s)", seeded);
		}

		let stats_service: Arc<dyn StatsServiceTrait> =
			Arc::new(StatsService::new(Arc::clone(&measurement_service)));

		let app_state = AppState {
			measurement_service,
			stats_service,
			store,
		};

		let router = create_router()
			.layer(TimeoutLayer::with_status_code(
				StatusCode::REQUEST_TIMEOUT,
				Duration::from_millis(settings.timeouts.request_ms),
			))
			.with_state(app_state.clone());

		Ok((router, app_state))
	}

	/// Start the complete server with all defaults and setup
	///
	/// Loads `.env`, resolves configuration, initializes tracing, then serves
	/// until Ctrl-C.
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		dotenvy::dotenv().ok();

		let using_provided_settings = self.settings.is_some();
		let settings = match self.settings.take() {
			Some(settings) => settings,
			None => load_config().map_err(|e| format!("Failed to load configuration: {}", e))?,
		};
		settings.validate()?;

		self.init_tracing_from_settings(&settings)?;
		log_service_info(&settings);
		info!(
			"Using configuration: loaded from {}",
			if using_provided_settings {
				"provided settings"
			} else {
				"config file or defaults"
			}
		);

		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		self.settings = Some(settings);
		let (app, _) = self.start().await?;

		let listener = tokio::net::TcpListener::bind(addr).await?;

		log_startup_complete(&bind_addr);
		info!("API endpoints available:");
		info!("  GET    /health");
		info!("  GET    /ready");
		info!("  POST   /measurements");
		info!("  GET    /measurements/{{timestamp|date}}");
		info!("  PUT    /measurements/{{timestamp}}");
		info!("  PATCH  /measurements/{{timestamp}}");
		info!("  DELETE /measurements/{{timestamp}}");
		info!("  GET    /stats");
		if cfg!(feature = "openapi") {
			info!("  GET    /swagger-ui");
			info!("  GET    /api-docs/openapi.json");
		}

		axum::serve(listener, app)
			.with_graceful_shutdown(shutdown_signal())
			.await?;

		log_service_shutdown();
		Ok(())
	}
}

impl TrackerBuilder<MeasurementMemoryStore> {
	/// Create a builder over a fresh in-memory store
	pub fn new() -> Self {
		Self::with_storage(MeasurementMemoryStore::new())
	}

	/// Create a builder over a fresh in-memory store with the given settings
	pub fn from_config(settings: Settings) -> Self {
		Self::new().with_settings(settings)
	}
}

impl Default for TrackerBuilder<MeasurementMemoryStore> {
	fn default() -> Self {
		Self::new()
	}
}

fn shutdown_signal() -> impl Future<Output = ()> {
	async {
		if let Err(e) = tokio::signal::ctrl_c().await {
			warn!("Failed to listen for shutdown signal: {}", e);
			std::future::pending::<()>().await;
		}
		info!("Shutdown signal received");
	}
}
