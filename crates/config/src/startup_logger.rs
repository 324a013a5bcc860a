//! Service startup logging for the weather tracker

use std::env;
use tracing::info;

use crate::Settings;

/// Logs service information at startup
pub fn log_service_info(settings: &Settings) {
	info!("=== Weather Tracker Starting ===");
	info!(
		"🌦️ Service: weather-tracker v{}",
		env!("CARGO_PKG_VERSION")
	);
	info!("💻 Platform: {} ({})", env::consts::OS, env::consts::ARCH);

	if let Ok(cwd) = env::current_dir() {
		info!("📁 Working Directory: {}", cwd.display());
	}
	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("🔧 RUST_LOG: {}", rust_log);
	}
	if let Ok(config_path) = env::var(crate::CONFIG_PATH_ENV) {
		info!("📋 Config Path: {}", config_path);
	}

	info!(
		"🌍 Profile: {:?}, debug: {}",
		settings.environment.profile,
		settings.is_debug()
	);
	info!("⏱️ Request timeout: {} ms", settings.timeouts.request_ms);
	info!(
		"🕒 Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs service shutdown information
pub fn log_service_shutdown() {
	info!("🛑 Weather Tracker Shutting Down");
	info!(
		"🕒 Shutdown at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs startup completion
pub fn log_startup_complete(bind_address: &str) {
	info!("✅ Weather Tracker Started Successfully");
	info!("🌐 Server listening on: {}", bind_address);
}
