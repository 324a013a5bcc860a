//! Weather Configuration
//!
//! Configuration management and startup utilities for the weather tracker.

pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use loader::{load_config, load_config_from, ConfigLoadError, CONFIG_PATH_ENV, ENV_PREFIX};
pub use settings::{
	ConfigValidationError, EnvironmentProfile, EnvironmentSettings, LogFormat, LoggingSettings,
	ServerSettings, Settings, TimeoutSettings,
};
pub use startup_logger::{log_service_info, log_service_shutdown, log_startup_complete};
