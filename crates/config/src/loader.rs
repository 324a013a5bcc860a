//! Configuration loading utilities

use config::{Config, ConfigError, Environment, File};
use thiserror::Error;

use crate::settings::{ConfigValidationError, Settings};

/// Default config file, without extension; any format `config` supports
pub const DEFAULT_CONFIG_PATH: &str = "config/config";

/// Overrides [`DEFAULT_CONFIG_PATH`]
pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

/// Prefix for environment overrides, e.g. `WEATHER__SERVER__PORT=8080`
pub const ENV_PREFIX: &str = "WEATHER";

#[derive(Debug, Error)]
pub enum ConfigLoadError {
	#[error("failed to load configuration: {0}")]
	Config(#[from] ConfigError),
	#[error("invalid configuration: {0}")]
	Validation(#[from] ConfigValidationError),
}

/// Load configuration from `$CONFIG_PATH` (or `config/config`) and `WEATHER__*` variables
pub fn load_config() -> Result<Settings, ConfigLoadError> {
	let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
	load_config_from(&path)
}

/// Load configuration from a specific file; a missing file falls back to defaults
pub fn load_config_from(path: &str) -> Result<Settings, ConfigLoadError> {
	let settings: Settings = Config::builder()
		.add_source(File::with_name(path).required(false))
		.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.prefix_separator("__")
				.separator("__")
				.try_parsing(true),
		)
		.build()?
		.try_deserialize()?;

	settings.validate()?;
	Ok(settings)
}
