//! Configuration settings structures

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main application settings
///
/// Every section has defaults, so a config file only needs the values it changes.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub timeouts: TimeoutSettings,
	pub environment: EnvironmentSettings,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 2222,
		}
	}
}

/// Timeout configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TimeoutSettings {
	/// Upper bound on handling one HTTP request, in milliseconds
	pub request_ms: u64,
}

impl Default for TimeoutSettings {
	fn default() -> Self {
		Self { request_ms: 30_000 }
	}
}

/// Environment-specific settings
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct EnvironmentSettings {
	pub profile: EnvironmentProfile,
	pub debug: bool,
}

impl Default for EnvironmentSettings {
	fn default() -> Self {
		Self {
			profile: EnvironmentProfile::Development,
			debug: true,
		}
	}
}

/// Environment profiles
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentProfile {
	Development,
	Staging,
	Production,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigValidationError {
	#[error("server.host must not be empty")]
	EmptyHost,
	#[error("server.port must not be 0")]
	ZeroPort,
	#[error("timeouts.request_ms must be greater than 0")]
	ZeroTimeout,
}

impl Settings {
	/// Get server bind address
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	/// Check if running in production
	pub fn is_production(&self) -> bool {
		self.environment.profile == EnvironmentProfile::Production
	}

	/// Check if debug mode is enabled
	pub fn is_debug(&self) -> bool {
		self.environment.debug && !self.is_production()
	}

	pub fn validate(&self) -> Result<(), ConfigValidationError> {
		if self.server.host.trim().is_empty() {
			return Err(ConfigValidationError::EmptyHost);
		}
		if self.server.port == 0 {
			return Err(ConfigValidationError::ZeroPort);
		}
		if self.timeouts.request_ms == 0 {
			return Err(ConfigValidationError::ZeroTimeout);
		}
		Ok(())
	}
}
