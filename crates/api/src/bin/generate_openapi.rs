//! Writes the weather tracker OpenAPI document to disk without starting a server.
//!
//! ```bash
//! # docs/api/openapi.json
//! cargo run -p weather-api --bin generate_openapi --features openapi
//!
//! cargo run -p weather-api --bin generate_openapi --features openapi -- out/openapi.json
//! ```
#[cfg(feature = "openapi")]
use std::env;
#[cfg(feature = "openapi")]
use std::fs;
#[cfg(feature = "openapi")]
use std::path::Path;

#[cfg(feature = "openapi")]
use utoipa::OpenApi;
#[cfg(feature = "openapi")]
use weather_api::openapi::ApiDoc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	#[cfg(not(feature = "openapi"))]
	{
		eprintln!("Error: The 'openapi' feature must be enabled to generate OpenAPI specs.");
		eprintln!("Run with: cargo run -p weather-api --bin generate_openapi --features openapi");
		std::process::exit(1);
	}

	#[cfg(feature = "openapi")]
	{
		let output_path = env::args()
			.nth(1)
			.unwrap_or_else(|| "docs/api/openapi.json".to_string());

		if let Some(parent) = Path::new(&output_path).parent() {
			if !parent.as_os_str().is_empty() {
				fs::create_dir_all(parent)?;
			}
		}

		let json = ApiDoc::openapi().to_pretty_json()?;
		fs::write(&output_path, json)?;

		println!("OpenAPI specification written to {}", output_path);
	}

	#[allow(unreachable_code)]
	Ok(())
}
