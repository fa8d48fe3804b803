//! Configuration loading from `.env` files, JSON files, and the environment.
//!
//! Precedence: real environment variables > `.env` file > defaults. The JSON
//! config file is an optional side channel for structured values; it never
//! overrides the environment.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::settings::Settings;

const ENV_FILE: &str = ".env";

/// Loads run configuration from the supported sources.
pub struct ConfigReader;

impl ConfigReader {
	/// Loads the optional `.env` file, then resolves [`Settings`] from the
	/// environment.
	pub fn load() -> Settings {
		Self::load_env_file(Path::new(ENV_FILE));
		Settings::from_env()
	}

	/// Loads variables from a dotenv-style file if it exists.
	///
	/// Already-set process variables always win; a malformed file is logged
	/// and skipped rather than failing the run.
	pub fn load_env_file(path: &Path) {
		if !path.exists() {
			return;
		}
		match dotenvy::from_path(path) {
			Ok(()) => debug!(path = %path.display(), "loaded env file"),
			Err(err) => warn!(path = %path.display(), %err, "skipping unreadable env file"),
		}
	}

	/// Reads and parses a JSON configuration file.
	///
	/// A missing file or invalid JSON is a configuration error, fatal to
	/// this load attempt.
	pub fn load_json_file(path: &Path) -> Result<serde_json::Value> {
		let content = std::fs::read_to_string(path).map_err(|err| Error::Config {
			path: path.to_path_buf(),
			message: format!("cannot read config file: {err}"),
		})?;
		serde_json::from_str(&content).map_err(|err| Error::Config {
			path: path.to_path_buf(),
			message: format!("invalid JSON: {err}"),
		})
	}

	/// Environment variable as a string, with default.
	pub fn get_string(key: &str, default: &str) -> String {
		std::env::var(key).ok().filter(|v| !v.is_empty()).unwrap_or_else(|| default.to_string())
	}

	/// Environment variable parsed as an integer, with default on absence or
	/// parse failure.
	pub fn get_number(key: &str, default: i64) -> i64 {
		std::env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
	}

	/// Environment variable as a boolean: only the literal `true` (any case)
	/// is true.
	pub fn get_bool(key: &str, default: bool) -> bool {
		match std::env::var(key) {
			Ok(v) => v.eq_ignore_ascii_case("true"),
			Err(_) => default,
		}
	}
}
