//! Run-wide settings resolved from environment variables.

use std::str::FromStr;

use serde::Serialize;
use uitest_engine::{BrowserKind, DEFAULT_TIMEOUT_MS};

/// Where tests execute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionType {
	#[default]
	Local,
	Remote,
	Cloud,
}

/// Immutable configuration for a test run.
///
/// Loaded once at process start (see [`crate::config::ConfigReader`]) and
/// passed by `Arc` to every consumer. Fields fall back to documented
/// defaults when the corresponding environment variable is absent.
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
	/// Default timeout for element and navigation operations, in milliseconds.
	pub timeout_ms: u64,
	/// Base URL of the application under test.
	pub base_url: String,
	/// Browser engine used for launches.
	pub browser_kind: BrowserKind,
	/// Run the browser without a visible UI.
	pub headless: bool,
	/// Run the browser in private/incognito mode.
	pub incognito: bool,
	/// Whether run logging is enabled at all.
	pub enable_logging: bool,
	/// Directory for per-run log files.
	pub log_path: String,
	/// Logical environment name (dev, staging, production).
	pub environment: String,
	/// Where tests execute (local, remote, cloud).
	pub execution_type: ExecutionType,
	/// Remote engine endpoint for non-local execution.
	pub remote_url: String,
	/// Build name used in reporting.
	pub build_name: String,
	/// Application name under test.
	pub application_name: String,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			timeout_ms: DEFAULT_TIMEOUT_MS,
			base_url: "http://localhost:3000".to_string(),
			browser_kind: BrowserKind::Chromium,
			headless: true,
			incognito: false,
			enable_logging: true,
			log_path: "./logs".to_string(),
			environment: "dev".to_string(),
			execution_type: ExecutionType::Local,
			remote_url: String::new(),
			build_name: "Local Build".to_string(),
			application_name: "AUT".to_string(),
		}
	}
}

impl Settings {
	/// Resolves settings from the process environment.
	///
	/// Parse rules are deliberately conservative: `HEADLESS` and
	/// `ENABLE_LOGGING` are only disabled by the literal string `"false"`,
	/// `INCOGNITO` only enabled by the literal `"true"`, and a malformed
	/// `TIMEOUT` falls back to the default rather than failing the run.
	pub fn from_env() -> Self {
		let defaults = Settings::default();
		Self {
			timeout_ms: env_var("TIMEOUT")
				.and_then(|v| v.parse().ok())
				.unwrap_or(defaults.timeout_ms),
			base_url: env_var("BASE_URL").unwrap_or(defaults.base_url),
			browser_kind: env_var("BROWSER")
				.and_then(|v| BrowserKind::from_str(&v).ok())
				.unwrap_or(defaults.browser_kind),
			headless: env_var("HEADLESS").as_deref() != Some("false"),
			incognito: env_var("INCOGNITO").as_deref() == Some("true"),
			enable_logging: env_var("ENABLE_LOGGING").as_deref() != Some("false"),
			log_path: env_var("LOG_PATH").unwrap_or(defaults.log_path),
			environment: env_var("ENVIRONMENT").unwrap_or(defaults.environment),
			execution_type: env_var("EXECUTION_TYPE")
				.and_then(|v| match v.to_ascii_lowercase().as_str() {
					"local" => Some(ExecutionType::Local),
					"remote" => Some(ExecutionType::Remote),
					"cloud" => Some(ExecutionType::Cloud),
					_ => None,
				})
				.unwrap_or(defaults.execution_type),
			remote_url: env_var("REMOTE_URL").unwrap_or(defaults.remote_url),
			build_name: env_var("BUILD_NAME").unwrap_or(defaults.build_name),
			application_name: env_var("APP_NAME").unwrap_or(defaults.application_name),
		}
	}
}

fn env_var(key: &str) -> Option<String> {
	std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;

	// Env-var mutation is process-global; tests touching the same variable
	// run under one lock.
	static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

	fn with_env(vars: &[(&str, Option<&str>)], f: impl FnOnce()) {
		let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
		let saved: Vec<(String, Option<String>)> = vars
			.iter()
			.map(|(k, _)| (k.to_string(), std::env::var(k).ok()))
			.collect();
		for (k, v) in vars {
			match v {
				Some(v) => unsafe { std::env::set_var(k, v) },
				None => unsafe { std::env::remove_var(k) },
			}
		}
		f();
		for (k, v) in saved {
			match v {
				Some(v) => unsafe { std::env::set_var(&k, v) },
				None => unsafe { std::env::remove_var(&k) },
			}
		}
	}

	#[test]
	fn headless_defaults_true_when_unset() {
		with_env(&[("HEADLESS", None)], || {
			assert!(Settings::from_env().headless);
		});
	}

	#[test]
	fn headless_disabled_only_by_literal_false() {
		with_env(&[("HEADLESS", Some("false"))], || {
			assert!(!Settings::from_env().headless);
		});
		with_env(&[("HEADLESS", Some("FALSE"))], || {
			assert!(Settings::from_env().headless);
		});
		with_env(&[("HEADLESS", Some("no"))], || {
			assert!(Settings::from_env().headless);
		});
	}

	#[test]
	fn timeout_falls_back_on_missing_or_malformed() {
		with_env(&[("TIMEOUT", None)], || {
			assert_eq!(Settings::from_env().timeout_ms, 30_000);
		});
		with_env(&[("TIMEOUT", Some("5000"))], || {
			assert_eq!(Settings::from_env().timeout_ms, 5_000);
		});
		with_env(&[("TIMEOUT", Some("soon"))], || {
			assert_eq!(Settings::from_env().timeout_ms, 30_000);
		});
	}

	#[test]
	fn incognito_enabled_only_by_literal_true() {
		with_env(&[("INCOGNITO", Some("true"))], || {
			assert!(Settings::from_env().incognito);
		});
		with_env(&[("INCOGNITO", Some("1"))], || {
			assert!(!Settings::from_env().incognito);
		});
	}

	#[test]
	fn browser_kind_parses_with_default() {
		with_env(&[("BROWSER", Some("firefox"))], || {
			assert_eq!(Settings::from_env().browser_kind, BrowserKind::Firefox);
		});
		with_env(&[("BROWSER", None)], || {
			assert_eq!(Settings::from_env().browser_kind, BrowserKind::Chromium);
		});
	}
}
