use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the scaffolding layer.
///
/// Creation-path failures propagate to the caller and fail the test;
/// teardown failures are logged by the factory and never surface here.
#[derive(Debug, Error)]
pub enum Error {
	/// Configuration file missing or unparseable.
	#[error("configuration error: {path}: {message}")]
	Config { path: PathBuf, message: String },

	/// Requested browser kind has no launch path.
	#[error("unsupported browser kind: {0}")]
	UnsupportedKind(String),

	/// Page or context accessed before one was created for the current test.
	#[error("{resource} is not initialized; launch the browser before accessing it")]
	Uninitialized { resource: &'static str },

	/// A step assertion failed, terminating the scenario.
	#[error("assertion failed: {0}")]
	Assertion(String),

	#[error(transparent)]
	Engine(#[from] uitest_engine::EngineError),

	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl Error {
	/// Shorthand for the uninitialized-page error.
	pub(crate) fn uninitialized(resource: &'static str) -> Self {
		Error::Uninitialized { resource }
	}
}
