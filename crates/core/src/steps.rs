//! Step execution and assertion helpers for BDD-style step definitions.

use std::fmt::Debug;
use std::future::Future;

use tracing::{error, info};

use crate::error::{Error, Result};

/// Wraps step bodies with logging and turns failed checks into
/// [`Error::Assertion`], terminating the scenario.
///
/// Step definition types hold a `StepRunner` and route every step body
/// through [`StepRunner::run_step`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StepRunner;

impl StepRunner {
	pub fn new() -> Self {
		Self
	}

	/// Runs a step body, logging start, pass, and failure.
	pub async fn run_step<F, T>(&self, name: &str, body: F) -> Result<T>
	where
		F: Future<Output = Result<T>>,
	{
		info!(step = name, "executing step");
		match body.await {
			Ok(value) => {
				info!(step = name, "step passed");
				Ok(value)
			}
			Err(err) => {
				error!(step = name, %err, "step failed");
				Err(err)
			}
		}
	}

	/// Asserts a condition, logging the outcome.
	pub fn ensure(&self, condition: bool, message: &str) -> Result<()> {
		if !condition {
			error!(message, "assertion failed");
			return Err(Error::Assertion(message.to_string()));
		}
		info!(message, "assertion passed");
		Ok(())
	}

	/// Asserts two values are equal.
	pub fn ensure_eq<T: PartialEq + Debug>(&self, actual: T, expected: T, message: &str) -> Result<()> {
		if actual != expected {
			let detail = format!("{message}. expected: {expected:?}, actual: {actual:?}");
			error!(message = %detail, "assertion failed");
			return Err(Error::Assertion(detail));
		}
		info!(message, "assertion passed");
		Ok(())
	}

	/// Asserts two values differ.
	pub fn ensure_ne<T: PartialEq + Debug>(&self, actual: T, unexpected: T, message: &str) -> Result<()> {
		if actual == unexpected {
			let detail = format!("{message}. value should not be: {unexpected:?}");
			error!(message = %detail, "assertion failed");
			return Err(Error::Assertion(detail));
		}
		info!(message, "assertion passed");
		Ok(())
	}

	/// Asserts `text` contains `substring`.
	pub fn ensure_contains(&self, text: &str, substring: &str, message: &str) -> Result<()> {
		if !text.contains(substring) {
			let detail = format!("{message}. {text:?} does not contain {substring:?}");
			error!(message = %detail, "assertion failed");
			return Err(Error::Assertion(detail));
		}
		info!(message, "assertion passed");
		Ok(())
	}

	/// Asserts an optional value is present.
	pub fn ensure_some<T>(&self, value: &Option<T>, message: &str) -> Result<()> {
		self.ensure(value.is_some(), message)
	}

	/// Asserts an optional value is absent.
	pub fn ensure_none<T>(&self, value: &Option<T>, message: &str) -> Result<()> {
		self.ensure(value.is_none(), message)
	}
}
