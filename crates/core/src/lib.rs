//! UI test-automation scaffolding over a pluggable browser engine.
//!
//! The crate supplies the glue a test suite needs around an engine that
//! implements the [`uitest_engine`] capability traits:
//!
//! - [`Settings`] / [`ConfigReader`]: env-driven configuration with `.env`
//!   and JSON file support,
//! - [`init_logging`]: run-scoped `[timestamp] [LEVEL]` logging to stdout
//!   and a per-run file,
//! - [`BrowserFactory`]: the browser/context cache keyed by
//!   `(kind, test name)`,
//! - [`TestSession`]: per-test setup/teardown hook,
//! - [`Interactions`] + [`StepRunner`]: the building blocks for page
//!   objects and BDD step definitions,
//! - [`testing`]: an in-memory mock engine for tests and demos.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use uitest::{BrowserFactory, ConfigReader, TestSession, init_logging};
//! use uitest::testing::MockEngine;
//!
//! #[tokio::main]
//! async fn main() -> uitest::Result<()> {
//!     let settings = Arc::new(ConfigReader::load());
//!     init_logging(&settings)?;
//!
//!     let engine = MockEngine::new();
//!     let factory = Arc::new(BrowserFactory::new(engine, settings));
//!
//!     let session = TestSession::start(factory.clone(), "smoke").await?;
//!     session.interactions().navigate("/login").await?;
//!     session.finish().await;
//!
//!     factory.close_all().await;
//!     Ok(())
//! }
//! ```

mod config;
mod driver;
mod error;
mod factory;
mod interactions;
mod logging;
mod session;
mod settings;
mod steps;

pub mod testing;

pub use config::ConfigReader;
pub use driver::DriverContext;
pub use error::{Error, Result};
pub use factory::BrowserFactory;
pub use interactions::Interactions;
pub use logging::init_logging;
pub use session::TestSession;
pub use settings::{ExecutionType, Settings};
pub use steps::StepRunner;

// Re-export the capability interface so downstream suites depend on one
// crate.
pub use uitest_engine as engine;
pub use uitest_engine::{
	Browser, BrowserContext, BrowserKind, ContextOptions, Engine, EngineError, GotoOptions,
	LaunchOptions, Page, WaitState, WaitUntil, DEFAULT_TIMEOUT_MS,
};
