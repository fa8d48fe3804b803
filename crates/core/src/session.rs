//! Per-test session setup and teardown.
//!
//! Mirrors the usual hook shape: acquire browser → context → fresh page at
//! test start, close page then context at test end. Browsers stay cached in
//! the factory for reuse across tests; [`crate::BrowserFactory::close_all`]
//! is the run-level teardown.

use std::sync::Arc;

use tracing::info;

use crate::driver::DriverContext;
use crate::error::Result;
use crate::factory::BrowserFactory;
use crate::interactions::Interactions;

/// A running test session with live handles.
pub struct TestSession {
	factory: Arc<BrowserFactory>,
	interactions: Interactions,
	test_name: String,
}

impl TestSession {
	/// Starts a session for `test_name`: acquires (or reuses) the browser
	/// and context for the configured kind and opens a fresh page.
	pub async fn start(factory: Arc<BrowserFactory>, test_name: &str) -> Result<Self> {
		info!(test = test_name, "starting test");

		let settings = factory.settings().clone();
		let kind = settings.browser_kind;

		let browser = factory.acquire_browser(kind, test_name).await?;
		let context = factory.acquire_context(&browser, test_name).await?;
		let page = factory.new_page(&context).await?;

		let mut driver = DriverContext::new(kind, test_name, settings.timeout_ms);
		driver.set_context(context);
		driver.set_page(page);

		Ok(Self {
			factory,
			interactions: Interactions::new(driver, settings),
			test_name: test_name.to_string(),
		})
	}

	/// The interaction capability for this session's page.
	pub fn interactions(&self) -> &Interactions {
		&self.interactions
	}

	pub fn test_name(&self) -> &str {
		&self.test_name
	}

	/// Ends the session: best-effort closes the page, then the context.
	/// The browser remains cached for reuse.
	pub async fn finish(self) {
		info!(test = %self.test_name, "ending test");
		let driver = self.interactions.driver();
		if let Ok(page) = driver.page() {
			self.factory.close_page(page).await;
		}
		if let Ok(context) = driver.context() {
			self.factory.close_context(context).await;
		}
	}
}
