//! Per-test holder of the live browser handles.

use std::sync::Arc;

use uitest_engine::{BrowserContext, BrowserKind, Page};

use crate::error::{Error, Result};

/// Handles and metadata for one logical test.
///
/// The page and context slots start empty; accessing either before the
/// session has created one is an uninitialized-resource error.
#[derive(Clone)]
pub struct DriverContext {
	page: Option<Arc<dyn Page>>,
	context: Option<Arc<dyn BrowserContext>>,
	browser_kind: BrowserKind,
	test_name: String,
	timeout_ms: u64,
}

impl DriverContext {
	pub fn new(browser_kind: BrowserKind, test_name: &str, timeout_ms: u64) -> Self {
		Self {
			page: None,
			context: None,
			browser_kind,
			test_name: test_name.to_string(),
			timeout_ms,
		}
	}

	/// The current page handle.
	pub fn page(&self) -> Result<&Arc<dyn Page>> {
		self.page.as_ref().ok_or_else(|| Error::uninitialized("page"))
	}

	/// The current browsing context handle.
	pub fn context(&self) -> Result<&Arc<dyn BrowserContext>> {
		self.context.as_ref().ok_or_else(|| Error::uninitialized("context"))
	}

	pub fn set_page(&mut self, page: Arc<dyn Page>) {
		self.page = Some(page);
	}

	pub fn set_context(&mut self, context: Arc<dyn BrowserContext>) {
		self.context = Some(context);
	}

	pub fn browser_kind(&self) -> BrowserKind {
		self.browser_kind
	}

	pub fn test_name(&self) -> &str {
		&self.test_name
	}

	pub fn timeout_ms(&self) -> u64 {
		self.timeout_ms
	}
}
