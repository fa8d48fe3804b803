//! Browser/context/page factory with keyed reuse caching.
//!
//! Handles are cached by `(kind, logical test name)` so repeated
//! acquisitions for the same pairing reuse the running browser instead of
//! launching again. This is not a resource pool: there is no checkout
//! discipline, no eviction, and no cross-key ordering guarantee on
//! teardown beyond "all contexts before any remaining browsers".
//!
//! Locks guard point lookups only and are never held across an await.
//! Concurrent acquisitions of an identical key can therefore race to
//! create duplicate handles; the last insert wins the cache slot and the
//! earlier handle leaks. Accepted under the framework's assumption that
//! each logical test name is driven by exactly one caller at a time.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{info, warn};
use uitest_engine::{
	Browser, BrowserContext, BrowserKind, ContextOptions, Engine, LaunchOptions, Page,
};

use crate::error::{Error, Result};
use crate::settings::Settings;

/// Cache key: engine kind plus logical test name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct InstanceKey {
	kind: BrowserKind,
	name: String,
}

impl InstanceKey {
	fn new(kind: BrowserKind, name: &str) -> Self {
		Self {
			kind,
			name: name.to_string(),
		}
	}
}

/// Creates and caches browser and context handles for a test run.
pub struct BrowserFactory {
	engine: Arc<dyn Engine>,
	settings: Arc<Settings>,
	browsers: Mutex<HashMap<InstanceKey, Arc<dyn Browser>>>,
	contexts: Mutex<HashMap<InstanceKey, Arc<dyn BrowserContext>>>,
}

impl BrowserFactory {
	pub fn new(engine: Arc<dyn Engine>, settings: Arc<Settings>) -> Self {
		Self {
			engine,
			settings,
			browsers: Mutex::new(HashMap::new()),
			contexts: Mutex::new(HashMap::new()),
		}
	}

	pub fn settings(&self) -> &Arc<Settings> {
		&self.settings
	}

	/// Returns the cached browser for `(kind, test_name)`, launching and
	/// caching one if absent.
	///
	/// An unsupported kind fails before any cache mutation; engine launch
	/// failures propagate to the caller.
	pub async fn acquire_browser(
		&self,
		kind: BrowserKind,
		test_name: &str,
	) -> Result<Arc<dyn Browser>> {
		if kind == BrowserKind::Edge {
			return Err(Error::UnsupportedKind(kind.to_string()));
		}

		let key = InstanceKey::new(kind, test_name);
		if let Some(browser) = self.browsers.lock().get(&key) {
			info!(%kind, test = test_name, "reusing cached browser");
			return Ok(browser.clone());
		}

		info!(%kind, test = test_name, "launching browser");
		let options = LaunchOptions::new()
			.headless(self.settings.headless)
			.args(launch_args(kind, &self.settings));
		let browser = self.engine.launch(kind, options).await?;

		// Last insert wins on a create race for the same key.
		self.browsers.lock().insert(key, browser.clone());
		info!(%kind, test = test_name, "browser launched");
		Ok(browser)
	}

	/// Returns the cached context for `(browser kind, test_name)`, creating
	/// and caching one if absent.
	///
	/// The key deliberately ignores the browser instance: a cached context
	/// is returned even when a different browser instance of the same kind
	/// is passed. This reuse-sharing is documented behavior.
	pub async fn acquire_context(
		&self,
		browser: &Arc<dyn Browser>,
		test_name: &str,
	) -> Result<Arc<dyn BrowserContext>> {
		let key = InstanceKey::new(browser.kind(), test_name);
		if let Some(context) = self.contexts.lock().get(&key) {
			info!(test = test_name, "reusing cached context");
			return Ok(context.clone());
		}

		info!(test = test_name, "creating browser context");
		let context = browser.new_context(context_options()).await?;

		self.contexts.lock().insert(key, context.clone());
		info!(test = test_name, "browser context created");
		Ok(context)
	}

	/// Opens a fresh page in the context. Pages are never cached.
	///
	/// The configured default timeout and default navigation timeout are
	/// applied to the new handle.
	pub async fn new_page(&self, context: &Arc<dyn BrowserContext>) -> Result<Arc<dyn Page>> {
		let page = context.new_page().await?;
		page.set_default_timeout(self.settings.timeout_ms);
		page.set_default_navigation_timeout(self.settings.timeout_ms);
		Ok(page)
	}

	/// Best-effort page close; failures are logged, never returned.
	pub async fn close_page(&self, page: &Arc<dyn Page>) {
		if let Err(err) = page.close().await {
			warn!(%err, "page close failed");
		}
	}

	/// Best-effort context close; failures are logged, never returned.
	pub async fn close_context(&self, context: &Arc<dyn BrowserContext>) {
		if let Err(err) = context.close().await {
			warn!(%err, "context close failed");
		}
	}

	/// Best-effort browser close; failures are logged, never returned.
	pub async fn close_browser(&self, browser: &Arc<dyn Browser>) {
		if let Err(err) = browser.close().await {
			warn!(%err, "browser close failed");
		}
	}

	/// Closes every cached context, then every cached browser, clearing
	/// both maps unconditionally even when individual closes fail.
	pub async fn close_all(&self) {
		info!("closing all cached browsers");

		let contexts: Vec<_> = self.contexts.lock().drain().collect();
		for (_, context) in contexts {
			self.close_context(&context).await;
		}

		let browsers: Vec<_> = self.browsers.lock().drain().collect();
		for (_, browser) in browsers {
			self.close_browser(&browser).await;
		}

		info!("all cached browsers closed");
	}

	/// Number of cached browser handles.
	pub fn cached_browsers(&self) -> usize {
		self.browsers.lock().len()
	}

	/// Number of cached context handles.
	pub fn cached_contexts(&self) -> usize {
		self.contexts.lock().len()
	}
}

/// Kind-specific launch flags, including the private-mode flag.
fn launch_args(kind: BrowserKind, settings: &Settings) -> Vec<String> {
	let mut args = Vec::new();
	match kind {
		BrowserKind::Chromium => {
			if settings.incognito {
				args.push("--incognito".to_string());
			}
			args.push("--disable-blink-features=AutomationControlled".to_string());
			args.push("--disable-dev-shm-usage".to_string());
			args.push("--no-first-run".to_string());
			args.push("--no-default-browser-check".to_string());
		}
		BrowserKind::Firefox => {
			if settings.incognito {
				args.push("-private".to_string());
			}
		}
		// WebKit takes no extra flags; private mode is context-level.
		BrowserKind::Webkit | BrowserKind::Edge => {}
	}
	args
}

/// Fixed context defaults. Kind-specific overrides merge here when a kind
/// needs them.
fn context_options() -> ContextOptions {
	ContextOptions::builder()
		.ignore_https_errors(true)
		.java_script_enabled(true)
		.bypass_csp(true)
		.build()
}
