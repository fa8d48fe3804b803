//! In-memory engine implementation for tests and demos.
//!
//! [`MockEngine`] implements the full engine capability without a real
//! browser. Pages read canned selector state from a shared [`MockDom`] and
//! record every action, so tests can assert on what the scaffolding did.
//! Handle identity is observable through `Arc::ptr_eq`.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use uitest_engine::{
	Browser, BrowserContext, BrowserKind, ContextOptions, Engine, EngineError, GotoOptions,
	LaunchOptions, Page, Result, WaitState,
};

/// Side effects applied when a selector is clicked.
#[derive(Debug, Clone, Default)]
pub struct ClickEffect {
	/// Navigate the clicking page to this URL.
	pub goto: Option<String>,
	/// Selectors that become visible.
	pub show: Vec<String>,
	/// Selectors that become hidden.
	pub hide: Vec<String>,
	/// Text content updates.
	pub set_text: Vec<(String, String)>,
}

/// Shared fake-DOM state served to every page of a [`MockEngine`].
#[derive(Default)]
pub struct MockDom {
	title: Mutex<String>,
	texts: Mutex<HashMap<String, String>>,
	attributes: Mutex<HashMap<(String, String), String>>,
	visible: Mutex<HashSet<String>>,
	disabled: Mutex<HashSet<String>>,
	checked: Mutex<HashSet<String>>,
	click_effects: Mutex<HashMap<String, ClickEffect>>,
}

impl MockDom {
	pub fn set_title(&self, title: &str) {
		*self.title.lock() = title.to_string();
	}

	pub fn set_text(&self, selector: &str, text: &str) {
		self.texts.lock().insert(selector.to_string(), text.to_string());
	}

	pub fn set_attribute(&self, selector: &str, name: &str, value: &str) {
		self.attributes
			.lock()
			.insert((selector.to_string(), name.to_string()), value.to_string());
	}

	pub fn show(&self, selector: &str) {
		self.visible.lock().insert(selector.to_string());
	}

	pub fn hide(&self, selector: &str) {
		self.visible.lock().remove(selector);
	}

	pub fn disable(&self, selector: &str) {
		self.disabled.lock().insert(selector.to_string());
	}

	pub fn check(&self, selector: &str) {
		self.checked.lock().insert(selector.to_string());
	}

	/// Registers side effects for clicks on `selector`.
	pub fn on_click(&self, selector: &str, effect: ClickEffect) {
		self.click_effects.lock().insert(selector.to_string(), effect);
	}

	fn apply_click(&self, selector: &str, page: &MockPage) {
		let effect = match self.click_effects.lock().get(selector) {
			Some(effect) => effect.clone(),
			None => return,
		};
		if let Some(url) = effect.goto {
			*page.url.lock() = url;
		}
		for s in effect.show {
			self.show(&s);
		}
		for s in effect.hide {
			self.hide(&s);
		}
		for (s, text) in effect.set_text {
			self.set_text(&s, &text);
		}
	}
}

/// In-memory [`Engine`] with injectable failures and full call recording.
#[derive(Default)]
pub struct MockEngine {
	dom: Arc<MockDom>,
	launches: Mutex<Vec<(BrowserKind, LaunchOptions)>>,
	browsers: Mutex<Vec<Arc<MockBrowser>>>,
	fail_launch: AtomicBool,
}

impl MockEngine {
	pub fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub fn dom(&self) -> &Arc<MockDom> {
		&self.dom
	}

	/// Makes subsequent launches fail with a startup error.
	pub fn fail_launches(&self) {
		self.fail_launch.store(true, Ordering::SeqCst);
	}

	pub fn launch_count(&self) -> usize {
		self.launches.lock().len()
	}

	/// Options recorded for the `n`th launch.
	pub fn launch_options(&self, n: usize) -> Option<LaunchOptions> {
		self.launches.lock().get(n).map(|(_, options)| options.clone())
	}

	/// Concrete handles for every browser launched so far.
	pub fn browsers(&self) -> Vec<Arc<MockBrowser>> {
		self.browsers.lock().clone()
	}
}

#[async_trait]
impl Engine for MockEngine {
	async fn launch(
		&self,
		kind: BrowserKind,
		options: LaunchOptions,
	) -> Result<Arc<dyn Browser>> {
		if self.fail_launch.load(Ordering::SeqCst) {
			return Err(EngineError::Launch("injected launch failure".to_string()));
		}
		self.launches.lock().push((kind, options));
		let browser = Arc::new(MockBrowser {
			kind,
			dom: self.dom.clone(),
			contexts: Mutex::new(Vec::new()),
			closed: AtomicBool::new(false),
		});
		self.browsers.lock().push(browser.clone());
		Ok(browser)
	}
}

/// Fake browser process.
pub struct MockBrowser {
	kind: BrowserKind,
	dom: Arc<MockDom>,
	contexts: Mutex<Vec<Arc<MockContext>>>,
	closed: AtomicBool,
}

impl MockBrowser {
	pub fn contexts(&self) -> Vec<Arc<MockContext>> {
		self.contexts.lock().clone()
	}

	pub fn is_closed(&self) -> bool {
		self.closed.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl Browser for MockBrowser {
	fn kind(&self) -> BrowserKind {
		self.kind
	}

	async fn new_context(&self, options: ContextOptions) -> Result<Arc<dyn BrowserContext>> {
		let context = Arc::new(MockContext {
			dom: self.dom.clone(),
			options,
			pages: Mutex::new(Vec::new()),
			closed: AtomicBool::new(false),
			fail_close: AtomicBool::new(false),
		});
		self.contexts.lock().push(context.clone());
		Ok(context)
	}

	async fn close(&self) -> Result<()> {
		self.closed.store(true, Ordering::SeqCst);
		Ok(())
	}
}

/// Fake browsing context.
pub struct MockContext {
	dom: Arc<MockDom>,
	options: ContextOptions,
	pages: Mutex<Vec<Arc<MockPage>>>,
	closed: AtomicBool,
	fail_close: AtomicBool,
}

impl MockContext {
	pub fn pages(&self) -> Vec<Arc<MockPage>> {
		self.pages.lock().clone()
	}

	pub fn options(&self) -> &ContextOptions {
		&self.options
	}

	pub fn is_closed(&self) -> bool {
		self.closed.load(Ordering::SeqCst)
	}

	/// Makes `close` fail (teardown-resilience tests).
	pub fn fail_on_close(&self) {
		self.fail_close.store(true, Ordering::SeqCst);
	}
}

#[async_trait]
impl BrowserContext for MockContext {
	async fn new_page(&self) -> Result<Arc<dyn Page>> {
		let page = Arc::new(MockPage {
			dom: self.dom.clone(),
			url: Mutex::new("about:blank".to_string()),
			default_timeout: AtomicUsize::new(0),
			navigation_timeout: AtomicUsize::new(0),
			navigations: Mutex::new(Vec::new()),
			clicks: Mutex::new(Vec::new()),
			fills: Mutex::new(Vec::new()),
			closed: AtomicBool::new(false),
		});
		self.pages.lock().push(page.clone());
		Ok(page)
	}

	async fn close(&self) -> Result<()> {
		if self.fail_close.load(Ordering::SeqCst) {
			return Err(EngineError::Close("injected context close failure".to_string()));
		}
		self.closed.store(true, Ordering::SeqCst);
		Ok(())
	}
}

/// Fake page recording every action performed on it.
pub struct MockPage {
	dom: Arc<MockDom>,
	url: Mutex<String>,
	default_timeout: AtomicUsize,
	navigation_timeout: AtomicUsize,
	navigations: Mutex<Vec<String>>,
	clicks: Mutex<Vec<String>>,
	fills: Mutex<Vec<(String, String)>>,
	closed: AtomicBool,
}

impl MockPage {
	pub fn default_timeout(&self) -> u64 {
		self.default_timeout.load(Ordering::SeqCst) as u64
	}

	pub fn navigation_timeout(&self) -> u64 {
		self.navigation_timeout.load(Ordering::SeqCst) as u64
	}

	pub fn navigations(&self) -> Vec<String> {
		self.navigations.lock().clone()
	}

	pub fn clicks(&self) -> Vec<String> {
		self.clicks.lock().clone()
	}

	pub fn fills(&self) -> Vec<(String, String)> {
		self.fills.lock().clone()
	}

	pub fn is_closed(&self) -> bool {
		self.closed.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl Page for MockPage {
	fn set_default_timeout(&self, ms: u64) {
		self.default_timeout.store(ms as usize, Ordering::SeqCst);
	}

	fn set_default_navigation_timeout(&self, ms: u64) {
		self.navigation_timeout.store(ms as usize, Ordering::SeqCst);
	}

	async fn goto(&self, url: &str, _options: GotoOptions) -> Result<()> {
		self.navigations.lock().push(url.to_string());
		*self.url.lock() = url.to_string();
		Ok(())
	}

	async fn reload(&self) -> Result<()> {
		let url = self.url.lock().clone();
		self.navigations.lock().push(url);
		Ok(())
	}

	async fn go_back(&self) -> Result<()> {
		Ok(())
	}

	async fn go_forward(&self) -> Result<()> {
		Ok(())
	}

	fn url(&self) -> String {
		self.url.lock().clone()
	}

	async fn title(&self) -> Result<String> {
		Ok(self.dom.title.lock().clone())
	}

	async fn click(&self, selector: &str) -> Result<()> {
		self.clicks.lock().push(selector.to_string());
		self.dom.apply_click(selector, self);
		Ok(())
	}

	async fn dblclick(&self, selector: &str) -> Result<()> {
		self.clicks.lock().push(selector.to_string());
		self.clicks.lock().push(selector.to_string());
		Ok(())
	}

	async fn right_click(&self, selector: &str) -> Result<()> {
		self.clicks.lock().push(selector.to_string());
		Ok(())
	}

	async fn hover(&self, _selector: &str) -> Result<()> {
		Ok(())
	}

	async fn fill(&self, selector: &str, text: &str) -> Result<()> {
		self.fills.lock().push((selector.to_string(), text.to_string()));
		Ok(())
	}

	async fn select_option(&self, selector: &str, value: &str) -> Result<()> {
		self.fills.lock().push((selector.to_string(), value.to_string()));
		Ok(())
	}

	async fn text_content(&self, selector: &str) -> Result<Option<String>> {
		Ok(self.dom.texts.lock().get(selector).cloned())
	}

	async fn get_attribute(&self, selector: &str, name: &str) -> Result<Option<String>> {
		Ok(self
			.dom
			.attributes
			.lock()
			.get(&(selector.to_string(), name.to_string()))
			.cloned())
	}

	async fn is_visible(&self, selector: &str) -> Result<bool> {
		Ok(self.dom.visible.lock().contains(selector))
	}

	async fn is_enabled(&self, selector: &str) -> Result<bool> {
		Ok(!self.dom.disabled.lock().contains(selector))
	}

	async fn is_checked(&self, selector: &str) -> Result<bool> {
		Ok(self.dom.checked.lock().contains(selector))
	}

	async fn wait_for_selector(
		&self,
		selector: &str,
		state: WaitState,
		timeout_ms: Option<u64>,
	) -> Result<()> {
		let visible = self.dom.visible.lock().contains(selector);
		let satisfied = match state {
			WaitState::Visible | WaitState::Attached => visible,
			WaitState::Hidden | WaitState::Detached => !visible,
		};
		if satisfied {
			Ok(())
		} else {
			Err(EngineError::Timeout {
				ms: timeout_ms.unwrap_or(uitest_engine::DEFAULT_TIMEOUT_MS),
				operation: format!("wait for selector '{selector}'"),
			})
		}
	}

	async fn set_viewport_size(&self, _width: u32, _height: u32) -> Result<()> {
		Ok(())
	}

	async fn evaluate(&self, _expression: &str) -> Result<serde_json::Value> {
		Ok(serde_json::Value::Null)
	}

	async fn screenshot(&self, _path: &Path) -> Result<()> {
		Ok(())
	}

	async fn close(&self) -> Result<()> {
		self.closed.store(true, Ordering::SeqCst);
		Ok(())
	}
}
