//! The engine capability trait family.
//!
//! All traits are object-safe; handles move through the scaffolding as
//! `Arc<dyn _>` so cached instances can be shared and compared by identity.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::kind::BrowserKind;
use crate::options::{ContextOptions, GotoOptions, LaunchOptions, WaitState};

/// Entry point to a browser-automation engine.
#[async_trait]
pub trait Engine: Send + Sync {
    /// Launches a browser of the given kind.
    ///
    /// Options are passed through unmodified; the engine applies its own
    /// defaults for anything left unset.
    async fn launch(&self, kind: BrowserKind, options: LaunchOptions)
    -> Result<Arc<dyn Browser>>;
}

/// A running browser process.
#[async_trait]
pub trait Browser: Send + Sync {
    /// The engine kind this browser was launched as.
    fn kind(&self) -> BrowserKind;

    /// Creates an isolated browsing context (cookies/storage) in this browser.
    async fn new_context(&self, options: ContextOptions) -> Result<Arc<dyn BrowserContext>>;

    /// Closes the browser and all of its contexts.
    async fn close(&self) -> Result<()>;
}

/// An isolated session within one browser instance.
#[async_trait]
pub trait BrowserContext: Send + Sync {
    /// Opens a new page (tab) in this context.
    async fn new_page(&self) -> Result<Arc<dyn Page>>;

    /// Closes the context and all of its pages.
    async fn close(&self) -> Result<()>;
}

/// A single browsable tab/document.
#[async_trait]
pub trait Page: Send + Sync {
    /// Sets the default timeout for element operations.
    fn set_default_timeout(&self, ms: u64);

    /// Sets the default timeout for navigations.
    fn set_default_navigation_timeout(&self, ms: u64);

    /// Navigates to a URL.
    async fn goto(&self, url: &str, options: GotoOptions) -> Result<()>;

    /// Reloads the current page.
    async fn reload(&self) -> Result<()>;

    /// Goes back in history.
    async fn go_back(&self) -> Result<()>;

    /// Goes forward in history.
    async fn go_forward(&self) -> Result<()>;

    /// Current page URL.
    fn url(&self) -> String;

    /// Current page title.
    async fn title(&self) -> Result<String>;

    /// Clicks the first element matching the selector.
    async fn click(&self, selector: &str) -> Result<()>;

    /// Double-clicks the first element matching the selector.
    async fn dblclick(&self, selector: &str) -> Result<()>;

    /// Right-clicks the first element matching the selector.
    async fn right_click(&self, selector: &str) -> Result<()>;

    /// Hovers over the first element matching the selector.
    async fn hover(&self, selector: &str) -> Result<()>;

    /// Fills a text input, replacing its current value.
    async fn fill(&self, selector: &str, text: &str) -> Result<()>;

    /// Selects a `<select>` option by value.
    async fn select_option(&self, selector: &str, value: &str) -> Result<()>;

    /// Text content of the first matching element, if any.
    async fn text_content(&self, selector: &str) -> Result<Option<String>>;

    /// Attribute value of the first matching element.
    async fn get_attribute(&self, selector: &str, name: &str) -> Result<Option<String>>;

    /// Whether the first matching element is visible.
    async fn is_visible(&self, selector: &str) -> Result<bool>;

    /// Whether the first matching element is enabled.
    async fn is_enabled(&self, selector: &str) -> Result<bool>;

    /// Whether the first matching element is checked.
    async fn is_checked(&self, selector: &str) -> Result<bool>;

    /// Waits for the selector to reach the given state.
    async fn wait_for_selector(
        &self,
        selector: &str,
        state: WaitState,
        timeout_ms: Option<u64>,
    ) -> Result<()>;

    /// Sets the viewport size.
    async fn set_viewport_size(&self, width: u32, height: u32) -> Result<()>;

    /// Evaluates a JavaScript expression in the page, returning its JSON value.
    async fn evaluate(&self, expression: &str) -> Result<serde_json::Value>;

    /// Writes a screenshot of the page to `path`.
    async fn screenshot(&self, path: &Path) -> Result<()>;

    /// Closes the page.
    async fn close(&self) -> Result<()>;
}
