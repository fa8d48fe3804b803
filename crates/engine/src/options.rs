//! Option structs passed through to the engine.
//!
//! These are serde-serializable shapes handed to the engine unmodified.
//! Absent fields are omitted from serialization so engine defaults apply.

use serde::{Deserialize, Serialize};

/// Default timeout in milliseconds for engine operations.
///
/// Matches the standard default used by mainstream automation engines.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// When to consider a navigation succeeded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WaitUntil {
    /// `load` event fired
    Load,
    /// `DOMContentLoaded` event fired
    DomContentLoaded,
    /// No network connections for at least 500ms
    #[default]
    NetworkIdle,
    /// Navigation committed, response started
    Commit,
}

/// Element state to wait for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaitState {
    /// Element is attached and visible
    #[default]
    Visible,
    /// Element is absent or hidden
    Hidden,
    /// Element is attached to the DOM
    Attached,
    /// Element is detached from the DOM
    Detached,
}

/// Browser launch options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchOptions {
    /// Run without a visible UI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headless: Option<bool>,

    /// Extra command-line flags for the browser process
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,

    /// Maximum launch time in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    /// Slow down operations by this many milliseconds (debugging aid)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slow_mo: Option<u64>,
}

impl LaunchOptions {
    /// Creates new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the headless flag.
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = Some(headless);
        self
    }

    /// Sets extra browser args.
    pub fn args(mut self, args: Vec<String>) -> Self {
        self.args = Some(args);
        self
    }

    /// Sets the launch timeout.
    pub fn timeout(mut self, ms: u64) -> Self {
        self.timeout = Some(ms);
        self
    }
}

/// Viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Browsing-context creation options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextOptions {
    /// Ignore TLS certificate errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_https_errors: Option<bool>,

    /// Enable JavaScript execution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub java_script_enabled: Option<bool>,

    /// Bypass Content-Security-Policy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass_csp: Option<bool>,

    /// Fixed viewport size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,

    /// User-Agent override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Locale override (e.g. `en-US`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Whether downloads are accepted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_downloads: Option<bool>,
}

impl ContextOptions {
    /// Creates a new builder.
    pub fn builder() -> ContextOptionsBuilder {
        ContextOptionsBuilder::default()
    }
}

/// Builder for [`ContextOptions`].
#[derive(Debug, Clone, Default)]
pub struct ContextOptionsBuilder {
    inner: ContextOptions,
}

impl ContextOptionsBuilder {
    /// Sets whether TLS certificate errors are ignored.
    pub fn ignore_https_errors(mut self, ignore: bool) -> Self {
        self.inner.ignore_https_errors = Some(ignore);
        self
    }

    /// Sets whether JavaScript is enabled.
    pub fn java_script_enabled(mut self, enabled: bool) -> Self {
        self.inner.java_script_enabled = Some(enabled);
        self
    }

    /// Sets CSP bypass.
    pub fn bypass_csp(mut self, bypass: bool) -> Self {
        self.inner.bypass_csp = Some(bypass);
        self
    }

    /// Sets the viewport.
    pub fn viewport(mut self, width: u32, height: u32) -> Self {
        self.inner.viewport = Some(Viewport { width, height });
        self
    }

    /// Sets the User-Agent override.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.inner.user_agent = Some(ua.into());
        self
    }

    /// Sets the locale override.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.inner.locale = Some(locale.into());
        self
    }

    /// Sets download acceptance.
    pub fn accept_downloads(mut self, accept: bool) -> Self {
        self.inner.accept_downloads = Some(accept);
        self
    }

    /// Builds the options.
    pub fn build(self) -> ContextOptions {
        self.inner
    }
}

/// Navigation options for `goto`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GotoOptions {
    /// Maximum navigation time in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    /// When to consider navigation succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_until: Option<WaitUntil>,

    /// Referer header value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referer: Option<String>,
}

impl GotoOptions {
    /// Creates new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the timeout.
    pub fn timeout(mut self, ms: u64) -> Self {
        self.timeout = Some(ms);
        self
    }

    /// Sets the wait_until condition.
    pub fn wait_until(mut self, wait_until: WaitUntil) -> Self {
        self.wait_until = Some(wait_until);
        self
    }
}
