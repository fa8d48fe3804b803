//! Error types shared by all engine implementations.

use thiserror::Error;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors surfaced by a browser-automation engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The browser process could not be started.
    ///
    /// Common causes: missing executable, bad launch flags, or the engine's
    /// own startup timeout expiring.
    #[error("browser launch failed: {0}")]
    Launch(String),

    /// Creating a browsing context failed.
    #[error("context creation failed: {0}")]
    Context(String),

    /// Creating a page failed.
    #[error("page creation failed: {0}")]
    Page(String),

    /// Navigation did not complete.
    #[error("navigation failed: {url}: {message}")]
    Navigation { url: String, message: String },

    /// No element matched the selector within the operation's timeout.
    #[error("element not found: selector '{0}'")]
    ElementNotFound(String),

    /// The operation exceeded its timeout.
    #[error("timeout after {ms}ms: {operation}")]
    Timeout { ms: u64, operation: String },

    /// The target (browser, context, or page) was already closed.
    #[error("target closed: {0}")]
    TargetClosed(String),

    /// Closing a resource failed.
    #[error("close failed: {0}")]
    Close(String),

    /// I/O error from the engine transport or artifact writing.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error on the engine boundary.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl EngineError {
    /// Returns true if this is a timeout error.
    pub fn is_timeout(&self) -> bool {
        matches!(self, EngineError::Timeout { .. })
    }

    /// Returns true if the target was already closed.
    pub fn is_target_closed(&self) -> bool {
        matches!(self, EngineError::TargetClosed(_))
    }
}
