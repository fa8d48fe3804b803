//! Browser-engine capability interface for `uitest`.
//!
//! This crate defines the seam between the scaffolding layer and whatever
//! browser-automation engine actually drives a browser. The scaffolding
//! (factory cache, page objects, step helpers) is written entirely against
//! the trait family here and never names a concrete engine.
//!
//! Handles are object-safe and shared as `Arc<dyn _>`:
//! - [`Engine`] launches browsers,
//! - [`Browser`] owns browsing contexts,
//! - [`BrowserContext`] owns pages,
//! - [`Page`] is a single browsable tab/document.
//!
//! Option types mirror the shapes engines accept on the wire and serialize
//! as camelCase JSON so they can be passed through unmodified.

mod error;
mod kind;
mod options;
mod traits;

pub use error::{EngineError, Result};
pub use kind::BrowserKind;
pub use options::{
    ContextOptions, GotoOptions, LaunchOptions, Viewport, WaitState, WaitUntil,
    DEFAULT_TIMEOUT_MS,
};
pub use traits::{Browser, BrowserContext, Engine, Page};
