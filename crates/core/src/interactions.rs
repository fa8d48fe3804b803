//! The shared interaction capability page objects and steps are built on.
//!
//! One type implements navigation, element interaction, and waiting;
//! concrete page objects hold it by reference instead of inheriting from a
//! base class. All element operations address the first match of a CSS
//! selector and inherit the page's default timeout unless given one.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};
use uitest_engine::{GotoOptions, Page, WaitState, WaitUntil};

use crate::driver::DriverContext;
use crate::error::Result;
use crate::settings::Settings;

const SCREENSHOT_DIR: &str = "./screenshots";

/// Browser interaction capability for one test.
#[derive(Clone)]
pub struct Interactions {
	driver: DriverContext,
	settings: Arc<Settings>,
}

impl Interactions {
	pub fn new(driver: DriverContext, settings: Arc<Settings>) -> Self {
		Self { driver, settings }
	}

	pub fn driver(&self) -> &DriverContext {
		&self.driver
	}

	fn page(&self) -> Result<Arc<dyn Page>> {
		Ok(self.driver.page()?.clone())
	}

	/// Resolves a path against the configured base URL. Absolute URLs pass
	/// through untouched.
	fn resolve_url(&self, path: &str) -> String {
		if path.contains("://") || path.starts_with("data:") {
			path.to_string()
		} else {
			format!(
				"{}/{}",
				self.settings.base_url.trim_end_matches('/'),
				path.trim_start_matches('/')
			)
		}
	}

	/// Navigates to a path or URL and waits for the network to go idle.
	pub async fn navigate(&self, path: &str) -> Result<()> {
		let url = self.resolve_url(path);
		info!(%url, "navigating");
		let options = GotoOptions::new().wait_until(WaitUntil::NetworkIdle);
		self.page()?.goto(&url, options).await?;
		info!(%url, "navigation complete");
		Ok(())
	}

	pub fn current_url(&self) -> Result<String> {
		Ok(self.page()?.url())
	}

	pub async fn title(&self) -> Result<String> {
		Ok(self.page()?.title().await?)
	}

	pub async fn reload(&self) -> Result<()> {
		info!("reloading page");
		Ok(self.page()?.reload().await?)
	}

	pub async fn go_back(&self) -> Result<()> {
		Ok(self.page()?.go_back().await?)
	}

	pub async fn go_forward(&self) -> Result<()> {
		Ok(self.page()?.go_forward().await?)
	}

	pub async fn click(&self, selector: &str) -> Result<()> {
		info!(selector, "clicking");
		Ok(self.page()?.click(selector).await?)
	}

	pub async fn double_click(&self, selector: &str) -> Result<()> {
		info!(selector, "double clicking");
		Ok(self.page()?.dblclick(selector).await?)
	}

	pub async fn right_click(&self, selector: &str) -> Result<()> {
		info!(selector, "right clicking");
		Ok(self.page()?.right_click(selector).await?)
	}

	pub async fn hover(&self, selector: &str) -> Result<()> {
		debug!(selector, "hovering");
		Ok(self.page()?.hover(selector).await?)
	}

	pub async fn fill(&self, selector: &str, text: &str) -> Result<()> {
		info!(selector, "filling text");
		Ok(self.page()?.fill(selector, text).await?)
	}

	pub async fn select_option(&self, selector: &str, value: &str) -> Result<()> {
		info!(selector, value, "selecting option");
		Ok(self.page()?.select_option(selector, value).await?)
	}

	/// Text content of the first match; empty string when the element has
	/// none.
	pub async fn text(&self, selector: &str) -> Result<String> {
		Ok(self.page()?.text_content(selector).await?.unwrap_or_default())
	}

	pub async fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>> {
		Ok(self.page()?.get_attribute(selector, name).await?)
	}

	pub async fn is_visible(&self, selector: &str) -> Result<bool> {
		Ok(self.page()?.is_visible(selector).await?)
	}

	pub async fn is_enabled(&self, selector: &str) -> Result<bool> {
		Ok(self.page()?.is_enabled(selector).await?)
	}

	pub async fn is_checked(&self, selector: &str) -> Result<bool> {
		Ok(self.page()?.is_checked(selector).await?)
	}

	/// Waits for the selector to become visible.
	pub async fn wait_for(&self, selector: &str) -> Result<()> {
		debug!(selector, "waiting for element");
		Ok(self
			.page()?
			.wait_for_selector(selector, WaitState::Visible, None)
			.await?)
	}

	/// Waits for the selector to disappear.
	pub async fn wait_for_hidden(&self, selector: &str) -> Result<()> {
		debug!(selector, "waiting for element to hide");
		Ok(self
			.page()?
			.wait_for_selector(selector, WaitState::Hidden, None)
			.await?)
	}

	pub async fn set_viewport_size(&self, width: u32, height: u32) -> Result<()> {
		debug!(width, height, "setting viewport size");
		Ok(self.page()?.set_viewport_size(width, height).await?)
	}

	pub async fn evaluate(&self, expression: &str) -> Result<serde_json::Value> {
		Ok(self.page()?.evaluate(expression).await?)
	}

	/// Saves a page screenshot as `./screenshots/<name>.png`.
	pub async fn screenshot(&self, name: &str) -> Result<()> {
		std::fs::create_dir_all(SCREENSHOT_DIR)?;
		let path = Path::new(SCREENSHOT_DIR).join(format!("{name}.png"));
		info!(path = %path.display(), "taking screenshot");
		Ok(self.page()?.screenshot(&path).await?)
	}
}

#[cfg(test)]
mod tests {
	use uitest_engine::BrowserKind;

	use super::*;

	fn interactions() -> Interactions {
		let settings = Arc::new(Settings {
			base_url: "https://app.example.com/".to_string(),
			..Settings::default()
		});
		let driver = DriverContext::new(BrowserKind::Chromium, "t", 1000);
		Interactions::new(driver, settings)
	}

	#[test]
	fn relative_paths_resolve_against_base_url() {
		let ui = interactions();
		assert_eq!(ui.resolve_url("/login"), "https://app.example.com/login");
		assert_eq!(ui.resolve_url("login"), "https://app.example.com/login");
	}

	#[test]
	fn absolute_urls_pass_through() {
		let ui = interactions();
		assert_eq!(ui.resolve_url("https://other.example.com/x"), "https://other.example.com/x");
		assert_eq!(ui.resolve_url("data:text/html,<p>hi</p>"), "data:text/html,<p>hi</p>");
	}

	#[tokio::test]
	async fn operations_without_a_page_are_uninitialized_errors() {
		let ui = interactions();
		assert!(matches!(
			ui.click("#go").await,
			Err(crate::error::Error::Uninitialized { resource: "page" })
		));
	}
}
