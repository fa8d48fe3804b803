//! End-to-end scaffolding walkthrough: a login page object plus BDD-style
//! steps, driven through a full test session against the mock engine.

use std::sync::Arc;

use uitest::testing::{ClickEffect, MockEngine};
use uitest::{BrowserFactory, Error, Interactions, Result, Settings, StepRunner, TestSession};

const USERNAME_INPUT: &str = "input[name=\"username\"]";
const PASSWORD_INPUT: &str = "input[name=\"password\"]";
const LOGIN_BUTTON: &str = "button[type=\"submit\"]";
const ERROR_MESSAGE: &str = ".error-message";

/// Login page object. Holds the interaction capability by reference.
struct LoginPage<'a> {
	ui: &'a Interactions,
}

impl<'a> LoginPage<'a> {
	fn new(ui: &'a Interactions) -> Self {
		Self { ui }
	}

	async fn open(&self) -> Result<()> {
		self.ui.navigate("/login").await?;
		self.ui.wait_for(USERNAME_INPUT).await
	}

	async fn login(&self, username: &str, password: &str) -> Result<()> {
		self.ui.fill(USERNAME_INPUT, username).await?;
		self.ui.fill(PASSWORD_INPUT, password).await?;
		self.ui.click(LOGIN_BUTTON).await
	}

	async fn error_message(&self) -> Result<String> {
		self.ui.text(ERROR_MESSAGE).await
	}

	async fn is_error_displayed(&self) -> Result<bool> {
		self.ui.is_visible(ERROR_MESSAGE).await
	}
}

/// BDD step definitions for the login flow.
struct LoginSteps<'a> {
	ui: &'a Interactions,
	page: LoginPage<'a>,
	runner: StepRunner,
}

impl<'a> LoginSteps<'a> {
	fn new(ui: &'a Interactions) -> Self {
		Self {
			ui,
			page: LoginPage::new(ui),
			runner: StepRunner::new(),
		}
	}

	async fn given_user_is_on_login_page(&self) -> Result<()> {
		self.runner
			.run_step("user navigates to login page", self.page.open())
			.await
	}

	async fn when_user_enters_credentials(&self, username: &str, password: &str) -> Result<()> {
		self.runner
			.run_step(
				"user enters credentials",
				self.page.login(username, password),
			)
			.await
	}

	async fn then_user_is_logged_in(&self) -> Result<()> {
		self.runner
			.run_step("user lands on the dashboard", async {
				let url = self.ui.current_url()?;
				self.runner
					.ensure_contains(&url, "/dashboard", "should be redirected to dashboard")
			})
			.await
	}

	async fn then_user_sees_error(&self, expected: &str) -> Result<()> {
		self.runner
			.run_step("user sees an error message", async {
				let displayed = self.page.is_error_displayed().await?;
				self.runner.ensure(displayed, "error message should be displayed")?;
				let message = self.page.error_message().await?;
				self.runner
					.ensure_contains(&message, expected, "error message text")
			})
			.await
	}
}

fn login_fixture() -> (Arc<MockEngine>, Arc<BrowserFactory>) {
	let engine = MockEngine::new();
	let dom = engine.dom();
	dom.show(USERNAME_INPUT);
	dom.show(PASSWORD_INPUT);
	dom.show(LOGIN_BUTTON);

	let settings = Arc::new(Settings::default());
	let factory = Arc::new(BrowserFactory::new(engine.clone(), settings));
	(engine, factory)
}

#[tokio::test]
async fn valid_credentials_reach_the_dashboard() -> anyhow::Result<()> {
	let (engine, factory) = login_fixture();
	engine.dom().on_click(
		LOGIN_BUTTON,
		ClickEffect {
			goto: Some("http://localhost:3000/dashboard".to_string()),
			..ClickEffect::default()
		},
	);

	let session = TestSession::start(factory.clone(), "valid login").await?;
	let steps = LoginSteps::new(session.interactions());

	steps.given_user_is_on_login_page().await?;
	steps
		.when_user_enters_credentials("testuser@example.com", "password123")
		.await?;
	steps.then_user_is_logged_in().await?;

	// The scaffolding drove the page exactly as the steps describe.
	let page = &engine.browsers()[0].contexts()[0].pages()[0];
	assert_eq!(
		page.fills(),
		vec![
			(USERNAME_INPUT.to_string(), "testuser@example.com".to_string()),
			(PASSWORD_INPUT.to_string(), "password123".to_string()),
		]
	);
	assert_eq!(page.clicks(), vec![LOGIN_BUTTON.to_string()]);
	assert_eq!(page.navigations(), vec!["http://localhost:3000/login".to_string()]);

	session.finish().await;
	factory.close_all().await;
	Ok(())
}

#[tokio::test]
async fn invalid_credentials_show_an_error() -> anyhow::Result<()> {
	let (engine, factory) = login_fixture();
	engine.dom().on_click(
		LOGIN_BUTTON,
		ClickEffect {
			show: vec![ERROR_MESSAGE.to_string()],
			set_text: vec![(ERROR_MESSAGE.to_string(), "Invalid credentials".to_string())],
			..ClickEffect::default()
		},
	);

	let session = TestSession::start(factory.clone(), "invalid login").await?;
	let steps = LoginSteps::new(session.interactions());

	steps.given_user_is_on_login_page().await?;
	steps
		.when_user_enters_credentials("invalid@example.com", "wrongpassword")
		.await?;
	steps.then_user_sees_error("Invalid credentials").await?;

	session.finish().await;
	factory.close_all().await;
	Ok(())
}

#[tokio::test]
async fn missing_error_message_fails_the_scenario() -> anyhow::Result<()> {
	// No click effect registered: the error message never appears, so the
	// Then-step's assertion must terminate the scenario.
	let (_engine, factory) = login_fixture();

	let session = TestSession::start(factory.clone(), "assertion failure").await?;
	let steps = LoginSteps::new(session.interactions());

	steps.given_user_is_on_login_page().await?;
	steps
		.when_user_enters_credentials("someone@example.com", "pw")
		.await?;
	let err = steps
		.then_user_sees_error("Invalid credentials")
		.await
		.unwrap_err();
	assert!(matches!(err, Error::Assertion(_)));

	session.finish().await;
	factory.close_all().await;
	Ok(())
}

#[tokio::test]
async fn session_teardown_closes_page_and_context_but_keeps_browser() -> anyhow::Result<()> {
	let (engine, factory) = login_fixture();

	let session = TestSession::start(factory.clone(), "teardown").await?;
	session.finish().await;

	let browser = &engine.browsers()[0];
	let context = &browser.contexts()[0];
	assert!(context.pages()[0].is_closed());
	assert!(context.is_closed());
	assert!(!browser.is_closed());
	assert_eq!(factory.cached_browsers(), 1);

	factory.close_all().await;
	assert!(browser.is_closed());
	assert_eq!(factory.cached_browsers(), 0);
	Ok(())
}
