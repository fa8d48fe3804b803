//! Integration tests for the browser/context cache.

use std::sync::Arc;

use uitest::testing::MockEngine;
use uitest::{BrowserFactory, BrowserKind, Error, Settings};

fn factory_with(engine: Arc<MockEngine>) -> BrowserFactory {
	BrowserFactory::new(engine, Arc::new(Settings::default()))
}

#[tokio::test]
async fn same_kind_and_name_reuse_the_same_browser() {
	let engine = MockEngine::new();
	let factory = factory_with(engine.clone());

	let first = factory
		.acquire_browser(BrowserKind::Chromium, "checkout")
		.await
		.unwrap();
	let second = factory
		.acquire_browser(BrowserKind::Chromium, "checkout")
		.await
		.unwrap();

	assert!(Arc::ptr_eq(&first, &second));
	assert_eq!(engine.launch_count(), 1);
}

#[tokio::test]
async fn different_keys_get_distinct_browsers() {
	let engine = MockEngine::new();
	let factory = factory_with(engine.clone());

	let a = factory
		.acquire_browser(BrowserKind::Chromium, "checkout")
		.await
		.unwrap();
	let b = factory
		.acquire_browser(BrowserKind::Chromium, "search")
		.await
		.unwrap();
	let c = factory
		.acquire_browser(BrowserKind::Firefox, "checkout")
		.await
		.unwrap();

	assert!(!Arc::ptr_eq(&a, &b));
	assert!(!Arc::ptr_eq(&a, &c));
	assert_eq!(engine.launch_count(), 3);
}

#[tokio::test]
async fn close_all_empties_the_cache_and_forces_relaunch() {
	let engine = MockEngine::new();
	let factory = factory_with(engine.clone());

	let before = factory
		.acquire_browser(BrowserKind::Chromium, "checkout")
		.await
		.unwrap();
	let context = factory.acquire_context(&before, "checkout").await.unwrap();
	assert_eq!(factory.cached_browsers(), 1);
	assert_eq!(factory.cached_contexts(), 1);

	factory.close_all().await;
	assert_eq!(factory.cached_browsers(), 0);
	assert_eq!(factory.cached_contexts(), 0);
	drop(context);

	let after = factory
		.acquire_browser(BrowserKind::Chromium, "checkout")
		.await
		.unwrap();
	assert!(!Arc::ptr_eq(&before, &after));
	assert_eq!(engine.launch_count(), 2);
}

#[tokio::test]
async fn context_key_ignores_the_browser_instance() {
	// The context cache is keyed by (kind, name) only: passing a different
	// browser instance of the same kind returns the already-cached context.
	let engine = MockEngine::new();
	let factory = factory_with(engine.clone());

	let first = factory
		.acquire_browser(BrowserKind::Chromium, "profile")
		.await
		.unwrap();
	let cached = factory.acquire_context(&first, "profile").await.unwrap();

	let other = factory
		.acquire_browser(BrowserKind::Chromium, "other-test")
		.await
		.unwrap();
	let shared = factory.acquire_context(&other, "profile").await.unwrap();

	assert!(Arc::ptr_eq(&cached, &shared));
	assert_eq!(engine.browsers()[0].contexts().len(), 1);
	assert!(engine.browsers()[1].contexts().is_empty());
}

#[tokio::test]
async fn unsupported_kind_fails_without_cache_mutation() {
	let engine = MockEngine::new();
	let factory = factory_with(engine.clone());

	// Discard the Ok handle: `Arc<dyn Browser>` has no Debug impl.
	let err = factory
		.acquire_browser(BrowserKind::Edge, "checkout")
		.await
		.map(|_| ())
		.unwrap_err();

	assert!(matches!(err, Error::UnsupportedKind(ref kind) if kind == "msedge"));
	assert_eq!(factory.cached_browsers(), 0);
	assert_eq!(engine.launch_count(), 0);
}

#[tokio::test]
async fn launch_failure_propagates_and_caches_nothing() {
	let engine = MockEngine::new();
	engine.fail_launches();
	let factory = factory_with(engine.clone());

	let err = factory
		.acquire_browser(BrowserKind::Chromium, "checkout")
		.await
		.map(|_| ())
		.unwrap_err();

	assert!(matches!(err, Error::Engine(_)));
	assert_eq!(factory.cached_browsers(), 0);
}

#[tokio::test]
async fn teardown_failure_does_not_stop_close_all() {
	let engine = MockEngine::new();
	let factory = factory_with(engine.clone());

	let browser = factory
		.acquire_browser(BrowserKind::Chromium, "a")
		.await
		.unwrap();
	factory.acquire_context(&browser, "a").await.unwrap();
	factory.acquire_context(&browser, "b").await.unwrap();

	// Poison one cached context; close_all must still close the rest and
	// end with empty maps.
	engine.browsers()[0].contexts()[0].fail_on_close();

	factory.close_all().await;

	assert_eq!(factory.cached_browsers(), 0);
	assert_eq!(factory.cached_contexts(), 0);
	assert!(engine.browsers()[0].is_closed());
	assert!(engine.browsers()[0].contexts()[1].is_closed());
}

#[tokio::test]
async fn new_pages_get_the_configured_timeouts() {
	let engine = MockEngine::new();
	let settings = Arc::new(Settings {
		timeout_ms: 5_000,
		..Settings::default()
	});
	let factory = BrowserFactory::new(engine.clone(), settings);

	let browser = factory
		.acquire_browser(BrowserKind::Chromium, "t")
		.await
		.unwrap();
	let context = factory.acquire_context(&browser, "t").await.unwrap();
	let _page = factory.new_page(&context).await.unwrap();

	let page = &engine.browsers()[0].contexts()[0].pages()[0];
	assert_eq!(page.default_timeout(), 5_000);
	assert_eq!(page.navigation_timeout(), 5_000);
}

#[tokio::test]
async fn pages_are_never_cached() {
	let engine = MockEngine::new();
	let factory = factory_with(engine.clone());

	let browser = factory
		.acquire_browser(BrowserKind::Chromium, "t")
		.await
		.unwrap();
	let context = factory.acquire_context(&browser, "t").await.unwrap();
	let p1 = factory.new_page(&context).await.unwrap();
	let p2 = factory.new_page(&context).await.unwrap();

	assert!(!Arc::ptr_eq(&p1, &p2));
	assert_eq!(engine.browsers()[0].contexts()[0].pages().len(), 2);
}

#[tokio::test]
async fn headless_and_incognito_flow_into_launch_options() {
	let engine = MockEngine::new();
	let settings = Arc::new(Settings {
		headless: false,
		incognito: true,
		..Settings::default()
	});
	let factory = BrowserFactory::new(engine.clone(), settings);

	factory
		.acquire_browser(BrowserKind::Chromium, "t")
		.await
		.unwrap();

	let options = engine.launch_options(0).unwrap();
	assert_eq!(options.headless, Some(false));
	let args = options.args.unwrap();
	assert!(args.iter().any(|a| a == "--incognito"));
}

#[tokio::test]
async fn contexts_are_created_with_fixed_defaults() {
	let engine = MockEngine::new();
	let factory = factory_with(engine.clone());

	let browser = factory
		.acquire_browser(BrowserKind::Firefox, "t")
		.await
		.unwrap();
	factory.acquire_context(&browser, "t").await.unwrap();

	let context = &engine.browsers()[0].contexts()[0];
	assert_eq!(context.options().ignore_https_errors, Some(true));
	assert_eq!(context.options().java_script_enabled, Some(true));
	assert_eq!(context.options().bypass_csp, Some(true));
}
