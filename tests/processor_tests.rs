/* tests/processor_tests.rs */

use cookie::Cookie;
use samesite::config::{ParameterSource, Properties};
use samesite::logging::LogHandler;
use samesite::resolver::HandlerError;
use samesite::{CachedResolver, CookieHandler, CookieIdentity, CookieProcessor, Handlers, LiveResolver, SameSite};
use std::borrow::Cow;
use std::error::Error;
use std::sync::{Arc, Mutex};

/// Records every message it receives, keyed by level.
#[derive(Clone, Default)]
struct RecordingLog {
	records: Arc<Mutex<Vec<(&'static str, String)>>>,
}

impl RecordingLog {
	fn records(&self, level: &str) -> Vec<String> {
		self.records
			.lock()
			.unwrap()
			.iter()
			.filter(|(l, _)| *l == level)
			.map(|(_, m)| m.clone())
			.collect()
	}

	fn push(&self, level: &'static str, msg: String) {
		self.records.lock().unwrap().push((level, msg));
	}
}

impl LogHandler for RecordingLog {
	fn debug(&self, msg: &str) {
		self.push("debug", msg.to_string());
	}

	fn info(&self, msg: &str) {
		self.push("info", msg.to_string());
	}

	fn warn(&self, msg: &str) {
		self.push("warn", msg.to_string());
	}

	fn error(&self, msg: &str, err: Option<&(dyn Error + 'static)>) {
		let cause = err.map(|e| e.to_string()).unwrap_or_default();
		self.push("error", format!("{} | {}", msg, cause));
	}
}

struct FailingHandler;

impl CookieHandler for FailingHandler {
	fn same_site_for(&self, _cookie: &CookieIdentity<'_>) -> Result<SameSite, HandlerError> {
		Err(HandlerError::Unavailable("config service down".to_string()))
	}
}

fn always_strict(_cookie: &CookieIdentity<'_>) -> Result<SameSite, HandlerError> {
	Ok(SameSite::Strict)
}

fn panicking(_cookie: &CookieIdentity<'_>) -> Result<SameSite, HandlerError> {
	let empty: Vec<&str> = Vec::new();
	Ok(SameSite::Custom(empty[0].to_string()))
}

/// Live backend whose lock was poisoned by another thread.
struct PoisonedSource;

impl ParameterSource for PoisonedSource {
	fn get_parameter(&self, _key: &str) -> Option<Cow<'_, str>> {
		panic!("config backend lock poisoned")
	}
}

fn processor_with(pairs: &[(&str, &str)]) -> CookieProcessor {
	let handlers = Arc::new(Handlers::new());
	let props: Properties = pairs.iter().map(|&(k, v)| (k, v)).collect();
	handlers.set_cookie_handler(CachedResolver::new(props));
	CookieProcessor::new(handlers)
}

const SID: CookieIdentity<'static> = CookieIdentity::new("example.com", "/", "sid");

#[test]
fn test_global_value_appended() {
	let processor = processor_with(&[("cookies.SameSite", "Lax")]);
	assert_eq!(
		processor.augment(&SID, "sid=abc123".to_string()),
		"sid=abc123; SameSite=Lax"
	);
}

#[test]
fn test_specific_value_beats_global() {
	let processor = processor_with(&[
		("cookies.example.com./.sid.SameSite", "Strict"),
		("cookies.SameSite", "Lax"),
	]);
	assert_eq!(
		processor.augment(&SID, "sid=abc123".to_string()),
		"sid=abc123; SameSite=Strict"
	);
}

#[test]
fn test_existing_attribute_passes_through() {
	let processor = CookieProcessor::default();
	for header in [
		"sid=abc123; SameSite=None",
		"sid=abc123; samesite=strict",
		"sid=abc123;SAMESITE=",
		"sid=abc123; SameSiteX=whatever; Path=/",
	] {
		assert_eq!(processor.augment(&SID, header.to_string()), header);
	}
}

#[test]
fn test_existing_attribute_skips_resolver() {
	let handlers = Arc::new(Handlers::new());
	handlers.set_cookie_handler(FailingHandler);
	let processor = CookieProcessor::new(Arc::clone(&handlers));

	let log = RecordingLog::default();
	handlers.set_log_handler(log.clone());

	let header = "sid=abc123; SameSite=Lax";
	assert_eq!(processor.augment(&SID, header.to_string()), header);
	assert!(log.records("error").is_empty());
	assert!(
		log.records("debug")
			.iter()
			.any(|m| m == "Cookie example.com:/:sid already got SameSite setting")
	);
}

#[test]
fn test_no_handler_uses_none() {
	let processor = CookieProcessor::new(Arc::new(Handlers::new()));
	assert_eq!(
		processor.augment(&SID, "sid=abc123".to_string()),
		"sid=abc123; SameSite=None"
	);
}

#[test]
fn test_failing_handler_returns_base_header() {
	let handlers = Arc::new(Handlers::new());
	let log = RecordingLog::default();
	handlers.set_log_handler(log.clone());
	handlers.set_cookie_handler(FailingHandler);
	let processor = CookieProcessor::new(handlers);

	assert_eq!(processor.augment(&SID, "sid=abc123".to_string()), "sid=abc123");

	let errors = log.records("error");
	assert_eq!(errors.len(), 1);
	assert!(errors[0].contains("example.com:/:sid"));
	assert!(errors[0].contains("config service down"));
}

#[test]
fn test_function_handler_and_swap() {
	let handlers = Arc::new(Handlers::new());
	let processor = CookieProcessor::new(Arc::clone(&handlers));

	handlers.set_cookie_handler(always_strict);
	assert_eq!(
		processor.augment(&SID, "sid=1".to_string()),
		"sid=1; SameSite=Strict"
	);

	handlers.set_cookie_handler(CachedResolver::new(Properties::new()).with_default(SameSite::Lax));
	assert_eq!(processor.augment(&SID, "sid=1".to_string()), "sid=1; SameSite=Lax");

	handlers.clear_cookie_handler();
	assert!(!handlers.has_cookie_handler());
	assert_eq!(processor.augment(&SID, "sid=1".to_string()), "sid=1; SameSite=None");
}

#[test]
fn test_install_is_logged() {
	let handlers = Handlers::new();
	let log = RecordingLog::default();
	handlers.set_log_handler(log.clone());
	handlers.set_cookie_handler(FailingHandler);

	let debug = log.records("debug");
	assert!(debug.iter().any(|m| m.starts_with("Application log handler set to")));
	assert!(
		debug
			.iter()
			.any(|m| m.starts_with("Application cookie handler set to") && m.contains("FailingHandler"))
	);
}

#[test]
fn test_generate_header_from_cookie() {
	let processor = processor_with(&[("cookies.example.com./.sid.SameSite", "Strict")]);

	let cookie = Cookie::build(("sid", "abc123"))
		.domain("example.com")
		.path("/")
		.build();
	let header = processor.generate_header(&cookie);

	assert!(header.starts_with("sid=abc123"));
	assert!(header.ends_with("; SameSite=Strict"));
	assert_eq!(header.matches("SameSite").count(), 1);
}

#[test]
fn test_generate_header_keeps_host_same_site() {
	let processor = processor_with(&[("cookies.SameSite", "Strict")]);

	let cookie = Cookie::build(("sid", "abc123"))
		.path("/")
		.same_site(cookie::SameSite::Lax)
		.build();
	let header = processor.generate_header(&cookie);

	assert!(header.contains("SameSite=Lax"));
	assert_eq!(header.matches("SameSite").count(), 1);
}

#[test]
fn test_concurrent_augment() {
	let processor = processor_with(&[("cookies.SameSite", "Lax")]);

	let handles: Vec<_> = (0..8)
		.map(|i| {
			let processor = processor.clone();
			std::thread::spawn(move || {
				let name = format!("c{}", i % 2);
				let id = CookieIdentity::new("example.com", "/", &name);
				processor.augment(&id, format!("{}=v", name))
			})
		})
		.collect();

	for handle in handles {
		assert!(handle.join().unwrap().ends_with("; SameSite=Lax"));
	}
}

#[test]
fn test_panicking_handler_returns_base_header() {
	let handlers = Arc::new(Handlers::new());
	let log = RecordingLog::default();
	handlers.set_log_handler(log.clone());
	handlers.set_cookie_handler(panicking);
	let processor = CookieProcessor::new(handlers);

	assert_eq!(processor.augment(&SID, "sid=abc123".to_string()), "sid=abc123");

	let errors = log.records("error");
	assert_eq!(errors.len(), 1);
	assert!(errors[0].contains("example.com:/:sid"));
	assert!(errors[0].contains("panicked"));
	assert!(errors[0].contains("index out of bounds"));
}

#[test]
fn test_panicking_source_returns_base_header() {
	let handlers = Arc::new(Handlers::new());
	let log = RecordingLog::default();
	handlers.set_log_handler(log.clone());
	handlers.set_cookie_handler(LiveResolver::new(PoisonedSource));
	let processor = CookieProcessor::new(Arc::clone(&handlers));

	assert_eq!(processor.augment(&SID, "sid=1".to_string()), "sid=1");
	assert!(log.records("error")[0].contains("config backend lock poisoned"));

	// The processor stays usable once a working handler is back.
	handlers.set_cookie_handler(always_strict);
	assert_eq!(processor.augment(&SID, "sid=1".to_string()), "sid=1; SameSite=Strict");
}

#[test]
fn test_configured_spelling_reaches_header() {
	let processor = processor_with(&[("cookies.SameSite", "lax")]);
	assert_eq!(processor.augment(&SID, "sid=1".to_string()), "sid=1; SameSite=lax");
}
