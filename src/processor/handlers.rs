/* src/processor/handlers.rs */

use std::error::Error;
use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::logging::LogHandler;
use crate::resolver::CookieHandler;

/// Installed cookie handler and log handler.
///
/// Each slot is replaced with a single atomic pointer swap; calls already in
/// flight keep the handler they loaded, later calls see the new one.
#[derive(Default)]
pub struct Handlers {
	cookie: ArcSwapOption<Box<dyn CookieHandler>>,
	log: ArcSwapOption<Box<dyn LogHandler>>,
}

impl Handlers {
	/// Creates empty slots: no resolver (every cookie gets the default) and no logging.
	pub fn new() -> Self {
		Self::default()
	}

	/// Installs the cookie handler, replacing any previous one.
	pub fn set_cookie_handler(&self, handler: impl CookieHandler + 'static) {
		let handler: Box<dyn CookieHandler> = Box::new(handler);
		self.debug(&format!("Application cookie handler set to {}", handler.name()));
		self.cookie.store(Some(Arc::new(handler)));
	}

	/// Removes the cookie handler.
	pub fn clear_cookie_handler(&self) {
		self.cookie.store(None);
	}

	/// Installs the log handler, replacing any previous one.
	pub fn set_log_handler(&self, handler: impl LogHandler + 'static) {
		let handler: Box<dyn LogHandler> = Box::new(handler);
		let name = handler.name().to_string();
		self.log.store(Some(Arc::new(handler)));
		self.debug(&format!("Application log handler set to {}", name));
	}

	/// Removes the log handler.
	pub fn clear_log_handler(&self) {
		self.log.store(None);
	}

	/// Returns the currently installed cookie handler.
	pub fn cookie_handler(&self) -> Option<Arc<Box<dyn CookieHandler>>> {
		self.cookie.load_full()
	}

	/// Returns true if a cookie handler is installed.
	pub fn has_cookie_handler(&self) -> bool {
		self.cookie.load().is_some()
	}

	/// Returns true if a log handler is installed.
	pub fn has_log_handler(&self) -> bool {
		self.log.load().is_some()
	}

	pub(crate) fn debug(&self, msg: &str) {
		if let Some(log) = &*self.log.load() {
			log.debug(msg);
		}
	}

	pub(crate) fn error(&self, msg: &str, err: Option<&(dyn Error + 'static)>) {
		if let Some(log) = &*self.log.load() {
			log.error(msg, err);
		}
	}
}

impl std::fmt::Debug for Handlers {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let cookie = self.cookie.load();
		f.debug_struct("Handlers")
			.field("cookie", &cookie.as_ref().map(|h| h.name().to_string()))
			.field("log", &self.has_log_handler())
			.finish()
	}
}
