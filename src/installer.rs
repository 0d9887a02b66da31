/* src/installer.rs */

//!
//! Startup hook that installs the application handlers.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::{INSTALL_FLAG_KEY, ParameterSource};
use crate::logging::LogHandler;
use crate::processor::Handlers;
use crate::resolver::LiveResolver;

/// Role of this process in a multi-node deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
	/// The node (or tenant) responsible for process-wide setup.
	Primary,
	Secondary,
}

/// What [`Installer::install`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
	/// Application cookie handler (and log handler, if any) installed.
	Installed,
	/// The install flag is missing or false.
	Disabled,
	/// Not the primary node; nothing to do.
	NotPrimary,
	/// The hook already ran.
	AlreadyRan,
}

/// One-shot installer for the application handlers.
///
/// When the configuration sets `cookies.SameSite.install.application.handler`
/// to true, installs a [`LiveResolver`] over that configuration together with
/// the installer's log handler.
pub struct Installer {
	log_handler: Option<Arc<dyn LogHandler>>,
	ran: AtomicBool,
}

impl Installer {
	/// Creates an installer with the default log handler for enabled features.
	pub fn new() -> Self {
		Self {
			log_handler: default_log_handler(),
			ran: AtomicBool::new(false),
		}
	}

	/// Uses `handler` as the log handler to install.
	pub fn log_handler(mut self, handler: impl LogHandler + 'static) -> Self {
		self.log_handler = Some(Arc::new(handler));
		self
	}

	/// Installs no log handler.
	pub fn without_log_handler(mut self) -> Self {
		self.log_handler = None;
		self
	}

	/// Runs the hook. Only the first call on a given installer has any effect.
	pub fn install<S>(&self, handlers: &Handlers, role: NodeRole, config: S) -> InstallOutcome
	where
		S: ParameterSource + 'static,
	{
		if self.ran.swap(true, Ordering::SeqCst) {
			return InstallOutcome::AlreadyRan;
		}
		if role != NodeRole::Primary {
			return InstallOutcome::NotPrimary;
		}
		if !config.get_bool(INSTALL_FLAG_KEY, false) {
			return InstallOutcome::Disabled;
		}

		if let Some(log) = &self.log_handler {
			handlers.set_log_handler(Arc::clone(log));
		}
		handlers.set_cookie_handler(LiveResolver::new(config));
		InstallOutcome::Installed
	}

	/// Returns true once [`install`](Self::install) has been called.
	pub fn has_run(&self) -> bool {
		self.ran.load(Ordering::SeqCst)
	}
}

impl Default for Installer {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for Installer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Installer")
			.field("log_handler", &self.log_handler.as_ref().map(|h| h.name().to_string()))
			.field("ran", &self.has_run())
			.finish()
	}
}

#[cfg(feature = "logging")]
fn default_log_handler() -> Option<Arc<dyn LogHandler>> {
	Some(Arc::new(crate::logging::LogCrateHandler))
}

#[cfg(all(not(feature = "logging"), feature = "tracing"))]
fn default_log_handler() -> Option<Arc<dyn LogHandler>> {
	Some(Arc::new(crate::logging::TracingHandler))
}

#[cfg(not(any(feature = "logging", feature = "tracing")))]
fn default_log_handler() -> Option<Arc<dyn LogHandler>> {
	None
}
