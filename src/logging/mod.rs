/* src/logging/mod.rs */

//!
//! Pluggable log sink for the cookie processor.
//!
//! The processor never talks to a logging framework directly. It forwards
//! records to whichever [`LogHandler`] is installed, and drops them when
//! none is.

#[cfg(feature = "logging")]
mod log_crate;
#[cfg(feature = "tracing")]
mod tracing_handler;

#[cfg(feature = "logging")]
pub use log_crate::LogCrateHandler;
#[cfg(feature = "tracing")]
pub use tracing_handler::TracingHandler;

use std::error::Error;

/// Target (logger name) used for every record this crate emits.
pub const LOG_TARGET: &str = "cookies.samesite";

/// Sink for processor diagnostics.
pub trait LogHandler: Send + Sync {
	fn debug(&self, msg: &str);

	fn info(&self, msg: &str);

	fn warn(&self, msg: &str);

	/// Logs a failure, with its cause when one is available.
	fn error(&self, msg: &str, err: Option<&(dyn Error + 'static)>);

	/// Human-readable name, used in installation logs.
	fn name(&self) -> &str {
		std::any::type_name::<Self>()
	}
}

impl<L> LogHandler for std::sync::Arc<L>
where
	L: LogHandler + ?Sized,
{
	fn debug(&self, msg: &str) {
		(**self).debug(msg);
	}

	fn info(&self, msg: &str) {
		(**self).info(msg);
	}

	fn warn(&self, msg: &str) {
		(**self).warn(msg);
	}

	fn error(&self, msg: &str, err: Option<&(dyn Error + 'static)>) {
		(**self).error(msg, err);
	}

	fn name(&self) -> &str {
		(**self).name()
	}
}
