/* src/logging/tracing_handler.rs */

use std::error::Error;

use super::{LOG_TARGET, LogHandler};

/// Forwards records to `tracing` as events under the `cookies.samesite` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHandler;

impl LogHandler for TracingHandler {
	fn debug(&self, msg: &str) {
		tracing::debug!(target: LOG_TARGET, "{}", msg);
	}

	fn info(&self, msg: &str) {
		tracing::info!(target: LOG_TARGET, "{}", msg);
	}

	fn warn(&self, msg: &str) {
		tracing::warn!(target: LOG_TARGET, "{}", msg);
	}

	fn error(&self, msg: &str, err: Option<&(dyn Error + 'static)>) {
		match err {
			Some(e) => tracing::error!(target: LOG_TARGET, error = %e, "{}", msg),
			None => tracing::error!(target: LOG_TARGET, "{}", msg),
		}
	}
}
