/* src/logging/log_crate.rs */

use std::error::Error;

use super::{LOG_TARGET, LogHandler};

/// Forwards records to the `log` facade under the `cookies.samesite` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogCrateHandler;

impl LogHandler for LogCrateHandler {
	fn debug(&self, msg: &str) {
		log::debug!(target: LOG_TARGET, "{}", msg);
	}

	fn info(&self, msg: &str) {
		log::info!(target: LOG_TARGET, "{}", msg);
	}

	fn warn(&self, msg: &str) {
		log::warn!(target: LOG_TARGET, "{}", msg);
	}

	fn error(&self, msg: &str, err: Option<&(dyn Error + 'static)>) {
		match err {
			Some(e) => log::error!(target: LOG_TARGET, "{}: {}", msg, e),
			None => log::error!(target: LOG_TARGET, "{}", msg),
		}
	}
}
