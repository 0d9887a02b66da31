/* src/processor/error.rs */

use thiserror::Error;

use crate::resolver::HandlerError;

/// Errors raised while augmenting a header. Never returned to callers of
/// [`CookieProcessor::augment`](super::CookieProcessor::augment).
#[derive(Debug, Error)]
pub enum ProcessError {
	#[error("SameSite pattern failed to compile: {0}")]
	Pattern(String),

	#[error("SameSite detection failed: {0}")]
	Detection(#[from] fancy_regex::Error),

	#[error("Cookie handler failed: {0}")]
	Handler(#[from] HandlerError),

	#[error("Cookie handler panicked: {0}")]
	HandlerPanicked(String),
}
