/* src/resolver/error.rs */

/// Failure reported by an application cookie handler.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
	/// The configuration backend could not be reached.
	#[error("configuration backend unavailable: {0}")]
	Unavailable(String),

	/// Generic failure with a message.
	#[error("{0}")]
	Custom(String),

	/// Any other error raised by the handler.
	#[error(transparent)]
	Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}
