/* src/loader/error.rs */

/// Core error type for the loader module.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
	/// Parsing error from format implementation.
	#[error("parse error at line {line}: {message}")]
	Parse { line: usize, message: String },

	/// Resource not found.
	#[error("not found")]
	NotFound,

	/// IO error from source.
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),

	/// Sandbox violation in file system source.
	#[cfg(feature = "fs")]
	#[error("sandbox violation")]
	SandboxViolation,
}
