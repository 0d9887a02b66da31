/* src/loader/mod.rs */

//!
//! Loading of the startup configuration.
//!
//! A [`Source`] yields raw bytes by key and a [`Format`] turns them into
//! [`Properties`]. [`ConfigLoader`] reads one key from a source and parses it
//! as `.properties`.

pub mod error;
pub mod format;
mod impls;
pub mod source;

pub use error::LoadError;
pub use impls::ConfigLoader;

#[cfg(feature = "fs")]
pub use source::FileSource;

use std::path::PathBuf;

use async_trait::async_trait;

use crate::config::Properties;

/// Where a successful load came from.
#[derive(Debug, Clone)]
pub struct LoadInfo {
	/// Key (relative path) that was read.
	pub path: PathBuf,
	/// Primary extension of the format that parsed it.
	pub format: &'static str,
}

/// Result of a loading operation.
#[derive(Debug)]
pub enum LoadResult {
	/// Successfully loaded and parsed.
	Ok { value: Properties, info: LoadInfo },
	/// Resource not found at the given key.
	NotFound,
	/// Resource exists but is invalid.
	Invalid(LoadError),
}

/// Abstract format parser that converts bytes into a key-value map.
pub trait Format: Send + Sync {
	/// List of supported extensions or identifiers.
	fn extensions(&self) -> &'static [&'static str];

	/// Parse the raw bytes into properties.
	fn parse(&self, input: &[u8]) -> Result<Properties, LoadError>;
}

/// Abstract data source that retrieves raw bytes by key.
#[async_trait]
pub trait Source: Send + Sync {
	/// Read raw data as a vector of bytes.
	///
	/// A missing resource is reported as [`LoadError::NotFound`].
	async fn read(&self, key: &str) -> Result<Vec<u8>, LoadError>;
}

/// Loads `sameSiteCookies.properties` from `dir` for the default resolver.
///
/// Absence is reported at info level and any other failure at error level;
/// both yield empty properties.
#[cfg(feature = "fs")]
pub async fn load_startup_properties(dir: impl Into<PathBuf>) -> Properties {
	use crate::config::DEFAULT_CONFIG_FILE;

	let dir = dir.into();
	let loader = ConfigLoader::new(FileSource::new(dir.clone()));

	match loader.load_file(DEFAULT_CONFIG_FILE).await {
		LoadResult::Ok { value, info } => {
			#[cfg(feature = "logging")]
			log::info!(
				target: crate::logging::LOG_TARGET,
				"SameSite Cookie Processor: Loaded {} settings from {:?}",
				value.len(),
				dir.join(&info.path)
			);
			#[cfg(not(feature = "logging"))]
			let _ = info;
			value
		}
		LoadResult::NotFound => {
			#[cfg(feature = "logging")]
			log::info!(
				target: crate::logging::LOG_TARGET,
				"No SameSite cookie config file found at {:?}",
				dir.join(DEFAULT_CONFIG_FILE)
			);
			Properties::new()
		}
		LoadResult::Invalid(e) => {
			#[cfg(feature = "logging")]
			log::error!(
				target: crate::logging::LOG_TARGET,
				"Error loading from {:?}: {}",
				dir.join(DEFAULT_CONFIG_FILE),
				e
			);
			#[cfg(not(feature = "logging"))]
			let _ = e;
			Properties::new()
		}
	}
}
