/* src/loader/impls/config_loader.rs */

use super::super::{Format, LoadError, LoadInfo, LoadResult, Source, format::PropertiesFormat};
use std::path::PathBuf;

/// Loader reading `.properties` documents from one [`Source`].
pub struct ConfigLoader {
	source: Box<dyn Source>,
	format: PropertiesFormat,
}

impl ConfigLoader {
	pub fn new(source: impl Source + 'static) -> Self {
		Self {
			source: Box::new(source),
			format: PropertiesFormat,
		}
	}

	/// Reads and parses the document stored under `path`.
	pub async fn load_file(&self, path: &str) -> LoadResult {
		let bytes = match self.source.read(path).await {
			Ok(b) => b,
			Err(LoadError::NotFound) => return LoadResult::NotFound,
			Err(e) => return LoadResult::Invalid(e),
		};

		match self.format.parse(&bytes) {
			Ok(value) => LoadResult::Ok {
				value,
				info: LoadInfo {
					path: PathBuf::from(path),
					format: self.format.extensions().first().copied().unwrap_or("unknown"),
				},
			},
			Err(e) => LoadResult::Invalid(e),
		}
	}
}
