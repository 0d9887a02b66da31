/* src/loader/source/file.rs */

use super::super::{LoadError, Source};
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// A file system source backed by tokio::fs, sandboxed to a root directory.
pub struct FileSource {
	root: PathBuf,
}

impl FileSource {
	/// Create a new FileSource rooted at the given path.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	/// Returns the root directory.
	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Resolves the path safely, ensuring it is within the root directory.
	async fn resolve_secure(&self, key: &str) -> Result<PathBuf, LoadError> {
		for component in Path::new(key).components() {
			if matches!(component, Component::ParentDir) {
				return Err(LoadError::SandboxViolation);
			}
		}

		let canonical_root = fs::canonicalize(&self.root).await.map_err(LoadError::Io)?;

		match fs::canonicalize(self.root.join(key)).await {
			Ok(canonical_path) => {
				if canonical_path.starts_with(&canonical_root) {
					Ok(canonical_path)
				} else {
					Err(LoadError::SandboxViolation)
				}
			}
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(LoadError::NotFound),
			Err(e) => Err(LoadError::Io(e)),
		}
	}
}

#[async_trait]
impl Source for FileSource {
	async fn read(&self, key: &str) -> Result<Vec<u8>, LoadError> {
		let path = self.resolve_secure(key).await?;
		fs::read(path).await.map_err(LoadError::Io)
	}
}
