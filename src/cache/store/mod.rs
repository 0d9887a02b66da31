/* src/cache/store/mod.rs */

mod read;
mod write;

use std::collections::HashMap;

use arc_swap::ArcSwap;

use super::{CacheKey, Entry};

/// Thread-safe, append-only resolution cache.
///
/// Uses RCU (Read-Copy-Update) for lock-free reads and atomic publication.
/// A key is published at most once: the first writer wins and later writers
/// receive the value already in place.
pub struct ResolutionCache {
	pub(crate) inner: ArcSwap<HashMap<CacheKey, Entry>>,
}

impl ResolutionCache {
	/// Creates a new empty cache.
	pub fn new() -> Self {
		Self {
			inner: ArcSwap::from_pointee(HashMap::new()),
		}
	}
}

impl Default for ResolutionCache {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for ResolutionCache {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ResolutionCache")
			.field("len", &self.len())
			.finish_non_exhaustive()
	}
}
