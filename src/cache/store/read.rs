/* src/cache/store/read.rs */

use std::collections::HashMap;
use std::sync::Arc;

use super::super::{CacheKey, Entry};
use super::ResolutionCache;
use crate::SameSite;

impl ResolutionCache {
	/// Gets a cached value by key. This is a wait-free operation.
	pub fn get(&self, key: &CacheKey) -> Option<Arc<SameSite>> {
		let snapshot = self.inner.load();
		snapshot.get(key).map(|entry| Arc::clone(&entry.value))
	}

	/// Gets the full entry (value + metadata) by key.
	pub fn get_entry(&self, key: &CacheKey) -> Option<Entry> {
		let snapshot = self.inner.load();
		snapshot.get(key).cloned()
	}

	/// Returns an atomic snapshot of all entries.
	pub fn snapshot(&self) -> Arc<HashMap<CacheKey, Entry>> {
		self.inner.load_full()
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		let snapshot = self.inner.load();
		snapshot.len()
	}

	/// Returns true if the cache is empty.
	pub fn is_empty(&self) -> bool {
		let snapshot = self.inner.load();
		snapshot.is_empty()
	}
}
