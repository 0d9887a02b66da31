/* src/cache/store/write.rs */

use std::cell::RefCell;
use std::sync::Arc;
use std::time::Instant;

use super::super::{CacheKey, Entry, Meta};
use super::ResolutionCache;
use crate::SameSite;
use crate::resolver::Specificity;

impl ResolutionCache {
	/// Publishes a value for `key` unless one is already present.
	///
	/// Returns the value that ended up in the cache, which is the existing one
	/// when another thread got there first.
	pub fn insert(&self, key: CacheKey, value: SameSite, level: Option<Specificity>) -> Arc<SameSite> {
		if let Some(existing) = self.get(&key) {
			return existing;
		}

		let value = Arc::new(value);
		let resolved_at = Instant::now();

		// Capture the winner inside rcu; the closure may run more than once.
		let winner: RefCell<Option<Arc<SameSite>>> = RefCell::new(None);

		self.inner.rcu(|map| {
			if let Some(existing) = map.get(&key) {
				*winner.borrow_mut() = Some(Arc::clone(&existing.value));
				return Arc::clone(map);
			}
			*winner.borrow_mut() = None;
			// Entries are never removed, so the map size numbers publications.
			let entry = Entry {
				value: Arc::clone(&value),
				meta: Meta {
					resolved_at,
					sequence: map.len() as u64 + 1,
					level,
				},
			};
			let mut new_map = (**map).clone();
			new_map.insert(key.clone(), entry);
			Arc::new(new_map)
		});

		winner.into_inner().unwrap_or(value)
	}
}
