/* src/config/properties.rs */

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::collections::btree_map;

use super::ParameterSource;

/// Immutable, key-ordered configuration map.
///
/// Built once from a loader (or collected from pairs) and never mutated
/// afterwards, so it can be shared across threads without synchronization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
	entries: BTreeMap<String, String>,
}

impl Properties {
	/// Creates an empty map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Gets a value by key.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries.get(key).map(String::as_str)
	}

	/// Returns true if the key is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if there are no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over entries in key order.
	pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
		self.entries.iter()
	}
}

impl<K, V> FromIterator<(K, V)> for Properties
where
	K: Into<String>,
	V: Into<String>,
{
	/// Later pairs replace earlier ones with the same key.
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			entries: iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}

impl<'a> IntoIterator for &'a Properties {
	type Item = (&'a String, &'a String);
	type IntoIter = btree_map::Iter<'a, String, String>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

impl ParameterSource for Properties {
	fn get_parameter(&self, key: &str) -> Option<Cow<'_, str>> {
		self.get(key).map(Cow::Borrowed)
	}
}
