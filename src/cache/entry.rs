/* src/cache/entry.rs */

use std::sync::Arc;

use super::Meta;
use crate::SameSite;

/// A cached resolution: the value plus how it was obtained.
#[derive(Debug, Clone)]
pub struct Entry {
	/// The resolved value, shared with every reader.
	pub value: Arc<SameSite>,
	/// Metadata about this entry.
	pub meta: Meta,
}
