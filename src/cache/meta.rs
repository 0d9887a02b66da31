/* src/cache/meta.rs */

use std::time::Instant;

use crate::resolver::Specificity;

/// Metadata associated with a cache entry.
#[derive(Debug, Clone)]
pub struct Meta {
	/// When the value was first published.
	pub resolved_at: Instant,
	/// Publication order: 1 for the first entry, with no gaps.
	pub sequence: u64,
	/// Level that produced the value, `None` when the default applied.
	pub level: Option<Specificity>,
}
