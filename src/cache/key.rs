/* src/cache/key.rs */

use std::fmt;

use crate::resolver::CookieIdentity;

/// Structured cache key for a cookie identity.
///
/// Fields are kept apart rather than joined with a delimiter, so a name or
/// path containing `.` or `,` cannot collide with another cookie's entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey {
	pub domain: String,
	pub path: String,
	pub name: String,
}

impl CacheKey {
	pub fn new(domain: impl Into<String>, path: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			domain: domain.into(),
			path: path.into(),
			name: name.into(),
		}
	}
}

impl From<&CookieIdentity<'_>> for CacheKey {
	fn from(id: &CookieIdentity<'_>) -> Self {
		Self::new(id.domain, id.path, id.name)
	}
}

impl fmt::Display for CacheKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Cookie(domain:{},path:{},name:{})",
			self.domain, self.path, self.name
		)
	}
}
