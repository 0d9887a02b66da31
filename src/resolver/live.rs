/* src/resolver/live.rs */

use super::{CookieHandler, CookieIdentity, HandlerError, resolve_from};
use crate::SameSite;
use crate::config::ParameterSource;

/// Resolver that queries its backend on every lookup.
///
/// Meant for application configuration subsystems that may change while
/// the process runs; nothing is cached.
pub struct LiveResolver<S> {
	source: S,
	default: SameSite,
}

impl<S> LiveResolver<S>
where
	S: ParameterSource,
{
	/// Creates a resolver over `source`, falling back to `SameSite::None`.
	pub fn new(source: S) -> Self {
		Self {
			source,
			default: SameSite::None,
		}
	}

	/// Replaces the value used when no level is configured.
	pub fn with_default(mut self, default: SameSite) -> Self {
		self.default = default;
		self
	}

	/// Resolves the value for a (domain, path, name) triple.
	pub fn resolve(&self, domain: &str, path: &str, name: &str) -> SameSite {
		self.resolve_identity(&CookieIdentity::new(domain, path, name))
	}

	/// Resolves the value for a cookie identity. Never fails.
	pub fn resolve_identity(&self, id: &CookieIdentity<'_>) -> SameSite {
		resolve_from(&self.source, id)
			.map(|(_, value)| value)
			.unwrap_or_else(|| self.default.clone())
	}
}

impl<S> CookieHandler for LiveResolver<S>
where
	S: ParameterSource,
{
	fn same_site_for(&self, cookie: &CookieIdentity<'_>) -> Result<SameSite, HandlerError> {
		Ok(self.resolve_identity(cookie))
	}
}

impl<S> std::fmt::Debug for LiveResolver<S> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("LiveResolver")
			.field("default", &self.default)
			.finish_non_exhaustive()
	}
}
