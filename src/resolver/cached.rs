/* src/resolver/cached.rs */

use std::sync::Arc;

use super::{CookieHandler, CookieIdentity, HandlerError, resolve_from};
use crate::SameSite;
use crate::cache::{CacheKey, ResolutionCache};
use crate::config::{ParameterSource, Properties};

#[cfg(feature = "fs")]
use std::path::PathBuf;

/// Resolver that memoizes every resolution for the process lifetime.
///
/// This is the default handler: it is built from the startup configuration
/// and answers repeated lookups for the same cookie from its cache without
/// touching the source again.
pub struct CachedResolver<S = Properties> {
	source: S,
	cache: ResolutionCache,
	default: SameSite,
}

impl<S> CachedResolver<S>
where
	S: ParameterSource,
{
	/// Creates a resolver over `source`, falling back to `SameSite::None`.
	pub fn new(source: S) -> Self {
		Self {
			source,
			cache: ResolutionCache::new(),
			default: SameSite::None,
		}
	}

	/// Replaces the value used when no level is configured.
	pub fn with_default(mut self, default: SameSite) -> Self {
		self.default = default;
		self
	}

	/// Resolves the value for a (domain, path, name) triple.
	pub fn resolve(&self, domain: &str, path: &str, name: &str) -> Arc<SameSite> {
		self.resolve_identity(&CookieIdentity::new(domain, path, name))
	}

	/// Resolves the value for a cookie identity. Never fails.
	pub fn resolve_identity(&self, id: &CookieIdentity<'_>) -> Arc<SameSite> {
		let key = CacheKey::from(id);
		if let Some(value) = self.cache.get(&key) {
			return value;
		}

		let (level, value) = match resolve_from(&self.source, id) {
			Some((level, value)) => (Some(level), value),
			None => (None, self.default.clone()),
		};

		#[cfg(feature = "logging")]
		log::info!(target: crate::logging::LOG_TARGET, "SameSite Cookie Processor: {} -> {}", key, value);

		self.cache.insert(key, value, level)
	}

	/// Returns the resolution cache.
	pub fn cache(&self) -> &ResolutionCache {
		&self.cache
	}

	/// Returns the configuration source.
	pub fn source(&self) -> &S {
		&self.source
	}

	/// Returns the value used when no level is configured.
	pub fn default_value(&self) -> &SameSite {
		&self.default
	}
}

#[cfg(feature = "fs")]
impl CachedResolver<Properties> {
	/// Builds the resolver from `sameSiteCookies.properties` in `dir`.
	///
	/// A missing or unreadable file leaves the configuration empty, so every
	/// cookie receives the default.
	pub async fn load(dir: impl Into<PathBuf>) -> Self {
		Self::new(crate::loader::load_startup_properties(dir).await)
	}

	/// Builds the resolver from the process working directory.
	pub async fn from_working_dir() -> Self {
		Self::load(".").await
	}
}

impl<S> CookieHandler for CachedResolver<S>
where
	S: ParameterSource,
{
	fn same_site_for(&self, cookie: &CookieIdentity<'_>) -> Result<SameSite, HandlerError> {
		Ok((*self.resolve_identity(cookie)).clone())
	}
}

impl<S> std::fmt::Debug for CachedResolver<S> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CachedResolver")
			.field("cache", &self.cache)
			.field("default", &self.default)
			.finish_non_exhaustive()
	}
}
