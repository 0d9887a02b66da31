/* src/resolver/mod.rs */

//!
//! Policy resolution: which `SameSite` value applies to a cookie.
//!
//! - [`CachedResolver`] - Memoizing resolver over startup configuration
//! - [`LiveResolver`] - Per-lookup resolver over a live configuration backend
//!
//! Both walk the same [`Specificity`] chain from the most specific key
//! (`cookies.<domain>.<path>.<name>.SameSite`) to the global one
//! (`cookies.SameSite`), skipping blank values.

mod cached;
mod error;
mod fallback;
mod identity;
mod live;
mod specificity;

pub use cached::CachedResolver;
pub use error::HandlerError;
pub use fallback::resolve_from;
pub use identity::CookieIdentity;
pub use live::LiveResolver;
pub use specificity::Specificity;

use crate::SameSite;

/// Capability installed into the cookie processor to pick `SameSite` values.
pub trait CookieHandler: Send + Sync {
	/// Returns the value to append for this cookie.
	fn same_site_for(&self, cookie: &CookieIdentity<'_>) -> Result<SameSite, HandlerError>;

	/// Human-readable name, used in installation logs.
	fn name(&self) -> &str {
		std::any::type_name::<Self>()
	}
}

impl<F> CookieHandler for F
where
	F: Fn(&CookieIdentity<'_>) -> Result<SameSite, HandlerError> + Send + Sync,
{
	fn same_site_for(&self, cookie: &CookieIdentity<'_>) -> Result<SameSite, HandlerError> {
		self(cookie)
	}
}
