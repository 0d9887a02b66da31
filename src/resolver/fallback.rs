/* src/resolver/fallback.rs */

use super::{CookieIdentity, Specificity};
use crate::SameSite;
use crate::config::ParameterSource;

/// Walks the specificity chain and returns the first non-blank value.
///
/// Returns `None` when no level is configured, leaving the choice of
/// default to the caller.
pub fn resolve_from<S>(source: &S, id: &CookieIdentity<'_>) -> Option<(Specificity, SameSite)>
where
	S: ParameterSource + ?Sized,
{
	Specificity::CHAIN.into_iter().find_map(|level| {
		let raw = source.get_parameter(&level.key(id))?;
		SameSite::from_config(&raw).map(|value| (level, value))
	})
}
