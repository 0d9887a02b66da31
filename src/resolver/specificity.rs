/* src/resolver/specificity.rs */

use super::CookieIdentity;

/// Lookup level in the fallback chain, most specific first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Specificity {
	/// `cookies.<domain>.<path>.<name>.SameSite`
	Name,
	/// `cookies.<domain>.<path>.SameSite`
	Path,
	/// `cookies.<domain>.SameSite`
	Domain,
	/// `cookies.SameSite`
	Global,
}

impl Specificity {
	/// All levels in lookup order.
	pub const CHAIN: [Self; 4] = [Self::Name, Self::Path, Self::Domain, Self::Global];

	/// Builds the configuration key for this level.
	///
	/// Fields are joined with `.` unescaped, matching the configuration file
	/// format. A path or name containing `.` can therefore read a key meant
	/// for another cookie.
	pub fn key(self, id: &CookieIdentity<'_>) -> String {
		match self {
			Self::Name => format!("cookies.{}.{}.{}.SameSite", id.domain, id.path, id.name),
			Self::Path => format!("cookies.{}.{}.SameSite", id.domain, id.path),
			Self::Domain => format!("cookies.{}.SameSite", id.domain),
			Self::Global => "cookies.SameSite".to_string(),
		}
	}
}
