/* src/config/mod.rs */

//!
//! Key-value configuration consumed by the resolvers.
//!
//! - [`Properties`] - Immutable map loaded once at startup.
//! - [`ParameterSource`] - Lookup capability shared by static and live backends.

mod properties;

pub use properties::Properties;

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Name of the startup configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "sameSiteCookies.properties";

/// Flag that enables installation of the application handlers.
pub const INSTALL_FLAG_KEY: &str = "cookies.SameSite.install.application.handler";

/// Read access to a key-value configuration backend.
///
/// Implemented by the pre-loaded [`Properties`] and by any live configuration
/// subsystem the application wants to query per lookup.
pub trait ParameterSource: Send + Sync {
	/// Returns the raw value for `key`, if present.
	fn get_parameter(&self, key: &str) -> Option<Cow<'_, str>>;

	/// Reads a boolean flag. Unparseable or missing values yield `default`.
	fn get_bool(&self, key: &str, default: bool) -> bool {
		match self.get_parameter(key) {
			Some(raw) => {
				let raw = raw.trim();
				if raw.eq_ignore_ascii_case("true") {
					true
				} else if raw.eq_ignore_ascii_case("false") {
					false
				} else {
					default
				}
			}
			None => default,
		}
	}
}

impl<S> ParameterSource for Arc<S>
where
	S: ParameterSource + ?Sized,
{
	fn get_parameter(&self, key: &str) -> Option<Cow<'_, str>> {
		(**self).get_parameter(key)
	}
}

impl ParameterSource for HashMap<String, String> {
	fn get_parameter(&self, key: &str) -> Option<Cow<'_, str>> {
		self.get(key).map(|v| Cow::Borrowed(v.as_str()))
	}
}

impl ParameterSource for BTreeMap<String, String> {
	fn get_parameter(&self, key: &str) -> Option<Cow<'_, str>> {
		self.get(key).map(|v| Cow::Borrowed(v.as_str()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_get_bool_parses_flag() {
		let mut map = HashMap::new();
		map.insert("on".to_string(), " TRUE ".to_string());
		map.insert("off".to_string(), "false".to_string());
		map.insert("junk".to_string(), "yes".to_string());

		assert!(map.get_bool("on", false));
		assert!(!map.get_bool("off", true));
		assert!(map.get_bool("junk", true));
		assert!(!map.get_bool("missing", false));
	}
}
