/* src/same_site.rs */

use std::fmt;

/// Value of the `SameSite` cookie attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SameSite {
	Strict,
	Lax,
	/// Also the fallback when nothing is configured.
	#[default]
	None,
	/// Any other configured token, kept verbatim.
	Custom(String),
}

impl SameSite {
	/// Reads a configured value, returning `None` for blank input.
	///
	/// Only the canonical spellings map to the named variants. Anything else,
	/// including `lax` or `STRICT`, is kept as [`SameSite::Custom`] so the
	/// configured text reaches the header unchanged.
	pub fn from_config(raw: &str) -> Option<Self> {
		let value = raw.trim();
		match value {
			"" => None,
			"Strict" => Some(Self::Strict),
			"Lax" => Some(Self::Lax),
			"None" => Some(Self::None),
			other => Some(Self::Custom(other.to_string())),
		}
	}

	/// The attribute value as written into a `Set-Cookie` header.
	pub fn as_str(&self) -> &str {
		match self {
			Self::Strict => "Strict",
			Self::Lax => "Lax",
			Self::None => "None",
			Self::Custom(token) => token,
		}
	}
}

impl fmt::Display for SameSite {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
