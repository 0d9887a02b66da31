/* src/resolver/identity.rs */

use std::fmt;

use cookie::Cookie;

/// The parts of a cookie that policy resolution looks at.
///
/// An absent domain or path is represented by the empty string.
///
/// Built from a [`Cookie`], the domain is whatever [`Cookie::domain`] reports,
/// which drops one leading `.`. A cookie for `.example.com` is therefore looked
/// up as `example.com`, and keys spelled with the dot, such as
/// `cookies..example.com.SameSite`, never match it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CookieIdentity<'a> {
	pub domain: &'a str,
	pub path: &'a str,
	pub name: &'a str,
}

impl<'a> CookieIdentity<'a> {
	pub const fn new(domain: &'a str, path: &'a str, name: &'a str) -> Self {
		Self { domain, path, name }
	}
}

impl<'a> From<&'a Cookie<'_>> for CookieIdentity<'a> {
	fn from(cookie: &'a Cookie<'_>) -> Self {
		Self {
			domain: cookie.domain().unwrap_or_default(),
			path: cookie.path().unwrap_or_default(),
			name: cookie.name(),
		}
	}
}

impl fmt::Display for CookieIdentity<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}:{}", self.domain, self.path, self.name)
	}
}
