/* src/processor/augment.rs */

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use cookie::Cookie;

use super::{Handlers, ProcessError, has_same_site};
use crate::SameSite;
use crate::resolver::CookieIdentity;

/// Value appended when no cookie handler is installed.
pub const DEFAULT_SAME_SITE: SameSite = SameSite::None;

/// Generates `Set-Cookie` header values that always carry a `SameSite` attribute.
///
/// Cheap to clone; clones share the same [`Handlers`].
#[derive(Debug, Clone, Default)]
pub struct CookieProcessor {
	handlers: Arc<Handlers>,
}

impl CookieProcessor {
	/// Creates a processor reading its strategies from `handlers`.
	pub fn new(handlers: Arc<Handlers>) -> Self {
		Self { handlers }
	}

	/// Returns the handler slots, for installing strategies at startup.
	pub fn handlers(&self) -> &Arc<Handlers> {
		&self.handlers
	}

	/// Serializes `cookie` and appends `SameSite` if the result lacks one.
	pub fn generate_header(&self, cookie: &Cookie<'_>) -> String {
		self.augment(&CookieIdentity::from(cookie), cookie.to_string())
	}

	/// Appends `; SameSite=<value>` to an already serialized header.
	///
	/// The header is returned untouched when it already has the attribute or
	/// when anything goes wrong, including a panicking cookie handler; failures
	/// are reported to the log handler.
	pub fn augment(&self, cookie: &CookieIdentity<'_>, mut header: String) -> String {
		match self.same_site_to_append(cookie, &header) {
			Ok(Some(value)) => {
				header.push_str("; SameSite=");
				header.push_str(value.as_str());
				header
			}
			Ok(None) => header,
			Err(e) => {
				self.handlers.error(
					&format!("Error adjusting SameSite for cookie {} setting: {}", cookie, e),
					Some(&e),
				);
				header
			}
		}
	}

	fn same_site_to_append(
		&self,
		cookie: &CookieIdentity<'_>,
		header: &str,
	) -> Result<Option<SameSite>, ProcessError> {
		if has_same_site(header)? {
			self.handlers
				.debug(&format!("Cookie {} already got SameSite setting", cookie));
			return Ok(None);
		}

		let value = match self.handlers.cookie_handler() {
			Some(handler) => {
				panic::catch_unwind(AssertUnwindSafe(|| handler.same_site_for(cookie)))
					.map_err(|payload| ProcessError::HandlerPanicked(panic_message(payload.as_ref())))??
			}
			None => DEFAULT_SAME_SITE,
		};
		self.handlers.debug(&format!(
			"Cookie {} is using SameSite app setting '{}'",
			cookie, value
		));
		Ok(Some(value))
	}
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
	if let Some(msg) = payload.downcast_ref::<&str>() {
		(*msg).to_string()
	} else if let Some(msg) = payload.downcast_ref::<String>() {
		msg.clone()
	} else {
		"non-string panic payload".to_string()
	}
}
