/* src/processor/mod.rs */

//!
//! `Set-Cookie` header generation with `SameSite` injection.
//!
//! - [`CookieProcessor`] - Serializes a cookie and appends `SameSite` when missing
//! - [`Handlers`] - Atomically swappable resolver and log handler slots

mod augment;
mod detect;
mod error;
mod handlers;

pub use augment::{CookieProcessor, DEFAULT_SAME_SITE};
pub use detect::has_same_site;
pub use error::ProcessError;
pub use handlers::Handlers;
