/* src/lib.rs */

//!
//! Adds a `SameSite` attribute to outgoing `Set-Cookie` headers that lack one.
//!
//! This crate integrates the following components:
//!
//! - **processor**: Serializes cookies and appends `SameSite` (`CookieProcessor`).
//! - **resolver**: Picks the value per cookie name, path, domain or globally.
//! - **cache**: Lock-free, write-once memo of resolved values.
//! - **config** / **loader**: Startup key-value configuration and its loading.
//! - **logging**: Pluggable log sink for processor diagnostics.
//! - **installer**: One-shot startup hook for application handlers.
//!
//! ## Feature Flags
//!
//! - `fs`: File system source and startup file loading (default).
//! - `logging`: Records through the `log` facade (default).
//! - `tracing`: `TracingHandler` log sink.
//! - `full`: Enables all features.
//!
//! ## Basic Usage
//!
//! See `demos/basic.rs` for a complete example.

pub mod cache;
pub mod config;
pub mod loader;
pub mod logging;
pub mod processor;
pub mod resolver;

mod installer;
mod same_site;

pub use installer::{InstallOutcome, Installer, NodeRole};
pub use processor::{CookieProcessor, Handlers};
pub use resolver::{CachedResolver, CookieHandler, CookieIdentity, LiveResolver};
pub use same_site::SameSite;
