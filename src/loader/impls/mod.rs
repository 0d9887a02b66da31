/* src/loader/impls/mod.rs */

mod config_loader;
pub use config_loader::ConfigLoader;
