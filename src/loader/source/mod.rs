/* src/loader/source/mod.rs */

#[cfg(feature = "fs")]
mod file;
#[cfg(feature = "fs")]
pub use file::FileSource;
