/* src/cache/mod.rs */

//!
//! Process-lifetime memo of resolved `SameSite` values.
//!
//! Entries are written once per cookie identity and never evicted. The key
//! space is the set of distinct (domain, path, name) triples a process sees,
//! which is bounded in practice.

mod entry;
mod key;
mod meta;
mod store;

pub use entry::Entry;
pub use key::CacheKey;
pub use meta::Meta;
pub use store::ResolutionCache;
