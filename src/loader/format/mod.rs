/* src/loader/format/mod.rs */

mod properties;
pub use properties::{PropertiesFormat, parse_properties};
