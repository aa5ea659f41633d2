//! Data models shared by the loader, mapper, exporter and profile registry.
//!
//! Models are independent of parsing, rendering and file system concerns.

pub mod bar;
pub mod profile;

pub use bar::{sanitize_fields, ActiveMap, Bar, FieldMap, FieldNumber, LabelMap};
pub use profile::{Profile, ProfileReport, ProfileSource};
