//! Button profiles: built-in tables, discovery, validation and the registry.

pub mod builtin;
pub mod discover;
pub mod registry;
pub mod validate;

pub use discover::{discover_profiles, resolve_assets_root};
pub use registry::{ProfileRegistry, SharedRegistry};
pub use validate::report_for;
