//! CLI command handlers for sky-buttons.
//!
//! Each subcommand is a thin layer over the library: it resolves defaults from
//! the configuration, runs one pipeline operation and reports the outcome.

pub mod common;
pub mod config;
pub mod convert;
pub mod inspect;
pub mod profiles;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use convert::ConvertArgs;
pub use inspect::InspectArgs;
pub use profiles::ProfilesArgs;
pub use validate::ValidateArgs;
