//! Sky: Notes → Buttons
//!
//! Converts saved HTML transcripts of Sky sheet music into a static page of
//! controller or keyboard button presses. The pipeline has three stages:
//!
//! 1. [`parser`] loads a transcript and extracts its bars
//! 2. [`services::mapper`] translates field positions into profile labels
//! 3. [`export`] renders the labeled bars into a self-contained HTML file
//!
//! Profiles come from the [`profiles`] registry, which discovers icon sets on
//! disk and validates them.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod models;
pub mod parser;
pub mod profiles;
pub mod services;

pub use error::{ErrorKind, PipelineError};
pub use models::{ActiveMap, Bar, FieldMap, LabelMap, Profile, ProfileReport};
pub use profiles::{ProfileRegistry, SharedRegistry};
pub use services::ConversionService;
