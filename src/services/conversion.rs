//! Conversion service.
//!
//! Wires loader, mapper and exporter into one call and runs the profile
//! pre-flight check before anything is written.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::PipelineError;
use crate::export::{self, ExportOptions};
use crate::models::Profile;
use crate::parser;
use crate::profiles::ProfileRegistry;
use crate::services::mapper::map_active_map;

/// Runs load → map → export against one registry snapshot.
#[derive(Debug, Clone)]
pub struct ConversionService {
    registry: Arc<ProfileRegistry>,
    options: ExportOptions,
}

impl ConversionService {
    /// Creates a service over a registry snapshot.
    #[must_use]
    pub const fn new(registry: Arc<ProfileRegistry>, options: ExportOptions) -> Self {
        Self { registry, options }
    }

    /// Registry snapshot in use.
    #[must_use]
    pub fn registry(&self) -> &ProfileRegistry {
        &self.registry
    }

    /// Resolves `profile_key` and checks its validation report.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::ProfileInvalid`] if the resolved profile's
    /// report is not valid.
    pub fn preflight(&self, profile_key: &str) -> Result<Arc<Profile>, PipelineError> {
        let profile = self.registry.get_profile(profile_key);
        let report = self.registry.profile_report(profile_key);
        if !report.valid {
            return Err(PipelineError::ProfileInvalid {
                key: profile.key.clone(),
                problems: report.problems,
            });
        }
        debug!("Profile '{}' passed pre-flight", profile.key);
        Ok(profile)
    }

    /// Converts `input` into a button chart at `output`.
    ///
    /// The profile is checked first; an invalid profile blocks the conversion
    /// and nothing is written.
    pub fn convert(
        &self,
        input: &Path,
        output: &Path,
        title: &str,
        profile_key: &str,
    ) -> Result<PathBuf, PipelineError> {
        let profile = self.preflight(profile_key)?;
        self.run(input, output, title, &profile)
    }

    /// Converts without the pre-flight check.
    pub fn convert_unchecked(
        &self,
        input: &Path,
        output: &Path,
        title: &str,
        profile_key: &str,
    ) -> Result<PathBuf, PipelineError> {
        let profile = self.registry.get_profile(profile_key);
        self.run(input, output, title, &profile)
    }

    fn run(
        &self,
        input: &Path,
        output: &Path,
        title: &str,
        profile: &Profile,
    ) -> Result<PathBuf, PipelineError> {
        let raw = parser::load_active_map(input)?;
        let mapped = map_active_map(&raw, profile);
        let written = export::export_html(&mapped, output, title, profile, &self.options)?;
        info!(
            "Converted {} → {} ({} bars)",
            input.display(),
            written.display(),
            mapped.len()
        );
        Ok(written)
    }
}
