//! Validate command: report profile problems.

use crate::cli::common::{load_config, open_registry, print_json, CliError, CliResult};
use crate::models::ProfileReport;
use clap::Args;
use std::path::PathBuf;
use tracing::warn;

/// Validate profile icon sets
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Profile key (default: all profiles)
    #[arg(value_name = "PROFILE")]
    pub profile: Option<String>,

    /// Profile assets directory
    #[arg(long, value_name = "DIR")]
    pub assets: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let registry = open_registry(&config, self.assets.as_deref())?;

        let reports: Vec<ProfileReport> = match &self.profile {
            Some(key) => {
                if !registry.contains(key) {
                    warn!(
                        "Profile '{}' not found, validating '{}' instead",
                        key,
                        registry.get_profile(key).key
                    );
                }
                vec![registry.profile_report(key)]
            }
            None => registry
                .list_profiles()
                .into_iter()
                .map(|key| registry.profile_report(key))
                .collect(),
        };

        if self.json {
            print_json(&reports)?;
        } else if reports.is_empty() {
            println!("No profiles found in {}", registry.assets_root().display());
        } else {
            for report in &reports {
                let mark = if report.valid { "✓" } else { "✗" };
                println!("{} {}: {}", mark, report.key, report.summary());
            }
        }

        let invalid: Vec<&str> = reports
            .iter()
            .filter(|report| !report.valid)
            .map(|report| report.key.as_str())
            .collect();
        if !invalid.is_empty() {
            return Err(CliError::validation(format!(
                "Invalid profiles: {}",
                invalid.join(", ")
            )));
        }

        Ok(())
    }
}
