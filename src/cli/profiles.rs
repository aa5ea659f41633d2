//! Profiles command: list discovered profiles.

use crate::cli::common::{load_config, open_registry, print_json, CliResult};
use crate::models::ProfileSource;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// List available profiles
#[derive(Debug, Clone, Args)]
pub struct ProfilesArgs {
    /// Profile assets directory
    #[arg(long, value_name = "DIR")]
    pub assets: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ProfilesResponse {
    assets_root: String,
    profiles: Vec<ProfileEntry>,
}

#[derive(Debug, Serialize)]
struct ProfileEntry {
    key: String,
    label: String,
    source: ProfileSource,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    asset_dir: Option<String>,
}

impl ProfilesArgs {
    /// Execute the profiles command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let registry = open_registry(&config, self.assets.as_deref())?;

        let profiles: Vec<ProfileEntry> = registry
            .profiles()
            .map(|profile| ProfileEntry {
                key: profile.key.clone(),
                label: profile.label.clone(),
                source: profile.source,
                valid: registry.profile_report(&profile.key).valid,
                asset_dir: profile
                    .asset_dir
                    .as_ref()
                    .map(|dir| dir.display().to_string()),
            })
            .collect();

        let response = ProfilesResponse {
            assets_root: registry.assets_root().display().to_string(),
            profiles,
        };

        if self.json {
            return print_json(&response);
        }

        println!("Assets root: {}", response.assets_root);
        if response.profiles.is_empty() {
            println!("No profiles found.");
            return Ok(());
        }

        println!();
        for entry in &response.profiles {
            let mark = if entry.valid { "✓" } else { "✗" };
            println!(
                "  {} {:<12} {:<20} {}",
                mark,
                entry.key,
                entry.label,
                entry.source.name()
            );
        }

        Ok(())
    }
}
