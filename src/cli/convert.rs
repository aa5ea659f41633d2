//! Convert command: transcript HTML to button chart HTML.

use crate::cli::common::{load_config, open_registry, CliError, CliResult};
use crate::export::default_output_path;
use crate::services::ConversionService;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

/// Convert a saved transcript into a button chart
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Saved transcript HTML file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: <INPUT stem>_<PROFILE>_buttons.html next to the input)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Profile key (default from configuration)
    #[arg(short, long, value_name = "KEY")]
    pub profile: Option<String>,

    /// Page title (default from configuration)
    #[arg(short, long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Profile assets directory
    #[arg(long, value_name = "DIR")]
    pub assets: Option<PathBuf>,

    /// Convert even if the profile fails validation
    #[arg(long)]
    pub force: bool,

    /// Reference icons by absolute path instead of embedding them
    #[arg(long)]
    pub link_icons: bool,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let registry = open_registry(&config, self.assets.as_deref())?;

        let requested = self
            .profile
            .clone()
            .unwrap_or_else(|| config.profiles.default.clone());
        if registry.is_empty() {
            return Err(CliError::validation(format!(
                "No profiles available for '{requested}': add profile folders under {} or enable built-in profiles",
                registry.assets_root().display()
            )));
        }
        if !registry.contains(&requested) {
            warn!(
                "Profile '{}' not found, using '{}'",
                requested,
                registry.get_profile(&requested).key
            );
        }
        let key = registry.get_profile(&requested).key.clone();

        let mut options = config.export_options();
        if self.link_icons {
            options.inline_icons = false;
        }

        let title = self.title.as_deref().unwrap_or(&config.export.title);
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input, &key));

        let service = ConversionService::new(Arc::new(registry), options);
        let written = if self.force {
            service.convert_unchecked(&self.input, &output, title, &key)?
        } else {
            service.convert(&self.input, &output, title, &key)?
        };

        println!("✓ Wrote {}", written.display());
        Ok(())
    }
}
