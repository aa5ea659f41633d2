//! Configuration management CLI commands.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Profile assets directory
    #[arg(long, value_name = "DIR")]
    assets_root: Option<PathBuf>,

    /// Default profile key
    #[arg(long, value_name = "KEY")]
    profile: Option<String>,

    /// Default page title
    #[arg(long, value_name = "TITLE")]
    title: Option<String>,

    /// Bars per section in the exported page
    #[arg(long, value_name = "N")]
    group_size: Option<usize>,

    /// Embed icons in the exported page (true or false)
    #[arg(long, value_name = "BOOL")]
    inline_icons: Option<bool>,

    /// Register the built-in label tables (true or false)
    #[arg(long, value_name = "BOOL")]
    include_builtin: Option<bool>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            print_json(&config)
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.assets_root.is_none()
            && self.profile.is_none()
            && self.title.is_none()
            && self.group_size.is_none()
            && self.inline_icons.is_none()
            && self.include_builtin.is_none()
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --assets-root, --profile, --title, --group-size, --inline-icons, or --include-builtin",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(path) = &self.assets_root {
            if !path.is_dir() {
                return Err(CliError::validation(format!(
                    "Assets directory does not exist: {}",
                    path.display()
                )));
            }
            let path = path.canonicalize().unwrap_or_else(|_| path.clone());
            config.paths.assets_root = Some(path);
        }
        if let Some(profile) = &self.profile {
            config.profiles.default.clone_from(profile);
        }
        if let Some(title) = &self.title {
            config.export.title.clone_from(title);
        }
        if let Some(group_size) = self.group_size {
            config.export.group_size = group_size;
        }
        if let Some(inline_icons) = self.inline_icons {
            config.export.inline_icons = inline_icons;
        }
        if let Some(include_builtin) = self.include_builtin {
            config.profiles.include_builtin = include_builtin;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;
        let path = config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated: {}", path.display());

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("Sky Buttons Configuration");
    println!("=========================");
    println!();

    if let Ok(path) = Config::config_file_path() {
        println!("File: {}", path.display());
        println!();
    }

    println!("Paths:");
    match &config.paths.assets_root {
        Some(root) => println!("  Assets Root: {}", root.display()),
        None => println!("  Assets Root: (auto-detect)"),
    }
    println!();

    println!("Profiles:");
    println!("  Default: {}", config.profiles.default);
    println!("  Include Built-in: {}", config.profiles.include_builtin);
    println!();

    println!("Export:");
    println!("  Title: {}", config.export.title);
    println!("  Group Size: {}", config.export.group_size);
    println!("  Inline Icons: {}", config.export.inline_icons);
    println!();
}
