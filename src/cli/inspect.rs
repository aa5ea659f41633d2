//! Inspect command: print the bars read from a transcript.

use crate::cli::common::{load_config, open_registry, print_json, CliResult};
use crate::models::{Bar, FieldNumber};
use crate::parser::{load_transcript, Dialect};
use crate::services::map_active_map;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Show the numeric and labeled bars of a transcript
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Saved transcript HTML file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Profile key used for the labeled listing (default from configuration)
    #[arg(short, long, value_name = "KEY")]
    pub profile: Option<String>,

    /// Profile assets directory
    #[arg(long, value_name = "DIR")]
    pub assets: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for `inspect`
#[derive(Debug, Serialize)]
struct InspectResponse {
    input: String,
    dialect: Dialect,
    profile: String,
    bar_count: usize,
    rest_count: usize,
    bars: Vec<BarRow>,
}

#[derive(Debug, Serialize)]
struct BarRow {
    index: usize,
    fields: Bar<FieldNumber>,
    labels: Bar<String>,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let transcript = load_transcript(&self.input)?;

        let config = load_config()?;
        let registry = open_registry(&config, self.assets.as_deref())?;
        let requested = self.profile.as_deref().unwrap_or(&config.profiles.default);
        let profile = registry.get_profile(requested);
        let labeled = map_active_map(&transcript.bars, &profile);

        let bars: Vec<BarRow> = transcript
            .bars
            .iter()
            .map(|(index, fields)| BarRow {
                index,
                fields: fields.clone(),
                labels: labeled.get(index).cloned().unwrap_or(Bar::Silent),
            })
            .collect();

        let response = InspectResponse {
            input: self.input.display().to_string(),
            dialect: transcript.dialect,
            profile: profile.key.clone(),
            bar_count: transcript.bars.len(),
            rest_count: transcript.bars.silent_count(),
            bars,
        };

        if self.json {
            return print_json(&response);
        }

        println!("Input:   {}", response.input);
        println!("Dialect: {}", response.dialect);
        println!("Profile: {} ({})", profile.key, profile.label);
        println!(
            "Bars:    {} ({} rests)",
            response.bar_count, response.rest_count
        );
        println!();
        for row in &response.bars {
            println!(
                "  {:>4}  {:<24} {}",
                row.index,
                format_bar(&row.fields),
                format_bar(&row.labels)
            );
        }

        Ok(())
    }
}

/// Formats a bar as `[a, b]`, or `Silent` for a rest.
fn format_bar<T: ToString>(bar: &Bar<T>) -> String {
    match bar {
        Bar::Silent => "Silent".to_string(),
        Bar::Active(values) => format!(
            "[{}]",
            values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}
