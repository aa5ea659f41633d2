//! sky-buttons - convert Sky sheet-music transcripts into button charts

use clap::{Parser, Subcommand};
use sky_buttons::cli::{
    ConfigArgs, ConvertArgs, ExitCode, InspectArgs, ProfilesArgs, ValidateArgs,
};
use sky_buttons::constants::{APP_BINARY_NAME, APP_NAME};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Convert saved Sky sheet-music transcripts into button charts
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a transcript into a button chart
    Convert(ConvertArgs),
    /// Show the bars read from a transcript
    Inspect(InspectArgs),
    /// List available profiles
    Profiles(ProfilesArgs),
    /// Validate profile icon sets
    Validate(ValidateArgs),
    /// Show or change the configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = if e.use_stderr() {
                ExitCode::ValidationError
            } else {
                ExitCode::Success
            };
            std::process::exit(code.code());
        }
    };

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    let result = match &cli.command {
        Command::Convert(args) => args.execute(),
        Command::Inspect(args) => args.execute(),
        Command::Profiles(args) => args.execute(),
        Command::Validate(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.code.code());
    }
    std::process::exit(ExitCode::Success.code());
}
