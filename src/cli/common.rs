//! Shared CLI types: exit codes and the command error.

use crate::config::Config;
use crate::error::{ErrorKind, PipelineError};
use crate::profiles::ProfileRegistry;
use std::fmt;
use std::path::Path;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Invalid profile or invalid arguments
    ValidationError = 1,
    /// Input missing, unreadable, or output not writable
    IoError = 2,
    /// The input document has no recognizable bar structure
    ParseError = 3,
}

impl ExitCode {
    /// Numeric code passed to the OS.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl From<ErrorKind> for ExitCode {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::InputNotFound | ErrorKind::ReadFailure | ErrorKind::WriteFailure => {
                Self::IoError
            }
            ErrorKind::StructureNotFound | ErrorKind::DialectNotRecognized => Self::ParseError,
            ErrorKind::ProfileInvalid => Self::ValidationError,
        }
    }
}

/// Error returned by a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code for the process
    pub code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// I/O failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Parse failure (exit code 3).
    pub fn parse(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::ParseError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<PipelineError> for CliError {
    fn from(err: PipelineError) -> Self {
        Self {
            code: err.kind().into(),
            message: err.to_string(),
        }
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Loads the user configuration.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Discovers profiles, preferring an explicit `--assets` directory.
pub fn open_registry(config: &Config, assets: Option<&Path>) -> CliResult<ProfileRegistry> {
    match assets {
        Some(dir) if !dir.is_dir() => Err(CliError::validation(format!(
            "Assets directory does not exist: {}",
            dir.display()
        ))),
        Some(dir) => Ok(ProfileRegistry::discover(
            dir,
            config.profiles.include_builtin,
        )),
        None => Ok(ProfileRegistry::from_config(config)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_pipeline_errors_map_to_exit_codes() {
        let err: CliError = PipelineError::InputNotFound {
            path: PathBuf::from("x.html"),
        }
        .into();
        assert_eq!(err.code, ExitCode::IoError);

        let err: CliError = PipelineError::StructureNotFound {
            path: PathBuf::from("x.html"),
            anchor: "transcript",
        }
        .into();
        assert_eq!(err.code, ExitCode::ParseError);
        assert_eq!(err.code.code(), 3);

        let err: CliError = PipelineError::ProfileInvalid {
            key: "pad".to_string(),
            problems: vec!["Missing icons: 2.".to_string()],
        }
        .into();
        assert_eq!(err.code, ExitCode::ValidationError);
        assert!(err.message.contains("Missing icons: 2."));
    }
}
