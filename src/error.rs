//! Error kinds raised by the conversion pipeline.
//!
//! Every stage reports a distinct, identifiable failure instead of a sentinel
//! value. The CLI maps these onto exit codes, see [`crate::cli::common`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`PipelineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input document does not exist
    InputNotFound,
    /// The input document exists but could not be read
    ReadFailure,
    /// The anchor element is missing from the input
    StructureNotFound,
    /// The anchor exists but no supported bar markup was found under it
    DialectNotRecognized,
    /// The requested profile failed its pre-flight validation
    ProfileInvalid,
    /// The output document could not be written
    WriteFailure,
}

/// Failure of a load, map or export step.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Input path does not exist.
    #[error("HTML file not found: {}", .path.display())]
    InputNotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// Input path exists but reading it failed.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The anchor element is missing.
    #[error("Could not find <div id=\"{anchor}\"> in {}", .path.display())]
    StructureNotFound {
        /// Document that was parsed
        path: PathBuf,
        /// Id that was looked up
        anchor: &'static str,
    },

    /// Neither bar dialect matched under the anchor.
    #[error(
        "No recognizable bar structure under #{anchor} in {} (expected table.harp or div.instr.harp)",
        .path.display()
    )]
    DialectNotRecognized {
        /// Document that was parsed
        path: PathBuf,
        /// Id of the anchor that was searched
        anchor: &'static str,
    },

    /// The profile did not pass validation.
    #[error("Profile '{key}' is not valid: {}", .problems.join(" "))]
    ProfileInvalid {
        /// Profile key
        key: String,
        /// Human-readable problems from the profile report
        problems: Vec<String>,
    },

    /// The destination could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    WriteFailure {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl PipelineError {
    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InputNotFound { .. } => ErrorKind::InputNotFound,
            Self::Read { .. } => ErrorKind::ReadFailure,
            Self::StructureNotFound { .. } => ErrorKind::StructureNotFound,
            Self::DialectNotRecognized { .. } => ErrorKind::DialectNotRecognized,
            Self::ProfileInvalid { .. } => ErrorKind::ProfileInvalid,
            Self::WriteFailure { .. } => ErrorKind::WriteFailure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        let err = PipelineError::InputNotFound {
            path: PathBuf::from("missing.html"),
        };
        assert_eq!(err.kind(), ErrorKind::InputNotFound);
        assert!(err.to_string().contains("missing.html"));

        let err = PipelineError::ProfileInvalid {
            key: "ps".to_string(),
            problems: vec!["Missing icons: 3.".to_string()],
        };
        assert_eq!(err.kind(), ErrorKind::ProfileInvalid);
        assert_eq!(err.to_string(), "Profile 'ps' is not valid: Missing icons: 3.");
    }

    #[test]
    fn test_structure_not_found_message_names_anchor() {
        let err = PipelineError::StructureNotFound {
            path: PathBuf::from("song.html"),
            anchor: "transcript",
        };
        assert_eq!(
            err.to_string(),
            "Could not find <div id=\"transcript\"> in song.html"
        );
    }
}
