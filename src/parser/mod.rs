//! Transcript parsing.
//!
//! This module reads saved sheet-music HTML, finds the transcript anchor and
//! recovers the pressed field positions of every bar from either markup dialect.

pub mod slot_dialect;
pub mod table_dialect;
pub mod transcript;

// Re-export commonly used functions
pub use transcript::{load_active_map, load_transcript, parse_transcript, Dialect, Transcript};

use scraper::ElementRef;

/// Returns true if `element` carries the class token `class`.
pub(crate) fn has_class(element: ElementRef<'_>, class: &str) -> bool {
    element.value().classes().any(|token| token == class)
}
