//! Transcript loader: anchor lookup, dialect detection and bar extraction.

use crate::constants::ANCHOR_ID;
use crate::error::PipelineError;
use crate::models::{Bar, FieldMap, FieldNumber};
use crate::parser::slot_dialect::SlotDialect;
use crate::parser::table_dialect::TableDialect;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Markup convention used to encode bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// `table.harp` bars with svg markers in a five-column grid
    Table,
    /// `div.instr.harp` bars with fifteen ordered slot elements
    Slot,
}

impl Dialect {
    /// Dialects in the order they are tried.
    pub const DETECTION_ORDER: [Self; 2] = [Self::Table, Self::Slot];

    /// Short lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Slot => "slot",
        }
    }

    /// CSS selector that locates this dialect's bars.
    #[must_use]
    pub const fn bar_selector(self) -> &'static str {
        match self {
            Self::Table => "table.harp",
            Self::Slot => "div.instr.harp",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.bar_selector())
    }
}

/// A parsed transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    /// Dialect the bars were read from
    pub dialect: Dialect,
    /// Bars numbered 1..N in document order
    pub bars: FieldMap,
}

/// Bar extractors for every supported dialect, compiled once per parse.
struct Extractors {
    table: TableDialect,
    slot: SlotDialect,
}

impl Extractors {
    fn new() -> Self {
        Self {
            table: TableDialect::new(),
            slot: SlotDialect::new(),
        }
    }

    fn bars<'a>(&self, dialect: Dialect, anchor: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        let selector = match dialect {
            Dialect::Table => &self.table.bars,
            Dialect::Slot => &self.slot.bars,
        };
        anchor.select(selector).collect()
    }

    fn extract(&self, dialect: Dialect, bar: ElementRef<'_>) -> Bar<FieldNumber> {
        match dialect {
            Dialect::Table => self.table.extract_bar(bar),
            Dialect::Slot => self.slot.extract_bar(bar),
        }
    }
}

/// Loads the bars of the transcript at `path`.
///
/// # Errors
///
/// * [`PipelineError::InputNotFound`] - `path` does not exist
/// * [`PipelineError::Read`] - `path` exists but cannot be read
/// * [`PipelineError::StructureNotFound`] - no `#transcript` element
/// * [`PipelineError::DialectNotRecognized`] - no bars in either dialect
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use sky_buttons::parser::load_active_map;
///
/// let bars = load_active_map(Path::new("song.html"))?;
/// println!("{} bars", bars.len());
/// # Ok::<(), sky_buttons::error::PipelineError>(())
/// ```
pub fn load_active_map(path: &Path) -> Result<FieldMap, PipelineError> {
    load_transcript(path).map(|transcript| transcript.bars)
}

/// Loads the transcript at `path`, keeping the detected dialect.
pub fn load_transcript(path: &Path) -> Result<Transcript, PipelineError> {
    if !path.exists() {
        return Err(PipelineError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|source| PipelineError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    // Undecodable bytes are replaced rather than rejected
    let html = String::from_utf8_lossy(&bytes);

    let transcript = parse_transcript(&html, path)?;
    info!(
        "Loaded {} bars ({} rests) from {} using the {} dialect",
        transcript.bars.len(),
        transcript.bars.silent_count(),
        path.display(),
        transcript.dialect.name()
    );
    Ok(transcript)
}

/// Parses transcript markup. `origin` is only used in error messages.
pub fn parse_transcript(html: &str, origin: &Path) -> Result<Transcript, PipelineError> {
    let document = Html::parse_document(html);
    let anchor_selector =
        Selector::parse(&format!("#{ANCHOR_ID}")).expect("static selector is valid");

    let anchor = document
        .select(&anchor_selector)
        .next()
        .ok_or_else(|| PipelineError::StructureNotFound {
            path: origin.to_path_buf(),
            anchor: ANCHOR_ID,
        })?;

    let extractors = Extractors::new();
    for dialect in Dialect::DETECTION_ORDER {
        let elements = extractors.bars(dialect, anchor);
        if elements.is_empty() {
            debug!("No {} bars under #{}", dialect.name(), ANCHOR_ID);
            continue;
        }

        debug!("Detected {} dialect with {} bars", dialect, elements.len());
        let bars = elements
            .into_iter()
            .map(|element| extractors.extract(dialect, element))
            .collect();
        return Ok(Transcript { dialect, bars });
    }

    Err(PipelineError::DialectNotRecognized {
        path: origin.to_path_buf(),
        anchor: ANCHOR_ID,
    })
}
