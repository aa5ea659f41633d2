//! Table dialect: one `<table class="harp">` per bar.
//!
//! Each table holds rows of `<td>` cells, five per row. A cell is pressed when
//! its `<svg>` marker contains an element classed `ON` or `ON-<n>`. The field
//! number comes from the svg's `button-<n>` class (0-based) when present, and
//! from the cell's grid position otherwise.

use crate::constants::GRID_COLUMNS;
use crate::models::{Bar, FieldNumber};
use crate::parser::has_class;
use regex::Regex;
use scraper::{ElementRef, Selector};
use tracing::debug;

/// Class marking a table with no pressed cells.
pub const SILENT_CLASS: &str = "silent";

/// Class prefix carrying the 0-based field index on the svg marker.
pub const BUTTON_CLASS_PREFIX: &str = "button-";

/// Compiled selectors and patterns for the table dialect.
#[derive(Debug)]
pub struct TableDialect {
    pub(crate) bars: Selector,
    rows: Selector,
    cells: Selector,
    marker: Selector,
    on_pattern: Regex,
}

impl TableDialect {
    /// Compiles the dialect's selectors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bars: Selector::parse("table.harp").expect("static selector is valid"),
            rows: Selector::parse("tr").expect("static selector is valid"),
            cells: Selector::parse("td").expect("static selector is valid"),
            marker: Selector::parse("svg").expect("static selector is valid"),
            on_pattern: Regex::new(r"\bON-\d+\b").expect("static pattern is valid"),
        }
    }

    /// Extracts the pressed fields of one table.
    pub fn extract_bar(&self, table: ElementRef<'_>) -> Bar<FieldNumber> {
        if has_class(table, SILENT_CLASS) {
            return Bar::Silent;
        }

        let mut active = Vec::new();
        for (row_idx, row) in table.select(&self.rows).enumerate() {
            for (col_idx, cell) in row.select(&self.cells).enumerate() {
                let marker = cell.select(&self.marker).next();
                if !self.is_marker_on(marker) {
                    continue;
                }

                let fallback = grid_position(row_idx + 1, col_idx + 1);
                match field_number(marker, fallback) {
                    Some(field) => active.push(field),
                    None => debug!(
                        "Dropping pressed cell at row {}, column {}: field number out of range",
                        row_idx + 1,
                        col_idx + 1
                    ),
                }
            }
        }

        Bar::from_fields(active)
    }

    /// Checks a cell's svg marker for an `ON`/`ON-<n>` class.
    ///
    /// The class scan covers the marker and all of its descendants; the raw
    /// markup is searched as well for documents with broken nesting.
    fn is_marker_on(&self, marker: Option<ElementRef<'_>>) -> bool {
        let Some(marker) = marker else {
            return false;
        };

        let structural = marker
            .descendants()
            .filter_map(ElementRef::wrap)
            .any(|node| {
                node.value()
                    .classes()
                    .any(|class| class == "ON" || class.starts_with("ON-"))
            });

        structural || self.on_pattern.is_match(&marker.html())
    }
}

impl Default for TableDialect {
    fn default() -> Self {
        Self::new()
    }
}

/// Field number of a cell from its 1-based row and column.
///
/// Assumes exactly [`GRID_COLUMNS`] cells per row; irregular rows are not corrected.
#[must_use]
pub const fn grid_position(row: usize, col: usize) -> usize {
    (row - 1) * GRID_COLUMNS + col
}

/// Resolves the 1-based field number of a cell.
///
/// A `button-<n>` class on the marker wins over the grid `fallback`.
fn field_number(marker: Option<ElementRef<'_>>, fallback: usize) -> Option<FieldNumber> {
    let explicit = marker.and_then(|svg| {
        svg.value().classes().find_map(|class| {
            class
                .strip_prefix(BUTTON_CLASS_PREFIX)
                .and_then(|index| index.parse::<usize>().ok())
                .map(|index| index.saturating_add(1))
        })
    });

    FieldNumber::try_from(explicit.unwrap_or(fallback)).ok()
}
