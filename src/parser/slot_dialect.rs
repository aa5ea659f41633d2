//! Slot dialect: one `<div class="instr harp">` per bar.
//!
//! A bar holds fifteen ordered slot elements. Only content slots (`crc`,
//! `dmn`) can be pressed, and only when they carry a pressed marker and not
//! the empty marker.

use crate::constants::FIELD_COUNT;
use crate::models::{Bar, FieldNumber};
use crate::parser::has_class;
use scraper::{ElementRef, Selector};

/// Tags that can hold a note.
pub const CONTENT_TAGS: [&str; 2] = ["crc", "dmn"];

/// Classes marking a content slot as pressed.
pub const PRESSED_MARKERS: [&str; 3] = ["r1", "r2", "r3"];

/// Class marking a content slot as empty.
pub const EMPTY_MARKER: &str = "n";

/// Class marking a bar with no pressed slots.
pub const SILENT_CLASS: &str = "silent";

/// Compiled selectors for the slot dialect.
#[derive(Debug)]
pub struct SlotDialect {
    pub(crate) bars: Selector,
}

impl SlotDialect {
    /// Compiles the dialect's selectors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bars: Selector::parse("div.instr.harp").expect("static selector is valid"),
        }
    }

    /// Extracts the pressed fields of one bar.
    ///
    /// Field numbers are the 1-based positions of the first fifteen element
    /// children; text nodes are skipped.
    pub fn extract_bar(&self, bar: ElementRef<'_>) -> Bar<FieldNumber> {
        if has_class(bar, SILENT_CLASS) {
            return Bar::Silent;
        }

        let active = bar
            .children()
            .filter_map(ElementRef::wrap)
            .take(usize::from(FIELD_COUNT))
            .zip(1..=FIELD_COUNT)
            .filter(|(slot, _)| is_slot_pressed(*slot))
            .map(|(_, field)| field);

        Bar::from_fields(active)
    }
}

impl Default for SlotDialect {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns true if a slot element is a pressed note.
#[must_use]
pub fn is_slot_pressed(slot: ElementRef<'_>) -> bool {
    let element = slot.value();
    CONTENT_TAGS.iter().any(|tag| *tag == element.name())
        && element
            .classes()
            .any(|class| PRESSED_MARKERS.iter().any(|marker| *marker == class))
        && !has_class(slot, EMPTY_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn slots(pressed_at: usize, pressed: &str) -> String {
        (1..=15)
            .map(|idx| {
                if idx == pressed_at {
                    pressed.to_string()
                } else {
                    format!("<d{0}></d{0}>", idx % 3 + 1)
                }
            })
            .collect()
    }

    fn first_bar(html: &str) -> Bar<FieldNumber> {
        let document = Html::parse_document(html);
        let dialect = SlotDialect::new();
        let bar = document.select(&dialect.bars).next().unwrap();
        dialect.extract_bar(bar)
    }

    #[test]
    fn test_pressed_circle_slot() {
        let html = format!(
            r#"<div class="instr harp">{}</div>"#,
            slots(7, r#"<crc class="r1"></crc>"#)
        );
        assert_eq!(first_bar(&html), Bar::Active(vec![7]));
    }

    #[test]
    fn test_empty_marker_wins() {
        let html = format!(
            r#"<div class="instr harp">{}</div>"#,
            slots(7, r#"<crc class="r1 n"></crc>"#)
        );
        assert_eq!(first_bar(&html), Bar::Silent);
    }

    #[test]
    fn test_non_content_tag_is_ignored() {
        let html = format!(
            r#"<div class="instr harp">{}</div>"#,
            slots(3, r#"<span class="r1"></span>"#)
        );
        assert_eq!(first_bar(&html), Bar::Silent);
    }

    #[test]
    fn test_diamond_slot_with_second_marker() {
        let html = format!(
            r#"<div class="instr harp">{}</div>"#,
            slots(15, r#"<dmn class="r3"></dmn>"#)
        );
        assert_eq!(first_bar(&html), Bar::Active(vec![15]));
    }

    #[test]
    fn test_only_first_fifteen_children_count() {
        let mut inner = slots(1, r#"<crc class="r2"></crc>"#);
        inner.push_str(r#"<crc class="r1"></crc>"#);
        let html = format!(r#"<div class="instr harp">{inner}</div>"#);
        assert_eq!(first_bar(&html), Bar::Active(vec![1]));
    }

    #[test]
    fn test_whitespace_between_slots_is_skipped() {
        let html = r#"<div class="instr harp">
            <crc class="r1"></crc>
            <d2></d2>
            <dmn class="r1"></dmn>
        </div>"#;
        assert_eq!(first_bar(html), Bar::Active(vec![1, 3]));
    }

    #[test]
    fn test_silent_bar_short_circuits() {
        let html = r#"<div class="instr harp silent"><crc class="r1"></crc></div>"#;
        assert_eq!(first_bar(html), Bar::Silent);
    }
}
