//! End-to-end tests for the load → map → export pipeline through the library.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use sky_buttons::export::{export_html, ExportOptions};
use sky_buttons::parser::{load_active_map, load_transcript, parse_transcript, Dialect};
use sky_buttons::profiles::report_for;
use sky_buttons::services::map_active_map;
use sky_buttons::{Bar, ConversionService, ErrorKind, ProfileRegistry};
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

fn labels(values: &[&str]) -> Bar<String> {
    Bar::Active(values.iter().map(|v| (*v).to_string()).collect())
}

#[test]
fn test_table_scenario_maps_to_xbox_a() {
    let temp = TempDir::new().unwrap();
    let html = transcript_page(
        r#"<table class="harp silent"><tr><td><svg></svg></td></tr></table>
<table class="harp"><tr><td></td><td><svg class="button-3 ON"></svg></td></tr></table>"#,
    );
    let input = write_file(temp.path(), "song.html", &html);

    let active = load_active_map(&input).unwrap();
    assert_eq!(active.len(), 2);
    assert_eq!(active.get(1), Some(&Bar::Silent));
    assert_eq!(active.get(2), Some(&Bar::Active(vec![4])));

    let registry = ProfileRegistry::discover(temp.path().join("assets"), true);
    let mapped = registry.map(&active, "xbox");
    assert_eq!(mapped.get(1), Some(&Bar::Silent));
    assert_eq!(mapped.get(2), Some(&labels(&["A"])));

    let out = temp.path().join("out.html");
    registry
        .export(&mapped, &out, "Song", "xbox", &ExportOptions::default())
        .unwrap();
    let page = fs::read_to_string(&out).unwrap();
    assert_eq!(page.matches("data-bar=").count(), 2);
    assert!(page.contains("\u{1D13D}"));
    assert!(page.contains(">A</span>"));
}

#[test]
fn test_slot_scenario_single_pressed_child() {
    let slots: String = (1..=15)
        .map(|n| {
            if n == 7 {
                r#"<crc class="r1"></crc>"#.to_string()
            } else {
                format!("<d{0}></d{0}>", n % 3 + 1)
            }
        })
        .collect();
    let html = transcript_page(&format!(r#"<div class="instr harp">{slots}</div>"#));

    let transcript = parse_transcript(&html, Path::new("song.html")).unwrap();
    assert_eq!(transcript.dialect, Dialect::Slot);
    assert_eq!(transcript.bars.len(), 1);
    assert_eq!(transcript.bars.get(1), Some(&Bar::Active(vec![7])));
}

#[test]
fn test_dialects_yield_identical_maps() {
    let bars: &[&[u8]] = &[&[], &[1, 5], &[15], &[2, 7, 12], &[]];

    let table = parse_transcript(&table_transcript(bars), Path::new("a.html")).unwrap();
    let slot = parse_transcript(&slot_transcript(bars), Path::new("b.html")).unwrap();

    assert_eq!(table.dialect, Dialect::Table);
    assert_eq!(slot.dialect, Dialect::Slot);
    assert_eq!(table.bars, slot.bars);
    assert_eq!(table.bars.len(), 5);
    assert_eq!(table.bars.silent_count(), 2);
}

#[test]
fn test_load_errors_are_distinct() {
    let temp = TempDir::new().unwrap();

    let err = load_active_map(&temp.path().join("nope.html")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InputNotFound);

    let no_anchor = write_file(temp.path(), "plain.html", "<html><body></body></html>");
    let err = load_active_map(&no_anchor).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StructureNotFound);

    let no_bars = write_file(
        temp.path(),
        "empty.html",
        &transcript_page("<p>nothing here</p>"),
    );
    let err = load_active_map(&no_bars).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DialectNotRecognized);
}

#[test]
fn test_invalid_utf8_is_tolerated() {
    let temp = TempDir::new().unwrap();
    let mut bytes = table_transcript(&[&[3]]).into_bytes();
    bytes.splice(0..0, [0xff, 0xfe, 0x00]);
    let input = temp.path().join("broken.html");
    fs::write(&input, bytes).unwrap();

    let transcript = load_transcript(&input).unwrap();
    assert_eq!(transcript.bars.get(1), Some(&Bar::Active(vec![3])));
}

#[test]
fn test_validation_completeness() {
    let temp = TempDir::new().unwrap();
    let assets = temp.path().join("assets");
    let dir = profile_dir(&assets, "pad", 1..=15);

    let registry = ProfileRegistry::discover(&assets, false);
    let report = registry.profile_report("pad");
    assert!(report.valid);
    assert_eq!(report.problems, vec!["OK"]);

    fs::remove_file(dir.join("9.png")).unwrap();
    fs::write(dir.join("16.png"), b"png").unwrap();
    let registry = registry.refresh();
    let report = registry.profile_report("pad");
    assert!(!report.valid);
    assert_eq!(report.missing.iter().copied().collect::<Vec<_>>(), vec![9]);
    assert_eq!(report.extras, vec!["16.png"]);
}

#[test]
fn test_icon_profile_is_inlined_into_page() {
    let temp = TempDir::new().unwrap();
    let assets = temp.path().join("assets");
    let dir = profile_dir(&assets, "pad", 1..=15);
    profile_meta(
        &dir,
        &serde_json::json!({
            "label": "My Pad",
            "names": { "4": "Jump" }
        }),
    );

    let registry = ProfileRegistry::discover(&assets, false);
    let profile = registry.get_profile("pad");
    assert_eq!(profile.label, "My Pad");
    assert!(report_for(&profile).valid);

    let input = write_file(temp.path(), "song.html", &table_transcript(&[&[4]]));
    let active = load_active_map(&input).unwrap();
    let mapped = map_active_map(&active, &profile);
    assert_eq!(mapped.get(1), Some(&labels(&["Jump"])));

    let out = temp.path().join("out.html");
    export_html(&mapped, &out, "Song", &profile, &ExportOptions::default()).unwrap();
    let page = fs::read_to_string(&out).unwrap();
    assert!(page.contains("src=\"data:image/png;base64,"));
    assert!(page.contains("alt=\"Jump\""));
    assert!(!page.contains("src=\"file:"));
}

#[test]
fn test_conversion_service_end_to_end() {
    let temp = TempDir::new().unwrap();
    let input = write_file(
        temp.path(),
        "song.html",
        &slot_transcript(&[&[1, 2], &[], &[10]]),
    );
    let output = temp.path().join("charts").join("song.html");

    let registry = Arc::new(ProfileRegistry::discover(temp.path().join("assets"), true));
    let service = ConversionService::new(registry, ExportOptions::default());
    let written = service.convert(&input, &output, "Song", "ps").unwrap();

    let page = fs::read_to_string(written).unwrap();
    assert!(page.contains(">L2</span>"));
    assert!(page.contains(">R2</span>"));
    assert!(page.contains(">Circle</span>"));
    assert!(page.contains("Profile: PlayStation"));
}
