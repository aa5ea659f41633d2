//! End-to-end tests for `sky-buttons inspect`.

use std::fs;

use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_inspect_json_lists_numeric_and_labeled_bars() {
    let temp = TempDir::new().unwrap();
    let assets = temp.path().join("assets");
    fs::create_dir_all(&assets).unwrap();
    let input = write_file(
        temp.path(),
        "song.html",
        &slot_transcript(&[&[], &[4, 10]]),
    );

    let output = run(
        &[
            "inspect",
            input.to_str().unwrap(),
            "--assets",
            assets.to_str().unwrap(),
            "--json",
        ],
        &temp.path().join("config"),
    );

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert_eq!(result["dialect"], "slot");
    assert_eq!(result["profile"], "xbox");
    assert_eq!(result["bar_count"], 2);
    assert_eq!(result["rest_count"], 1);
    assert_eq!(result["bars"][0]["fields"], "silent");
    assert_eq!(
        result["bars"][1]["fields"],
        serde_json::json!({ "active": [4, 10] })
    );
    assert_eq!(
        result["bars"][1]["labels"],
        serde_json::json!({ "active": ["A", "B"] })
    );
}

#[test]
fn test_inspect_human_readable() {
    let temp = TempDir::new().unwrap();
    let assets = temp.path().join("assets");
    fs::create_dir_all(&assets).unwrap();
    let input = write_file(temp.path(), "song.html", &table_transcript(&[&[1], &[]]));

    let output = run(
        &[
            "inspect",
            input.to_str().unwrap(),
            "-p",
            "switch",
            "--assets",
            assets.to_str().unwrap(),
        ],
        &temp.path().join("config"),
    );

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Dialect: table"));
    assert!(stdout.contains("[ZL]"));
    assert!(stdout.contains("Silent"));
}

#[test]
fn test_inspect_unrecognized_dialect() {
    let temp = TempDir::new().unwrap();
    let input = write_file(temp.path(), "song.html", &transcript_page("<div>none</div>"));

    let output = run(
        &["inspect", input.to_str().unwrap()],
        &temp.path().join("config"),
    );

    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("No recognizable bar structure"));
}
