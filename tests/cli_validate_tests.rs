//! End-to-end tests for `sky-buttons validate`.

use std::fs;

use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_validate_complete_profile() {
    let temp = TempDir::new().unwrap();
    let assets = temp.path().join("assets");
    profile_dir(&assets, "pad", 1..=15);

    let output = run(
        &["validate", "pad", "--assets", assets.to_str().unwrap()],
        &temp.path().join("config"),
    );

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ pad: OK"));
}

#[test]
fn test_validate_reports_missing_and_extra_icons() {
    let temp = TempDir::new().unwrap();
    let assets = temp.path().join("assets");
    let dir = profile_dir(&assets, "pad", (1..=15).filter(|n| *n != 3));
    fs::write(dir.join("16.png"), b"png").unwrap();

    let output = run(
        &["validate", "pad", "--assets", assets.to_str().unwrap(), "--json"],
        &temp.path().join("config"),
    );

    assert_eq!(output.status.code(), Some(1));
    let reports: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    let report = &reports[0];
    assert_eq!(report["key"], "pad");
    assert_eq!(report["valid"], false);
    assert_eq!(report["missing"], serde_json::json!([3]));
    assert_eq!(report["extras"], serde_json::json!(["16.png"]));
    assert_eq!(
        report["problems"],
        serde_json::json!(["Missing icons: 3.", "Out-of-range files: 16.png."])
    );
}

#[test]
fn test_validate_all_profiles() {
    let temp = TempDir::new().unwrap();
    let assets = temp.path().join("assets");
    profile_dir(&assets, "good", 1..=15);
    profile_dir(&assets, "bad", 1..=2);

    let output = run(
        &["validate", "--assets", assets.to_str().unwrap()],
        &temp.path().join("config"),
    );

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ good: OK"));
    assert!(stdout.contains("✗ bad: 13 numbered icons missing."));
    assert!(stdout.contains("✓ xbox: OK"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid profiles: bad"));
}

#[test]
fn test_validate_missing_assets_dir() {
    let temp = TempDir::new().unwrap();
    let output = run(
        &[
            "validate",
            "--assets",
            temp.path().join("nope").to_str().unwrap(),
        ],
        &temp.path().join("config"),
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
}
