//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Path to the sky-buttons binary
pub fn sky_buttons_bin() -> &'static str {
    env!("CARGO_BIN_EXE_sky-buttons")
}

/// Creates a Command with an isolated config directory.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(sky_buttons_bin());
    cmd.env("SKY_BUTTONS_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs the binary with an isolated config directory.
pub fn run(args: &[&str], config_dir: &Path) -> Output {
    isolated_command(args, config_dir)
        .output()
        .expect("Failed to execute command")
}

/// Wraps bar markup in a saved transcript page.
pub fn transcript_page(bars: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><head><title>Saved song</title></head>
<body>
<div class="header">Some Song</div>
<div id="transcript">
{bars}
</div>
</body></html>"#
    )
}

/// One table-dialect bar: three rows of five cells, `fields` pressed.
///
/// An empty `fields` slice yields a table classed `silent`.
pub fn table_bar(fields: &[u8]) -> String {
    if fields.is_empty() {
        return r#"<table class="harp silent"><tr><td></td></tr></table>"#.to_string();
    }

    let mut html = String::from(r#"<table class="harp">"#);
    for row in 0..3u8 {
        html.push_str("<tr>");
        for col in 0..5u8 {
            let field = row * 5 + col + 1;
            let state = if fields.contains(&field) { "ON" } else { "OFF" };
            html.push_str(&format!(
                r#"<td><svg class="button-{}"><path class="{state}"></path></svg></td>"#,
                field - 1
            ));
        }
        html.push_str("</tr>");
    }
    html.push_str("</table>");
    html
}

/// One slot-dialect bar: fifteen slots, `fields` pressed.
///
/// An empty `fields` slice yields a bar classed `silent`.
pub fn slot_bar(fields: &[u8]) -> String {
    if fields.is_empty() {
        return r#"<div class="instr harp silent"></div>"#.to_string();
    }

    let slots: String = (1..=15u8)
        .map(|field| {
            if fields.contains(&field) {
                r#"<crc class="r1"></crc>"#.to_string()
            } else {
                r#"<crc class="n"></crc>"#.to_string()
            }
        })
        .collect();
    format!(r#"<div class="instr harp">{slots}</div>"#)
}

/// Table-dialect transcript with one bar per entry of `bars`.
pub fn table_transcript(bars: &[&[u8]]) -> String {
    transcript_page(&bars.iter().map(|b| table_bar(b)).collect::<String>())
}

/// Slot-dialect transcript with one bar per entry of `bars`.
pub fn slot_transcript(bars: &[&[u8]]) -> String {
    transcript_page(&bars.iter().map(|b| slot_bar(b)).collect::<String>())
}

/// Writes `content` to `dir/name` and returns the path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write fixture file");
    path
}

/// Creates `assets/<key>` holding numbered icons for `icons`.
pub fn profile_dir(assets: &Path, key: &str, icons: impl IntoIterator<Item = u32>) -> PathBuf {
    let dir = assets.join(key);
    fs::create_dir_all(&dir).expect("Failed to create profile dir");
    for n in icons {
        fs::write(dir.join(format!("{n}.png")), b"\x89PNG fake").expect("Failed to write icon");
    }
    dir
}

/// Writes `profile.json` into a profile directory.
pub fn profile_meta(dir: &Path, json: &serde_json::Value) {
    fs::write(dir.join("profile.json"), json.to_string()).expect("Failed to write profile.json");
}
