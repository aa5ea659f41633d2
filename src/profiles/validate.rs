//! Profile validation.
//!
//! Checks that a profile directory holds `1.png` through `15.png`, flags
//! numbered icons outside that range and builds a human-readable problem list.

use crate::constants::FIELD_COUNT;
use crate::models::{FieldNumber, Profile, ProfileReport};
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Longest list of numbers or files spelled out in a problem message.
const MAX_LISTED: usize = 6;

/// Validates `profile` against its icon directory.
///
/// Text-only profiles (no icon directory) are valid when they allow text
/// badges.
#[must_use]
pub fn report_for(profile: &Profile) -> ProfileReport {
    let Some(asset_dir) = profile.asset_dir.as_deref() else {
        return text_only_report(profile);
    };

    let present: BTreeSet<FieldNumber> = (1..=FIELD_COUNT)
        .filter(|field| asset_dir.join(format!("{field}.png")).exists())
        .collect();
    let missing: BTreeSet<FieldNumber> = (1..=FIELD_COUNT)
        .filter(|field| !present.contains(field))
        .collect();
    let extras = out_of_range_icons(asset_dir);

    let mut problems = Vec::new();
    if present.is_empty() {
        problems.push("No numbered icons found (expected 1.png–15.png).".to_string());
    }
    if !missing.is_empty() {
        problems.push(if missing.len() <= MAX_LISTED {
            let listed: Vec<String> = missing.iter().map(ToString::to_string).collect();
            format!("Missing icons: {}.", listed.join(", "))
        } else {
            format!("{} numbered icons missing.", missing.len())
        });
    }
    if !extras.is_empty() {
        problems.push(if extras.len() <= MAX_LISTED {
            format!("Out-of-range files: {}.", extras.join(", "))
        } else {
            format!("{} out-of-range numbered files present.", extras.len())
        });
    }

    let valid = missing.is_empty() && extras.is_empty();
    if valid && problems.is_empty() {
        problems.push("OK".to_string());
    }

    ProfileReport {
        key: profile.key.clone(),
        valid,
        missing,
        extras,
        problems,
    }
}

fn text_only_report(profile: &Profile) -> ProfileReport {
    let problems = if profile.text_fallback {
        vec!["OK".to_string()]
    } else {
        vec!["No icon directory and text badges are disabled.".to_string()]
    };

    ProfileReport {
        key: profile.key.clone(),
        valid: profile.text_fallback,
        missing: BTreeSet::new(),
        extras: Vec::new(),
        problems,
    }
}

/// Numbered `.png` files whose number is outside 1..=15, sorted by name.
fn out_of_range_icons(dir: &Path) -> Vec<String> {
    let numbered = Regex::new(r"(?i)^(\d+)\.png$").expect("static pattern is valid");

    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut extras: Vec<String> = entries
        .flatten()
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| {
            numbered.captures(name).is_some_and(|caps| {
                caps[1]
                    .parse::<u64>()
                    .map_or(true, |number| !(1..=u64::from(FIELD_COUNT)).contains(&number))
            })
        })
        .collect();
    extras.sort();
    extras
}
