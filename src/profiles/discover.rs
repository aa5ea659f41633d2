//! Profile discovery.
//!
//! Finds the icon assets root and turns each profile-looking subdirectory into
//! a [`Profile`]. An optional `profile.json` fills in the label, rest label,
//! per-position names and the text fallback flag.

use crate::constants::{
    APP_DIR_NAME, ASSET_DIR_NAMES, DEFAULT_REST_LABEL, FIELD_COUNT, PROFILE_META_FILE,
};
use crate::models::{bar::is_valid_field, FieldNumber, Profile, ProfileSource};
use crate::profiles::builtin::builtin_table;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Contents of `profile.json`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
struct ProfileMeta {
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    rest_label: Option<String>,
    #[serde(default)]
    text_fallback: Option<bool>,
    /// Keys are field numbers as strings; non-string values are skipped
    #[serde(default)]
    names: BTreeMap<String, serde_json::Value>,
}

/// Lists the directories that may hold profiles, most specific first.
///
/// Order: the configured root, directories next to the executable, the same
/// names under the working directory, then the platform data directory.
#[must_use]
pub fn candidate_roots(configured: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(root) = configured {
        candidates.push(root.to_path_buf());
    }

    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.extend(ASSET_DIR_NAMES.iter().map(|name| exe_dir.join(name)));
    }

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(ASSET_DIR_NAMES.iter().map(|name| cwd.join(name)));
    }

    if let Some(data_dir) = dirs::data_dir() {
        candidates.push(data_dir.join(APP_DIR_NAME).join("profiles"));
    }

    let mut unique = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !unique.contains(&candidate) {
            unique.push(candidate);
        }
    }
    unique
}

/// Returns the first existing candidate root, or `./sntb-ui` if none exists.
#[must_use]
pub fn resolve_assets_root(configured: Option<&Path>) -> PathBuf {
    candidate_roots(configured)
        .into_iter()
        .find(|candidate| candidate.is_dir())
        .map(|root| root.canonicalize().unwrap_or(root))
        .unwrap_or_else(|| PathBuf::from(ASSET_DIR_NAMES[0]))
}

/// Returns true if `dir` contains `profile.json` or at least one `.png`.
///
/// Hidden directories never qualify.
#[must_use]
pub fn dir_looks_like_profile(dir: &Path) -> bool {
    if !dir.is_dir() {
        return false;
    }
    let hidden = dir
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'));
    if hidden {
        return false;
    }
    if dir.join(PROFILE_META_FILE).exists() {
        return true;
    }

    fs::read_dir(dir).is_ok_and(|entries| {
        entries.flatten().any(|entry| {
            let path = entry.path();
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
        })
    })
}

/// Discovers every profile under `root`, keyed by directory name.
///
/// A missing root yields no profiles.
///
/// # Errors
///
/// Returns an error if `root` exists but cannot be listed.
pub fn discover_profiles(root: &Path) -> Result<BTreeMap<String, Profile>> {
    let mut profiles = BTreeMap::new();
    if !root.exists() {
        debug!("Assets root {} does not exist", root.display());
        return Ok(profiles);
    }

    let entries = fs::read_dir(root)
        .with_context(|| format!("Failed to read assets root: {}", root.display()))?;

    let mut dirs: Vec<PathBuf> = entries.flatten().map(|entry| entry.path()).collect();
    dirs.sort();

    for dir in dirs {
        if !dir_looks_like_profile(&dir) {
            continue;
        }
        let Some(key) = dir.file_name().and_then(|name| name.to_str()) else {
            warn!("Skipping profile directory with non UTF-8 name: {}", dir.display());
            continue;
        };

        let profile = load_profile_dir(&dir, key);
        debug!(
            "Discovered profile '{}' ({}) at {}",
            profile.key,
            profile.label,
            dir.display()
        );
        profiles.insert(profile.key.clone(), profile);
    }

    Ok(profiles)
}

/// Builds the profile for one directory.
///
/// Defaults come from the built-in table with the same key if there is one,
/// otherwise the directory name and numeric position names.
fn load_profile_dir(dir: &Path, key: &str) -> Profile {
    let meta = load_profile_meta(dir);
    let builtin = builtin_table(key);

    let mut names: BTreeMap<FieldNumber, String> = match builtin {
        Some(table) => table.names(),
        None => (1..=FIELD_COUNT)
            .map(|field| (field, field.to_string()))
            .collect(),
    };
    for (raw_key, value) in &meta.names {
        let Ok(field) = raw_key.trim().parse::<FieldNumber>() else {
            continue;
        };
        if let (true, Some(name)) = (is_valid_field(field), value.as_str()) {
            names.insert(field, name.to_string());
        }
    }

    let label = meta
        .label
        .or_else(|| builtin.map(|table| table.label.to_string()))
        .unwrap_or_else(|| key.to_string());

    Profile {
        key: key.to_string(),
        label,
        asset_dir: Some(dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf())),
        names,
        rest_label: meta
            .rest_label
            .unwrap_or_else(|| DEFAULT_REST_LABEL.to_string()),
        text_fallback: meta.text_fallback.unwrap_or(true),
        source: ProfileSource::Directory,
    }
}

/// Reads `profile.json`; unreadable or malformed metadata is ignored.
fn load_profile_meta(dir: &Path) -> ProfileMeta {
    let meta_path = dir.join(PROFILE_META_FILE);
    if !meta_path.exists() {
        return ProfileMeta::default();
    }

    let parsed = fs::read_to_string(&meta_path)
        .with_context(|| format!("Failed to read {}", meta_path.display()))
        .and_then(|content| {
            serde_json::from_str::<ProfileMeta>(&content)
                .with_context(|| format!("Failed to parse {}", meta_path.display()))
        });

    match parsed {
        Ok(meta) => meta,
        Err(e) => {
            warn!("Ignoring profile metadata: {e:#}");
            ProfileMeta::default()
        }
    }
}
