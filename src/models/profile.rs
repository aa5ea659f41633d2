//! Button profiles and their validation reports.

use crate::constants::{DEFAULT_REST_LABEL, PLACEHOLDER_PROFILE_KEY, REST_ICON_FILE};
use crate::models::bar::{is_valid_field, FieldNumber};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Where a profile came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileSource {
    /// Discovered as a subdirectory of the assets root
    Directory,
    /// One of the compiled-in label tables
    Builtin,
    /// Synthetic stand-in used when no profile exists
    Placeholder,
}

impl ProfileSource {
    /// Short lowercase name for listings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Directory => "directory",
            Self::Builtin => "builtin",
            Self::Placeholder => "placeholder",
        }
    }
}

/// A button-layout scheme: field position to label, plus optional icons.
///
/// Profiles are immutable values. Refreshing the registry builds new ones;
/// profiles handed out earlier stay valid snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Unique key (directory name or built-in table key)
    pub key: String,
    /// Display label
    pub label: String,
    /// Directory holding `1.png` .. `15.png`, if any
    pub asset_dir: Option<PathBuf>,
    /// Field position to button name
    pub names: BTreeMap<FieldNumber, String>,
    /// Label rendered for rests
    pub rest_label: String,
    /// Whether a text badge may stand in for a missing icon
    pub text_fallback: bool,
    /// Origin of the profile
    pub source: ProfileSource,
}

impl Profile {
    /// Synthetic profile returned when the registry is empty.
    ///
    /// It has no label table, so mapping through it yields only rests.
    #[must_use]
    pub fn placeholder(assets_root: &Path) -> Self {
        Self {
            key: PLACEHOLDER_PROFILE_KEY.to_string(),
            label: "(no profiles found)".to_string(),
            asset_dir: Some(assets_root.to_path_buf()),
            names: BTreeMap::new(),
            rest_label: DEFAULT_REST_LABEL.to_string(),
            text_fallback: true,
            source: ProfileSource::Placeholder,
        }
    }

    /// Looks up the label table entry for a field position.
    #[must_use]
    pub fn label_for(&self, field: FieldNumber) -> Option<&str> {
        self.names.get(&field).map(String::as_str)
    }

    /// Display name for a field position, falling back to the number itself.
    #[must_use]
    pub fn display_name_for(&self, field: FieldNumber) -> String {
        self.label_for(field)
            .map_or_else(|| field.to_string(), str::to_string)
    }

    /// Path of the numbered icon for `field`, if it exists on disk.
    #[must_use]
    pub fn icon_path(&self, field: FieldNumber) -> Option<PathBuf> {
        if !is_valid_field(field) {
            return None;
        }
        self.existing_asset(&format!("{field}.png"))
    }

    /// Resolves the icon for a mapped label.
    ///
    /// The numbered icon of the position carrying this label wins; otherwise
    /// `<label>.png` in the profile directory is used.
    #[must_use]
    pub fn icon_for_label(&self, label: &str) -> Option<PathBuf> {
        self.names
            .iter()
            .filter(|(_, name)| name.as_str() == label)
            .find_map(|(field, _)| self.icon_path(*field))
            .or_else(|| {
                if label.contains(['/', '\\']) || label.starts_with('.') {
                    return None;
                }
                self.existing_asset(&format!("{label}.png"))
            })
    }

    /// Path of the rest icon, if the profile ships one.
    #[must_use]
    pub fn rest_icon(&self) -> Option<PathBuf> {
        self.existing_asset(REST_ICON_FILE)
    }

    fn existing_asset(&self, file_name: &str) -> Option<PathBuf> {
        let path = self.asset_dir.as_ref()?.join(file_name);
        path.is_file().then_some(path)
    }
}

/// Validation result for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileReport {
    /// Profile key
    pub key: String,
    /// True when no icon is missing and no numbered file is out of range
    pub valid: bool,
    /// Field positions without a numbered icon
    pub missing: BTreeSet<FieldNumber>,
    /// Numbered icon files outside 1..=15
    pub extras: Vec<String>,
    /// Human-readable problems (`["OK"]` for a clean profile)
    pub problems: Vec<String>,
}

impl ProfileReport {
    /// Formats the problems as a single line.
    #[must_use]
    pub fn summary(&self) -> String {
        self.problems.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn profile_in(dir: &Path) -> Profile {
        let mut names = BTreeMap::new();
        names.insert(4, "A".to_string());
        names.insert(10, "B".to_string());
        Profile {
            key: "test".to_string(),
            label: "Test".to_string(),
            asset_dir: Some(dir.to_path_buf()),
            names,
            rest_label: "Rest".to_string(),
            text_fallback: true,
            source: ProfileSource::Directory,
        }
    }

    #[test]
    fn test_display_name_falls_back_to_number() {
        let temp = TempDir::new().unwrap();
        let profile = profile_in(temp.path());
        assert_eq!(profile.display_name_for(4), "A");
        assert_eq!(profile.display_name_for(5), "5");
        assert_eq!(profile.label_for(5), None);
    }

    #[test]
    fn test_icon_path_requires_existing_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("4.png"), b"png").unwrap();
        let profile = profile_in(temp.path());

        assert_eq!(profile.icon_path(4), Some(temp.path().join("4.png")));
        assert_eq!(profile.icon_path(10), None);
        assert_eq!(profile.icon_path(16), None);
    }

    #[test]
    fn test_icon_for_label_prefers_numbered_icon() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("4.png"), b"png").unwrap();
        fs::write(temp.path().join("A.png"), b"png").unwrap();
        fs::write(temp.path().join("B.png"), b"png").unwrap();
        let profile = profile_in(temp.path());

        assert_eq!(profile.icon_for_label("A"), Some(temp.path().join("4.png")));
        assert_eq!(profile.icon_for_label("B"), Some(temp.path().join("B.png")));
        assert_eq!(profile.icon_for_label("../B"), None);
    }

    #[test]
    fn test_placeholder_has_no_labels() {
        let profile = Profile::placeholder(Path::new("assets"));
        assert_eq!(profile.key, PLACEHOLDER_PROFILE_KEY);
        assert!(profile.names.is_empty());
        assert_eq!(profile.source, ProfileSource::Placeholder);
    }
}
