//! Application-wide constants.
//!
//! This module defines the application name, the fixed geometry of a bar
//! and the file names the profile assets are expected to use.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Sky: Notes → Buttons";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "sky-buttons";

/// Number of field positions (button slots) in one bar.
pub const FIELD_COUNT: u8 = 15;

/// Columns per row in the table dialect grid.
pub const GRID_COLUMNS: usize = 5;

/// Id of the element that wraps every bar of a transcript.
pub const ANCHOR_ID: &str = "transcript";

/// Profile used when nothing else is configured.
pub const DEFAULT_PROFILE: &str = "xbox";

/// Title written into exported charts unless overridden.
pub const DEFAULT_TITLE: &str = "Sky: Notes to Buttons";

/// Label shown for a bar with no pressed fields.
pub const DEFAULT_REST_LABEL: &str = "Rest";

/// Optional per-profile metadata file.
pub const PROFILE_META_FILE: &str = "profile.json";

/// Optional per-profile icon for rests.
pub const REST_ICON_FILE: &str = "rest.png";

/// Key of the synthetic profile returned when no profile exists.
pub const PLACEHOLDER_PROFILE_KEY: &str = "(none)";

/// Directory names probed when looking for the profile assets root.
pub const ASSET_DIR_NAMES: [&str; 4] = ["sntb-ui", "sntb_ui", "ui", "assets/sntb-ui"];

/// Directory name used under the platform config/data directories.
pub const APP_DIR_NAME: &str = "SkyNotesToButtons";

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "SKY_BUTTONS_CONFIG_DIR";

/// Bars per section in exported charts.
pub const DEFAULT_GROUP_SIZE: usize = 8;
