//! Compiled-in label tables.
//!
//! These tables cover the common controllers and keyboard layouts. They are
//! registered as text-only profiles and serve as label defaults for profile
//! directories with the same key.

use crate::constants::{DEFAULT_REST_LABEL, FIELD_COUNT};
use crate::models::{FieldNumber, Profile, ProfileSource};
use std::collections::BTreeMap;

/// A built-in position-to-label table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinTable {
    /// Profile key
    pub key: &'static str,
    /// Display label
    pub label: &'static str,
    /// Labels for fields 1..=15, in order
    pub labels: [&'static str; FIELD_COUNT as usize],
}

/// Xbox / PC controller.
pub const XBOX: BuiltinTable = BuiltinTable {
    key: "xbox",
    label: "Xbox / PC",
    labels: [
        "LT",
        "RT",
        "Dpad_Down",
        "A",
        "Dpad_Left",
        "X",
        "Dpad_Up",
        "Y",
        "Dpad_Right",
        "B",
        "LB",
        "RB",
        "LeftStick_left",
        "RightStick_left",
        "LeftStick_Right",
    ],
};

/// PlayStation controller.
pub const PLAYSTATION: BuiltinTable = BuiltinTable {
    key: "ps",
    label: "PlayStation",
    labels: [
        "L2",
        "R2",
        "Dpad_Down",
        "Cross",
        "Dpad_Left",
        "Square",
        "Dpad_Up",
        "Triangle",
        "Dpad_Right",
        "Circle",
        "L1",
        "R1",
        "LeftStick_left",
        "RightStick_left",
        "LeftStick_Right",
    ],
};

/// Nintendo Switch controller.
pub const SWITCH: BuiltinTable = BuiltinTable {
    key: "switch",
    label: "Switch",
    labels: [
        "ZL",
        "ZR",
        "Dpad_Down",
        "B",
        "Dpad_Left",
        "Y",
        "Dpad_Up",
        "X",
        "Dpad_Right",
        "A",
        "L",
        "R",
        "LeftStick_left",
        "RightStick_left",
        "LeftStick_Right",
    ],
};

/// US QWERTY keyboard.
pub const KEYBOARD_EN: BuiltinTable = BuiltinTable {
    key: "kb_en",
    label: "Keyboard (EN)",
    labels: [
        "Y", "U", "I", "O", "P", "H", "J", "K", "L", ";", "N", "M", ",", ".", "/",
    ],
};

/// German QWERTZ keyboard.
pub const KEYBOARD_DE: BuiltinTable = BuiltinTable {
    key: "kb_de",
    label: "Keyboard (DE)",
    labels: [
        "Z", "U", "I", "O", "P", "H", "J", "K", "L", "Ö", "N", "M", ",", ".", "-",
    ],
};

/// Every built-in table, sorted by key.
pub static BUILTIN_TABLES: [BuiltinTable; 5] =
    [KEYBOARD_DE, KEYBOARD_EN, PLAYSTATION, SWITCH, XBOX];

impl BuiltinTable {
    /// Field-to-label map of this table.
    #[must_use]
    pub fn names(&self) -> BTreeMap<FieldNumber, String> {
        (1..=FIELD_COUNT)
            .zip(self.labels.iter())
            .map(|(field, label)| (field, (*label).to_string()))
            .collect()
    }

    /// Text-only profile built from this table.
    #[must_use]
    pub fn to_profile(&self) -> Profile {
        Profile {
            key: self.key.to_string(),
            label: self.label.to_string(),
            asset_dir: None,
            names: self.names(),
            rest_label: DEFAULT_REST_LABEL.to_string(),
            text_fallback: true,
            source: ProfileSource::Builtin,
        }
    }
}

/// Finds the built-in table with `key`.
#[must_use]
pub fn builtin_table(key: &str) -> Option<&'static BuiltinTable> {
    BUILTIN_TABLES.iter().find(|table| table.key == key)
}

/// Text-only profiles for every built-in table.
#[must_use]
pub fn builtin_profiles() -> Vec<Profile> {
    BUILTIN_TABLES.iter().map(BuiltinTable::to_profile).collect()
}
