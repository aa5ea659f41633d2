//! Field-to-label mapping.
//!
//! The mapper sanitizes each bar's field positions and translates them through
//! a profile's label table. It is a pure function of its inputs.

use crate::models::{sanitize_fields, Bar, FieldMap, FieldNumber, LabelMap, Profile};

/// Translates every bar of `active` into labels.
///
/// Bars keep their indices. A bar whose positions all lack a label becomes
/// [`Bar::Silent`].
#[must_use]
pub fn map_active_map(active: &FieldMap, profile: &Profile) -> LabelMap {
    active
        .iter()
        .map(|(index, bar)| (index, map_bar(bar, profile)))
        .collect()
}

/// Translates one bar into labels.
#[must_use]
pub fn map_bar(bar: &Bar<FieldNumber>, profile: &Profile) -> Bar<String> {
    match bar {
        Bar::Silent => Bar::Silent,
        Bar::Active(fields) => Bar::from_labels(
            sanitize_fields(fields.iter().copied())
                .into_iter()
                .filter_map(|field| profile.label_for(field).map(str::to_string))
                .collect(),
        ),
    }
}
