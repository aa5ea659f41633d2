//! Bar and bar-map data structures.

use crate::constants::FIELD_COUNT;
use serde::Serialize;
use std::collections::BTreeMap;

/// A field position inside a bar (1..=15).
pub type FieldNumber = u8;

/// One measure of a transcript.
///
/// # Invariants
///
/// - `Active` never holds an empty sequence; constructors collapse it to `Silent`
/// - Field bars built with [`Bar::from_fields`] are sorted, deduplicated and in range
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Bar<T> {
    /// No field is pressed (a rest)
    Silent,
    /// Pressed fields, or their labels once mapped, in ascending field order
    Active(Vec<T>),
}

impl<T> Bar<T> {
    /// Returns true for a rest.
    #[must_use]
    pub const fn is_silent(&self) -> bool {
        matches!(self, Self::Silent)
    }

    /// Returns the pressed values (empty for a rest).
    #[must_use]
    pub fn values(&self) -> &[T] {
        match self {
            Self::Silent => &[],
            Self::Active(values) => values,
        }
    }
}

impl Bar<FieldNumber> {
    /// Builds a field bar, dropping out-of-range numbers, sorting and deduplicating.
    pub fn from_fields<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = FieldNumber>,
    {
        let fields = sanitize_fields(fields);
        if fields.is_empty() {
            Self::Silent
        } else {
            Self::Active(fields)
        }
    }
}

impl Bar<String> {
    /// Builds a label bar; no labels means a rest.
    #[must_use]
    pub fn from_labels(labels: Vec<String>) -> Self {
        if labels.is_empty() {
            Self::Silent
        } else {
            Self::Active(labels)
        }
    }
}

/// Returns true if `field` is a valid field position.
#[must_use]
pub fn is_valid_field(field: FieldNumber) -> bool {
    (1..=FIELD_COUNT).contains(&field)
}

/// Drops out-of-range field numbers, then sorts and deduplicates the rest.
pub fn sanitize_fields<I>(fields: I) -> Vec<FieldNumber>
where
    I: IntoIterator<Item = FieldNumber>,
{
    let mut sanitized: Vec<FieldNumber> = fields
        .into_iter()
        .filter(|field| is_valid_field(*field))
        .collect();
    sanitized.sort_unstable();
    sanitized.dedup();
    sanitized
}

/// Ordered mapping from 1-based bar index to bar value.
///
/// Every pipeline stage builds a fresh map; none edits another stage's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActiveMap<T> {
    bars: BTreeMap<usize, Bar<T>>,
}

/// Bars as field positions (Loader output).
pub type FieldMap = ActiveMap<FieldNumber>;

/// Bars as profile labels (Mapper output).
pub type LabelMap = ActiveMap<String>;

impl<T> ActiveMap<T> {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bars: BTreeMap::new(),
        }
    }

    /// Inserts a bar at `index`, returning the bar it replaced.
    pub fn insert(&mut self, index: usize, bar: Bar<T>) -> Option<Bar<T>> {
        self.bars.insert(index, bar)
    }

    /// Appends a bar after the highest index and returns its index.
    pub fn push(&mut self, bar: Bar<T>) -> usize {
        let index = self.bars.keys().next_back().map_or(1, |last| last + 1);
        self.bars.insert(index, bar);
        index
    }

    /// Gets the bar at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Bar<T>> {
        self.bars.get(&index)
    }

    /// Number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Returns true if the map holds no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Number of rests.
    #[must_use]
    pub fn silent_count(&self) -> usize {
        self.bars.values().filter(|bar| bar.is_silent()).count()
    }

    /// Iterates bars in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Bar<T>)> {
        self.bars.iter().map(|(index, bar)| (*index, bar))
    }
}

impl<T> Default for ActiveMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(usize, Bar<T>)> for ActiveMap<T> {
    fn from_iter<I: IntoIterator<Item = (usize, Bar<T>)>>(iter: I) -> Self {
        Self {
            bars: iter.into_iter().collect(),
        }
    }
}

impl<T> FromIterator<Bar<T>> for ActiveMap<T> {
    /// Numbers bars 1..N in iteration order.
    fn from_iter<I: IntoIterator<Item = Bar<T>>>(iter: I) -> Self {
        Self {
            bars: iter
                .into_iter()
                .enumerate()
                .map(|(idx, bar)| (idx + 1, bar))
                .collect(),
        }
    }
}
