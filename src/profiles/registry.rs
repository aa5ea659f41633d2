//! Profile registry.
//!
//! A [`ProfileRegistry`] is an immutable snapshot of the discovered profiles
//! and their validation reports. Refreshing builds a new snapshot; callers that
//! still hold the old one keep a consistent view. [`SharedRegistry`] holds the
//! current snapshot for callers that need to swap it at runtime.

use crate::config::Config;
use crate::error::PipelineError;
use crate::export::{self, ExportOptions};
use crate::models::{FieldMap, LabelMap, Profile, ProfileReport};
use crate::profiles::builtin::builtin_profiles;
use crate::profiles::discover::{discover_profiles, resolve_assets_root};
use crate::profiles::validate::report_for;
use crate::services::mapper::map_active_map;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info, warn};

/// Snapshot of discovered profiles and their reports.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    assets_root: PathBuf,
    include_builtin: bool,
    generation: u64,
    profiles: BTreeMap<String, Arc<Profile>>,
    reports: BTreeMap<String, ProfileReport>,
}

impl ProfileRegistry {
    /// Discovers profiles under `assets_root`.
    ///
    /// With `include_builtin`, the built-in label tables are registered first
    /// and discovered directories with the same key replace them.
    pub fn discover(assets_root: impl Into<PathBuf>, include_builtin: bool) -> Self {
        Self::build(assets_root.into(), include_builtin, 1)
    }

    /// Discovers profiles using the configured (or resolved) assets root.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let root = resolve_assets_root(config.paths.assets_root.as_deref());
        Self::discover(root, config.profiles.include_builtin)
    }

    fn build(assets_root: PathBuf, include_builtin: bool, generation: u64) -> Self {
        let mut profiles: BTreeMap<String, Arc<Profile>> = BTreeMap::new();

        if include_builtin {
            for profile in builtin_profiles() {
                profiles.insert(profile.key.clone(), Arc::new(profile));
            }
        }

        match discover_profiles(&assets_root) {
            Ok(discovered) => {
                for (key, profile) in discovered {
                    profiles.insert(key, Arc::new(profile));
                }
            }
            Err(e) => warn!("Profile discovery failed: {e:#}"),
        }

        let reports = profiles
            .iter()
            .map(|(key, profile)| (key.clone(), report_for(profile)))
            .collect();

        info!(
            "Loaded {} profiles from {} (generation {})",
            profiles.len(),
            assets_root.display(),
            generation
        );

        Self {
            assets_root,
            include_builtin,
            generation,
            profiles,
            reports,
        }
    }

    /// Re-discovers profiles from the same root, returning a new snapshot.
    #[must_use]
    pub fn refresh(&self) -> Self {
        Self::build(
            self.assets_root.clone(),
            self.include_builtin,
            self.generation + 1,
        )
    }

    /// Root directory that was scanned.
    #[must_use]
    pub fn assets_root(&self) -> &Path {
        &self.assets_root
    }

    /// Discovery generation; starts at 1 and grows with every refresh.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Profile keys in lexicographic order.
    #[must_use]
    pub fn list_profiles(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }

    /// Profiles in key order.
    pub fn profiles(&self) -> impl Iterator<Item = &Arc<Profile>> {
        self.profiles.values()
    }

    /// Returns true if a profile with `key` was registered.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.profiles.contains_key(key)
    }

    /// Number of registered profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns true if no profile was registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Gets a profile by key.
    ///
    /// Falls back to the lexicographically first profile, then to a
    /// placeholder with no labels. Never fails.
    #[must_use]
    pub fn get_profile(&self, key: &str) -> Arc<Profile> {
        if let Some(profile) = self.profiles.get(key) {
            return Arc::clone(profile);
        }
        if let Some(first) = self.profiles.values().next() {
            debug!("Profile '{}' not found, using '{}'", key, first.key);
            return Arc::clone(first);
        }
        debug!("No profiles registered, using placeholder");
        Arc::new(Profile::placeholder(&self.assets_root))
    }

    /// Validation report for the profile `get_profile(key)` resolves to.
    #[must_use]
    pub fn profile_report(&self, key: &str) -> ProfileReport {
        self.reports
            .get(key)
            .cloned()
            .unwrap_or_else(|| report_for(&self.get_profile(key)))
    }

    /// Maps field bars to labels through the profile `key` resolves to.
    #[must_use]
    pub fn map(&self, active: &FieldMap, key: &str) -> LabelMap {
        map_active_map(active, &self.get_profile(key))
    }

    /// Exports mapped bars through the profile `key` resolves to.
    pub fn export(
        &self,
        mapping: &LabelMap,
        out_path: &Path,
        title: &str,
        key: &str,
        options: &ExportOptions,
    ) -> Result<PathBuf, PipelineError> {
        export::export_html(mapping, out_path, title, &self.get_profile(key), options)
    }
}

/// Lock-guarded holder of the current registry snapshot.
///
/// The registry is discovered on first use. `refresh` swaps in a new
/// snapshot in one step; readers get either the old or the new one.
#[derive(Debug)]
pub struct SharedRegistry {
    assets_root: PathBuf,
    include_builtin: bool,
    current: RwLock<Option<Arc<ProfileRegistry>>>,
}

impl SharedRegistry {
    /// Creates an unloaded holder for `assets_root`.
    pub fn new(assets_root: impl Into<PathBuf>, include_builtin: bool) -> Self {
        Self {
            assets_root: assets_root.into(),
            include_builtin,
            current: RwLock::new(None),
        }
    }

    /// Creates an unloaded holder using the configured (or resolved) assets root.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            resolve_assets_root(config.paths.assets_root.as_deref()),
            config.profiles.include_builtin,
        )
    }

    /// Returns true once profiles have been discovered.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Current snapshot, discovering profiles on first use.
    #[must_use]
    pub fn snapshot(&self) -> Arc<ProfileRegistry> {
        if let Some(registry) = self
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Arc::clone(registry);
        }

        let mut current = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(current.get_or_insert_with(|| {
            Arc::new(ProfileRegistry::discover(
                self.assets_root.clone(),
                self.include_builtin,
            ))
        }))
    }

    /// Re-discovers profiles and replaces the current snapshot.
    pub fn refresh(&self) -> Arc<ProfileRegistry> {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let next = match current.as_ref() {
            Some(registry) => registry.refresh(),
            None => ProfileRegistry::discover(self.assets_root.clone(), self.include_builtin),
        };
        let next = Arc::new(next);
        *current = Some(Arc::clone(&next));
        next
    }
}
