//! HTML export of mapped bars.
//!
//! The exporter renders a [`LabelMap`] into one self-contained HTML page and
//! writes it atomically: the document goes to a temp file next to the target,
//! which is then renamed over it.

pub mod html_renderer;
pub mod icons;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::constants::DEFAULT_GROUP_SIZE;
use crate::error::PipelineError;
use crate::models::{LabelMap, Profile};

pub use html_renderer::{escape_html, render_document};

/// Rendering options for the exported page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Bars per captioned section (values below 1 are treated as 1)
    pub group_size: usize,
    /// Embed icons as data URIs instead of linking them
    pub inline_icons: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            group_size: DEFAULT_GROUP_SIZE,
            inline_icons: true,
        }
    }
}

/// Renders `mapping` through `profile` and writes it to `out_path`.
///
/// Any existing file at `out_path` is replaced. Returns the resolved path of
/// the written file.
pub fn export_html(
    mapping: &LabelMap,
    out_path: &Path,
    title: &str,
    profile: &Profile,
    options: &ExportOptions,
) -> Result<PathBuf, PipelineError> {
    let document = render_document(mapping, title, profile, options);
    let written = write_atomic(out_path, &document)?;
    info!(
        "Exported {} bars with profile '{}' to {}",
        mapping.len(),
        profile.key,
        written.display()
    );
    Ok(written)
}

/// Default output path: `<input-stem>_<profile>_buttons.html` next to the input.
#[must_use]
pub fn default_output_path(input: &Path, profile_key: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "transcript".into(), |s| s.to_string_lossy());
    input.with_file_name(format!("{stem}_{profile_key}_buttons.html"))
}

/// Writes `content` to `path` through a temp file and rename.
///
/// Parent directories are created as needed. Returns the canonical path.
pub fn write_atomic(path: &Path, content: &str) -> Result<PathBuf, PipelineError> {
    let failure = |source: std::io::Error| PipelineError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(failure)?;
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    if let Err(e) = fs::write(&temp_path, content).and_then(|()| fs::rename(&temp_path, path)) {
        let _ = fs::remove_file(&temp_path);
        return Err(failure(e));
    }

    Ok(path.canonicalize().unwrap_or_else(|_| path.to_path_buf()))
}
