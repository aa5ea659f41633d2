//! Icon references for the exported page.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Builds the `src` value for an icon.
///
/// With `inline`, the file is embedded as a base64 `data:` URI so the page
/// needs nothing else at view time. Otherwise the absolute file path is
/// returned as a `file://` URL. Returns `None` if an inlined icon cannot be read.
#[must_use]
pub fn icon_src(path: &Path, inline: bool) -> Option<String> {
    if !inline {
        let absolute = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        return Some(file_url(&absolute));
    }

    match fs::read(path) {
        Ok(bytes) => Some(data_uri(path, &bytes)),
        Err(e) => {
            warn!("Could not read icon {}: {}", path.display(), e);
            None
        }
    }
}

/// Encodes `bytes` as a data URI with a MIME type guessed from `path`.
#[must_use]
pub fn data_uri(path: &Path, bytes: &[u8]) -> String {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    format!("data:{};base64,{}", mime.essence_str(), STANDARD.encode(bytes))
}

fn file_url(path: &Path) -> String {
    let raw = path.to_string_lossy().replace('\\', "/");
    let encoded = raw.replace('%', "%25").replace(' ', "%20").replace('#', "%23");
    if encoded.starts_with('/') {
        format!("file://{encoded}")
    } else {
        format!("file:///{encoded}")
    }
}
