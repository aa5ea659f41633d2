//! Static HTML rendering of a labeled bar map.
//!
//! The document is a single self-contained page: styles are embedded and
//! icons are either inlined as data URIs or linked by absolute path. Output is
//! deterministic for a given map, profile and set of icon files.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::PathBuf;

use tracing::warn;

use super::icons::icon_src;
use super::ExportOptions;
use crate::models::{Bar, LabelMap, Profile};

/// Glyph shown for a rest when the profile has no rest icon.
pub const REST_GLYPH: &str = "\u{1D13D}";

/// Renders the complete HTML document.
#[must_use]
pub fn render_document(
    mapping: &LabelMap,
    title: &str,
    profile: &Profile,
    options: &ExportOptions,
) -> String {
    let mut renderer = BadgeRenderer::new(profile, options.inline_icons);
    let mut output = String::new();
    let title = escape_html(title);

    let _ = write!(
        output,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>
{STYLE}
</style>
</head>
<body>
<header>
<h1>{title}</h1>
<p class="meta">Profile: {profile_label} &middot; {count} bars</p>
</header>
<main>
"#,
        profile_label = escape_html(&profile.label),
        count = mapping.len(),
    );

    if mapping.is_empty() {
        output.push_str("<p class=\"empty\">No bars found.</p>\n");
    }

    let bars: Vec<(usize, &Bar<String>)> = mapping.iter().collect();
    for chunk in bars.chunks(options.group_size.max(1)) {
        let (Some((first, _)), Some((last, _))) = (chunk.first(), chunk.last()) else {
            continue;
        };
        let _ = writeln!(
            output,
            "<section class=\"group\">\n<h2>Bars {first}\u{2013}{last}</h2>\n<div class=\"bars\">"
        );
        for (index, bar) in chunk {
            renderer.render_bar(&mut output, *index, bar);
        }
        output.push_str("</div>\n</section>\n");
    }

    output.push_str("</main>\n</body>\n</html>\n");
    output
}

/// Embedded stylesheet; bars wrap with the available width.
const STYLE: &str = r"body { font-family: system-ui, sans-serif; margin: 0; padding: 1.5rem; background: #14161c; color: #e8e8ee; }
header h1 { margin: 0 0 .25rem; font-size: 1.6rem; }
.meta { margin: 0 0 1.5rem; color: #9aa0ad; }
.group { margin-bottom: 1.5rem; }
.group h2 { font-size: .9rem; font-weight: 600; color: #9aa0ad; margin: 0 0 .5rem; }
.bars { display: flex; flex-wrap: wrap; gap: .5rem; }
.bar { display: flex; flex-direction: column; align-items: center; min-width: 4.5rem; padding: .4rem; border: 1px solid #2e323d; border-radius: 8px; background: #1c1f27; }
.bar-number { font-size: .7rem; color: #6f7584; }
.badges { display: flex; flex-wrap: wrap; justify-content: center; gap: .25rem; margin-top: .25rem; }
.badge { display: inline-flex; align-items: center; justify-content: center; min-width: 2rem; height: 2rem; border-radius: 6px; }
.badge.icon { width: 2rem; object-fit: contain; }
.badge.text { padding: 0 .4rem; background: #3a4152; font-weight: 600; font-size: .85rem; }
.badge.missing { background: #6b2a2a; font-weight: 700; }
.rest .rest-glyph { font-size: 1.6rem; line-height: 2rem; }
.rest .rest-label { font-size: .75rem; color: #9aa0ad; }
.rest img { width: 2rem; height: 2rem; object-fit: contain; }";

/// Renders bars and badges for one profile, caching icon lookups.
struct BadgeRenderer<'a> {
    profile: &'a Profile,
    inline_icons: bool,
    icons: HashMap<String, Option<String>>,
    rest_icon: Option<String>,
}

impl<'a> BadgeRenderer<'a> {
    fn new(profile: &'a Profile, inline_icons: bool) -> Self {
        let rest_icon = profile
            .rest_icon()
            .and_then(|path| icon_src(&path, inline_icons));
        Self {
            profile,
            inline_icons,
            icons: HashMap::new(),
            rest_icon,
        }
    }

    fn render_bar(&mut self, output: &mut String, index: usize, bar: &Bar<String>) {
        match bar {
            Bar::Silent => {
                let rest_label = escape_html(&self.profile.rest_label);
                let _ = write!(
                    output,
                    "<div class=\"bar rest\" data-bar=\"{index}\">\n<span class=\"bar-number\">{index}</span>\n"
                );
                match &self.rest_icon {
                    Some(src) => {
                        let _ = writeln!(
                            output,
                            "<img src=\"{}\" alt=\"{rest_label}\" title=\"{rest_label}\">",
                            escape_html(src)
                        );
                    }
                    None => {
                        let _ = writeln!(
                            output,
                            "<span class=\"rest-glyph\" title=\"{rest_label}\">{REST_GLYPH}</span>\n<span class=\"rest-label\">{rest_label}</span>"
                        );
                    }
                }
                output.push_str("</div>\n");
            }
            Bar::Active(labels) => {
                let _ = write!(
                    output,
                    "<div class=\"bar\" data-bar=\"{index}\">\n<span class=\"bar-number\">{index}</span>\n<div class=\"badges\">\n"
                );
                for label in labels {
                    self.render_badge(output, index, label);
                }
                output.push_str("</div>\n</div>\n");
            }
        }
    }

    fn render_badge(&mut self, output: &mut String, index: usize, label: &str) {
        let escaped = escape_html(label);
        if let Some(src) = self.icon_for(label) {
            let _ = writeln!(
                output,
                "<img class=\"badge icon\" src=\"{}\" alt=\"{escaped}\" title=\"{escaped}\">",
                escape_html(&src)
            );
        } else if self.profile.text_fallback {
            let _ = writeln!(output, "<span class=\"badge text\">{escaped}</span>");
        } else {
            warn!(
                "Bar {}: no icon for '{}' in profile '{}'",
                index, label, self.profile.key
            );
            let _ = writeln!(
                output,
                "<span class=\"badge missing\" title=\"{escaped}\">?</span>"
            );
        }
    }

    fn icon_for(&mut self, label: &str) -> Option<String> {
        if let Some(cached) = self.icons.get(label) {
            return cached.clone();
        }
        let src = self
            .profile
            .icon_for_label(label)
            .and_then(|path: PathBuf| icon_src(&path, self.inline_icons));
        self.icons.insert(label.to_string(), src.clone());
        src
    }
}

/// Escapes text for use in HTML content and attribute values.
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
