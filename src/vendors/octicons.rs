//! Octicons: filename-convention-encoded variants. A stem like
//! `accessibility-inset-24` decodes to the canonical name
//! `accessibility`, `inset = true`, `size = "24"`. A `keywords.json` at
//! the vendor root maps canonical names to keyword lists.

use crate::core::{IconRecord, VendorOutput};
use crate::io;
use crate::svg;
use anyhow::Result;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

const ICONS_DIR: &str = "icons";
const KEYWORDS_FILE: &str = "keywords.json";
const DIST_DIR: &str = "src";

/// Decoded filename convention: canonical name, size token, inset flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParts {
    pub base: String,
    pub size: Option<String>,
    pub inset: bool,
}

/// Decode a filename stem.
///
/// A trailing all-digit token is the size; a directly preceding `inset`
/// token sets the flag. Both are stripped from the canonical name, so
/// decoding an already-canonical name is a no-op. Stripping never
/// consumes the last remaining token: a stem like `inset-24` keeps the
/// name `inset`, and a bare `24` stays `24` with no size.
pub fn split_stem(stem: &str) -> NameParts {
    let mut parts: Vec<&str> = stem.split('-').collect();
    let mut size = None;
    let mut inset = false;
    if parts.len() > 1 {
        if let Some(last) = parts.last() {
            if !last.is_empty() && last.chars().all(|c| c.is_ascii_digit()) {
                size = Some((*last).to_string());
                parts.pop();
                if parts.last() == Some(&"inset") {
                    inset = true;
                    if parts.len() > 1 {
                        parts.pop();
                    }
                }
            }
        }
    }
    NameParts {
        base: parts.join("-"),
        size,
        inset,
    }
}

pub fn base_icon_name(stem: &str) -> String {
    split_stem(stem).base
}

pub fn extract(vendor_root: &Path) -> Result<VendorOutput> {
    let icons_dir = vendor_root.join(ICONS_DIR);
    io::require_dir(&icons_dir)?;

    let keywords_map = load_keywords(vendor_root);
    let files = io::svg_files(&icons_dir)?;
    log::info!("found {} SVG files in {}", files.len(), icons_dir.display());

    let mut records = Vec::with_capacity(files.len());
    for file in &files {
        let stem = io::file_stem(file);
        let parts = split_stem(&stem);
        let file_name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut properties = BTreeMap::new();
        if let Some(size) = &parts.size {
            properties.insert("size".to_string(), size.clone());
        }

        let mut record = IconRecord::new(
            &parts.base,
            io::relative_path(file, vendor_root),
            svg::parse_svg_basic(file),
        );
        record.file = Some(stem.clone());
        record.dist_path = Some(format!("{DIST_DIR}/{file_name}"));
        record.keywords = Some(keywords_map.get(&parts.base).cloned().unwrap_or_default());
        record.size = parts.size;
        record.inset = Some(parts.inset);
        record.properties = Some(properties);
        records.push(record);
    }
    Ok(VendorOutput::from_records(records))
}

/// Keyword lists keyed by canonical name. Missing or malformed files mean
/// no keywords.
fn load_keywords(vendor_root: &Path) -> BTreeMap<String, Vec<String>> {
    let Some(value) = super::load_json_lenient(&vendor_root.join(KEYWORDS_FILE)) else {
        return BTreeMap::new();
    };
    let Value::Object(map) = value else {
        return BTreeMap::new();
    };
    map.into_iter()
        .map(|(name, words)| (name, string_list(&words)))
        .collect()
}

fn string_list(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_size_suffix() {
        let parts = split_stem("alert-16");
        assert_eq!(parts.base, "alert");
        assert_eq!(parts.size.as_deref(), Some("16"));
        assert!(!parts.inset);
    }

    #[test]
    fn decodes_inset_and_size() {
        let parts = split_stem("accessibility-inset-24");
        assert_eq!(parts.base, "accessibility");
        assert_eq!(parts.size.as_deref(), Some("24"));
        assert!(parts.inset);
    }

    #[test]
    fn canonical_names_pass_through() {
        let parts = split_stem("accessibility");
        assert_eq!(parts.base, "accessibility");
        assert_eq!(parts.size, None);
        assert!(!parts.inset);
    }

    #[test]
    fn inset_without_size_is_part_of_the_name() {
        let parts = split_stem("grid-inset");
        assert_eq!(parts.base, "grid-inset");
        assert!(!parts.inset);
    }

    #[test]
    fn single_token_names_are_never_emptied() {
        let parts = split_stem("inset-24");
        assert_eq!(parts.base, "inset");
        assert_eq!(parts.size.as_deref(), Some("24"));
        assert!(parts.inset);

        let bare = split_stem("24");
        assert_eq!(bare.base, "24");
        assert_eq!(bare.size, None);
        assert!(!bare.inset);
    }

    #[test]
    fn stripping_is_idempotent() {
        for stem in ["alert-16", "accessibility-inset-24", "inset-24", "arrow-up", "x", "24"] {
            let once = base_icon_name(stem);
            assert_eq!(base_icon_name(&once), once);
        }
    }

    #[test]
    fn non_numeric_suffix_is_kept() {
        assert_eq!(base_icon_name("mark-github"), "mark-github");
        assert_eq!(base_icon_name("feed-16b"), "feed-16b");
    }
}
