//! svgl: brand logos with theme/kind variants. The source of truth is a
//! structured-literal array in `src/data/svgs.ts`; each entry's `route`
//! and `wordmark` fields point at asset paths, either as a single string
//! (light theme) or as a `{light, dark}` map. Assets the data file does
//! not mention fall back to filename-token inference.

use crate::core::{IconRecord, VendorOutput};
use crate::io;
use crate::literal;
use crate::svg;
use anyhow::Result;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

const LIBRARY_DIR: &str = "static/library";
const DATA_FILE: &str = "src/data/svgs.ts";
const DATA_BINDING: &str = "svgs";
/// Entry paths look like `/library/<file>.svg`; files live under
/// `static/library/`. Lookup keys use the entry form without the leading
/// slash.
const ASSET_PREFIX: &str = "library";
const DIST_DIR: &str = "src";

const THEME_LIGHT: &str = "light";
const THEME_DARK: &str = "dark";
const KIND_SYMBOL: &str = "symbol";
const KIND_WORDMARK: &str = "wordmark";

/// A data-file entry reached through a specific asset path.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetInfo {
    pub entry: Value,
    pub theme: String,
    pub kind: String,
}

pub fn extract(vendor_root: &Path) -> Result<VendorOutput> {
    let library_dir = vendor_root.join(LIBRARY_DIR);
    io::require_dir(&library_dir)?;

    let entries = load_data(vendor_root);
    let assets = build_asset_map(&entries);

    let files = io::svg_files(&library_dir)?;
    log::info!("found {} SVG files in {}", files.len(), library_dir.display());

    let mut records = Vec::with_capacity(files.len());
    for file in &files {
        let file_name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = io::file_stem(file);
        let asset_key = format!("{ASSET_PREFIX}/{file_name}");
        let info = assets.get(&asset_key);

        let (theme, kind) = match info {
            Some(info) => (info.theme.clone(), info.kind.clone()),
            None => infer_theme_kind(&stem),
        };
        let mut properties = BTreeMap::new();
        properties.insert("theme".to_string(), theme.clone());
        properties.insert("kind".to_string(), kind.clone());

        let mut record = IconRecord::new(
            &stem,
            io::relative_path(file, vendor_root),
            svg::parse_svg_basic(file),
        );
        record.file = Some(file_name.clone());
        record.dist_path = Some(format!("{DIST_DIR}/{file_name}"));
        record.theme = Some(theme);
        record.kind = Some(kind);
        record.properties = Some(properties);
        record.meta = info.map(|i| i.entry.clone());
        records.push(record);
    }

    Ok(VendorOutput {
        records,
        data: Some(entries),
    })
}

fn load_data(vendor_root: &Path) -> Vec<Value> {
    let Ok(text) = io::read_file(&vendor_root.join(DATA_FILE)) else {
        return Vec::new();
    };
    let Some(slice) = literal::slice_array_export(&text, DATA_BINDING) else {
        log::debug!("no `{DATA_BINDING}` export found in {DATA_FILE}");
        return Vec::new();
    };
    literal::parse_relaxed_array(&slice)
}

/// Map normalized asset paths to their originating entry plus inferred
/// theme/kind. First registration for a path wins on conflict.
pub fn build_asset_map(entries: &[Value]) -> HashMap<String, AssetInfo> {
    let mut map: HashMap<String, AssetInfo> = HashMap::new();

    let mut register = |map: &mut HashMap<String, AssetInfo>,
                        asset_path: Option<String>,
                        entry: &Value,
                        theme: &str,
                        kind: &str| {
        if let Some(path) = asset_path {
            map.entry(path).or_insert_with(|| AssetInfo {
                entry: entry.clone(),
                theme: theme.to_string(),
                kind: kind.to_string(),
            });
        }
    };

    for entry in entries {
        if !entry.is_object() {
            continue;
        }
        for (field, kind) in [("route", KIND_SYMBOL), ("wordmark", KIND_WORDMARK)] {
            match entry.get(field) {
                Some(Value::String(path)) => {
                    register(&mut map, norm_asset_path(path), entry, THEME_LIGHT, kind);
                }
                Some(Value::Object(themed)) => {
                    for (key, path) in themed {
                        let theme = match key.as_str() {
                            THEME_LIGHT | THEME_DARK => key.as_str(),
                            _ => THEME_LIGHT,
                        };
                        if let Value::String(path) = path {
                            register(&mut map, norm_asset_path(path), entry, theme, kind);
                        }
                    }
                }
                _ => {}
            }
        }
    }
    map
}

fn norm_asset_path(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.trim_start_matches('/').to_string())
}

/// Fallback inference from filename tokens, split on `.`, `-` and `_`.
pub fn infer_theme_kind(stem: &str) -> (String, String) {
    let lowered = stem.to_lowercase();
    let tokens: Vec<&str> = lowered
        .split(['.', '-', '_'])
        .filter(|t| !t.is_empty())
        .collect();
    let theme = if tokens.contains(&THEME_DARK) {
        THEME_DARK
    } else {
        THEME_LIGHT
    };
    let kind = if tokens.contains(&KIND_WORDMARK) {
        KIND_WORDMARK
    } else {
        KIND_SYMBOL
    };
    (theme.to_string(), kind.to_string())
}
