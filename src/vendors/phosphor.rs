//! Phosphor: one directory per weight under `assets/`, with per-icon
//! metadata embedded in `src/icons.ts` as a structured literal. The
//! literal is parsed with the relaxed parser and normalized per entry:
//! tags, categories (enum members with the qualifier stripped and
//! lower-cased), alias name, codepoint, and version markers.

use crate::core::{IconRecord, VendorOutput};
use crate::io;
use crate::literal;
use crate::svg;
use anyhow::Result;
use serde_json::{Map, Number, Value};
use std::collections::HashMap;
use std::path::Path;

const ASSETS_DIR: &str = "assets";
const DATA_FILE: &str = "src/icons.ts";
const DATA_BINDING: &str = "icons";
const CATEGORY_QUALIFIER: &str = "IconCategory.";

pub const WEIGHTS: &[&str] = &["bold", "duotone", "fill", "light", "regular", "thin"];
pub const DEFAULT_WEIGHT: &str = "regular";

/// Strip the weight suffix from a filename stem. Files of the default
/// weight carry no suffix.
pub fn base_name(stem: &str, weight: &str) -> String {
    if weight == DEFAULT_WEIGHT {
        return stem.to_string();
    }
    let suffix = format!("-{weight}");
    stem.strip_suffix(suffix.as_str()).unwrap_or(stem).to_string()
}

pub fn extract(vendor_root: &Path) -> Result<VendorOutput> {
    let assets_dir = vendor_root.join(ASSETS_DIR);
    io::require_dir(&assets_dir)?;

    let weight_dirs: Vec<_> = WEIGHTS
        .iter()
        .map(|weight| (*weight, assets_dir.join(weight)))
        .collect();
    for (_, dir) in &weight_dirs {
        io::require_dir(dir)?;
    }

    let entries = load_data(vendor_root);
    let meta_map = meta_by_name(&entries);

    let mut records = Vec::new();
    let mut total = 0usize;
    for (weight, dir) in &weight_dirs {
        let files = io::svg_files(dir)?;
        total += files.len();
        log::info!("found {} SVG files in {}", files.len(), dir.display());
        for file in &files {
            let stem = io::file_stem(file);
            let name = base_name(&stem, weight);
            let meta = meta_map
                .get(&name)
                .cloned()
                .unwrap_or_else(|| Value::Object(Map::new()));
            let mut record = IconRecord::new(
                &name,
                io::relative_path(file, vendor_root),
                svg::parse_svg_basic(file),
            );
            record.weight = Some((*weight).to_string());
            record.meta = Some(meta);
            records.push(record);
        }
    }
    log::info!("total phosphor icons found: {total}");

    Ok(VendorOutput {
        records,
        data: Some(entries),
    })
}

/// Parse the structured-literal data file. Failures of any kind mean no
/// metadata.
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

/// Normalize parsed entries into a lookup keyed by icon name.
pub fn meta_by_name(entries: &[Value]) -> HashMap<String, Value> {
    entries
        .iter()
        .filter_map(normalize_entry)
        .collect()
}

fn normalize_entry(entry: &Value) -> Option<(String, Value)> {
    let name = entry.get("name")?.as_str()?.to_string();
    let mut meta = Map::new();
    meta.insert("name".to_string(), Value::String(name.clone()));

    if let Some(tags) = entry.get("tags").and_then(Value::as_array) {
        let tags: Vec<Value> = tags
            .iter()
            .filter_map(|t| t.as_str())
            .map(|t| Value::String(t.to_string()))
            .collect();
        meta.insert("tags".to_string(), Value::Array(tags));
    }
    if let Some(categories) = entry.get("categories").and_then(Value::as_array) {
        let categories: Vec<Value> = categories
            .iter()
            .filter_map(|c| c.as_str())
            .filter_map(|c| c.strip_prefix(CATEGORY_QUALIFIER))
            .map(|c| Value::String(c.to_lowercase()))
            .collect();
        meta.insert("categories".to_string(), Value::Array(categories));
    }
    if let Some(alias) = entry
        .get("alias")
        .and_then(|a| a.get("name"))
        .and_then(Value::as_str)
    {
        meta.insert("alias".to_string(), Value::String(alias.to_string()));
    }
    if let Some(codepoint) = entry.get("codepoint").and_then(Value::as_i64) {
        meta.insert("codepoint".to_string(), Value::Number(codepoint.into()));
    }
    for key in ["published_in", "updated_in"] {
        if let Some(version) = entry.get(key).and_then(Value::as_f64) {
            if let Some(number) = Number::from_f64(version) {
                meta.insert(key.to_string(), Value::Number(number));
            }
        }
    }
    Some((name, Value::Object(meta)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn weight_suffix_is_stripped_except_default() {
        assert_eq!(base_name("activity-bold", "bold"), "activity");
        assert_eq!(base_name("activity", "regular"), "activity");
        assert_eq!(base_name("acorn-duotone", "duotone"), "acorn");
        // stem without the expected suffix passes through
        assert_eq!(base_name("activity", "bold"), "activity");
    }

    #[test]
    fn entries_normalize_tags_categories_and_alias() {
        let text = indoc! {r#"
            export const icons: IconEntry[] = [
              {
                name: "acorn",
                pascal_name: "Acorn",
                categories: [IconCategory.NATURE, IconCategory.MAPS],
                tags: ["*new*", "nut", "autumn"],
                codepoint: 57344,
                published_in: 2.0,
                updated_in: 2.0,
              },
              {
                name: "address-book",
                alias: { name: "contacts", figma: "contacts" },
                categories: [IconCategory.COMMUNICATION],
                tags: ["contact"],
                codepoint: 57345,
                published_in: 1.0,
                updated_in: 1.4,
              },
            ];
        "#};
        let slice = literal::slice_array_export(text, "icons").unwrap();
        let entries = literal::parse_relaxed_array(&slice);
        assert_eq!(entries.len(), 2);

        let map = meta_by_name(&entries);
        let acorn = &map["acorn"];
        assert_eq!(acorn["categories"], json!(["nature", "maps"]));
        assert_eq!(acorn["tags"], json!(["*new*", "nut", "autumn"]));
        assert_eq!(acorn["codepoint"], json!(57344));
        assert!(acorn.get("alias").is_none());

        let address_book = &map["address-book"];
        assert_eq!(address_book["alias"], json!("contacts"));
        assert_eq!(address_book["published_in"], json!(1.0));
    }

    #[test]
    fn unqualified_category_tokens_are_dropped() {
        let entries = vec![json!({
            "name": "x",
            "categories": ["IconCategory.ARROWS", "DESIGN", "Other.THING"],
        })];
        let map = meta_by_name(&entries);
        assert_eq!(map["x"]["categories"], json!(["arrows"]));
    }

    #[test]
    fn entries_without_name_are_skipped() {
        let entries = vec![json!({"tags": ["a"]}), json!("not an object")];
        assert!(meta_by_name(&entries).is_empty());
    }
}
