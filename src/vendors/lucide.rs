//! Lucide: a flat icon directory where each SVG may have a same-named
//! JSON sidecar. The sidecar is merged in verbatim as `meta`; absence or
//! a parse failure yields an empty object.

use crate::core::{IconRecord, VendorOutput};
use crate::io;
use crate::svg;
use anyhow::Result;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

const ICONS_DIR: &str = "icons";
const DIST_DIR: &str = "src";

pub fn extract(vendor_root: &Path) -> Result<VendorOutput> {
    let icons_dir = vendor_root.join(ICONS_DIR);
    io::require_dir(&icons_dir)?;

    let files = io::svg_files(&icons_dir)?;
    log::info!("found {} SVG files in {}", files.len(), icons_dir.display());

    let mut records = Vec::with_capacity(files.len());
    for file in &files {
        let stem = io::file_stem(file);
        let sidecar = icons_dir.join(format!("{stem}.json"));
        let meta =
            super::load_json_lenient(&sidecar).unwrap_or_else(|| Value::Object(Map::new()));

        let file_name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut record = IconRecord::new(
            &stem,
            io::relative_path(file, vendor_root),
            svg::parse_svg_basic(file),
        );
        record.dist_path = Some(format!("{DIST_DIR}/{file_name}"));
        record.meta = Some(meta);
        record.properties = Some(BTreeMap::new());
        records.push(record);
    }
    Ok(VendorOutput::from_records(records))
}
