//! Radix UI Icons: one flat directory of 15x15 SVGs plus a package
//! manifest whose per-icon entries are looked up by filename stem.

use crate::core::{IconRecord, VendorOutput};
use crate::io;
use crate::svg;
use anyhow::Result;
use serde_json::Value;
use std::path::Path;

const ICONS_DIR: &str = "packages/radix-icons/icons";
const MANIFEST_FILE: &str = "packages/radix-icons/manifest.json";
/// The manifest groups icon entries under a size key.
const MANIFEST_SIZE_KEY: &str = ":15";

pub fn extract(vendor_root: &Path) -> Result<VendorOutput> {
    let icons_dir = vendor_root.join(ICONS_DIR);
    io::require_dir(&icons_dir)?;

    let manifest = super::load_json_lenient(&vendor_root.join(MANIFEST_FILE));
    let files = io::svg_files(&icons_dir)?;
    log::info!("found {} SVG files in {}", files.len(), icons_dir.display());

    let mut records = Vec::with_capacity(files.len());
    for file in &files {
        let stem = io::file_stem(file);
        let mut record = IconRecord::new(
            &stem,
            io::relative_path(file, vendor_root),
            svg::parse_svg_basic(file),
        );
        record.manifest_path = manifest_entry(manifest.as_ref(), &stem);
        records.push(record);
    }
    Ok(VendorOutput::from_records(records))
}

fn manifest_entry(manifest: Option<&Value>, stem: &str) -> Option<Value> {
    manifest?
        .get("icons")?
        .get(MANIFEST_SIZE_KEY)?
        .get(stem)
        .cloned()
}
