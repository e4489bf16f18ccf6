//! Heroicons: a fixed set of `{size}/{style}` variant directories under
//! `src/`. Every variant directory must exist; each file contributes one
//! record tagged with its size and style.

use crate::core::{IconRecord, VendorOutput};
use crate::io;
use crate::svg;
use anyhow::Result;
use std::path::Path;

const SRC_DIR: &str = "src";
const VARIANTS: &[(&str, &str)] = &[
    ("16", "solid"),
    ("20", "solid"),
    ("24", "solid"),
    ("24", "outline"),
];

pub fn extract(vendor_root: &Path) -> Result<VendorOutput> {
    let src_dir = vendor_root.join(SRC_DIR);
    io::require_dir(&src_dir)?;

    // Validate every variant directory up front so a layout change fails
    // the run before any records accumulate.
    let variant_dirs: Vec<_> = VARIANTS
        .iter()
        .map(|(size, style)| (*size, *style, src_dir.join(size).join(style)))
        .collect();
    for (_, _, dir) in &variant_dirs {
        io::require_dir(dir)?;
    }

    let mut records = Vec::new();
    let mut total = 0usize;
    for (size, style, dir) in &variant_dirs {
        let files = io::svg_files(dir)?;
        total += files.len();
        log::info!("found {} SVG files in {}", files.len(), dir.display());
        for file in &files {
            let mut record = IconRecord::new(
                io::file_stem(file),
                io::relative_path(file, vendor_root),
                svg::parse_svg_basic(file),
            );
            record.size = Some((*size).to_string());
            record.style = Some((*style).to_string());
            records.push(record);
        }
    }
    log::info!("total heroicons found: {total}");
    Ok(VendorOutput::from_records(records))
}
