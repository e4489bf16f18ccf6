//! Command handlers: the imperative shell around the extractors.
//!
//! Extraction is validated and completed before anything is written, so a
//! structural failure (missing vendor directory) terminates the run
//! without leaving a partial `metadata.json` behind.

use crate::io;
use crate::vendors::Vendor;
use anyhow::Result;
use std::path::Path;

pub const METADATA_FILE: &str = "metadata.json";
pub const DATA_FILE: &str = "data.json";

/// Run one vendor extractor and write its output documents.
pub fn run(vendor: Vendor, vendor_root: &Path, out: &Path) -> Result<()> {
    log::info!("processing {}", vendor.slug());
    let output = vendor.extract(vendor_root)?;

    io::ensure_dir(out)?;
    let metadata_path = out.join(METADATA_FILE);
    io::write_file(&metadata_path, &serde_json::to_string_pretty(&output.records)?)?;
    log::info!(
        "wrote {} records to {}",
        output.records.len(),
        metadata_path.display()
    );

    if let Some(data) = &output.data {
        let data_path = out.join(DATA_FILE);
        io::write_file(&data_path, &serde_json::to_string_pretty(data)?)?;
        log::info!("wrote parsed data file to {}", data_path.display());
    }
    Ok(())
}

/// Run every vendor extractor against `<vendors_root>/<slug>`, writing to
/// `<out_root>/<slug>`.
pub fn run_all(vendors_root: &Path, out_root: &Path) -> Result<()> {
    for vendor in Vendor::ALL {
        run(
            vendor,
            &vendors_root.join(vendor.slug()),
            &out_root.join(vendor.slug()),
        )?;
    }
    log::info!("all extractors finished");
    Ok(())
}
