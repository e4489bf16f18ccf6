//! Vendor extractors.
//!
//! One module per ingested icon library. Each extractor is an independent,
//! linear pass: validate the vendor's expected directories, walk the SVG
//! files, derive names and variant metadata from filename conventions or
//! sibling data files, and assemble one [`IconRecord`](crate::core::IconRecord)
//! per asset. Extractors share no state and their outputs are independent
//! documents.

pub mod heroicons;
pub mod lucide;
pub mod octicons;
pub mod phosphor;
pub mod radix;
pub mod svgl;

use crate::core::VendorOutput;
use crate::io;
use anyhow::Result;
use serde_json::Value;
use std::path::Path;

/// The vendors this pipeline understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vendor {
    RadixUiIcons,
    Heroicons,
    LucideIcons,
    Octicons,
    PhosphorIcons,
    Svgl,
}

impl Vendor {
    pub const ALL: [Vendor; 6] = [
        Vendor::RadixUiIcons,
        Vendor::Heroicons,
        Vendor::LucideIcons,
        Vendor::Octicons,
        Vendor::PhosphorIcons,
        Vendor::Svgl,
    ];

    /// Kebab-case identifier, also the vendor's checkout directory name.
    pub fn slug(&self) -> &'static str {
        match self {
            Vendor::RadixUiIcons => "radix-ui-icons",
            Vendor::Heroicons => "heroicons",
            Vendor::LucideIcons => "lucide-icons",
            Vendor::Octicons => "octicons",
            Vendor::PhosphorIcons => "phosphor-icons",
            Vendor::Svgl => "svgl",
        }
    }

    /// Run this vendor's extractor against a checkout root.
    pub fn extract(&self, vendor_root: &Path) -> Result<VendorOutput> {
        match self {
            Vendor::RadixUiIcons => radix::extract(vendor_root),
            Vendor::Heroicons => heroicons::extract(vendor_root),
            Vendor::LucideIcons => lucide::extract(vendor_root),
            Vendor::Octicons => octicons::extract(vendor_root),
            Vendor::PhosphorIcons => phosphor::extract(vendor_root),
            Vendor::Svgl => svgl::extract(vendor_root),
        }
    }
}

/// Load a JSON side file, tolerating absence and parse failures.
///
/// Sidecars and manifests are best-effort enrichment; a missing or
/// malformed file means "no metadata", never an error.
pub(crate) fn load_json_lenient(path: &Path) -> Option<Value> {
    let text = io::read_file(path).ok()?;
    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(err) => {
            log::debug!("ignoring malformed JSON at {}: {err}", path.display());
            None
        }
    }
}
