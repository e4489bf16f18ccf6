//! Core data model for extracted icon metadata.
//!
//! One [`IconRecord`] is emitted per physical SVG asset. Vendors differ in
//! which fields they populate, so everything beyond `name`, `path` and
//! `svg` is optional and omitted from the serialized output when absent.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Basic geometry read from an SVG root element.
///
/// Invariant: when `width`/`height` could not be read directly but the
/// `viewBox` has exactly four numeric components, they are back-filled
/// from components 2 and 3.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SvgGeometry {
    #[serde(rename = "viewBox")]
    pub view_box: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// One normalized metadata record per SVG asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IconRecord {
    /// Canonical icon identifier, variant suffixes stripped.
    pub name: String,
    /// Original filename stem or file name, for vendors where it differs
    /// from the canonical name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inset: Option<bool>,
    /// Source SVG location relative to the vendor root, `/`-separated.
    pub path: String,
    /// Intended location in the merged distribution tree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dist_path: Option<String>,
    pub svg: SvgGeometry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// Free-form per-variant key/value metadata (e.g. theme, kind, size).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, String>>,
    /// Raw vendor-native metadata block matched by name or path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
    /// Radix-only: per-icon entry from the vendor manifest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_path: Option<Value>,
}

impl IconRecord {
    pub fn new(name: impl Into<String>, path: impl Into<String>, svg: SvgGeometry) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            svg,
            ..Default::default()
        }
    }
}

/// Everything one extractor produces for a vendor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VendorOutput {
    /// One record per SVG asset found.
    pub records: Vec<IconRecord>,
    /// Raw parsed structured-literal array, for the vendors whose metadata
    /// lives in a source-literal data file. Emitted verbatim as `data.json`.
    pub data: Option<Vec<Value>>,
}

impl VendorOutput {
    pub fn from_records(records: Vec<IconRecord>) -> Self {
        Self {
            records,
            data: None,
        }
    }
}
