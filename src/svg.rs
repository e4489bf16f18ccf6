//! Basic SVG attribute extraction.
//!
//! Reads `viewBox`, `width` and `height` from the root element of one SVG
//! file. This is deliberately shallow: no recursion into children, no
//! geometry interpretation beyond numeric coercion. Missing or malformed
//! files degrade to an all-`None` geometry; this function never fails.

use crate::core::SvgGeometry;
use std::path::Path;

/// Parse basic geometry from an SVG file.
///
/// Fallback rule: when `width` (resp. `height`) is absent or non-numeric
/// and the `viewBox` splits into exactly four whitespace-separated tokens,
/// the third (resp. fourth) token supplies the value.
pub fn parse_svg_basic(path: &Path) -> SvgGeometry {
    let Ok(text) = std::fs::read_to_string(path) else {
        return SvgGeometry::default();
    };
    parse_svg_text(&text)
}

/// Same as [`parse_svg_basic`] but over already-loaded text.
pub fn parse_svg_text(text: &str) -> SvgGeometry {
    let Ok(doc) = roxmltree::Document::parse(text) else {
        return SvgGeometry::default();
    };
    let root = doc.root_element();

    let view_box = root.attribute("viewBox").map(str::to_string);
    let mut width = as_number(root.attribute("width"));
    let mut height = as_number(root.attribute("height"));

    if let Some(vb) = view_box.as_deref() {
        let parts: Vec<&str> = vb.split_whitespace().collect();
        if parts.len() == 4 {
            if width.is_none() {
                width = parts[2].parse().ok();
            }
            if height.is_none() {
                height = parts[3].parse().ok();
            }
        }
    }

    SvgGeometry {
        view_box,
        width,
        height,
    }
}

fn as_number(value: Option<&str>) -> Option<f64> {
    value.and_then(|v| v.trim().parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_dimensions_win() {
        let geom = parse_svg_text(r#"<svg viewBox="0 0 24 24" width="16" height="16"/>"#);
        assert_eq!(geom.view_box.as_deref(), Some("0 0 24 24"));
        assert_eq!(geom.width, Some(16.0));
        assert_eq!(geom.height, Some(16.0));
    }

    #[test]
    fn viewbox_backfills_missing_dimensions() {
        let geom = parse_svg_text(r#"<svg viewBox="0 0 24 32"><path d="M0 0"/></svg>"#);
        assert_eq!(geom.width, Some(24.0));
        assert_eq!(geom.height, Some(32.0));
    }

    #[test]
    fn viewbox_backfills_non_numeric_dimensions() {
        let geom = parse_svg_text(r#"<svg viewBox="0 0 20 20" width="100%" height="auto"/>"#);
        assert_eq!(geom.width, Some(20.0));
        assert_eq!(geom.height, Some(20.0));
    }

    #[test]
    fn short_viewbox_does_not_backfill() {
        let geom = parse_svg_text(r#"<svg viewBox="0 0 24"/>"#);
        assert_eq!(geom.view_box.as_deref(), Some("0 0 24"));
        assert_eq!(geom.width, None);
        assert_eq!(geom.height, None);
    }

    #[test]
    fn malformed_xml_yields_empty_geometry() {
        let geom = parse_svg_text("<svg viewBox=");
        assert_eq!(geom, SvgGeometry::default());
    }

    #[test]
    fn missing_file_yields_empty_geometry() {
        let dir = TempDir::new().unwrap();
        let geom = parse_svg_basic(&dir.path().join("absent.svg"));
        assert_eq!(geom, SvgGeometry::default());
    }

    #[test]
    fn reads_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("icon.svg");
        fs::write(&path, r#"<svg viewBox="0 0 15 15" width="15" height="15"/>"#).unwrap();
        let geom = parse_svg_basic(&path);
        assert_eq!(geom.width, Some(15.0));
    }
}
