use std::fs;
use std::path::Path;

/// Write a file, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// A minimal valid SVG with the given viewBox dimensions and no explicit
/// width/height attributes.
pub fn svg_body(width: u32, height: u32) -> String {
    format!(r#"<svg viewBox="0 0 {width} {height}"><path d="M0 0h{width}v{height}H0z"/></svg>"#)
}
