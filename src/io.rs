//! Small file-system helpers shared by the extractors.

use crate::errors::PipelineError;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
    }
    Ok(())
}

pub fn dir_exists(path: &Path) -> bool {
    path.exists() && path.is_dir()
}

/// Require that an expected vendor directory exists.
///
/// Missing directories are a structural failure (the vendor layout
/// changed); the run terminates rather than producing partial output.
pub fn require_dir(path: &Path) -> Result<()> {
    if dir_exists(path) {
        Ok(())
    } else {
        Err(PipelineError::missing_dir(path).into())
    }
}

/// List the `*.svg` files directly inside `dir`, sorted by path.
///
/// Sorting keeps output order stable across platforms; `glob` itself
/// follows directory iteration order.
pub fn svg_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = dir.join("*.svg");
    let pattern = pattern
        .to_str()
        .with_context(|| format!("non-UTF-8 path: {}", dir.display()))?;
    let mut files: Vec<PathBuf> = glob::glob(pattern)
        .with_context(|| format!("bad glob pattern: {pattern}"))?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    Ok(files)
}

/// Path relative to `base`, `/`-separated regardless of platform.
pub fn relative_path(path: &Path, base: &Path) -> String {
    let rel = path.strip_prefix(base).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Filename stem, lossy-decoded. Empty string when the path has none.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
