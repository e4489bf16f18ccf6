//! Error types for pipeline runs.
//!
//! Only the structural tier is typed: a vendor directory the extractor
//! depends on is missing, which means the vendor's repository layout
//! changed and the adapter needs updating. That error terminates the
//! invocation. Data-quality problems (bad sidecar JSON, malformed SVG,
//! unmatched metadata) never surface as errors; they degrade to empty or
//! `None` values in the affected record fields.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// An expected vendor directory does not exist. Fatal: the vendor
    /// layout changed in a way this adapter does not understand.
    #[error(
        "required directory {} does not exist; vendor structure may have changed",
        .path.display()
    )]
    MissingVendorDir { path: PathBuf },
}

impl PipelineError {
    pub fn missing_dir(path: impl Into<PathBuf>) -> Self {
        Self::MissingVendorDir { path: path.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_dir_message_names_the_path() {
        let err = PipelineError::missing_dir("/vendor/octicons/icons");
        let msg = err.to_string();
        assert!(msg.contains("/vendor/octicons/icons"));
        assert!(msg.contains("vendor structure may have changed"));
    }
}
