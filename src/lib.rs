//! iconsmith: a build-time pipeline that ingests icon-library source
//! trees and emits normalized per-icon metadata as JSON.

pub mod cli;
pub mod commands;
pub mod core;
pub mod errors;
pub mod io;
pub mod literal;
pub mod svg;
pub mod vendors;

// Re-export commonly used types
pub use crate::core::{IconRecord, SvgGeometry, VendorOutput};
pub use crate::errors::PipelineError;
pub use crate::literal::{parse_relaxed, parse_relaxed_array, slice_array_export};
pub use crate::svg::{parse_svg_basic, parse_svg_text};
pub use crate::vendors::Vendor;
