#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod dataset;
pub mod diagnostics;
pub mod error;
pub mod features;
pub mod image;
pub mod table;

// Building blocks of the extractor, usable on their own.
pub mod filters;
pub mod minutiae;
pub mod orientation;
pub mod stats;
pub mod texture;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{FeatureError, Result};
pub use crate::features::{ExtractorParams, FeatureExtractor, FeatureRecord, FEATURE_COLUMNS};
pub use crate::table::FeatureTable;

pub use crate::dataset::{run_batch, scan_dataset, BatchReport, DatasetEntry};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use fingerprint_features::prelude::*;
/// use std::path::Path;
///
/// # fn main() -> fingerprint_features::Result<()> {
/// let extractor = FeatureExtractor::new(ExtractorParams::default());
/// let record = extractor.extract_path(Path::new("data/A+/cluster_0_1.BMP"), "A+")?;
/// println!("minutiae={} lbp_mean={:.3}", record.minutiae_count, record.lbp_mean);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageF32, ImageU8};
    pub use crate::{ExtractorParams, FeatureError, FeatureExtractor, FeatureRecord};
}
