//! Per-image feature aggregation.
//!
//! `FeatureExtractor` turns one grayscale image into one [`FeatureRecord`]:
//!
//! 1. decode and convert to `[0, 1]` floats,
//! 2. one smoothing pass (5×5 Gaussian by default),
//! 3. three independent analyses on the smoothed image:
//!    orientation field, minutiae on the thinned ridge mask, uniform LBP,
//! 4. mean / variance / max reductions.
//!
//! Extraction is a pure function of the image and the parameters. Decoding
//! problems come back as [`FeatureError`] values so batch callers can log and
//! move on; a record is either complete or absent.

pub mod options;
pub mod record;

pub use options::ExtractorParams;
pub use record::{FeatureRecord, FEATURE_COLUMNS};

use crate::diagnostics::{elapsed_ms, ExtractionTrace, InputDescriptor, TimingBreakdown};
use crate::error::{FeatureError, Result};
use crate::image::io::load_grayscale_image;
use crate::image::{BinaryImage, ImageF32, ImageU8, ImageView};
use crate::orientation::estimate_orientation;
use crate::texture::{local_binary_pattern, LbpMap};
use log::debug;
use std::path::Path;
use std::time::Instant;

/// Record plus everything needed to explain or visualise it.
#[derive(Clone, Debug)]
pub struct Extraction {
    pub record: FeatureRecord,
    pub trace: ExtractionTrace,
    pub smoothed: ImageF32,
    pub orientation: ImageF32,
    pub skeleton: BinaryImage,
    pub lbp: LbpMap,
}

#[derive(Clone, Debug, Default)]
pub struct FeatureExtractor {
    params: ExtractorParams,
}

impl FeatureExtractor {
    pub fn new(params: ExtractorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ExtractorParams {
        &self.params
    }

    /// Load `path` and extract its features under `label`.
    pub fn extract_path(&self, path: &Path, label: &str) -> Result<FeatureRecord> {
        let gray = load_grayscale_image(path)?;
        debug!(
            "extract {} ({}x{}) label={label}",
            path.display(),
            gray.width(),
            gray.height()
        );
        self.extract_image(gray.as_view(), label)
    }

    /// Extract features from an already decoded image.
    pub fn extract_image(&self, gray: ImageU8<'_>, label: &str) -> Result<FeatureRecord> {
        self.extract_with_trace(gray, label).map(|e| e.record)
    }

    /// Like [`Self::extract_path`] but keeps intermediates and timings.
    pub fn extract_path_with_trace(&self, path: &Path, label: &str) -> Result<Extraction> {
        let gray = load_grayscale_image(path)?;
        self.extract_with_trace(gray.as_view(), label)
    }

    /// Full extraction keeping intermediate maps and stage timings.
    pub fn extract_with_trace(&self, gray: ImageU8<'_>, label: &str) -> Result<Extraction> {
        if gray.is_empty() {
            return Err(FeatureError::EmptyImage {
                width: gray.w,
                height: gray.h,
            });
        }
        let start = Instant::now();
        let mut timing = TimingBreakdown::default();

        let smoothed = timing.time("smooth", || {
            self.params.smoothing.apply(&ImageF32::from_u8(gray))
        });
        let field = timing.time("orientation", || {
            estimate_orientation(&smoothed, self.params.gradient_kernel)
        });
        let detector = self.params.minutiae_detector();
        let minutiae = timing.time("minutiae", || detector.detect(&smoothed));
        let lbp = timing.time("lbp", || local_binary_pattern(&smoothed));

        let orientation_stats = field.summary();
        let lbp_stats = lbp.summary();
        let record = FeatureRecord {
            orientation_mean: orientation_stats.mean,
            orientation_var: orientation_stats.var,
            orientation_max: orientation_stats.max,
            minutiae_count: minutiae.minutiae.len() as u64,
            lbp_mean: lbp_stats.mean,
            lbp_var: lbp_stats.var,
            lbp_max: lbp_stats.max,
            label: label.to_string(),
        };
        timing.total_ms = elapsed_ms(start);

        let trace = ExtractionTrace {
            input: InputDescriptor {
                width: gray.w,
                height: gray.h,
            },
            ridge_pixels: minutiae.ridge_pixels,
            skeleton_pixels: minutiae.skeleton.count(),
            endings: minutiae.endings(),
            bifurcations: minutiae.bifurcations(),
            lbp_histogram: lbp.histogram().to_vec(),
            timing,
        };
        Ok(Extraction {
            record,
            trace,
            smoothed,
            orientation: field.angles,
            skeleton: minutiae.skeleton,
            lbp,
        })
    }
}
