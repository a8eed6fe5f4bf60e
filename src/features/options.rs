//! Parameters of the per-image extractor.
//!
//! Every field has a default, so a config may omit the whole block or any
//! part of it.
use crate::filters::Smoothing;
use crate::minutiae::{CrossingRing, MinutiaeDetector, RidgeMaskOptions};
use crate::orientation::GradientKernel;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractorParams {
    /// Blur applied once before all three analyses.
    pub smoothing: Smoothing,
    /// Derivative kernel for the orientation field.
    pub gradient_kernel: GradientKernel,
    /// Binarisation ahead of thinning.
    pub ridge_mask: RidgeMaskOptions,
    /// Neighborhood walk for the crossing number.
    pub crossing_ring: CrossingRing,
}

impl ExtractorParams {
    pub fn minutiae_detector(&self) -> MinutiaeDetector {
        MinutiaeDetector {
            ridge_mask: self.ridge_mask,
            crossing_ring: self.crossing_ring,
        }
    }
}
