//! Minutiae detection with the crossing-number method.
//!
//! Pipeline per image:
//! 1. `mask`: binarise the smoothed image into ridge / background.
//! 2. `thinning`: Guo–Hall thinning down to a one-pixel-wide skeleton.
//! 3. `crossing`: for every interior skeleton pixel count background→ridge
//!    transitions around its 3×3 neighborhood; 1 marks a ridge ending and 3 a
//!    bifurcation.
//!
//! The outer one-pixel frame is never classified, so reported positions
//! always satisfy `1 <= x <= w-2` and `1 <= y <= h-2`.

pub mod crossing;
pub mod mask;
pub mod thinning;

pub use crossing::{crossing_number, detect_minutiae, CrossingRing, Minutia, MinutiaKind};
pub use mask::{ridge_mask, RidgeMaskOptions, RidgePolarity};
pub use thinning::thin;

use crate::image::{BinaryImage, ImageF32};
use log::debug;

/// Mask, thinning and classification settings bundled together.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MinutiaeDetector {
    pub ridge_mask: RidgeMaskOptions,
    pub crossing_ring: CrossingRing,
}

/// Skeleton plus the minutiae found on it.
#[derive(Clone, Debug)]
pub struct MinutiaeResult {
    /// Ridge pixels before thinning.
    pub ridge_pixels: usize,
    pub skeleton: BinaryImage,
    pub minutiae: Vec<Minutia>,
}

impl MinutiaeResult {
    pub fn endings(&self) -> usize {
        self.count_kind(MinutiaKind::Ending)
    }

    pub fn bifurcations(&self) -> usize {
        self.count_kind(MinutiaKind::Bifurcation)
    }

    fn count_kind(&self, kind: MinutiaKind) -> usize {
        self.minutiae.iter().filter(|m| m.kind == kind).count()
    }
}

impl MinutiaeDetector {
    /// Binarise, thin and classify `image`.
    pub fn detect(&self, image: &ImageF32) -> MinutiaeResult {
        let mask = ridge_mask(image, &self.ridge_mask);
        self.detect_mask(&mask)
    }

    /// Thin an existing ridge mask and classify its skeleton.
    pub fn detect_mask(&self, mask: &BinaryImage) -> MinutiaeResult {
        let ridge_pixels = mask.count();
        let skeleton = thin(mask);
        let minutiae = detect_minutiae(&skeleton, self.crossing_ring);
        debug!(
            "minutiae: mask={} skeleton={} minutiae={}",
            ridge_pixels,
            skeleton.count(),
            minutiae.len()
        );
        MinutiaeResult {
            ridge_pixels,
            skeleton,
            minutiae,
        }
    }
}
