use super::grad::{image_gradients, GradientKernel};
use crate::image::{ImageF32, ImageView};
use crate::stats::SummaryStats;

/// Per-pixel gradient direction in radians, range (−π, π].
#[derive(Clone, Debug)]
pub struct OrientationField {
    pub angles: ImageF32,
}

impl OrientationField {
    pub fn dims(&self) -> (usize, usize) {
        self.angles.dims()
    }

    /// Mean, variance and maximum over every pixel of the field.
    pub fn summary(&self) -> SummaryStats {
        SummaryStats::of(self.angles.data.iter().copied())
    }
}

/// Estimate the gradient direction field of `image`.
///
/// Always succeeds; an empty image gives an empty field.
pub fn estimate_orientation(image: &ImageF32, kernel: GradientKernel) -> OrientationField {
    let grad = image_gradients(image, kernel);
    let mut angles = ImageF32::new(image.w, image.h);
    for ((a, &gx), &gy) in angles.data.iter_mut().zip(&grad.gx.data).zip(&grad.gy.data) {
        *a = gy.atan2(gx);
    }
    OrientationField { angles }
}
