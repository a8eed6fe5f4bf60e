//! Image gradients from separable derivative kernels.
//!
//! Every supported kernel factors into a smoothing vector and a central
//! difference vector, so a pass is two 1D convolutions per axis. Borders
//! clamp (replicate). On a constant image both derivatives are exactly `+0.0`,
//! which keeps `atan2` at 0 instead of flipping to π on a negative zero.
//!
//! Complexity: O(W·H·k) per axis; memory: two output buffers plus one scratch.
use crate::filters::clamp_index;
use crate::image::{ImageF32, ImageView, ImageViewMut};
use serde::{Deserialize, Serialize};

const SOBEL3_SMOOTH: [f32; 3] = [1.0, 2.0, 1.0];
const SOBEL3_DERIV: [f32; 3] = [-1.0, 0.0, 1.0];
const SOBEL5_SMOOTH: [f32; 5] = [1.0, 4.0, 6.0, 4.0, 1.0];
const SOBEL5_DERIV: [f32; 5] = [-1.0, -2.0, 0.0, 2.0, 1.0];
const SCHARR_SMOOTH: [f32; 3] = [3.0, 10.0, 3.0];
const SCHARR_DERIV: [f32; 3] = [-1.0, 0.0, 1.0];

/// Derivative kernel used for the orientation field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GradientKernel {
    Sobel3,
    /// Aperture-5 Sobel: a derivative-of-Gaussian approximation.
    #[default]
    Sobel5,
    /// Scharr 3×3 (better rotational symmetry than Sobel).
    Scharr3,
}

impl GradientKernel {
    /// `(smoothing, derivative)` taps of the separable factorisation.
    fn factors(self) -> (&'static [f32], &'static [f32]) {
        match self {
            GradientKernel::Sobel3 => (&SOBEL3_SMOOTH, &SOBEL3_DERIV),
            GradientKernel::Sobel5 => (&SOBEL5_SMOOTH, &SOBEL5_DERIV),
            GradientKernel::Scharr3 => (&SCHARR_SMOOTH, &SCHARR_DERIV),
        }
    }

    pub fn aperture(self) -> usize {
        self.factors().0.len()
    }
}

/// Per‑pixel gradient buffers.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Horizontal derivative
    pub gx: ImageF32,
    /// Vertical derivative (y grows downwards)
    pub gy: ImageF32,
}

/// Compute `gx` and `gy` with the given kernel.
pub fn image_gradients(l: &ImageF32, kernel: GradientKernel) -> Grad {
    let (smooth, deriv) = kernel.factors();
    // gx: derivative along x, smoothing along y; gy the other way round.
    let gx = convolve_separable(l, deriv, smooth);
    let gy = convolve_separable(l, smooth, deriv);
    Grad { gx, gy }
}

fn convolve_separable(src: &ImageF32, taps_x: &[f32], taps_y: &[f32]) -> ImageF32 {
    let (w, h) = (src.w, src.h);
    let mut horiz = ImageF32::new(w, h);
    let mut out = ImageF32::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }

    for y in 0..h {
        let row = src.row(y);
        let dst = horiz.row_mut(y);
        for (x, d) in dst.iter_mut().enumerate() {
            *d = tap_sum(taps_x, |off| row[clamp_index(x as isize + off, w)]);
        }
    }

    for y in 0..h {
        let dst = out.row_mut(y);
        for (x, d) in dst.iter_mut().enumerate() {
            *d = tap_sum(taps_y, |off| {
                horiz.data[clamp_index(y as isize + off, h) * w + x]
            });
        }
    }
    out
}

/// Apply centred `taps` to samples at offsets `-r..=r`.
///
/// Antisymmetric (derivative) taps are evaluated on pairwise differences so
/// equal samples cancel to `+0.0` exactly.
#[inline]
fn tap_sum(taps: &[f32], sample: impl Fn(isize) -> f32) -> f32 {
    let r = taps.len() / 2;
    let mut acc = 0.0f32;
    if taps[r] == 0.0 && (1..=r).all(|j| taps[r + j] == -taps[r - j]) {
        for j in 1..=r {
            let ji = j as isize;
            acc += taps[r + j] * (sample(ji) - sample(-ji));
        }
    } else {
        for (k, &tap) in taps.iter().enumerate() {
            acc += tap * sample(k as isize - r as isize);
        }
    }
    acc
}
