//! Rotation-invariant uniform local binary patterns (P = 8, R = 1).
//!
//! Each pixel samples 8 points on a unit circle around it; the axis-aligned
//! points hit pixel centers, the diagonal ones are bilinearly interpolated.
//! A sample `>=` the center sets its bit. Patterns with at most two circular
//! 0/1 transitions are "uniform" and map to their popcount `0..=8`; all
//! others share code `9`. Samples beyond the image clamp to the border.
use crate::image::{ImageF32, ImageView};
use crate::stats::SummaryStats;
use std::f64::consts::FRAC_1_SQRT_2;

/// Number of circular samples.
pub const LBP_POINTS: usize = 8;
/// Code assigned to non-uniform patterns (and the largest possible code).
pub const LBP_MAX_CODE: u8 = LBP_POINTS as u8 + 1;

/// Sample offsets `(dx, dy)` counter-clockwise from east.
const OFFSETS: [(f64, f64); LBP_POINTS] = [
    (1.0, 0.0),
    (FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
    (0.0, -1.0),
    (-FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
    (-1.0, 0.0),
    (-FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    (0.0, 1.0),
    (FRAC_1_SQRT_2, FRAC_1_SQRT_2),
];

/// Per-pixel LBP codes, same shape as the source image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LbpMap {
    pub w: usize,
    pub h: usize,
    pub codes: Vec<u8>,
}

impl LbpMap {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.codes[y * self.w + x]
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.w, self.h)
    }

    pub fn summary(&self) -> SummaryStats {
        SummaryStats::of(self.codes.iter().map(|&c| c as f64))
    }

    /// Occurrences of each code `0..=LBP_MAX_CODE`.
    pub fn histogram(&self) -> [usize; LBP_MAX_CODE as usize + 1] {
        let mut hist = [0usize; LBP_MAX_CODE as usize + 1];
        for &c in &self.codes {
            hist[c as usize] += 1;
        }
        hist
    }
}

/// Uniform-pattern lookup: 8-bit pattern → code.
fn uniform_lut() -> [u8; 256] {
    let mut lut = [0u8; 256];
    for (pattern, code) in lut.iter_mut().enumerate() {
        let v = pattern as u8;
        let transitions = (v ^ v.rotate_right(1)).count_ones();
        *code = if transitions <= 2 {
            v.count_ones() as u8
        } else {
            LBP_MAX_CODE
        };
    }
    lut
}

/// Bilinear sample at `(fx, fy)` with clamped borders.
///
/// Written as nested lerps so a flat neighborhood reproduces its value
/// exactly.
#[inline]
fn bilinear(img: &ImageF32, fx: f64, fy: f64) -> f64 {
    let x0 = fx.floor();
    let y0 = fy.floor();
    let tx = fx - x0;
    let ty = fy - y0;
    let (xi, yi) = (x0 as isize, y0 as isize);
    let v00 = img.get_clamped(xi, yi) as f64;
    let v10 = img.get_clamped(xi + 1, yi) as f64;
    let v01 = img.get_clamped(xi, yi + 1) as f64;
    let v11 = img.get_clamped(xi + 1, yi + 1) as f64;
    let top = v00 + tx * (v10 - v00);
    let bottom = v01 + tx * (v11 - v01);
    top + ty * (bottom - top)
}

/// Compute the uniform LBP map of `image`.
pub fn local_binary_pattern(image: &ImageF32) -> LbpMap {
    let (w, h) = image.dims();
    let lut = uniform_lut();
    let mut codes = Vec::with_capacity(w * h);
    for y in 0..h {
        let row = image.row(y);
        for (x, &center) in row.iter().enumerate() {
            let center = center as f64;
            let mut pattern = 0u8;
            for (bit, &(dx, dy)) in OFFSETS.iter().enumerate() {
                let sample = bilinear(image, x as f64 + dx, y as f64 + dy);
                if sample >= center {
                    pattern |= 1 << bit;
                }
            }
            codes.push(lut[pattern as usize]);
        }
    }
    LbpMap { w, h, codes }
}
