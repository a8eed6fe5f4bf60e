//! Separable smoothing applied once before any analysis.
//!
//! Each pass convolves rows (then columns) with a 1D tap vector; samples
//! beyond the image clamp to the nearest edge pixel. A constant image stays
//! exactly constant because the default taps are dyadic and sum to one.
use crate::image::{ImageF32, ImageView, ImageViewMut};
use serde::{Deserialize, Serialize};

/// Trait implemented by separable 1D filters.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order). Odd length, centred.
    fn taps(&self) -> &[f32];
}

/// Simple wrapper around a static filter kernel.
#[derive(Clone, Copy, Debug)]
pub struct StaticSeparableFilter {
    taps: &'static [f32],
}

impl Default for StaticSeparableFilter {
    fn default() -> Self {
        GAUSSIAN_5TAP
    }
}

impl StaticSeparableFilter {
    pub const fn new(taps: &'static [f32]) -> Self {
        Self { taps }
    }
}

impl SeparableFilter for StaticSeparableFilter {
    #[inline]
    fn taps(&self) -> &[f32] {
        self.taps
    }
}

/// Normalised 3-tap binomial filter `[1, 2, 1] / 4`.
pub const GAUSSIAN_3TAP: StaticSeparableFilter = StaticSeparableFilter::new(&[0.25, 0.5, 0.25]);

/// Normalised 5-tap Gaussian filter `[1, 4, 6, 4, 1] / 16`.
pub const GAUSSIAN_5TAP: StaticSeparableFilter =
    StaticSeparableFilter::new(&[0.0625, 0.25, 0.375, 0.25, 0.0625]);

/// Config-facing choice of the pre-analysis blur.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Smoothing {
    /// Skip smoothing entirely.
    None,
    Gaussian3,
    /// 5×5 Gaussian, sigma derived from the aperture (≈1.1).
    #[default]
    Gaussian5,
}

impl Smoothing {
    pub fn filter(self) -> Option<StaticSeparableFilter> {
        match self {
            Smoothing::None => None,
            Smoothing::Gaussian3 => Some(GAUSSIAN_3TAP),
            Smoothing::Gaussian5 => Some(GAUSSIAN_5TAP),
        }
    }

    /// Apply the configured blur, returning a fresh image.
    pub fn apply(self, src: &ImageF32) -> ImageF32 {
        match self.filter() {
            Some(f) => apply_separable(&f, src),
            None => src.clone(),
        }
    }
}

/// Convolve `src` with `filter` horizontally, then vertically.
pub fn apply_separable(filter: &dyn SeparableFilter, src: &ImageF32) -> ImageF32 {
    let taps = filter.taps();
    assert!(taps.len() % 2 == 1, "separable filter needs an odd tap count");
    let (w, h) = (src.w, src.h);
    let mut horiz = ImageF32::new(w, h);
    let mut out = ImageF32::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }
    for y in 0..h {
        filter_row(src.row(y), horiz.row_mut(y), taps);
    }

    let radius = taps.len() / 2;
    for y in 0..h {
        let dst = out.row_mut(y);
        for (k, &tap) in taps.iter().enumerate() {
            let sy = clamp_index(y as isize + k as isize - radius as isize, h);
            let src_row = horiz.row(sy);
            for (d, &s) in dst.iter_mut().zip(src_row) {
                *d += tap * s;
            }
        }
    }
    out
}

/// Horizontal 1D convolution with clamped borders.
pub(crate) fn filter_row(row: &[f32], out: &mut [f32], taps: &[f32]) {
    let radius = taps.len() / 2;
    let n = row.len();
    for (x, dst) in out.iter_mut().enumerate() {
        let mut acc = 0.0f32;
        for (k, &tap) in taps.iter().enumerate() {
            let idx = clamp_index(x as isize + k as isize - radius as isize, n);
            acc += tap * row[idx];
        }
        *dst = acc;
    }
}

#[inline]
pub(crate) fn clamp_index(idx: isize, upper: usize) -> usize {
    if upper == 0 || idx < 0 {
        0
    } else if (idx as usize) >= upper {
        upper - 1
    } else {
        idx as usize
    }
}
