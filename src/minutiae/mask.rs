//! Global-threshold binarisation of the smoothed image into a ridge mask.
use crate::image::{BinaryImage, ImageF32};
use serde::{Deserialize, Serialize};

/// Which side of the threshold counts as ridge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RidgePolarity {
    /// Ink-on-paper scans: ridges darker than the valleys.
    Dark,
    /// Edge maps and binarised prints: ridges (255) brighter than the
    /// background (0).
    #[default]
    Bright,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RidgeMaskOptions {
    pub polarity: RidgePolarity,
    /// Fixed threshold in `[0, 1]`; `None` uses the image mid-range.
    pub threshold: Option<f32>,
    /// Images whose intensity range is below this have no ridges at all.
    pub min_contrast: f32,
}

impl Default for RidgeMaskOptions {
    fn default() -> Self {
        Self {
            polarity: RidgePolarity::Bright,
            threshold: None,
            min_contrast: 0.05,
        }
    }
}

/// Binarise `image` into ridge (true) / background (false).
pub fn ridge_mask(image: &ImageF32, options: &RidgeMaskOptions) -> BinaryImage {
    let Some((lo, hi)) = image.min_max() else {
        return BinaryImage::new(image.w, image.h);
    };
    if hi - lo < options.min_contrast {
        return BinaryImage::new(image.w, image.h);
    }
    let t = options.threshold.unwrap_or(0.5 * (lo + hi));
    let data = match options.polarity {
        RidgePolarity::Dark => image.data.iter().map(|&v| v < t).collect(),
        RidgePolarity::Bright => image.data.iter().map(|&v| v > t).collect(),
    };
    BinaryImage {
        w: image.w,
        h: image.h,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_treats_bright_pixels_as_ridges() {
        assert_eq!(RidgeMaskOptions::default().polarity, RidgePolarity::Bright);
        let img = ImageF32::from_fn(5, 5, |x, y| if x == y { 1.0 } else { 0.0 });
        let mask = ridge_mask(&img, &RidgeMaskOptions::default());
        assert_eq!(mask.count(), 5);
        assert!((0..5).all(|i| mask.get(i, i)));
    }

    #[test]
    fn flat_image_has_no_ridges() {
        let img = ImageF32::from_fn(8, 8, |_, _| 0.3);
        let mask = ridge_mask(&img, &RidgeMaskOptions::default());
        assert_eq!(mask.dims(), (8, 8));
        assert_eq!(mask.count(), 0);
    }

    #[test]
    fn polarity_selects_dark_or_bright() {
        let img = ImageF32::from_fn(4, 1, |x, _| x as f32 / 3.0);
        let bright = ridge_mask(&img, &RidgeMaskOptions::default());
        assert_eq!(bright.data, vec![false, false, true, true]);
        let dark = ridge_mask(
            &img,
            &RidgeMaskOptions {
                polarity: RidgePolarity::Dark,
                ..Default::default()
            },
        );
        assert_eq!(dark.data, vec![true, true, false, false]);
    }

    #[test]
    fn fixed_threshold_overrides_mid_range() {
        let img = ImageF32::from_fn(4, 1, |x, _| x as f32 / 3.0);
        let mask = ridge_mask(
            &img,
            &RidgeMaskOptions {
                threshold: Some(0.2),
                ..Default::default()
            },
        );
        assert_eq!(mask.count(), 3);
    }
}
