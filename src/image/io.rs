//! I/O helpers for grayscale images and JSON.
//!
//! - `load_grayscale_image`: decode a PNG/JPEG/BMP/TIFF into an owned 8-bit gray buffer.
//! - `save_grayscale_f32`: write an `ImageF32` in `[0, 1]` to a grayscale PNG.
//! - `save_binary`: write a mask or skeleton as black/white PNG.
//! - `save_lbp`: write an LBP code map stretched to the 8-bit range.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{BinaryImage, ImageF32, ImageU8, ImageView};
use crate::error::{FeatureError, Result};
use crate::texture::{LbpMap, LBP_MAX_CODE};
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned 8-bit grayscale buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct an owned grayscale buffer given raw, tightly packed bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8::packed(self.width, self.height, &self.data)
    }
}

/// Load an image from disk and reduce it to 8-bit luma.
///
/// Missing files, unknown formats and truncated data all surface as
/// [`FeatureError::ImageDecode`].
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8> {
    let img = image::open(path)
        .map_err(|e| FeatureError::image_decode(path, e))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(GrayImageU8::new(width, height, img.into_raw()))
}

/// Save a float image to a grayscale PNG, clamping values in [0, 255].
pub fn save_grayscale_f32(image: &ImageF32, path: &Path) -> Result<()> {
    let mut out = GrayImage::new(image.w as u32, image.h as u32);
    for (y, row) in image.rows().enumerate() {
        for (x, &px) in row.iter().enumerate() {
            let v = (px * 255.0).round().clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    save_gray(out, path)
}

/// Save a binary image with foreground rendered white.
pub fn save_binary(mask: &BinaryImage, path: &Path) -> Result<()> {
    let out = GrayImage::from_fn(mask.w as u32, mask.h as u32, |x, y| {
        Luma([if mask.get(x as usize, y as usize) { 255 } else { 0 }])
    });
    save_gray(out, path)
}

/// Save an LBP map with codes stretched over the 8-bit range.
pub fn save_lbp(map: &LbpMap, path: &Path) -> Result<()> {
    let scale = 255.0 / LBP_MAX_CODE as f32;
    let out = GrayImage::from_fn(map.w as u32, map.h as u32, |x, y| {
        let code = map.get(x as usize, y as usize);
        Luma([(code as f32 * scale).round() as u8])
    });
    save_gray(out, path)
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|e| FeatureError::json(path, e))?;
    fs::write(path, json).map_err(|e| FeatureError::io(path, e))
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| FeatureError::io(parent, e))?;
        }
    }
    Ok(())
}

fn save_gray(image: GrayImage, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    image.save(path).map_err(|e| match e {
        image::ImageError::IoError(io) => FeatureError::io(path, io),
        other => FeatureError::image_encode(path, other),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("fpf-io-{}-{name}", std::process::id()))
    }

    #[test]
    fn garbage_file_is_a_decode_failure() {
        let path = scratch("garbage.png");
        fs::write(&path, b"definitely not a png").unwrap();
        let err = load_grayscale_image(&path).unwrap_err();
        assert!(err.is_decode_failure(), "got {err:?}");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_a_decode_failure() {
        let err = load_grayscale_image(Path::new("/nonexistent/finger.bmp")).unwrap_err();
        assert!(err.is_decode_failure(), "got {err:?}");
    }

    #[test]
    fn float_image_round_trips_through_png() {
        let path = scratch("ramp.png");
        let img = ImageF32::from_fn(4, 3, |x, _| x as f32 / 3.0);
        save_grayscale_f32(&img, &path).unwrap();
        let loaded = load_grayscale_image(&path).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (4, 3));
        let view = loaded.as_view();
        assert_eq!(view.get(0, 0), 0);
        assert_eq!(view.get(3, 2), 255);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn unknown_output_format_is_an_encode_error() {
        let path = scratch("skeleton.notaformat");
        let mask = BinaryImage::from_fn(3, 3, |x, y| x == y);
        let err = save_binary(&mask, &path).unwrap_err();
        assert!(matches!(err, FeatureError::ImageEncode { .. }), "got {err:?}");
        assert!(!err.is_decode_failure());
    }
}
