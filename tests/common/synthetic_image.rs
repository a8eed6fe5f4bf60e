#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Constant-intensity image.
pub fn uniform_u8(width: usize, height: usize, value: u8) -> Vec<u8> {
    vec![value; width * height]
}

/// White (255) one-pixel diagonal `x == y` for `from..=to` on black (0).
pub fn diagonal_line_u8(width: usize, height: usize, from: usize, to: usize) -> Vec<u8> {
    assert!(to < width.min(height), "line must fit inside the image");
    let mut img = vec![0u8; width * height];
    for i in from..=to {
        img[i * width + i] = 255;
    }
    img
}

/// Same line inverted: black ink on white paper.
pub fn dark_diagonal_line_u8(width: usize, height: usize, from: usize, to: usize) -> Vec<u8> {
    diagonal_line_u8(width, height, from, to)
        .into_iter()
        .map(|v| 255 - v)
        .collect()
}

/// Slanted sinusoidal ridges, a rough stand-in for a fingerprint patch.
pub fn ridge_stripes_u8(width: usize, height: usize, period: f32) -> Vec<u8> {
    assert!(period > 0.0, "period must be positive");
    let k = std::f32::consts::TAU / period;
    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let phase = k * (x as f32 * 0.8 + y as f32 * 0.6);
            img[y * width + x] = (127.5 + 110.0 * phase.sin()).round() as u8;
        }
    }
    img
}

/// Save a tightly packed 8-bit buffer as PNG.
pub fn write_png(path: &Path, width: usize, height: usize, data: Vec<u8>) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dir");
    }
    let img = image::GrayImage::from_raw(width as u32, height as u32, data)
        .expect("buffer matches dimensions");
    img.save(path).expect("write png");
}

/// Fresh, empty scratch directory unique to this process and `name`.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("fpf-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}
