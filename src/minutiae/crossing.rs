//! Crossing-number classification of skeleton pixels.
use super::thinning::neighbors;
use crate::image::BinaryImage;
use serde::{Deserialize, Serialize};

/// How the 3×3 neighborhood is walked when counting transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CrossingRing {
    /// Textbook ring: N, NE, E, SE, S, SW, W, NW and back to N.
    #[default]
    Wrapped,
    /// Row-major flattening of the 3×3 window (center at index 4), pairs
    /// `(i, i + 1)` for `i < 8`, no wrap-around. Reproduces feature tables
    /// produced by the older extraction scripts.
    Flattened,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MinutiaKind {
    Ending,
    Bifurcation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Minutia {
    pub x: usize,
    pub y: usize,
    pub kind: MinutiaKind,
}

/// Count background→ridge transitions around `(x, y)`.
///
/// Out-of-image neighbors read as background.
pub fn crossing_number(skeleton: &BinaryImage, x: usize, y: usize, ring: CrossingRing) -> u8 {
    match ring {
        CrossingRing::Wrapped => {
            let p = neighbors(skeleton, x, y);
            (0..8).filter(|&i| !p[i] && p[(i + 1) % 8]).count() as u8
        }
        CrossingRing::Flattened => {
            let (xi, yi) = (x as isize, y as isize);
            let mut window = [false; 9];
            for (i, cell) in window.iter_mut().enumerate() {
                let dx = (i % 3) as isize - 1;
                let dy = (i / 3) as isize - 1;
                *cell = skeleton.at(xi + dx, yi + dy);
            }
            (0..8).filter(|&i| !window[i] && window[i + 1]).count() as u8
        }
    }
}

/// Classify every interior ridge pixel of `skeleton`, row-major order.
pub fn detect_minutiae(skeleton: &BinaryImage, ring: CrossingRing) -> Vec<Minutia> {
    let (w, h) = skeleton.dims();
    if w < 3 || h < 3 {
        return Vec::new();
    }
    let mut out = Vec::new();
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            if !skeleton.get(x, y) {
                continue;
            }
            let kind = match crossing_number(skeleton, x, y, ring) {
                1 => MinutiaKind::Ending,
                3 => MinutiaKind::Bifurcation,
                _ => continue,
            };
            out.push(Minutia { x, y, kind });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagonal(n: usize, from: usize, to: usize) -> BinaryImage {
        BinaryImage::from_fn(n, n, |x, y| x == y && (from..=to).contains(&x))
    }

    fn tee() -> BinaryImage {
        BinaryImage::from_fn(21, 21, |x, y| {
            (y == 10 && (2..=18).contains(&x)) || (x == 10 && (11..=18).contains(&y))
        })
    }

    #[test]
    fn diagonal_line_has_two_endings() {
        let m = detect_minutiae(&diagonal(12, 2, 9), CrossingRing::Wrapped);
        assert_eq!(
            m,
            vec![
                Minutia { x: 2, y: 2, kind: MinutiaKind::Ending },
                Minutia { x: 9, y: 9, kind: MinutiaKind::Ending },
            ]
        );
    }

    #[test]
    fn tee_junction_is_a_bifurcation() {
        let m = detect_minutiae(&tee(), CrossingRing::Wrapped);
        let bif: Vec<_> = m
            .iter()
            .filter(|p| p.kind == MinutiaKind::Bifurcation)
            .map(|p| (p.x, p.y))
            .collect();
        assert_eq!(bif, vec![(10, 10)]);
        let ends = m.iter().filter(|p| p.kind == MinutiaKind::Ending).count();
        assert_eq!(ends, 3);
    }

    #[test]
    fn flattened_window_skips_the_wrap_pair() {
        let line = diagonal(12, 2, 9);
        // The upper endpoint's only neighbor (SE) sits at flattened index 8,
        // adding a second transition next to the center pixel.
        assert_eq!(crossing_number(&line, 2, 2, CrossingRing::Flattened), 2);
        assert_eq!(crossing_number(&line, 9, 9, CrossingRing::Flattened), 1);
        assert_eq!(crossing_number(&line, 2, 2, CrossingRing::Wrapped), 1);
        let m = detect_minutiae(&line, CrossingRing::Flattened);
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn border_pixels_are_never_reported() {
        let full_row = BinaryImage::from_fn(10, 10, |_, y| y == 5);
        assert!(detect_minutiae(&full_row, CrossingRing::Wrapped).is_empty());

        let corner = BinaryImage::from_fn(10, 10, |x, y| x == y);
        for m in detect_minutiae(&corner, CrossingRing::Wrapped) {
            assert!((1..=8).contains(&m.x) && (1..=8).contains(&m.y));
        }
    }

    #[test]
    fn isolated_pixel_is_not_a_minutia() {
        let dot = BinaryImage::from_fn(5, 5, |x, y| x == 2 && y == 2);
        assert_eq!(crossing_number(&dot, 2, 2, CrossingRing::Wrapped), 0);
        assert!(detect_minutiae(&dot, CrossingRing::Wrapped).is_empty());
    }

    #[test]
    fn tiny_images_have_no_interior() {
        let img = BinaryImage::from_fn(2, 7, |_, _| true);
        assert!(detect_minutiae(&img, CrossingRing::Wrapped).is_empty());
    }
}
