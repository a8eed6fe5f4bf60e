//! Guo–Hall thinning.
//!
//! Two alternating subiterations peel boundary pixels until nothing changes.
//! With neighbors P2..P9 walked clockwise from north, a ridge pixel is a
//! deletion candidate when
//! - `C(P) = 1`: exactly one 8-connected run of ridge neighbors touches it,
//! - `2 <= min(N1, N2) <= 3`, the paired-neighbor counts,
//! - subiteration 1: `(P6 | P7 | !P9) & P8 = 0`;
//!   subiteration 2: `(P2 | P3 | !P5) & P4 = 0`.
//!
//! Candidates are gathered against the image as it stood at the start of the
//! subiteration and re-tested one by one against the partially updated image
//! before removal. Each removal is then a simple-point deletion, so 2×2 blocks
//! and two-pixel-thick diagonals keep at least one pixel and the number of
//! components and holes is preserved. Diagonal strokes keep their full length.
use crate::image::BinaryImage;

/// Clockwise neighbor offsets starting north: P2, P3, …, P9.
pub(crate) const RING: [(isize, isize); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Subiteration {
    First,
    Second,
}

/// Reduce ridges in `mask` to one-pixel-wide curves.
pub fn thin(mask: &BinaryImage) -> BinaryImage {
    let mut img = mask.clone();
    let mut candidates = Vec::new();
    loop {
        let mut changed = false;
        for step in [Subiteration::First, Subiteration::Second] {
            candidates.clear();
            for y in 0..img.h {
                for x in 0..img.w {
                    if img.get(x, y) && deletable(&img, x, y, step) {
                        candidates.push((x, y));
                    }
                }
            }
            for &(x, y) in &candidates {
                if deletable(&img, x, y, step) {
                    img.set(x, y, false);
                    changed = true;
                }
            }
        }
        if !changed {
            return img;
        }
    }
}

#[inline]
pub(crate) fn neighbors(img: &BinaryImage, x: usize, y: usize) -> [bool; 8] {
    let (xi, yi) = (x as isize, y as isize);
    RING.map(|(dx, dy)| img.at(xi + dx, yi + dy))
}

fn deletable(img: &BinaryImage, x: usize, y: usize, step: Subiteration) -> bool {
    let [p2, p3, p4, p5, p6, p7, p8, p9] = neighbors(img, x, y);
    let c = u8::from(!p2 && (p3 || p4))
        + u8::from(!p4 && (p5 || p6))
        + u8::from(!p6 && (p7 || p8))
        + u8::from(!p8 && (p9 || p2));
    if c != 1 {
        return false;
    }
    let n1 = u8::from(p9 || p2) + u8::from(p3 || p4) + u8::from(p5 || p6) + u8::from(p7 || p8);
    let n2 = u8::from(p2 || p3) + u8::from(p4 || p5) + u8::from(p6 || p7) + u8::from(p8 || p9);
    if !(2..=3).contains(&n1.min(n2)) {
        return false;
    }
    let m = match step {
        Subiteration::First => (p6 || p7 || !p9) && p8,
        Subiteration::Second => (p2 || p3 || !p5) && p4,
    };
    !m
}
