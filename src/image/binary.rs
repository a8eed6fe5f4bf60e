//! Binary ridge masks and skeletons.
//!
//! Samples outside the grid read as background, so 3×3 neighborhood logic
//! never needs explicit border checks.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryImage {
    pub w: usize,
    pub h: usize,
    pub data: Vec<bool>,
}

impl BinaryImage {
    /// All-background image of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![false; w * h],
        }
    }

    pub fn from_fn(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                data.push(f(x, y));
            }
        }
        Self { w, h, data }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[y * self.w + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: bool) {
        self.data[y * self.w + x] = v;
    }

    /// Foreground test with out-of-range coordinates treated as background.
    #[inline]
    pub fn at(&self, x: isize, y: isize) -> bool {
        if x < 0 || y < 0 || x >= self.w as isize || y >= self.h as isize {
            return false;
        }
        self.get(x as usize, y as usize)
    }

    /// Number of foreground pixels.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.w, self.h)
    }
}
