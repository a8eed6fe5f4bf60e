//! Orientation field estimation from image gradients.
//!
//! - Gradient computation (Sobel 3×3, Sobel 5×5, Scharr 3×3) returning `gx`
//!   and `gy` with clamped borders.
//! - Per-pixel angle `atan2(gy, gx)` in (−π, π], stored as an `ImageF32` of
//!   the same size as the input.
//!
//! The field is the raw gradient direction. It is not doubled or folded into
//! a π-periodic ridge orientation; downstream code only reduces it to mean,
//! variance and maximum.

pub mod field;
pub mod grad;

pub use field::{estimate_orientation, OrientationField};
pub use grad::{image_gradients, Grad, GradientKernel};
