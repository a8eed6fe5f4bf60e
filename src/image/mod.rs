//! Single-channel image buffers shared by all analyses.
//!
//! `ImageU8` borrows decoded 8-bit samples, `ImageF32` owns the `[0, 1]`
//! float working copy and `BinaryImage` holds ridge masks and skeletons. All
//! three are row-major; analyses produce outputs with the input's `w × h`.
pub mod binary;
pub mod f32;
pub mod io;
pub mod traits;
pub mod u8;

pub use self::binary::BinaryImage;
pub use self::f32::ImageF32;
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::ImageU8;
