//! Local texture descriptors.
pub mod lbp;

pub use lbp::{local_binary_pattern, LbpMap, LBP_MAX_CODE, LBP_POINTS};
