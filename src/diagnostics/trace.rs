use super::TimingBreakdown;
use serde::Serialize;

/// Shape of the decoded input.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

/// Per-image account of what the extractor saw.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionTrace {
    pub input: InputDescriptor,
    pub ridge_pixels: usize,
    pub skeleton_pixels: usize,
    pub endings: usize,
    pub bifurcations: usize,
    /// Occurrences of each LBP code `0..=9`.
    pub lbp_histogram: Vec<usize>,
    pub timing: TimingBreakdown,
}
