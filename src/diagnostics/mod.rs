//! Diagnostics returned next to feature records: stage timings and the
//! intermediate counts that explain a record (skeleton size, minutia kinds).
//!
//! Nothing here feeds back into the features themselves.

pub mod timing;
pub mod trace;

pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
pub use trace::{ExtractionTrace, InputDescriptor};
