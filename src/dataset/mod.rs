//! Dataset traversal and batch extraction.
//!
//! The dataset layout is `<root>/<label>/<image>`: every immediate
//! sub-directory of the root is one class and its name becomes the label of
//! the images inside it.

pub mod batch;
pub mod scan;

pub use batch::{run_batch, BatchReport, BatchSummary, ExtractionFailure};
pub use scan::{is_image_file, scan_dataset, DatasetEntry};
