//! JSON configuration for the command-line tools.
//!
//! Each tool takes a single config path. Extractor parameters are optional
//! and fall back to [`ExtractorParams::default`](crate::features::ExtractorParams).

pub mod batch;
pub mod inspect;

pub use batch::{BatchConfig, BatchOutputConfig};
pub use inspect::{InspectConfig, InspectOutputConfig};

use crate::error::{FeatureError, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read and parse a JSON config file.
pub fn load_config<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path).map_err(|e| FeatureError::io(path, e))?;
    serde_json::from_str(&data).map_err(|e| FeatureError::json(path, e))
}
