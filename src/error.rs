//! Error types for feature extraction and the batch glue around it.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, FeatureError>;

#[derive(Error, Debug)]
pub enum FeatureError {
    /// Image file that could not be opened or decoded.
    #[error("Failed to decode image {}: {source}", path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A debug raster could not be encoded to disk.
    #[error("Failed to encode image {}: {source}", path.display())]
    ImageEncode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Zero-width or zero-height input.
    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: usize, height: usize },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error on {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("CSV error on {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Feature table header does not match the fixed record layout.
    #[error("Unexpected feature table columns in {}: expected {expected:?}, found {found:?}", path.display())]
    TableSchema {
        path: PathBuf,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Invalid configuration: {message}")]
    Config { message: String },

    #[error("Failed to scan dataset {}: {source}", root.display())]
    DatasetScan {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl FeatureError {
    pub fn image_decode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::ImageDecode {
            path: path.into(),
            source,
        }
    }

    pub fn image_encode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::ImageEncode {
            path: path.into(),
            source,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// True for the "could not decode image" outcome a batch caller skips over.
    pub fn is_decode_failure(&self) -> bool {
        matches!(
            self,
            FeatureError::ImageDecode { .. } | FeatureError::EmptyImage { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_errors_are_distinguishable() {
        let err = FeatureError::EmptyImage {
            width: 0,
            height: 4,
        };
        assert!(err.is_decode_failure());
        assert!(!FeatureError::config("bad").is_decode_failure());
        assert_eq!(err.to_string(), "Image has no pixels (0x4)");
    }
}
