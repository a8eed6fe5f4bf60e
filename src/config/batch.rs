use crate::error::{FeatureError, Result};
use crate::features::ExtractorParams;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BatchConfig {
    /// Folder holding one sub-folder per label.
    pub dataset_root: PathBuf,
    /// Spread images over the rayon pool (output order is unchanged).
    #[serde(default)]
    pub parallel: bool,
    #[serde(default)]
    pub extractor: ExtractorParams,
    pub output: BatchOutputConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BatchOutputConfig {
    pub features_csv: PathBuf,
    /// JSON digest with counts, failures and timing.
    pub summary_json: Option<PathBuf>,
    /// Replace non-finite cells before writing the table.
    #[serde(default)]
    pub impute_non_finite: bool,
}

impl BatchConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(t) = self.extractor.ridge_mask.threshold {
            if !(0.0..=1.0).contains(&t) {
                return Err(FeatureError::config(format!(
                    "ridgeMask.threshold must lie in [0, 1], got {t}"
                )));
            }
        }
        if self.extractor.ridge_mask.min_contrast < 0.0 {
            return Err(FeatureError::config("ridgeMask.minContrast must be >= 0"));
        }
        Ok(())
    }
}
