use crate::features::ExtractorParams;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectConfig {
    pub input: PathBuf,
    /// Label written into the record; defaults to the parent folder name.
    pub label: Option<String>,
    #[serde(default)]
    pub extractor: ExtractorParams,
    pub output: InspectOutputConfig,
}

/// Where the debug artifacts go. Unset entries are skipped.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InspectOutputConfig {
    pub smoothed_image: Option<PathBuf>,
    pub skeleton_image: Option<PathBuf>,
    pub lbp_image: Option<PathBuf>,
    pub report_json: Option<PathBuf>,
}

impl InspectConfig {
    pub fn label(&self) -> String {
        self.label.clone().unwrap_or_else(|| {
            self.input
                .parent()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
    }
}
