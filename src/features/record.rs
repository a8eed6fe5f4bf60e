use serde::{Deserialize, Serialize};

/// Column order of the feature table.
pub const FEATURE_COLUMNS: [&str; 8] = [
    "orientation_mean",
    "orientation_var",
    "orientation_max",
    "minutiae_count",
    "lbp_mean",
    "lbp_var",
    "lbp_max",
    "label",
];

/// One row of the feature table: seven scalars plus the dataset label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub orientation_mean: f64,
    pub orientation_var: f64,
    pub orientation_max: f64,
    pub minutiae_count: u64,
    pub lbp_mean: f64,
    pub lbp_var: f64,
    pub lbp_max: f64,
    pub label: String,
}

impl FeatureRecord {
    /// The seven numeric features in column order.
    pub fn values(&self) -> [f64; 7] {
        [
            self.orientation_mean,
            self.orientation_var,
            self.orientation_max,
            self.minutiae_count as f64,
            self.lbp_mean,
            self.lbp_var,
            self.lbp_max,
        ]
    }
}
