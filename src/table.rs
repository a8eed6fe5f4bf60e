//! The aggregated feature table and its CSV form.
//!
//! The CSV header is exactly [`FEATURE_COLUMNS`]. Reading rejects tables
//! whose columns differ in any way instead of carrying unknown columns along.
use crate::error::{FeatureError, Result};
use crate::features::{FeatureRecord, FEATURE_COLUMNS};
use crate::image::io::ensure_parent_dir;
use log::debug;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureTable {
    pub rows: Vec<FeatureRecord>,
}

impl From<Vec<FeatureRecord>> for FeatureTable {
    fn from(rows: Vec<FeatureRecord>) -> Self {
        Self { rows }
    }
}

impl FeatureTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write all rows with a header line.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        ensure_parent_dir(path)?;
        let mut writer = csv::Writer::from_path(path).map_err(|e| FeatureError::csv(path, e))?;
        if self.rows.is_empty() {
            writer
                .write_record(FEATURE_COLUMNS)
                .map_err(|e| FeatureError::csv(path, e))?;
        }
        for row in &self.rows {
            writer.serialize(row).map_err(|e| FeatureError::csv(path, e))?;
        }
        writer.flush().map_err(|e| FeatureError::io(path, e))?;
        debug!("wrote {} rows to {}", self.rows.len(), path.display());
        Ok(())
    }

    /// Read a table previously written by [`Self::write_csv`].
    pub fn read_csv(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| FeatureError::csv(path, e))?;
        let found: Vec<String> = reader
            .headers()
            .map_err(|e| FeatureError::csv(path, e))?
            .iter()
            .map(str::to_string)
            .collect();
        if found.iter().map(String::as_str).ne(FEATURE_COLUMNS) {
            return Err(FeatureError::TableSchema {
                path: path.to_path_buf(),
                expected: FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
                found,
            });
        }
        let rows = reader
            .deserialize()
            .collect::<std::result::Result<Vec<FeatureRecord>, _>>()
            .map_err(|e| FeatureError::csv(path, e))?;
        Ok(Self { rows })
    }

    /// Replace NaN / ±inf cells by the mean of the finite values in the same
    /// column (0 when a column has none). Returns the number of cells changed.
    pub fn impute_non_finite(&mut self) -> usize {
        let mut replaced = 0;
        for column in FLOAT_COLUMNS {
            let (sum, n) = self
                .rows
                .iter()
                .map(|r| r.values()[column])
                .filter(|v| v.is_finite())
                .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
            let fill = if n == 0 { 0.0 } else { sum / n as f64 };
            for row in &mut self.rows {
                let cell = float_cell(row, column);
                if !cell.is_finite() {
                    *cell = fill;
                    replaced += 1;
                }
            }
        }
        replaced
    }

    /// Number of rows per label.
    pub fn label_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for row in &self.rows {
            *counts.entry(row.label.clone()).or_insert(0) += 1;
        }
        counts
    }
}

/// Positions of the float columns within [`FeatureRecord::values`].
const FLOAT_COLUMNS: [usize; 6] = [0, 1, 2, 4, 5, 6];

fn float_cell(row: &mut FeatureRecord, column: usize) -> &mut f64 {
    match column {
        0 => &mut row.orientation_mean,
        1 => &mut row.orientation_var,
        2 => &mut row.orientation_max,
        4 => &mut row.lbp_mean,
        5 => &mut row.lbp_var,
        6 => &mut row.lbp_max,
        _ => unreachable!("column {column} is not a float feature"),
    }
}
