//! Batch extraction over a scanned dataset.
//!
//! Each image yields either a record or a failure; a failure never stops the
//! batch. With `parallel` set the images are spread over the rayon pool, and
//! both records and failures still come back in scan order.
use super::scan::DatasetEntry;
use crate::diagnostics::{elapsed_ms, TimingBreakdown};
use crate::features::{FeatureExtractor, FeatureRecord};
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;

/// An image that produced no record, and why.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionFailure {
    pub path: PathBuf,
    pub label: String,
    pub reason: String,
    /// The file could not be decoded (as opposed to any other failure).
    pub decode_failure: bool,
}

#[derive(Clone, Debug, Default)]
pub struct BatchReport {
    pub records: Vec<FeatureRecord>,
    pub failures: Vec<ExtractionFailure>,
    pub timing: TimingBreakdown,
}

/// Serializable digest of a batch run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub processed: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub per_label: BTreeMap<String, usize>,
    pub failures: Vec<ExtractionFailure>,
    pub timing: TimingBreakdown,
}

impl BatchReport {
    pub fn processed(&self) -> usize {
        self.records.len() + self.failures.len()
    }

    pub fn summary(&self) -> BatchSummary {
        let mut per_label = BTreeMap::new();
        for record in &self.records {
            *per_label.entry(record.label.clone()).or_insert(0) += 1;
        }
        BatchSummary {
            processed: self.processed(),
            succeeded: self.records.len(),
            failed: self.failures.len(),
            per_label,
            failures: self.failures.clone(),
            timing: self.timing.clone(),
        }
    }
}

/// Extract every entry, collecting records and failures.
pub fn run_batch(
    entries: &[DatasetEntry],
    extractor: &FeatureExtractor,
    parallel: bool,
) -> BatchReport {
    let start = Instant::now();
    info!(
        "extracting features from {} images ({})",
        entries.len(),
        if parallel { "parallel" } else { "sequential" }
    );

    let extract = |entry: &DatasetEntry| {
        let t = Instant::now();
        let result = extractor.extract_path(&entry.path, &entry.label);
        debug!(
            "{} -> {} in {:.2} ms",
            entry.path.display(),
            if result.is_ok() { "ok" } else { "failed" },
            elapsed_ms(t)
        );
        result
    };
    let results: Vec<_> = if parallel {
        entries.par_iter().map(extract).collect()
    } else {
        entries.iter().map(extract).collect()
    };

    let mut report = BatchReport::default();
    for (entry, result) in entries.iter().zip(results) {
        match result {
            Ok(record) => report.records.push(record),
            Err(err) => {
                warn!("skipping {}: {err}", entry.path.display());
                report.failures.push(ExtractionFailure {
                    path: entry.path.clone(),
                    label: entry.label.clone(),
                    decode_failure: err.is_decode_failure(),
                    reason: err.to_string(),
                });
            }
        }
    }

    let total = elapsed_ms(start);
    report.timing = TimingBreakdown::with_total(total);
    report.timing.push("extract", total);
    info!(
        "batch done: {} records, {} failures in {:.1} ms",
        report.records.len(),
        report.failures.len(),
        total
    );
    report
}
