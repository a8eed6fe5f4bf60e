//! Batch feature extraction over `<root>/<label>/<image>`.
//!
//! Writes the feature table as CSV and, optionally, a JSON summary listing
//! every image that was skipped.
use fingerprint_features::config::{load_config, BatchConfig};
use fingerprint_features::dataset::{run_batch, scan_dataset};
use fingerprint_features::image::io::write_json_file;
use fingerprint_features::{FeatureError, FeatureExtractor, FeatureTable};
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), FeatureError> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config: BatchConfig = load_config(Path::new(&config_path))?;
    config.validate()?;

    let entries = scan_dataset(&config.dataset_root)?;
    if entries.is_empty() {
        return Err(FeatureError::config(format!(
            "no images found under {}",
            config.dataset_root.display()
        )));
    }

    let extractor = FeatureExtractor::new(config.extractor);
    let report = run_batch(&entries, &extractor, config.parallel);
    let summary = report.summary();

    let mut table = FeatureTable::from(report.records);
    if config.output.impute_non_finite {
        let replaced = table.impute_non_finite();
        if replaced > 0 {
            log::warn!("imputed {replaced} non-finite cells");
        }
    }
    table.write_csv(&config.output.features_csv)?;
    if let Some(path) = &config.output.summary_json {
        write_json_file(path, &summary)?;
    }

    println!(
        "Extracted {} of {} images into {} ({} failed)",
        summary.succeeded,
        summary.processed,
        config.output.features_csv.display(),
        summary.failed
    );
    for (label, count) in &summary.per_label {
        println!("  {label}: {count}");
    }
    for failure in &summary.failures {
        println!("  skipped {}: {}", failure.path.display(), failure.reason);
    }
    Ok(())
}

fn usage() -> FeatureError {
    FeatureError::config("Usage: extract_features <config.json>")
}
