//! Single-image inspection: runs the extractor with tracing and dumps the
//! smoothed image, skeleton and LBP map next to a JSON report.
use fingerprint_features::config::{load_config, InspectConfig};
use fingerprint_features::diagnostics::ExtractionTrace;
use fingerprint_features::image::io::{save_binary, save_grayscale_f32, save_lbp, write_json_file};
use fingerprint_features::{FeatureError, FeatureExtractor, FeatureRecord};
use serde::Serialize;
use std::env;
use std::path::Path;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InspectReport<'a> {
    input: &'a Path,
    record: &'a FeatureRecord,
    trace: &'a ExtractionTrace,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), FeatureError> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config: InspectConfig = load_config(Path::new(&config_path))?;

    let extractor = FeatureExtractor::new(config.extractor);
    let out = extractor.extract_path_with_trace(&config.input, &config.label())?;

    if let Some(path) = &config.output.smoothed_image {
        save_grayscale_f32(&out.smoothed, path)?;
    }
    if let Some(path) = &config.output.skeleton_image {
        save_binary(&out.skeleton, path)?;
    }
    if let Some(path) = &config.output.lbp_image {
        save_lbp(&out.lbp, path)?;
    }
    let report = InspectReport {
        input: &config.input,
        record: &out.record,
        trace: &out.trace,
    };
    match &config.output.report_json {
        Some(path) => {
            write_json_file(path, &report)?;
            println!("Report written to {}", path.display());
        }
        None => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| FeatureError::json(&config.input, e))?;
            println!("{json}");
        }
    }

    let r = &out.record;
    println!("Feature record ({})", r.label);
    println!(
        "  orientation: mean={:.4} var={:.4} max={:.4}",
        r.orientation_mean, r.orientation_var, r.orientation_max
    );
    println!(
        "  minutiae: {} ({} endings, {} bifurcations, skeleton {} px)",
        r.minutiae_count, out.trace.endings, out.trace.bifurcations, out.trace.skeleton_pixels
    );
    println!(
        "  lbp: mean={:.4} var={:.4} max={:.0}",
        r.lbp_mean, r.lbp_var, r.lbp_max
    );
    println!("  total {:.2} ms", out.trace.timing.total_ms);
    Ok(())
}

fn usage() -> FeatureError {
    FeatureError::config("Usage: inspect_fingerprint <config.json>")
}
