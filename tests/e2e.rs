mod common;

use common::synthetic_image::{
    dark_diagonal_line_u8, diagonal_line_u8, ridge_stripes_u8, scratch_dir, uniform_u8, write_png,
};
use fingerprint_features::image::ImageU8;
use fingerprint_features::minutiae::{
    detect_minutiae, CrossingRing, Minutia, MinutiaKind, RidgeMaskOptions, RidgePolarity,
};
use fingerprint_features::{ExtractorParams, FeatureExtractor, FEATURE_COLUMNS};
use std::fs;

#[test]
fn all_white_image_has_degenerate_features() {
    let (w, h) = (256usize, 256usize);
    let buf = uniform_u8(w, h, 255);
    let record = FeatureExtractor::default()
        .extract_image(ImageU8::packed(w, h, &buf), "A+")
        .expect("uniform image is valid input");

    assert_eq!(record.orientation_mean, 0.0);
    assert_eq!(record.orientation_var, 0.0);
    assert_eq!(record.orientation_max, 0.0);
    assert_eq!(record.minutiae_count, 0);
    assert_eq!(record.lbp_var, 0.0);
    assert_eq!(record.lbp_mean, record.lbp_max);
    assert!(record.values().iter().all(|v| v.is_finite()));
}

#[test]
fn uniform_gray_and_black_images_are_degenerate_too() {
    for value in [0u8, 97] {
        let buf = uniform_u8(40, 30, value);
        let record = FeatureExtractor::default()
            .extract_image(ImageU8::packed(40, 30, &buf), "O-")
            .unwrap();
        assert_eq!(record.minutiae_count, 0, "value {value}");
        assert_eq!(record.orientation_var, 0.0);
        assert_eq!(record.lbp_var, 0.0);
    }
}

fn assert_two_line_endings(extractor: &FeatureExtractor, buf: &[u8]) {
    let (w, h) = (256usize, 256usize);
    let out = extractor
        .extract_with_trace(ImageU8::packed(w, h, buf), "B+")
        .unwrap();

    assert_eq!(out.trace.endings, 2);
    assert_eq!(out.trace.bifurcations, 0);
    assert_eq!(out.record.minutiae_count, 2);
    assert!(out.trace.ridge_pixels < 1000, "ridge={}", out.trace.ridge_pixels);

    let minutiae = detect_minutiae(&out.skeleton, CrossingRing::Wrapped);
    let near = |m: &Minutia, p: usize| m.x.abs_diff(p) <= 2 && m.y.abs_diff(p) <= 2;
    assert!(minutiae.iter().all(|m| m.kind == MinutiaKind::Ending));
    assert!(minutiae.iter().any(|m| near(m, 40)));
    assert!(minutiae.iter().any(|m| near(m, 215)));
}

#[test]
fn bright_diagonal_line_ends_in_two_ridge_endings() {
    let _ = env_logger::builder().is_test(true).try_init();
    let buf = diagonal_line_u8(256, 256, 40, 215);
    assert_two_line_endings(&FeatureExtractor::default(), &buf);
}

#[test]
fn dark_polarity_handles_ink_on_paper() {
    let buf = dark_diagonal_line_u8(256, 256, 40, 215);
    let extractor = FeatureExtractor::new(ExtractorParams {
        ridge_mask: RidgeMaskOptions {
            polarity: RidgePolarity::Dark,
            ..Default::default()
        },
        ..Default::default()
    });
    assert_two_line_endings(&extractor, &buf);
}

#[test]
fn minutiae_stay_off_the_border() {
    let (w, h) = (64usize, 48usize);
    let buf = ridge_stripes_u8(w, h, 9.0);
    let out = FeatureExtractor::default()
        .extract_with_trace(ImageU8::packed(w, h, &buf), "AB-")
        .unwrap();
    for m in detect_minutiae(&out.skeleton, CrossingRing::Wrapped) {
        assert!((1..=w - 2).contains(&m.x), "x={} on border", m.x);
        assert!((1..=h - 2).contains(&m.y), "y={} on border", m.y);
    }
    // Stripes cross the image edge, so the skeleton is non-trivial.
    assert!(out.trace.skeleton_pixels > 0);
}

#[test]
fn extraction_is_deterministic() {
    let (w, h) = (96usize, 80usize);
    let buf = ridge_stripes_u8(w, h, 7.0);
    let extractor = FeatureExtractor::default();
    let a = extractor
        .extract_image(ImageU8::packed(w, h, &buf), "A-")
        .unwrap();
    let b = extractor
        .extract_image(ImageU8::packed(w, h, &buf), "A-")
        .unwrap();
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_vec(&a).unwrap(),
        serde_json::to_vec(&b).unwrap()
    );
}

#[test]
fn record_shape_does_not_depend_on_content() {
    let extractor = FeatureExtractor::new(ExtractorParams {
        crossing_ring: CrossingRing::Flattened,
        ..Default::default()
    });
    let cases = [
        (1usize, 1usize, uniform_u8(1, 1, 10)),
        (3, 2, vec![0, 255, 0, 255, 0, 255]),
        (50, 33, ridge_stripes_u8(50, 33, 5.0)),
    ];
    for (w, h, buf) in cases {
        let record = extractor
            .extract_image(ImageU8::packed(w, h, &buf), "AB+")
            .unwrap();
        let json = serde_json::to_value(&record).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        let mut expected: Vec<_> = FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect();
        expected.sort();
        assert_eq!(keys, expected, "{w}x{h}");
        assert!(record.values().iter().all(|v| v.is_finite()));
    }
}

#[test]
fn png_on_disk_matches_in_memory_extraction() {
    let dir = scratch_dir("e2e-png");
    let path = dir.join("print.png");
    let buf = ridge_stripes_u8(72, 60, 8.0);
    write_png(&path, 72, 60, buf.clone());

    let extractor = FeatureExtractor::default();
    let from_disk = extractor.extract_path(&path, "O+").unwrap();
    let in_memory = extractor
        .extract_image(ImageU8::packed(72, 60, &buf), "O+")
        .unwrap();
    assert_eq!(from_disk, in_memory);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn corrupt_file_is_reported_not_raised() {
    let dir = scratch_dir("e2e-corrupt");
    let path = dir.join("broken.bmp");
    fs::write(&path, b"BM this is not a bitmap").unwrap();

    let err = FeatureExtractor::default()
        .extract_path(&path, "A+")
        .unwrap_err();
    assert!(err.is_decode_failure(), "unexpected error: {err}");
    let _ = fs::remove_dir_all(&dir);
}
