use std::fs;
use std::path::PathBuf;

use image::{Rgba, RgbaImage};

use cmyk_strip_analyzer::chart::ChartLayout;
use cmyk_strip_analyzer::session::AnalysisSettings;
use cmyk_strip_analyzer::{AnalyzeError, run_analysis};

fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("cmyk_pipeline_{tag}_{}", std::process::id()));
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    dir
}

fn write_test_image(dir: &PathBuf, name: &str, width: u32, height: u32) -> PathBuf {
    let mut img = RgbaImage::new(width, height);
    for (x, _, px) in img.enumerate_pixels_mut() {
        // Left half red, right half blue, so slices differ.
        *px = if x < width / 2 {
            Rgba([255, 0, 0, 255])
        } else {
            Rgba([0, 0, 255, 255])
        };
    }
    let path = dir.join(name);
    img.save(&path).expect("failed to save test image");
    path
}

fn settings_for(dir: &PathBuf, input: PathBuf, slices: u32) -> AnalysisSettings {
    AnalysisSettings {
        num_slices: slices,
        chart_path: dir.join("output_analysis.pdf"),
        chart_layout: ChartLayout {
            width_mm: 200.0,
            height_mm: 50.0,
            ..ChartLayout::default()
        },
        ..AnalysisSettings::for_input(input)
    }
}

#[test]
fn full_run_writes_all_outputs() {
    let dir = temp_dir("full");
    let input = write_test_image(&dir, "strip.png", 160, 24);

    let mut settings = settings_for(&dir, input, 4);
    settings.json_report = true;

    let outcome = run_analysis(&settings).expect("analysis failed");

    assert_eq!(outcome.values.len(), 4);
    assert_eq!(outcome.annotated_image, dir.join("strip_output.png"));
    assert_eq!(outcome.report, dir.join("strip_output_analysis.png.txt"));
    assert!(outcome.annotated_image.exists());
    assert!(outcome.report.exists());
    assert!(outcome.json_report.as_ref().expect("missing json").exists());
    let chart_len = fs::metadata(&outcome.chart).expect("missing chart").len();
    assert!(chart_len > 0, "chart PDF should not be empty");

    // Left slices are red, right slices blue, in R,G,B,A order.
    assert_eq!(&outcome.values[0].0[..3], &[100, 0, 0]);
    assert_eq!(&outcome.values[3].0[..3], &[0, 0, 100]);

    let report = fs::read_to_string(&outcome.report).expect("read report failed");
    assert_eq!(report.lines().count(), 4);
    assert!(report.starts_with("Slice 1: Cyan=100, Magenta=0, Yellow=0, Black="));
}

#[test]
fn rerun_produces_byte_identical_report() {
    let dir = temp_dir("rerun");
    let input = write_test_image(&dir, "strip.png", 96, 8);
    let settings = settings_for(&dir, input, 3);

    let first = run_analysis(&settings).expect("first run failed");
    let bytes_first = fs::read(&first.report).expect("read failed");
    let second = run_analysis(&settings).expect("second run failed");
    let bytes_second = fs::read(&second.report).expect("read failed");
    assert_eq!(bytes_first, bytes_second);
}

#[test]
fn slice_count_wider_than_image_is_rejected() {
    let dir = temp_dir("badcount");
    let input = write_test_image(&dir, "narrow.png", 8, 8);
    let settings = settings_for(&dir, input, 9);

    match run_analysis(&settings) {
        Err(AnalyzeError::InvalidSliceCount { requested: 9, width: 8 }) => {}
        other => panic!("expected InvalidSliceCount, got {other:?}"),
    }
}

#[test]
fn missing_input_is_reported_before_any_io() {
    let settings = AnalysisSettings::default();
    assert!(matches!(
        run_analysis(&settings),
        Err(AnalyzeError::NoInputSelected)
    ));
}

#[test]
fn unreadable_image_is_a_decode_error() {
    let dir = temp_dir("decode");
    let bogus = dir.join("not_an_image.png");
    fs::write(&bogus, b"definitely not a png").expect("write failed");
    let settings = settings_for(&dir, bogus, 2);

    assert!(matches!(
        run_analysis(&settings),
        Err(AnalyzeError::ImageDecode(_))
    ));
}

#[test]
fn missing_font_file_is_font_unavailable() {
    let dir = temp_dir("font");
    let input = write_test_image(&dir, "strip.png", 64, 8);
    let mut settings = settings_for(&dir, input, 2);
    settings.font_path = Some(dir.join("no_such_font.ttf"));

    assert!(matches!(
        run_analysis(&settings),
        Err(AnalyzeError::FontUnavailable(_))
    ));
}
