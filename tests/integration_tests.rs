//! Integration tests for program-file analysis.
//!
//! These run the whole pipeline the way the CLI does: read a program from
//! disk, extract parameters, validate, and build the scaler feature row.

use gcode_extract::{
    analyze_file, collect_program_files, estimate, validate_results, AnalyzeError,
    AnalyzerConfig, DepthSource, ExtractionResult, ExtractorConfig, FeatureVector, PowerSource,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Typical CAM-generated OD roughing program for a lathe.
const ROUGHING_PROGRAM: &str = "\
%
O0100 (OD ROUGH)
(TOOL T0101 CNMG 120408)
G21 G40 G99
G28 U0. W0.
T0101
G50 S2500
G96 S180 M03 (CSS 180 M/MIN)
G00 X52. Z2.
G01 Z-40. F0.25
G00 U1. Z2.
G00 X48.
G01 Z-40. F0.3 ; second pass
G00 X50. Z2.
G97 S1200
G01 X46. Z-0.5 F0.15
g01 z-25.
G00 X100. Z100.
M05
M30
%
";

fn write_program(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

// ==================== analyze_file tests ====================

#[test]
fn test_roughing_program() {
    let dir = TempDir::new().unwrap();
    let path = write_program(&dir, "rough.nc", ROUGHING_PROGRAM.as_bytes());

    let result = analyze_file(&path, &ExtractorConfig::default()).unwrap();

    // S180 under G96 is ignored; G50 S2500 is the largest RPM word.
    // X range 46..100 -> 27.0
    assert_eq!(
        result,
        ExtractionResult {
            feed_rate: 0.3,
            spindle_speed: 2500.0,
            depth_of_cut: 27.0,
            feed_defaulted: false,
            speed_defaulted: false,
            depth_source: DepthSource::XDiameter,
        }
    );
}

#[test]
fn test_report_line() {
    let dir = TempDir::new().unwrap();
    let path = write_program(
        &dir,
        "finish.gcode",
        b"G97 S1200 M03\nG00 X40 Z2\nG01 X36 F0.25\nG01 Z-30\n",
    );

    let result = analyze_file(&path, &ExtractorConfig::default()).unwrap();
    insta::assert_snapshot!(result.to_string(), @"feed=0.25 speed=1200 depth=2");
}

#[test]
fn test_empty_file_is_empty_program() {
    let dir = TempDir::new().unwrap();
    let path = write_program(&dir, "empty.tap", b"");

    let result = analyze_file(&path, &ExtractorConfig::default()).unwrap();
    assert_eq!(result, gcode_extract::extract(""));
    assert_eq!(result.feed_rate, 0.1);
    assert_eq!(result.spindle_speed, 1000.0);
    assert_eq!(result.depth_of_cut, 0.0);
}

#[test]
fn test_missing_file() {
    let err = analyze_file(Path::new("/nonexistent/part.nc"), &ExtractorConfig::default())
        .unwrap_err();
    assert!(matches!(err, AnalyzeError::FileNotFound { .. }));
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = write_program(&dir, "layout.dxf", b"G01 X10");

    let err = analyze_file(&path, &ExtractorConfig::default()).unwrap_err();
    assert!(matches!(err, AnalyzeError::UnsupportedFile { .. }));
}

#[test]
fn test_invalid_encoding() {
    let dir = TempDir::new().unwrap();
    let path = write_program(&dir, "binary.nc", &[0x47, 0x30, 0xff, 0xfe, 0x58]);

    let err = analyze_file(&path, &ExtractorConfig::default()).unwrap_err();
    assert!(matches!(err, AnalyzeError::InvalidEncoding { .. }));
}

#[test]
fn test_config_defaults_flow_through() {
    let dir = TempDir::new().unwrap();
    let path = write_program(&dir, "nofeed.nc", b"G00 X30\nG01 X20\n");
    let config = AnalyzerConfig::from_json_str(
        r#"{"extractor": {"default_spindle_speed": 750, "default_feed_rate": 0.08}}"#,
    )
    .unwrap();

    let result = analyze_file(&path, &config.extractor).unwrap();
    assert_eq!(result.spindle_speed, 750.0);
    assert_eq!(result.feed_rate, 0.08);
    assert!(result.feed_defaulted && result.speed_defaulted);
}

// ==================== collect_program_files tests ====================

#[test]
fn test_collect_program_files_sorted_and_filtered() {
    let dir = TempDir::new().unwrap();
    write_program(&dir, "b.nc", b"");
    write_program(&dir, "a.TAP", b"");
    write_program(&dir, "notes.md", b"");
    fs::create_dir(dir.path().join("sub.nc")).unwrap();

    let files = collect_program_files(dir.path()).unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.TAP", "b.nc"]);
}

#[test]
fn test_collect_missing_dir() {
    let err = collect_program_files(Path::new("/nonexistent/programs")).unwrap_err();
    assert!(matches!(err, AnalyzeError::FileNotFound { .. }));
}

// ==================== pipeline tests ====================

#[test]
fn test_validate_then_estimate() {
    let dir = TempDir::new().unwrap();
    let good = write_program(&dir, "good.nc", ROUGHING_PROGRAM.as_bytes());
    let bad = write_program(&dir, "facing.nc", b"G97 S900\nG00 X60\n");

    let config = AnalyzerConfig::default();
    let results: Vec<_> = [&good, &bad]
        .iter()
        .map(|p| {
            let result = analyze_file(p, &config.extractor).unwrap();
            (p.display().to_string(), result)
        })
        .collect();

    let report = validate_results(&results);
    assert!(!report.passed);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].contains("facing.nc"));

    assert!(FeatureVector::try_from(&results[1].1).is_err());

    let features = FeatureVector::try_from(&results[0].1).unwrap();
    assert_eq!(features.as_array(), [0.3, 27.0, 2500.0]);

    let est = estimate(&features, 1800.0, &config.tool_life, &config.tariffs).unwrap();
    assert_eq!(est.source, PowerSource::Solar);
    assert!(est.tool_life_min > 0.0);
    assert!(est.cost.grid > est.cost.solar);
}
