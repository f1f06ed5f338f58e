//! gcode-extract - Cutting-parameter extraction for CNC lathe programs.
//!
//! Reads an NC program (loosely formatted G-code) and derives the three
//! features used by the power and tool-life models: feed rate, spindle speed
//! and depth of cut.
//!
//! # Example
//!
//! ```
//! use gcode_extract::{extract, FeatureVector};
//!
//! let program = "G97 S1200 M03\nG00 X40 Z2\nG01 X36 F0.25\nG01 Z-30";
//! let result = extract(program);
//! assert_eq!(result.feed_rate, 0.25);
//! assert_eq!(result.spindle_speed, 1200.0);
//! assert_eq!(result.depth_of_cut, 2.0);
//!
//! let features = FeatureVector::try_from(&result).unwrap();
//! assert_eq!(features.as_array(), [0.25, 2.0, 1200.0]);
//! ```

pub mod config;
pub mod error;
pub mod estimate;
pub mod model;
pub mod parser;
pub mod validation;

// Re-exports for convenience
pub use config::{AnalyzerConfig, ExtractorConfig};
pub use error::{AnalyzeError, Result};
pub use estimate::{estimate, Estimate, PowerSource};
pub use model::{DepthSource, ExtractionResult, Extent, FeatureVector};
pub use parser::{extract, Extractor};
pub use validation::{validate_result, validate_results, ValidationResult};

use config::PROGRAM_EXTENSIONS;
use std::path::{Path, PathBuf};

/// Check whether a path has one of the accepted NC program extensions.
pub fn is_program_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            PROGRAM_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
        .unwrap_or(false)
}

/// Read a program file and extract its cutting parameters.
///
/// An empty file is not an error; it yields the same result as an empty
/// program (default feed and speed, zero depth).
pub fn analyze_file(path: &Path, config: &ExtractorConfig) -> Result<ExtractionResult> {
    if !path.exists() {
        return Err(AnalyzeError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    if !is_program_file(path) {
        return Err(AnalyzeError::UnsupportedFile {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path)?;
    let program = String::from_utf8(bytes).map_err(|_| AnalyzeError::InvalidEncoding {
        path: path.to_path_buf(),
    })?;

    tracing::debug!(
        "{}: {} line(s), {} byte(s)",
        path.display(),
        program.lines().count(),
        program.len()
    );

    let result = Extractor::new(*config).extract(&program);

    if !result.has_motion() {
        tracing::warn!("{}: no cutting motion detected", path.display());
    }

    Ok(result)
}

/// List program files directly inside `dir`, sorted by path.
pub fn collect_program_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(AnalyzeError::FileNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_program_file(&path) {
            files.push(path);
        }
    }
    files.sort();

    tracing::debug!("{}: found {} program file(s)", dir.display(), files.len());

    Ok(files)
}
