//! Error types for program analysis.
//!
//! The extractor itself is total and never produces these. They cover the
//! boundary around it: reading program files, loading configuration, and
//! handing values to downstream formulas that need strictly positive input.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the analyzer.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Unsupported program file: {path} (expected .nc, .txt, .gcode or .tap)")]
    UnsupportedFile { path: PathBuf },

    #[error("Program file is not valid UTF-8 text: {path}")]
    InvalidEncoding { path: PathBuf },

    #[error("Feature '{name}' must be strictly positive, got {value}")]
    NonPositiveFeature { name: &'static str, value: f64 },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for analyzer operations.
pub type Result<T> = std::result::Result<T, AnalyzeError>;
