//! Checks that an extraction result is usable as model input.

use crate::model::{DepthSource, ExtractionResult};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Create a failing result with an error.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            errors: vec![message.into()],
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate one program's extraction result.
///
/// Defaulted feed or speed is only a warning. A zero or non-positive value
/// is an error: the tool-life model divides by every feature.
pub fn validate_result(name: &str, result: &ExtractionResult) -> ValidationResult {
    let mut report = ValidationResult::ok();

    if !result.is_fully_measured() {
        if result.feed_defaulted {
            report.add_warning(format!(
                "{}: No feed rate found, using default {}",
                name, result.feed_rate
            ));
        }
        if result.speed_defaulted {
            report.add_warning(format!(
                "{}: No spindle speed found, using default {}",
                name, result.spindle_speed
            ));
        }
    }

    if result.depth_source == DepthSource::None {
        report.add_error(format!("{}: No cutting motion detected", name));
    } else if result.depth_of_cut <= 0.0 {
        report.add_error(format!(
            "{}: Depth of cut is zero (single {} position)",
            name,
            match result.depth_source {
                DepthSource::XDiameter => "X",
                _ => "Z",
            }
        ));
    }

    if result.feed_rate <= 0.0 {
        report.add_error(format!(
            "{}: Feed rate {} rounds to zero",
            name, result.feed_rate
        ));
    }
    if result.spindle_speed <= 0.0 {
        report.add_error(format!(
            "{}: Spindle speed {} rounds to zero",
            name, result.spindle_speed
        ));
    }

    tracing::debug!(
        "{}: validation {} ({} warning(s), {} error(s))",
        name,
        if report.passed { "passed" } else { "failed" },
        report.warnings.len(),
        report.errors.len()
    );

    report
}

/// Validate a batch of named results.
pub fn validate_results<S: AsRef<str>>(results: &[(S, ExtractionResult)]) -> ValidationResult {
    if results.is_empty() {
        return ValidationResult::error("No programs to validate");
    }

    let mut report = ValidationResult::ok();
    for (name, result) in results {
        report.merge(validate_result(name.as_ref(), result));
    }
    report
}
