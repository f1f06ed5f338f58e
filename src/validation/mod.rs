//! Validation of extraction results before they reach downstream models.

mod validate;

pub use validate::{validate_result, validate_results, ValidationResult};
