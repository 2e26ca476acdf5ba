//! Validation errors for the IAM model layer

use thiserror::Error;

/// Errors produced when checking a model value against the constraints the
/// service publishes for it (length ranges, regex patterns, value sets).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field '{field}' is too short: {length} < {min}")]
    TooShort { field: String, length: usize, min: usize },

    #[error("Field '{field}' is too long: {length} > {max}")]
    TooLong { field: String, length: usize, max: usize },

    #[error("Field '{field}' does not match the required pattern {pattern}")]
    PatternMismatch { field: String, pattern: String },

    #[error("Field '{field}' is out of range: {value} not in {min}..={max}")]
    OutOfRange { field: String, value: i64, min: i64, max: i64 },

    #[error("Unknown value '{value}' for {kind}")]
    UnknownEnumValue { kind: &'static str, value: String },

    #[error("Duplicate key '{key}' in {field}")]
    DuplicateKey { field: String, key: String },

    #[error("Field '{field}' is required")]
    MissingField { field: String },
}

/// Result type alias for model validation.
pub type ValidationResult<T> = Result<T, ValidationError>;
