//! Error types for rostering runs.
//!
//! Only malformed input and invalid configuration are errors. Missing
//! staff is scored as understaffing and degenerate moves fall back to a
//! replacement, so neither ever surfaces here.

use thiserror::Error;

use crate::model::time::ParseTimeError;
use crate::validation::{ValidationError, ValidationErrorKind};

/// Main error type for u-roster operations.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Employee or shift records failed validation; every problem found is listed.
    #[error("invalid input ({} problem(s)): {}", .0.len(), summarize(.0))]
    Validation(Vec<ValidationError>),

    /// Search or cost configuration is out of range.
    #[error("configuration error: {0}")]
    Config(String),

    #[cfg(feature = "serde")]
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for u-roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;

impl From<ParseTimeError> for RosterError {
    fn from(err: ParseTimeError) -> Self {
        RosterError::Validation(vec![ValidationError::new(
            ValidationErrorKind::InvalidTime,
            err.to_string(),
        )])
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
