//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type SubmissionResult<T> = Result<T, SubmissionError>;

/// Reasons a seller submission is refused before anything is sent upstream.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// A required field was absent, `null`, empty, zero, or of the wrong JSON type.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

impl SubmissionError {
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField(field)
    }

    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField(field) => field,
        }
    }
}
