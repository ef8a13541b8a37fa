//! Error types shared across the crate.

use thiserror::Error;

/// Validation failure for an input record, raised before any layout work.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid record field `{field}`: {reason}")]
pub struct ValidationError {
    /// Name of the offending record field.
    pub field: &'static str,
    /// Human-readable description of the problem.
    pub reason: String,
}

impl ValidationError {
    pub(crate) fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn empty(field: &'static str) -> Self {
        Self::new(field, "must not be empty")
    }
}

/// Errors surfaced by the rendering entry points.
///
/// Every failure propagates synchronously to the caller; the crate never
/// retries and never swallows an error.
#[derive(Debug, Error)]
pub enum DocError {
    /// The input record is structurally unusable.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Layout composition or PDF generation failed.
    #[error("failed to compose document: {0}")]
    Render(String),
    /// The finished artifact could not be persisted.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
