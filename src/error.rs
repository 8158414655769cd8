//! Error types for the flow core.
//!
//! Stage resolution is total — every combination of milestone flags is a
//! valid input, so resolving never fails. Errors exist only at the edges:
//! reading persisted flags at startup and parsing milestone names out of
//! REST paths.

/// Failure reading a persisted milestone flag from its source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Storage read failed for {key}: {reason}")]
    Storage { key: String, reason: String },

    #[error("Stored value for {key} is not a boolean: {value}")]
    InvalidValue { key: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// An unrecognized milestone name.
#[derive(Debug, thiserror::Error)]
#[error("Unknown milestone: {0}")]
pub struct ParseMilestoneError(pub String);
