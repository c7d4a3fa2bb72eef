//! Error types for the fraud detector

use thiserror::Error;

/// Errors produced by the detector
#[derive(Debug, Error)]
pub enum DetectorError {
    /// A transaction field was missing or malformed; no partial verdict is produced.
    #[error("invalid input: {field} {reason}")]
    InvalidInput { field: String, reason: String },

    /// The rule configuration could not be loaded at startup.
    #[error("failed to load configuration")]
    Config(#[from] config::ConfigError),
}

impl DetectorError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        DetectorError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
