//! Error types for repeat detection

use thiserror::Error;

/// Result type for repeat detection operations
pub type Result<T> = std::result::Result<T, RepeatError>;

/// Errors that can occur while configuring or running the detection pipeline
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RepeatError {
    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The input sequence has no symbols
    #[error("input sequence is empty")]
    EmptyInput,
}
