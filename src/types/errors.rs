//! Error types for memokit.

use thiserror::Error;

/// Default result type for memokit.
pub type MemokitResult<T> = Result<T, MemokitError>;

/// Errors produced by memokit.
#[derive(Error, Debug)]
pub enum MemokitError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid version '{input}': {reason}")]
    InvalidFormat { input: String, reason: String },

    #[error("Result does not fit in 64 bits: {0}")]
    Overflow(String),

    #[error("{what} = {value} exceeds the configured limit of {limit}")]
    LimitExceeded {
        what: &'static str,
        value: u64,
        limit: u64,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MemokitError {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates an invalid version format error.
    pub fn invalid_format<I: Into<String>, R: Into<String>>(input: I, reason: R) -> Self {
        Self::InvalidFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
