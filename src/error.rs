use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the wka library
#[derive(Error, Debug)]
pub enum WkaError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Metadata error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to replace alias file: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Malformed alias line '{line}': {reason}")]
    MalformedRecord { line: String, reason: String },

    #[error("Invalid alias name '{0}'")]
    InvalidName(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Unsupported alias file format version {found} (newest supported is {supported})")]
    UnsupportedFormat { found: u32, supported: u32 },

    #[error("Alias file not found at {0:?}")]
    StoreMissing(PathBuf),
}

/// Result type alias for the wka library
pub type Result<T> = std::result::Result<T, WkaError>;

impl WkaError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        WkaError::Config(msg.into())
    }

    /// Create a malformed record error for `line`
    pub fn malformed<L: Into<String>, R: Into<String>>(line: L, reason: R) -> Self {
        WkaError::MalformedRecord {
            line: line.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid name error
    pub fn invalid_name<S: Into<String>>(name: S) -> Self {
        WkaError::InvalidName(name.into())
    }

    /// Create an invalid path error
    pub fn invalid_path<S: Into<String>>(msg: S) -> Self {
        WkaError::InvalidPath(msg.into())
    }

    /// True when the alias file has not been created yet
    pub fn is_store_missing(&self) -> bool {
        matches!(self, WkaError::StoreMissing(_))
    }
}
