//! Error types for the yinyang crates.

use thiserror::Error;

/// Errors that can occur when loading site data or persisting the selection.
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown group '{0}' (expected \"yashika\" or \"ryuu\")")]
    UnknownGroup(String),

    #[error("Event data error: {0}")]
    Data(String),

    #[error("Duplicate event id: {0}")]
    DuplicateEventId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for yinyang operations.
pub type SiteResult<T> = Result<T, SiteError>;
