//! Error types for the listing-feed crate.
//!
//! Only I/O and syntactically invalid JSON are errors here. Content that is
//! shaped wrong (a body that is not an array, a record without an id) is
//! tolerated by the parser and logged instead.

use thiserror::Error;

/// Errors that can occur while loading a feed snapshot
#[derive(Error, Debug)]
pub enum ListingLoadError {
    /// Feed file could not be found
    #[error("Feed file not found: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a feed file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Feed body was not valid JSON
    #[error("Invalid JSON in {source_name}: {reason}")]
    InvalidJson { source_name: String, reason: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ListingLoadError>;
