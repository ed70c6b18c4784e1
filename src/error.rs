//! Error types for the unpunct library.

use thiserror::Error;

/// Result type alias for unpunct operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur when configuring or querying the engine.
///
/// The transformation itself is total over all string inputs and never
/// returns an error; these variants cover the fallible edges only.
#[derive(Error, Debug)]
pub enum Error {
    /// A proposed custom keep-list contains control characters that would
    /// interfere with line-based normalization.
    #[error("keep-list contains disallowed control characters: {0}")]
    InvalidKeepList(String),

    /// Error serializing statistics to JSON.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
