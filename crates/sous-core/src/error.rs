//! Error types for the core.
//!
//! - [`StorageError`] - Key-value storage failures (quota, disabled storage)
//! - [`FetchError`] - Failures talking to the recipe backend

use thiserror::Error;

/// Storage operation errors.
///
/// All variants are recoverable: callers report them and keep running.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Storage is disabled or not present in this context.
    #[error("storage not available")]
    Unavailable,
    /// Reading a key failed.
    #[error("failed to read `{0}` from storage")]
    ReadFailed(String),
    /// Writing a key failed (quota exceeded, storage disabled).
    #[error("failed to write `{0}` to storage")]
    WriteFailed(String),
    /// Removing a key failed.
    #[error("failed to remove `{0}` from storage")]
    RemoveFailed(String),
    /// Stored data under the key no longer parses.
    #[error("stored data under `{0}` is unreadable")]
    Corrupt(String),
    /// A value could not be serialized to JSON.
    #[error("failed to serialize value: {0}")]
    Serialize(String),
}

/// Network/fetch-related errors for backend requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, connection refused, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON encoding or parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}
