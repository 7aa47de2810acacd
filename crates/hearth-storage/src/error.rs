//! # Storage Error Types
//!
//! Error types for persistence operations.
//!
//! Only *writes* surface errors: callers persist fire-and-forget and log
//! a warning on failure. Read problems (missing file, unreadable file,
//! corrupt JSON) never become errors at all; [`crate::LocalStore::load`]
//! maps them to `None` so a store always starts from valid state.

use thiserror::Error;

/// Persistence operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The storage root could not be created or opened.
    #[error("Failed to open storage root '{path}': {reason}")]
    OpenFailed { path: String, reason: String },

    /// A blob could not be written.
    #[error("Failed to write blob '{key}': {reason}")]
    WriteFailed { key: String, reason: String },

    /// A value could not be serialized to JSON.
    #[error("Failed to serialize blob '{key}': {reason}")]
    SerializeFailed { key: String, reason: String },

    /// A blob could not be removed.
    #[error("Failed to remove blob '{key}': {reason}")]
    RemoveFailed { key: String, reason: String },
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
