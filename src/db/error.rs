//! Database-specific error types
//!
//! This module defines the errors raised while persisting or restoring the
//! photo index. In-memory index operations never fail; lookups of unknown
//! photos or tags return `None`.
//!
//! # Error Types
//!
//! - **`SledError`**: Errors from the underlying sled embedded database
//! - **`DecodeError`**: Failures when deserializing stored records
//! - **`EncodeError`**: Failures when serializing records
//! - **`SerializeError`**: Malformed stored data (e.g., a bad key)

use thiserror::Error;

/// Database-specific errors
#[derive(Debug, Error)]
pub enum DbError {
    /// Represents a sled database error
    #[error("Database error: {0}")]
    SledError(#[from] sled::Error),

    /// Represents a bincode decoding error
    #[error("Error while decoding data: {0}")]
    DecodeError(#[from] bincode::error::DecodeError),

    /// Represents a bincode encoding error
    #[error("Error while encoding data: {0}")]
    EncodeError(#[from] bincode::error::EncodeError),

    /// Generic serialization/deserialization error
    #[error("Error during serialization: {0}")]
    SerializeError(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
