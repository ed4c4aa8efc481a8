//! Photag - tag photos by encoding `@tags` into their file names
//!
//! `beach.jpg` tagged with `@sun` and `@sea` becomes `beach @sun @sea.jpg`.
//! This library keeps an in-memory index of photos, registered tags and
//! per-photo tag history consistent with the names on disk, refuses renames
//! that would collide with another indexed photo, and persists the index in
//! an embedded database.

use thiserror::Error;

pub mod audit;
pub mod cli;
pub mod codec;
pub mod commands;
pub mod config;
pub mod db;
pub mod manager;
pub mod model;
pub mod output;
pub mod rename;
pub mod scan;
pub mod session;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum PhotagError {
    /// Database error
    #[error("Database error: {0}")]
    DbError(#[from] db::DbError),
    /// A tag operation failed
    #[error("{0}")]
    ManagerError(#[from] manager::ManagerError),
    /// A tag name was rejected
    #[error("Invalid tag: {0}")]
    TagError(#[from] model::TagError),
    /// A photo path was rejected
    #[error("{0}")]
    PhotoError(#[from] model::PhotoError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
