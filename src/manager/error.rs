//! Tag operation errors
//!
//! Name conflicts are not errors; they come back as
//! [`TagOutcome::Conflict`](super::TagOutcome::Conflict).

use crate::db::PhotoId;
use crate::model::PhotoError;
use thiserror::Error;

/// Errors raised by [`TagManager`](super::TagManager)
#[derive(Debug, Error)]
pub enum ManagerError {
    /// The id does not belong to the index
    #[error("Unknown photo {0}")]
    UnknownPhoto(PhotoId),

    /// A rename failed; tags applied earlier in the same operation were rolled back
    #[error("Rename failed: {0}")]
    RenameFailed(#[from] PhotoError),

    /// The requested history entry does not exist
    #[error("History entry {index} does not exist (photo has {len} entries)")]
    HistoryIndexOutOfRange { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_photo_display() {
        let error = ManagerError::UnknownPhoto(PhotoId(4));
        assert_eq!(error.to_string(), "Unknown photo #4");
    }

    #[test]
    fn test_history_index_display() {
        let error = ManagerError::HistoryIndexOutOfRange { index: 5, len: 2 };
        assert_eq!(error.to_string(), "History entry 5 does not exist (photo has 2 entries)");
    }

    #[test]
    fn test_photo_error_conversion() {
        let error: ManagerError = PhotoError::InvalidPath("/".into()).into();
        assert!(matches!(error, ManagerError::RenameFailed(_)));
    }
}
