//! Model error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a tag name is rejected before a [`Tag`](super::Tag) is created
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TagError {
    /// Nothing but the marker (or nothing at all) was given
    #[error("Tag name is empty")]
    Empty,

    /// Tag names end up inside file names, so separators are forbidden
    #[error("Invalid tag name '{0}': contains a path separator")]
    PathSeparator(String),

    /// Tags are space-delimited inside file names
    #[error("Invalid tag name '{0}': contains whitespace")]
    Whitespace(String),
}

/// Errors raised by [`Photo`](super::Photo) operations
#[derive(Debug, Error)]
pub enum PhotoError {
    /// The path has no file name or is not valid UTF-8
    #[error("Invalid photo path: {0}")]
    InvalidPath(String),

    /// The backing file could not be renamed; the photo was left unchanged
    #[error("Failed to rename '{}' to '{}': {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_tag_error_display() {
        assert_eq!(TagError::Empty.to_string(), "Tag name is empty");
        assert_eq!(
            TagError::PathSeparator("@a/b".into()).to_string(),
            "Invalid tag name '@a/b': contains a path separator"
        );
    }

    #[test]
    fn test_rename_error_has_source() {
        let error = PhotoError::Rename {
            from: PathBuf::from("/p/a.jpg"),
            to: PathBuf::from("/p/a @x.jpg"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let display = error.to_string();
        assert!(display.contains("/p/a.jpg"));
        assert!(display.contains("/p/a @x.jpg"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_invalid_path_has_no_source() {
        let error = PhotoError::InvalidPath("/".into());
        assert!(error.source().is_none());
    }
}
