//! The tag value type

use super::error::TagError;
use serde::Serialize;
use std::fmt;

/// Marker every user-created tag starts with (`@vacation`)
pub const TAG_MARKER: char = '@';

/// A label attachable to any number of photos
///
/// Tags have value semantics: two tags are equal iff their names are equal.
/// The name includes the leading [`TAG_MARKER`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Build a tag from user input.
    ///
    /// Surrounding whitespace is trimmed and the marker is prepended when the
    /// input does not already start with it, so `vacation` and `@vacation`
    /// name the same tag.
    ///
    /// # Errors
    ///
    /// Returns `TagError` if the name is empty, contains a path separator, or
    /// contains whitespace.
    ///
    /// # Examples
    /// ```
    /// use photag::model::Tag;
    ///
    /// let tag = Tag::parse("vacation").unwrap();
    /// assert_eq!(tag.name(), "@vacation");
    /// assert!(Tag::parse("a/b").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, TagError> {
        let trimmed = input.trim();
        let name = if trimmed.starts_with(TAG_MARKER) {
            trimmed.to_string()
        } else {
            format!("{TAG_MARKER}{trimmed}")
        };

        if name.len() == TAG_MARKER.len_utf8() {
            return Err(TagError::Empty);
        }
        if name.contains(['/', '\\', std::path::MAIN_SEPARATOR]) {
            return Err(TagError::PathSeparator(name));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(TagError::Whitespace(name));
        }
        Ok(Self(name))
    }

    /// Wrap a token decoded from a file name as-is.
    ///
    /// No validation happens: a name like `pic @a (1).jpg` yields the token
    /// `(1)` without a marker, and it is kept verbatim so that saving and
    /// restoring the index reproduces the same tags.
    pub(crate) fn from_token(token: &str) -> Self {
        Self(token.to_string())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Tag {
    type Error = TagError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prepends_marker() {
        assert_eq!(Tag::parse("family").unwrap().name(), "@family");
        assert_eq!(Tag::parse("@family").unwrap().name(), "@family");
        assert_eq!(Tag::parse("  trip ").unwrap().name(), "@trip");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(Tag::parse(""), Err(TagError::Empty));
        assert_eq!(Tag::parse("@"), Err(TagError::Empty));
        assert_eq!(Tag::parse("   "), Err(TagError::Empty));
    }

    #[test]
    fn test_parse_rejects_separators() {
        assert!(matches!(Tag::parse("a/b"), Err(TagError::PathSeparator(_))));
        assert!(matches!(Tag::parse("@a\\b"), Err(TagError::PathSeparator(_))));
    }

    #[test]
    fn test_parse_rejects_inner_whitespace() {
        assert!(matches!(Tag::parse("two words"), Err(TagError::Whitespace(_))));
    }

    #[test]
    fn test_value_equality_and_order() {
        let a = Tag::parse("@a").unwrap();
        assert_eq!(a, Tag::parse("a").unwrap());
        assert!(a < Tag::parse("@b").unwrap());
        assert_eq!(a.to_string(), "@a");
    }
}
