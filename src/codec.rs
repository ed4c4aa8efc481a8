//! File-name tag encoding
//!
//! Tags live inside file names: `pic1 @a @b.jpg` is the file `pic1.jpg` carrying
//! the tags `@a` and `@b`. Everything that splices tag tokens into or out of a
//! name goes through this module, so the rest of the crate never touches the
//! string layout directly.
//!
//! Layout: `<base>[ <tag>]*<extension>`, where the extension starts at the last
//! `.` and the tag section starts at the first [`TAG_MARKER`] of the stem.
//! No escaping is performed.

use crate::model::{TAG_MARKER, Tag};

/// A file name split into its encoded parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedName<'a> {
    /// Name before the first tag, without trailing spaces
    pub base: &'a str,
    /// Tag tokens in file-name order, first occurrence kept
    pub tags: Vec<&'a str>,
    /// Extension including the dot, or empty
    pub extension: &'a str,
}

impl DecodedName<'_> {
    /// Decoded tokens as tags
    #[must_use]
    pub fn to_tags(&self) -> Vec<Tag> {
        self.tags.iter().map(|t| Tag::from_token(t)).collect()
    }
}

/// Split a file name into stem and extension (`"a.b.jpg"` -> `("a.b", ".jpg")`).
///
/// A leading dot does not start an extension.
#[must_use]
pub fn split_extension(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => file_name.split_at(idx),
        _ => (file_name, ""),
    }
}

/// Append each tag, space separated, to `base` and finish with `extension`.
///
/// Works on bare file names as well as on whole path strings.
///
/// # Examples
/// ```
/// use photag::codec::encode;
///
/// assert_eq!(encode("pic1", ["@a", "@b"], ".jpg"), "pic1 @a @b.jpg");
/// ```
#[must_use]
pub fn encode<I, S>(base: &str, tags: I, extension: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut name = String::from(base);
    for tag in tags {
        name.push(' ');
        name.push_str(tag.as_ref());
    }
    name.push_str(extension);
    name
}

/// Split a file name into base, tags and extension.
///
/// # Examples
/// ```
/// use photag::codec::decode;
///
/// let decoded = decode("pic1 @a @b.jpg");
/// assert_eq!(decoded.base, "pic1");
/// assert_eq!(decoded.tags, vec!["@a", "@b"]);
/// assert_eq!(decoded.extension, ".jpg");
/// ```
#[must_use]
pub fn decode(file_name: &str) -> DecodedName<'_> {
    let (stem, extension) = split_extension(file_name);

    let Some(first_tag) = stem.find(TAG_MARKER) else {
        return DecodedName { base: stem, tags: Vec::new(), extension };
    };

    let mut tags: Vec<&str> = Vec::new();
    for token in stem[first_tag..].split(' ').filter(|t| !t.is_empty()) {
        if !tags.contains(&token) {
            tags.push(token);
        }
    }

    DecodedName {
        base: stem[..first_tag].trim_end(),
        tags,
        extension,
    }
}

/// Name the file would get if every tag in `tags` were appended.
///
/// Tokens are appended even when already present; this is the literal
/// prospective name used for collision checks.
#[must_use]
pub fn simulate_add(file_name: &str, tags: &[Tag]) -> String {
    let (stem, extension) = split_extension(file_name);
    encode(stem, tags, extension)
}

/// Name the file would get if every token equal to one of `tags` were removed.
#[must_use]
pub fn simulate_delete(file_name: &str, tags: &[Tag]) -> String {
    let decoded = decode(file_name);
    let remaining = decoded
        .tags
        .iter()
        .filter(|token| !tags.iter().any(|tag| tag.name() == **token));
    encode(decoded.base, remaining, decoded.extension)
}
