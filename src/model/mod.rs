//! Domain model: tags and photos
//!
//! A [`Tag`] is a plain value identified by its name. A [`Photo`] is an image
//! file whose name always reflects its current tags; every tag mutation renames
//! the file through a [`Renamer`](crate::rename::Renamer).

use std::collections::BTreeSet;

pub mod error;
pub mod photo;
pub mod tag;

pub use error::{PhotoError, TagError};
pub use photo::Photo;
pub use tag::{TAG_MARKER, Tag};

/// One state of a photo's tags, as stored in its history
pub type TagSet = BTreeSet<Tag>;
