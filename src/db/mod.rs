//! Photo index for photag
//!
//! The [`Database`] is the authoritative in-memory collection of every known
//! photo, the registry of unique tags, and each photo's tag-set history. It
//! is owned by the session and passed around by reference; persistence is
//! handled separately by [`Store`].
//!
//! Invariants:
//! - photos are unique by path and keep insertion order
//! - every photo has exactly one history, seeded with the empty set
//! - registered tags are unique by name

use crate::model::{Photo, Tag, TagSet};
use std::path::Path;
use std::sync::mpsc::Receiver;

pub mod error;
pub mod events;
pub mod snapshot;
pub mod store;
pub mod types;

pub use error::DbError;
pub use events::{EventBus, IndexEvent, RegistryChange};
pub use snapshot::{MergeReport, PhotoRecord, Snapshot};
pub use store::Store;
pub use types::{PhotoId, SeqKey};

/// In-memory photo index
///
/// Photos live in an arena indexed by [`PhotoId`]; `tag_logs` runs parallel to it.
#[derive(Debug, Default)]
pub struct Database {
    photos: Vec<Photo>,
    current_existing_tags: Vec<Tag>,
    tag_logs: Vec<Vec<TagSet>>,
    events: EventBus,
}

impl Database {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a photo, or return the id of the photo already at the same path.
    ///
    /// A new photo gets a history holding a single empty set.
    ///
    /// # Examples
    /// ```
    /// use photag::{db::Database, model::Photo};
    ///
    /// let mut db = Database::new();
    /// let id = db.add_photo(Photo::new("/p/pic1.jpg").unwrap());
    /// assert_eq!(db.add_photo(Photo::new("/p/pic1.jpg").unwrap()), id);
    /// assert_eq!(db.len(), 1);
    /// ```
    pub fn add_photo(&mut self, photo: Photo) -> PhotoId {
        if let Some(id) = self.photos.iter().position(|p| *p == photo) {
            return PhotoId(id);
        }

        let id = PhotoId(self.photos.len());
        let path = photo.path();
        self.photos.push(photo);
        self.tag_logs.push(vec![TagSet::new()]);
        tracing::debug!(%id, path = %path.display(), "photo added");
        self.events.emit(&IndexEvent::PhotoAdded { id, path });
        id
    }

    /// Whether any photo lives at `path`
    pub fn has_photo(&self, path: impl AsRef<Path>) -> bool {
        self.photo_id(path).is_some()
    }

    pub fn photo_id(&self, path: impl AsRef<Path>) -> Option<PhotoId> {
        let path = path.as_ref();
        self.photos.iter().position(|p| p.path() == path).map(PhotoId)
    }

    pub fn get_photo(&self, path: impl AsRef<Path>) -> Option<&Photo> {
        self.photo_id(path).and_then(|id| self.photo(id))
    }

    #[must_use]
    pub fn photo(&self, id: PhotoId) -> Option<&Photo> {
        self.photos.get(id.0)
    }

    pub(crate) fn photo_mut(&mut self, id: PhotoId) -> Option<&mut Photo> {
        self.photos.get_mut(id.0)
    }

    /// All photos in insertion order
    #[must_use]
    pub fn all_photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn photos(&self) -> impl Iterator<Item = (PhotoId, &Photo)> {
        self.photos.iter().enumerate().map(|(i, p)| (PhotoId(i), p))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Registered tags in registration order
    #[must_use]
    pub fn current_existing_tags(&self) -> &[Tag] {
        &self.current_existing_tags
    }

    /// Register a tag. Returns `false` if a tag with that name already exists.
    pub fn add_current_existing_tag(&mut self, tag: Tag) -> bool {
        if self.current_existing_tags.contains(&tag) {
            return false;
        }
        self.current_existing_tags.push(tag.clone());
        self.events.emit(&IndexEvent::TagRegistryChanged { tag, change: RegistryChange::Added });
        true
    }

    /// Register every tag; returns how many were new
    pub fn add_all_current_existing_tags(&mut self, tags: impl IntoIterator<Item = Tag>) -> usize {
        tags.into_iter()
            .filter(|tag| self.add_current_existing_tag(tag.clone()))
            .count()
    }

    /// Remove a tag from the registry, but only while no photo carries it.
    ///
    /// Returns `true` if the tag was removed.
    pub fn delete_current_existing_tag(&mut self, tag: &Tag) -> bool {
        if !self.contains_tag(tag) || !self.is_garbage_tag(tag) {
            return false;
        }
        self.current_existing_tags.retain(|t| t != tag);
        tracing::debug!(%tag, "garbage tag removed from registry");
        self.events.emit(&IndexEvent::TagRegistryChanged {
            tag: tag.clone(),
            change: RegistryChange::Removed,
        });
        true
    }

    /// Whether a tag with this name is registered; accepts a `Tag` or a name
    pub fn contains_tag(&self, name: impl AsRef<str>) -> bool {
        self.get_tag(name).is_some()
    }

    pub fn get_tag(&self, name: impl AsRef<str>) -> Option<&Tag> {
        let name = name.as_ref();
        self.current_existing_tags.iter().find(|t| t.name() == name)
    }

    /// A tag is garbage when no photo in the index carries it
    #[must_use]
    pub fn is_garbage_tag(&self, tag: &Tag) -> bool {
        self.photos.iter().all(|photo| !photo.has_tag(tag))
    }

    /// Photos currently carrying `tag`, in insertion order
    #[must_use]
    pub fn photos_with_tag(&self, tag: &Tag) -> Vec<PhotoId> {
        self.photos()
            .filter(|(_, photo)| photo.has_tag(tag))
            .map(|(id, _)| id)
            .collect()
    }

    /// Tag-set history of a photo, oldest first
    #[must_use]
    pub fn tag_log(&self, id: PhotoId) -> Option<&[TagSet]> {
        self.tag_logs.get(id.0).map(Vec::as_slice)
    }

    /// Append the photo's current tag set to its history.
    ///
    /// Nothing is appended if that exact set already appears anywhere in the
    /// history, adjacent or not. Returns `true` if an entry was appended.
    pub(crate) fn log_tags(&mut self, id: PhotoId) -> bool {
        let Some(current) = self.photo(id).map(Photo::tag_set) else {
            return false;
        };
        self.append_history(id, current)
    }

    pub(crate) fn append_history(&mut self, id: PhotoId, set: TagSet) -> bool {
        match self.tag_logs.get_mut(id.0) {
            Some(log) if !log.contains(&set) => {
                log.push(set);
                true
            }
            _ => false,
        }
    }

    /// Subscribe to change events
    pub fn subscribe(&mut self) -> Receiver<IndexEvent> {
        self.events.subscribe()
    }

    pub(crate) fn emit(&mut self, event: &IndexEvent) {
        self.events.emit(event);
    }
}
