//! Tag operations over the photo index
//!
//! Every operation follows the same shape: simulate the resulting file name,
//! reject it when any indexed photo (the mutated one included) already has
//! that path, commit tag by tag, append the resulting tag set to the photo's
//! history, then emit [`IndexEvent::TagsChanged`] with the old and new names.
//!
//! A failed rename rolls back whatever the operation already applied and
//! surfaces as [`ManagerError::RenameFailed`].

pub mod error;

pub use error::ManagerError;

use crate::codec;
use crate::db::{Database, IndexEvent, PhotoId};
use crate::model::{Photo, Tag};
use crate::rename::{FsRenamer, Renamer};
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, ManagerError>;

/// Result of a tag operation that passed or failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagOutcome {
    /// The operation ran; names are equal when nothing had to change
    Applied { old_name: String, new_name: String },
    /// The prospective path is already used by an indexed photo; nothing changed
    Conflict { path: PathBuf },
}

impl TagOutcome {
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

/// Result of moving a photo to another folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { from: PathBuf, to: PathBuf },
    /// A file with the same name already exists at the destination
    Conflict { path: PathBuf },
}

/// One step of an operation, remembered for rollback
struct Change {
    tag: Tag,
    photo: bool,
    registry: bool,
}

/// Orchestrates add/delete/replace over a [`Database`]
///
/// Holds no index state of its own; the index is passed into every call.
#[derive(Debug, Default)]
pub struct TagManager<R: Renamer = FsRenamer> {
    renamer: R,
}

impl<R: Renamer> TagManager<R> {
    pub const fn new(renamer: R) -> Self {
        Self { renamer }
    }

    pub const fn renamer(&self) -> &R {
        &self.renamer
    }

    /// Attach `tags` to a photo.
    ///
    /// The prospective name appends every candidate token, including ones the
    /// photo already has. Tags already present are skipped when committing,
    /// so the name the commit really produces is checked as well.
    ///
    /// # Errors
    ///
    /// Returns `ManagerError::UnknownPhoto` for an id outside the index, or
    /// `ManagerError::RenameFailed` if the file could not be renamed.
    pub fn add_tags(&self, db: &mut Database, id: PhotoId, tags: &[Tag]) -> Result<TagOutcome> {
        let photo = Self::photo(db, id)?;
        let simulated = photo.sibling(&codec::simulate_add(photo.file_name(), tags));
        if db.has_photo(&simulated) {
            tracing::debug!(%id, path = %simulated.display(), "add rejected: name conflict");
            return Ok(TagOutcome::Conflict { path: simulated });
        }
        let target = photo.sibling(&codec::simulate_add(photo.file_name(), &novel(photo.current_tags(), tags)));
        if let Some(path) = Self::taken_by_other(db, id, target) {
            tracing::debug!(%id, path = %path.display(), "add rejected: resulting name taken");
            return Ok(TagOutcome::Conflict { path });
        }

        let old_name = photo.file_name().to_string();
        self.commit_add(db, id, tags)?;
        Ok(Self::finish(db, id, old_name))
    }

    /// Detach `tags` from a photo, unregistering any tag left without photos.
    ///
    /// A delete that would not change the name collides with the photo itself
    /// and is reported as a conflict.
    ///
    /// # Errors
    ///
    /// Returns `ManagerError::UnknownPhoto` for an id outside the index, or
    /// `ManagerError::RenameFailed` if the file could not be renamed.
    pub fn delete_tags(&self, db: &mut Database, id: PhotoId, tags: &[Tag]) -> Result<TagOutcome> {
        let photo = Self::photo(db, id)?;
        let simulated = photo.sibling(&codec::simulate_delete(photo.file_name(), tags));
        if db.has_photo(&simulated) {
            tracing::debug!(%id, path = %simulated.display(), "delete rejected: name conflict");
            return Ok(TagOutcome::Conflict { path: simulated });
        }

        let old_name = photo.file_name().to_string();
        self.commit_delete(db, id, tags)?;
        Ok(Self::finish(db, id, old_name))
    }

    /// Replace every current tag of a photo with `tags`.
    ///
    /// The emitted event spans the whole operation: its old name is the one
    /// captured before any tag was removed.
    ///
    /// # Errors
    ///
    /// Returns `ManagerError::UnknownPhoto` for an id outside the index, or
    /// `ManagerError::RenameFailed` if a rename failed; the original tags are
    /// restored in that case.
    pub fn replace_all_tags(&self, db: &mut Database, id: PhotoId, tags: &[Tag]) -> Result<TagOutcome> {
        let photo = Self::photo(db, id)?;
        let current = photo.current_tags().to_vec();
        let stripped = codec::simulate_delete(photo.file_name(), &current);
        let simulated = photo.sibling(&codec::simulate_add(&stripped, tags));
        if db.has_photo(&simulated) {
            tracing::debug!(%id, path = %simulated.display(), "replace rejected: name conflict");
            return Ok(TagOutcome::Conflict { path: simulated });
        }
        let target = photo.sibling(&codec::simulate_add(&stripped, &novel(&[], tags)));
        if let Some(path) = Self::taken_by_other(db, id, target) {
            tracing::debug!(%id, path = %path.display(), "replace rejected: resulting name taken");
            return Ok(TagOutcome::Conflict { path });
        }

        let old_name = photo.file_name().to_string();
        self.commit_delete(db, id, &current)?;
        if let Err(e) = self.commit_add(db, id, tags) {
            if let Err(restore) = self.commit_add(db, id, &current) {
                tracing::warn!(%id, error = %restore, "could not restore tags after failed replace");
            }
            return Err(e);
        }
        Ok(Self::finish(db, id, old_name))
    }

    /// Bring back the tag set stored at `index` in the photo's history.
    ///
    /// # Errors
    ///
    /// Returns `ManagerError::HistoryIndexOutOfRange` for a missing entry, plus
    /// everything [`replace_all_tags`](Self::replace_all_tags) can return.
    pub fn revert(&self, db: &mut Database, id: PhotoId, index: usize) -> Result<TagOutcome> {
        let log = db.tag_log(id).ok_or(ManagerError::UnknownPhoto(id))?;
        let set = log
            .get(index)
            .ok_or(ManagerError::HistoryIndexOutOfRange { index, len: log.len() })?;
        let tags: Vec<Tag> = set.iter().cloned().collect();
        self.replace_all_tags(db, id, &tags)
    }

    /// Index a photo discovered on disk, registering the tags in its name.
    ///
    /// No collision check or rename happens; the name already carries the
    /// tags. Returns the existing id when the path is already indexed.
    ///
    /// # Errors
    ///
    /// Returns `ManagerError` only if the index is inconsistent.
    pub fn adopt(&self, db: &mut Database, photo: Photo) -> Result<PhotoId> {
        if let Some(id) = db.photo_id(photo.path()) {
            return Ok(id);
        }

        let tags = photo.current_tags().to_vec();
        let old_name = photo.file_name().to_string();
        let id = db.add_photo(photo);
        self.commit_add(db, id, &tags)?;
        Self::finish(db, id, old_name);
        Ok(id)
    }

    /// Move a photo into `folder`, keeping its file name.
    ///
    /// # Errors
    ///
    /// Returns `ManagerError::UnknownPhoto` for an id outside the index, or
    /// `ManagerError::RenameFailed` if the file could not be moved.
    pub fn move_photo(&self, db: &mut Database, id: PhotoId, folder: &Path) -> Result<MoveOutcome> {
        let photo = Self::photo(db, id)?;
        let from = photo.path();
        let to = folder.join(photo.file_name());
        if to == from || db.has_photo(&to) || self.renamer.exists(&to) {
            return Ok(MoveOutcome::Conflict { path: to });
        }

        db.photo_mut(id)
            .ok_or(ManagerError::UnknownPhoto(id))?
            .set_directory(&to, &self.renamer)?;
        tracing::debug!(%id, from = %from.display(), to = %to.display(), "photo moved");
        db.emit(&IndexEvent::PhotoMoved { id, from: from.clone(), to: to.clone() });
        Ok(MoveOutcome::Moved { from, to })
    }

    fn photo(db: &Database, id: PhotoId) -> Result<&Photo> {
        db.photo(id).ok_or(ManagerError::UnknownPhoto(id))
    }

    /// `path` when another indexed photo already lives there
    fn taken_by_other(db: &Database, id: PhotoId, path: PathBuf) -> Option<PathBuf> {
        db.photo_id(&path).is_some_and(|other| other != id).then_some(path)
    }

    fn commit_add(&self, db: &mut Database, id: PhotoId, tags: &[Tag]) -> Result<()> {
        let mut changes = Vec::new();
        for tag in tags {
            let photo = db.photo_mut(id).ok_or(ManagerError::UnknownPhoto(id))?;
            match photo.add_tag(tag, &self.renamer) {
                Ok(added) => {
                    let registered = db.add_current_existing_tag(tag.clone());
                    changes.push(Change { tag: tag.clone(), photo: added, registry: registered });
                }
                Err(e) => {
                    self.undo_add(db, id, &changes);
                    return Err(e.into());
                }
            }
        }
        Ok(())
    }

    fn commit_delete(&self, db: &mut Database, id: PhotoId, tags: &[Tag]) -> Result<()> {
        let mut changes = Vec::new();
        for tag in tags {
            let photo = db.photo_mut(id).ok_or(ManagerError::UnknownPhoto(id))?;
            match photo.delete_tag(tag, &self.renamer) {
                Ok(removed) => {
                    let unregistered = db.delete_current_existing_tag(tag);
                    changes.push(Change { tag: tag.clone(), photo: removed, registry: unregistered });
                }
                Err(e) => {
                    self.undo_delete(db, id, &changes);
                    return Err(e.into());
                }
            }
        }
        Ok(())
    }

    fn undo_add(&self, db: &mut Database, id: PhotoId, changes: &[Change]) {
        for change in changes.iter().rev() {
            if change.photo
                && let Some(photo) = db.photo_mut(id)
                && let Err(e) = photo.delete_tag(&change.tag, &self.renamer)
            {
                tracing::warn!(%id, tag = %change.tag, error = %e, "rollback failed");
            }
            if change.registry {
                db.delete_current_existing_tag(&change.tag);
            }
        }
    }

    fn undo_delete(&self, db: &mut Database, id: PhotoId, changes: &[Change]) {
        for change in changes.iter().rev() {
            if change.registry {
                db.add_current_existing_tag(change.tag.clone());
            }
            if change.photo
                && let Some(photo) = db.photo_mut(id)
                && let Err(e) = photo.add_tag(&change.tag, &self.renamer)
            {
                tracing::warn!(%id, tag = %change.tag, error = %e, "rollback failed");
            }
        }
    }

    fn finish(db: &mut Database, id: PhotoId, old_name: String) -> TagOutcome {
        db.log_tags(id);
        let new_name = db.photo(id).map(|p| p.file_name().to_string()).unwrap_or_default();
        db.emit(&IndexEvent::TagsChanged {
            id,
            old_name: old_name.clone(),
            new_name: new_name.clone(),
        });
        TagOutcome::Applied { old_name, new_name }
    }
}

/// Tags from `candidates` that a commit would really append: not in
/// `current`, first occurrence only
fn novel(current: &[Tag], candidates: &[Tag]) -> Vec<Tag> {
    let mut tags: Vec<Tag> = Vec::with_capacity(candidates.len());
    for tag in candidates {
        if !current.contains(tag) && !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}
