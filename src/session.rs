//! A working session over the photo index
//!
//! The session owns the [`Database`], the [`TagManager`] and the audit log,
//! and drains index events into the log after every mutating call. Front
//! ends (the CLI, tests) only talk to the session.

use crate::PhotagError;
use crate::audit::AuditLog;
use crate::db::{Database, IndexEvent, MergeReport, PhotoId, Store};
use crate::manager::{MoveOutcome, TagManager, TagOutcome};
use crate::model::{Photo, Tag};
use crate::rename::{FsRenamer, Renamer};
use crate::scan::ScanOptions;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;

type Result<T> = std::result::Result<T, PhotagError>;

/// What an import added to the index
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub added: Vec<PhotoId>,
    pub already_indexed: usize,
    pub skipped: usize,
}

/// Index, tag operations and audit log bundled together
pub struct Session<R: Renamer = FsRenamer> {
    db: Database,
    manager: TagManager<R>,
    audit: Option<AuditLog>,
    events: Receiver<IndexEvent>,
    scan: ScanOptions,
}

impl Session<FsRenamer> {
    #[must_use]
    pub fn new(scan: ScanOptions) -> Self {
        Self::with_renamer(FsRenamer, scan)
    }
}

impl<R: Renamer> Session<R> {
    pub fn with_renamer(renamer: R, scan: ScanOptions) -> Self {
        let mut db = Database::new();
        let events = db.subscribe();
        Self { db, manager: TagManager::new(renamer), audit: None, events, scan }
    }

    /// Record renames in `log`
    #[must_use]
    pub fn with_audit_log(mut self, log: AuditLog) -> Self {
        self.audit = Some(log);
        self
    }

    #[must_use]
    pub const fn db(&self) -> &Database {
        &self.db
    }

    #[must_use]
    pub const fn scan_options(&self) -> &ScanOptions {
        &self.scan
    }

    #[must_use]
    pub const fn audit_log(&self) -> Option<&AuditLog> {
        self.audit.as_ref()
    }

    /// Merge everything persisted in `store` into the index
    ///
    /// # Errors
    ///
    /// Returns `PhotagError::DbError` if the store cannot be read.
    pub fn restore(&mut self, store: &Store) -> Result<MergeReport> {
        let snapshot = store.load()?;
        let report = self.db.merge(snapshot);
        self.drain_events();
        Ok(report)
    }

    /// Write the whole index to `store`
    ///
    /// # Errors
    ///
    /// Returns `PhotagError::DbError` if the store cannot be written.
    pub fn persist(&self, store: &Store) -> Result<()> {
        store.save(&self.db.snapshot())?;
        Ok(())
    }

    /// Index every image file under `dir`
    ///
    /// # Errors
    ///
    /// Returns `PhotagError::InvalidInput` if `dir` is not an accessible folder.
    pub fn import_dir(&mut self, dir: &Path) -> Result<ImportReport> {
        let dir = canonical(dir)?;
        if !dir.is_dir() {
            return Err(PhotagError::InvalidInput(format!("'{}' is not a folder", dir.display())));
        }

        let mut report = ImportReport::default();
        for path in self.scan.collect_images(&dir) {
            if self.db.has_photo(&path) {
                report.already_indexed += 1;
                continue;
            }
            match Photo::discover(&path) {
                Ok(photo) => report.added.push(self.manager.adopt(&mut self.db, photo)?),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping file");
                    report.skipped += 1;
                }
            }
        }

        self.drain_events();
        Ok(report)
    }

    /// Index a single file, or return its id when it is already indexed
    ///
    /// # Errors
    ///
    /// Returns `PhotagError::InvalidInput` if the file does not exist or is
    /// not an accepted image type.
    pub fn import_file(&mut self, path: &Path) -> Result<PhotoId> {
        let path = canonical(path)?;
        if let Some(id) = self.db.photo_id(&path) {
            return Ok(id);
        }
        if !path.is_file() || !self.scan.is_image_file(&path) {
            return Err(PhotagError::InvalidInput(format!(
                "'{}' is not an image file",
                path.display()
            )));
        }

        let id = self.manager.adopt(&mut self.db, Photo::discover(&path)?)?;
        self.drain_events();
        Ok(id)
    }

    /// Id of the indexed photo at `path`
    #[must_use]
    pub fn resolve(&self, path: &Path) -> Option<PhotoId> {
        let path = canonical(path).unwrap_or_else(|_| path.to_path_buf());
        self.db.photo_id(path)
    }

    /// Like [`resolve`](Self::resolve), but an unknown path is an error
    ///
    /// # Errors
    ///
    /// Returns `PhotagError::InvalidInput` if the photo is not indexed.
    pub fn require(&self, path: &Path) -> Result<PhotoId> {
        self.resolve(path).ok_or_else(|| {
            PhotagError::InvalidInput(format!("'{}' is not in the index", path.display()))
        })
    }

    /// Turn user words into tags; `beach` becomes `@beach`
    ///
    /// A word matching a registered name exactly is taken as that tag, so
    /// unmarked tokens picked up from file names stay reachable.
    ///
    /// # Errors
    ///
    /// Returns `PhotagError::TagError` for the first invalid word.
    pub fn parse_tags<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<Tag>> {
        let mut tags: Vec<Tag> = Vec::with_capacity(words.len());
        for word in words {
            let word = word.as_ref();
            let tag = match self.db.get_tag(word) {
                Some(registered) => registered.clone(),
                None => {
                    let tag = Tag::parse(word)?;
                    self.db.get_tag(tag.name()).cloned().unwrap_or(tag)
                }
            };
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        Ok(tags)
    }

    /// # Errors
    ///
    /// See [`TagManager::add_tags`].
    pub fn add_tags(&mut self, id: PhotoId, tags: &[Tag]) -> Result<TagOutcome> {
        let outcome = self.manager.add_tags(&mut self.db, id, tags);
        self.drain_events();
        Ok(outcome?)
    }

    /// # Errors
    ///
    /// See [`TagManager::delete_tags`].
    pub fn delete_tags(&mut self, id: PhotoId, tags: &[Tag]) -> Result<TagOutcome> {
        let outcome = self.manager.delete_tags(&mut self.db, id, tags);
        self.drain_events();
        Ok(outcome?)
    }

    /// # Errors
    ///
    /// See [`TagManager::replace_all_tags`].
    pub fn replace_all_tags(&mut self, id: PhotoId, tags: &[Tag]) -> Result<TagOutcome> {
        let outcome = self.manager.replace_all_tags(&mut self.db, id, tags);
        self.drain_events();
        Ok(outcome?)
    }

    /// # Errors
    ///
    /// See [`TagManager::revert`].
    pub fn revert(&mut self, id: PhotoId, index: usize) -> Result<TagOutcome> {
        let outcome = self.manager.revert(&mut self.db, id, index);
        self.drain_events();
        Ok(outcome?)
    }

    /// # Errors
    ///
    /// See [`TagManager::move_photo`].
    pub fn move_photo(&mut self, id: PhotoId, folder: &Path) -> Result<MoveOutcome> {
        let folder = canonical(folder)?;
        let outcome = self.manager.move_photo(&mut self.db, id, &folder);
        self.drain_events();
        Ok(outcome?)
    }

    /// Register a tag that no photo carries yet
    pub fn declare_tag(&mut self, tag: Tag) -> bool {
        let added = self.db.add_current_existing_tag(tag);
        self.drain_events();
        added
    }

    /// Unregister a tag. Refused while any photo carries it.
    ///
    /// # Errors
    ///
    /// Returns `PhotagError::InvalidInput` if the tag is unknown or still in use.
    pub fn remove_tag(&mut self, tag: &Tag) -> Result<()> {
        if !self.db.contains_tag(tag) {
            return Err(PhotagError::InvalidInput(format!("Tag '{tag}' is not registered")));
        }
        if !self.db.delete_current_existing_tag(tag) {
            let users = self.db.photos_with_tag(tag).len();
            return Err(PhotagError::InvalidInput(format!(
                "Tag '{tag}' is still used by {users} photo(s)"
            )));
        }
        self.drain_events();
        Ok(())
    }

    /// Photos carrying all of `tags` (or any of them with `any`); every photo
    /// when `tags` is empty
    #[must_use]
    pub fn photos_with_tags(&self, tags: &[Tag], any: bool) -> Vec<PhotoId> {
        self.db
            .photos()
            .filter(|(_, photo)| {
                tags.is_empty()
                    || if any {
                        tags.iter().any(|t| photo.has_tag(t))
                    } else {
                        tags.iter().all(|t| photo.has_tag(t))
                    }
            })
            .map(|(id, _)| id)
            .collect()
    }

    fn drain_events(&self) {
        for event in self.events.try_iter() {
            tracing::trace!(?event, "index event");
            if let Some(log) = &self.audit
                && let Err(e) = log.record(&event)
            {
                tracing::warn!(log = %log.path().display(), error = %e, "could not write audit log");
            }
        }
    }
}

fn canonical(path: &Path) -> Result<PathBuf> {
    path.canonicalize().map_err(|e| {
        PhotagError::InvalidInput(format!("Cannot access path '{}': {}", path.display(), e))
    })
}
