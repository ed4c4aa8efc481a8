//! Persistent storage for the photo index
//!
//! Uses sled as the embedded database backend, with one tree per record kind:
//! - `photos`: [`SeqKey`] -> bincode [`PhotoRecord`]
//! - `tags`: [`SeqKey`] -> tag name
//!
//! Keys are big-endian sequence numbers, so iteration yields records in the
//! order the index held them.

use super::error::DbError;
use super::snapshot::{PhotoRecord, Snapshot};
use super::types::SeqKey;
use sled::{Batch, Db, Tree};
use std::path::Path;

/// On-disk home of a [`Snapshot`]
pub struct Store {
    db: Db,
    photos: Tree,
    tags: Tree,
}

impl Store {
    /// Opens or creates a store at the specified path
    ///
    /// # Examples
    /// ```no_run
    /// use photag::db::Store;
    /// let store = Store::open("my_db").unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the database cannot be opened or if the internal trees cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DbError> {
        let db = sled::open(path)?;
        let photos = db.open_tree("photos")?;
        let tags = db.open_tree("tags")?;
        Ok(Self { db, photos, tags })
    }

    /// Replace the stored contents with `snapshot` and flush.
    ///
    /// Each tree is rewritten with a single atomic batch.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if encoding, writing, or flushing fails.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), DbError> {
        let mut photos = Self::clearing_batch(&self.photos)?;
        for (position, record) in snapshot.photos.iter().enumerate() {
            let key: [u8; 8] = SeqKey::from(position).into();
            let value = bincode::encode_to_vec(record, bincode::config::standard())?;
            photos.insert(&key[..], value);
        }

        let mut tags = Self::clearing_batch(&self.tags)?;
        for (position, name) in snapshot.tags.iter().enumerate() {
            let key: [u8; 8] = SeqKey::from(position).into();
            tags.insert(&key[..], name.as_bytes());
        }

        self.photos.apply_batch(photos)?;
        self.tags.apply_batch(tags)?;
        self.flush()?;

        tracing::debug!(photos = snapshot.photos.len(), tags = snapshot.tags.len(), "index saved");
        Ok(())
    }

    /// Read everything back in stored order
    ///
    /// # Errors
    ///
    /// Returns `DbError` if iteration fails or a record cannot be decoded.
    pub fn load(&self) -> Result<Snapshot, DbError> {
        let mut snapshot = Snapshot::default();

        for result in &self.photos {
            let (key, value) = result?;
            SeqKey::try_from(&key[..])?;
            let (record, _): (PhotoRecord, usize) =
                bincode::decode_from_slice(&value, bincode::config::standard())?;
            snapshot.photos.push(record);
        }

        for result in &self.tags {
            let (_, value) = result?;
            let name = String::from_utf8(value.to_vec())
                .map_err(|e| DbError::SerializeError(format!("Invalid tag name: {e}")))?;
            snapshot.tags.push(name);
        }

        Ok(snapshot)
    }

    /// Flush all pending writes to disk
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the flush operation fails.
    fn flush(&self) -> Result<(), DbError> {
        self.db.flush()?;
        Ok(())
    }

    fn clearing_batch(tree: &Tree) -> Result<Batch, DbError> {
        let mut batch = Batch::default();
        for key in tree.iter().keys() {
            batch.remove(key?);
        }
        Ok(batch)
    }
}

impl Drop for Store {
    fn drop(&mut self) {
        // Best-effort flush; save() already flushes
        let _ = self.db.flush();
    }
}
