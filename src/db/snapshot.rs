//! Plain-data image of the index, and the additive merge used on restore

use super::{Database, PhotoId};
use crate::model::{Photo, Tag, TagSet};
use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One photo as persisted: its path, current tags and history
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PhotoRecord {
    pub path: PathBuf,
    pub tags: Vec<String>,
    pub history: Vec<Vec<String>>,
}

/// Everything needed to rebuild an index
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub photos: Vec<PhotoRecord>,
    pub tags: Vec<String>,
}

impl Snapshot {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty() && self.tags.is_empty()
    }
}

/// What a [`Database::merge`] changed
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeReport {
    pub photos_added: usize,
    pub tags_added: usize,
    pub history_entries_added: usize,
    /// Records dropped because their path or a tag name was invalid
    pub skipped: usize,
}

impl Database {
    /// Capture the index as plain records
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let photos = self
            .photos()
            .map(|(id, photo)| PhotoRecord {
                path: photo.path(),
                tags: photo.current_tags().iter().map(|t| t.name().to_string()).collect(),
                history: self
                    .tag_log(id)
                    .unwrap_or_default()
                    .iter()
                    .map(|set| set.iter().map(|t| t.name().to_string()).collect())
                    .collect(),
            })
            .collect();

        Snapshot {
            photos,
            tags: self.current_existing_tags().iter().map(|t| t.name().to_string()).collect(),
        }
    }

    /// Merge a persisted snapshot into this index without removing anything.
    ///
    /// Tags already registered (by name) and photos already indexed (by path)
    /// are kept as they are. Each persisted history, minus its seeded empty
    /// set, is appended entry by entry, skipping entries already present.
    pub fn merge(&mut self, snapshot: Snapshot) -> MergeReport {
        let mut report = MergeReport::default();

        // Registry names are stored tokens, rebuilt exactly like photo tags
        for name in snapshot.tags {
            if name.is_empty() {
                tracing::warn!("skipping empty stored tag");
                report.skipped += 1;
                continue;
            }
            if self.add_current_existing_tag(Tag::from_token(&name)) {
                report.tags_added += 1;
            }
        }

        for record in snapshot.photos {
            let Some(id) = self.merge_photo(&record, &mut report) else {
                report.skipped += 1;
                continue;
            };

            let mut entries = record.history.iter().peekable();
            if entries.peek().is_some_and(|first| first.is_empty()) {
                entries.next();
            }
            for entry in entries {
                let set: TagSet = entry.iter().map(|name| Tag::from_token(name)).collect();
                if self.append_history(id, set) {
                    report.history_entries_added += 1;
                }
            }
        }

        tracing::info!(
            photos = report.photos_added,
            tags = report.tags_added,
            history = report.history_entries_added,
            skipped = report.skipped,
            "restored index"
        );
        report
    }

    fn merge_photo(&mut self, record: &PhotoRecord, report: &mut MergeReport) -> Option<PhotoId> {
        if let Some(id) = self.photo_id(&record.path) {
            return Some(id);
        }

        let tags: Vec<Tag> = record.tags.iter().map(|name| Tag::from_token(name)).collect();
        let photo = match Photo::with_tags(&record.path, tags.iter().cloned()) {
            Ok(photo) => photo,
            Err(e) => {
                tracing::warn!(path = %record.path.display(), error = %e, "skipping stored photo");
                return None;
            }
        };

        let id = self.add_photo(photo);
        report.photos_added += 1;
        report.tags_added += self.add_all_current_existing_tags(tags);
        Some(id)
    }
}
