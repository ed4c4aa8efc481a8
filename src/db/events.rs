//! Change events emitted by the photo index
//!
//! Collaborators (the audit log, a UI refresh loop) call
//! [`Database::subscribe`](super::Database::subscribe) and drain the returned
//! receiver. Senders whose receiver was dropped are pruned on the next emit.

use super::types::PhotoId;
use crate::model::Tag;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};

/// Registry mutation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryChange {
    Added,
    Removed,
}

/// Typed change notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexEvent {
    /// A photo entered the index
    PhotoAdded { id: PhotoId, path: PathBuf },
    /// A tag operation finished; names may be equal when nothing changed
    TagsChanged { id: PhotoId, old_name: String, new_name: String },
    /// The tag registry gained or lost a tag
    TagRegistryChanged { tag: Tag, change: RegistryChange },
    /// A photo was moved to another folder
    PhotoMoved { id: PhotoId, from: PathBuf, to: PathBuf },
}

impl IndexEvent {
    /// The `(old, new)` name pair for rename-producing events
    #[must_use]
    pub fn rename_pair(&self) -> Option<(&str, &str)> {
        match self {
            Self::TagsChanged { old_name, new_name, .. } => Some((old_name, new_name)),
            _ => None,
        }
    }
}

/// Fan-out of [`IndexEvent`]s to any number of subscribers
#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Vec<Sender<IndexEvent>>,
}

impl EventBus {
    #[must_use]
    pub const fn new() -> Self {
        Self { subscribers: Vec::new() }
    }

    pub fn subscribe(&mut self) -> Receiver<IndexEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn emit(&mut self, event: &IndexEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
