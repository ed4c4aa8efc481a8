//! Identifier and key types for the photo index
//!
//! - **`PhotoId`**: stable handle for a photo inside one [`Database`](super::Database)
//! - **`SeqKey`**: big-endian sequence number used as a sled key, so tree
//!   iteration returns records in insertion order
//!
//! # Examples
//!
//! ```
//! use photag::db::types::SeqKey;
//!
//! let key = SeqKey(7);
//! let bytes: [u8; 8] = key.into();
//! assert_eq!(SeqKey::try_from(&bytes[..]).unwrap(), SeqKey(7));
//! ```

use super::error::DbError;
use std::fmt;

/// Stable identifier of a photo in the index
///
/// Ids are arena positions: they are assigned in insertion order and never
/// reused, so a rename never invalidates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhotoId(pub(crate) usize);

impl PhotoId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordered sled key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SeqKey(pub u64);

impl From<SeqKey> for [u8; 8] {
    fn from(key: SeqKey) -> Self {
        key.0.to_be_bytes()
    }
}

impl TryFrom<&[u8]> for SeqKey {
    type Error = DbError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let raw: [u8; 8] = bytes
            .try_into()
            .map_err(|_| DbError::SerializeError(format!("Invalid key length {}", bytes.len())))?;
        Ok(Self(u64::from_be_bytes(raw)))
    }
}

impl From<usize> for SeqKey {
    fn from(position: usize) -> Self {
        Self(position as u64)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
