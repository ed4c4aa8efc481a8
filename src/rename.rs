//! Filesystem seam for renaming photo files
//!
//! Photos never call `std::fs` directly; they go through a [`Renamer`] so the
//! tag engine can run against an in-memory filesystem in tests.

use std::fs;
use std::io;
use std::path::Path;

/// Moves files on behalf of [`Photo`](crate::model::Photo)
pub trait Renamer {
    /// Move `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns an `io::Error` if the file cannot be moved. Implementations must
    /// leave the source in place when they fail.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Whether something already exists at `path`
    fn exists(&self, path: &Path) -> bool;
}

/// Renamer backed by the real filesystem
///
/// Refuses to overwrite an existing target, and falls back to copy + remove
/// when the target lives on another device.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsRenamer;

impl Renamer for FsRenamer {
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        if from == to {
            return Ok(());
        }
        if to.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("'{}' already exists", to.display()),
            ));
        }

        match fs::rename(from, to) {
            Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
                fs::copy(from, to)?;
                fs::remove_file(from)
            }
            other => other,
        }
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
