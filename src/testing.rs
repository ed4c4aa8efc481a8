//! Testing utilities for photag
//!
//! In-memory [`Renamer`]s for exercising tag operations without touching the
//! disk, and a temporary photo folder for the tests that do.
//!
//! Only available when compiled with `cfg(test)`.

use crate::rename::Renamer;
use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A renamer backed by a set of paths instead of a file system
///
/// Renames fail with `NotFound` when the source is missing and with
/// `AlreadyExists` when the destination is taken, like [`FsRenamer`](crate::rename::FsRenamer).
#[derive(Debug, Default)]
pub struct MemoryRenamer {
    files: RefCell<BTreeSet<PathBuf>>,
    fail_at: Cell<Option<usize>>,
    renames: Cell<usize>,
}

impl MemoryRenamer {
    pub fn with_files<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let files = files.into_iter().map(|p| p.as_ref().to_path_buf()).collect();
        Self { files: RefCell::new(files), ..Self::default() }
    }

    /// Make the rename attempt number `attempt` (counting from zero) fail
    #[must_use]
    pub fn fail_on(self, attempt: usize) -> Self {
        self.fail_at.set(Some(attempt));
        self
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.files.borrow().contains(path.as_ref())
    }

    pub fn add(&self, path: impl AsRef<Path>) {
        self.files.borrow_mut().insert(path.as_ref().to_path_buf());
    }

    pub fn files(&self) -> Vec<PathBuf> {
        self.files.borrow().iter().cloned().collect()
    }
}

impl Renamer for MemoryRenamer {
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        let attempt = self.renames.get();
        self.renames.set(attempt + 1);
        if self.fail_at.get() == Some(attempt) {
            return Err(io::Error::other("injected rename failure"));
        }

        let mut files = self.files.borrow_mut();
        if !files.contains(from) {
            return Err(io::Error::new(io::ErrorKind::NotFound, from.display().to_string()));
        }
        if files.contains(to) {
            return Err(io::Error::new(io::ErrorKind::AlreadyExists, to.display().to_string()));
        }
        files.remove(from);
        files.insert(to.to_path_buf());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.contains(path)
    }
}

/// A renamer whose every rename fails
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingRenamer;

impl Renamer for FailingRenamer {
    fn rename(&self, from: &Path, _to: &Path) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, from.display().to_string()))
    }

    fn exists(&self, _path: &Path) -> bool {
        false
    }
}

/// A temporary folder of fake image files, removed on drop
pub struct PhotoDir {
    dir: TempDir,
}

impl PhotoDir {
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        Self { dir: TempDir::new().expect("Failed to create temp dir") }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create `name` (relative, may include subfolders) with placeholder content
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn create(&self, name: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create folder");
        }
        let mut file = fs::File::create(&path).expect("Failed to create test file");
        file.write_all(b"test content").expect("Failed to write test file");
        path
    }

    /// File names directly inside the folder, sorted
    ///
    /// # Panics
    /// Panics if the folder cannot be read.
    pub fn file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.dir.path())
            .expect("Failed to read temp dir")
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_file())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_renamer_moves_entry() {
        let fs = MemoryRenamer::with_files(["/p/a.jpg"]);
        fs.rename(Path::new("/p/a.jpg"), Path::new("/p/b.jpg")).unwrap();
        assert!(fs.contains("/p/b.jpg"));
        assert!(!fs.contains("/p/a.jpg"));
    }

    #[test]
    fn test_memory_renamer_refuses_overwrite_and_missing() {
        let fs = MemoryRenamer::with_files(["/p/a.jpg", "/p/b.jpg"]);
        let err = fs.rename(Path::new("/p/a.jpg"), Path::new("/p/b.jpg")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        let err = fs.rename(Path::new("/p/x.jpg"), Path::new("/p/y.jpg")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(fs.files().len(), 2);
    }

    #[test]
    fn test_memory_renamer_fail_on() {
        let fs = MemoryRenamer::with_files(["/p/a.jpg"]).fail_on(1);
        fs.rename(Path::new("/p/a.jpg"), Path::new("/p/b.jpg")).unwrap();
        assert!(fs.rename(Path::new("/p/b.jpg"), Path::new("/p/c.jpg")).is_err());
        assert!(fs.contains("/p/b.jpg"));
        fs.rename(Path::new("/p/b.jpg"), Path::new("/p/c.jpg")).unwrap();
        assert!(fs.contains("/p/c.jpg"));
    }

    #[test]
    fn test_photo_dir_cleanup() {
        let path = {
            let dir = PhotoDir::new();
            let file = dir.create("sub/pic.jpg");
            assert!(file.exists());
            dir.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn test_photo_dir_file_names() {
        let dir = PhotoDir::new();
        dir.create("b.jpg");
        dir.create("a.jpg");
        dir.create("nested/c.jpg");
        assert_eq!(dir.file_names(), vec!["a.jpg", "b.jpg"]);
    }
}
