//! Image discovery on disk

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Which files a scan picks up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Lowercase extensions without the dot
    pub extensions: Vec<String>,
    pub recursive: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: ["jpg", "jpeg", "png", "bmp", "gif"].map(String::from).to_vec(),
            recursive: true,
        }
    }
}

impl ScanOptions {
    /// Whether `path` has one of the accepted extensions (case-insensitive)
    #[must_use]
    pub fn is_image_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_lowercase();
                self.extensions.iter().any(|accepted| *accepted == ext)
            })
    }

    /// Image files under `root`, sorted by path.
    ///
    /// Paths are canonical, so a file reached through a symlink is reported
    /// under its real path and only once. Unreadable entries are skipped with
    /// a warning.
    #[must_use]
    pub fn collect_images(&self, root: &Path) -> Vec<PathBuf> {
        let walker = WalkDir::new(root)
            .follow_links(true)
            .max_depth(if self.recursive { usize::MAX } else { 1 });

        let mut images: Vec<PathBuf> = walker
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .filter(|path| self.is_image_file(path))
            .filter_map(|path| match path.canonicalize() {
                Ok(real) => Some(real),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unresolvable entry");
                    None
                }
            })
            .collect();

        images.sort();
        images.dedup();
        tracing::info!(root = %root.display(), found = images.len(), "scan finished");
        images
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::PhotoDir;

    #[test]
    fn test_is_image_file() {
        let options = ScanOptions::default();
        assert!(options.is_image_file(Path::new("/p/a.jpg")));
        assert!(options.is_image_file(Path::new("/p/b @x.PNG")));
        assert!(!options.is_image_file(Path::new("/p/notes.txt")));
        assert!(!options.is_image_file(Path::new("/p/jpg")));
    }

    #[test]
    fn test_collect_images_recursive() {
        let dir = PhotoDir::new();
        dir.create("b.jpg");
        dir.create("a @x.png");
        dir.create("readme.txt");
        dir.create("nested/c.gif");
        let root = dir.path().canonicalize().unwrap();

        let found = ScanOptions::default().collect_images(&root);
        assert_eq!(found, vec![root.join("a @x.png"), root.join("b.jpg"), root.join("nested/c.gif")]);
    }

    #[test]
    fn test_collect_images_flat() {
        let dir = PhotoDir::new();
        dir.create("b.jpg");
        dir.create("nested/c.gif");
        let root = dir.path().canonicalize().unwrap();

        let options = ScanOptions { recursive: false, ..ScanOptions::default() };
        assert_eq!(options.collect_images(&root), vec![root.join("b.jpg")]);
    }

    #[test]
    fn test_custom_extensions() {
        let dir = PhotoDir::new();
        dir.create("raw.nef");
        dir.create("b.jpg");
        let root = dir.path().canonicalize().unwrap();

        let options = ScanOptions { extensions: vec!["nef".into()], recursive: true };
        assert_eq!(options.collect_images(&root), vec![root.join("raw.nef")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_folder_reports_real_paths() {
        let dir = PhotoDir::new();
        dir.create("real/pic.jpg");
        let root = dir.path().canonicalize().unwrap();
        std::os::unix::fs::symlink(root.join("real"), root.join("link")).unwrap();

        let found = ScanOptions::default().collect_images(&root);
        assert_eq!(found, vec![root.join("real/pic.jpg")]);
    }
}
