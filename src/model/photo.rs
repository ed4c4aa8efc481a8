//! The photo entity
//!
//! A photo is stored as its folder plus its file name. The file name always
//! equals `base + " " + tag` for each current tag in order, plus the
//! extension; every mutation re-establishes this by renaming the file.

use super::TagSet;
use super::error::PhotoError;
use super::tag::Tag;
use crate::codec;
use crate::rename::Renamer;
use std::path::{Path, PathBuf};

/// An indexed image file and its current tags
#[derive(Debug, Clone)]
pub struct Photo {
    folder: PathBuf,
    file_name: String,
    tags: Vec<Tag>,
}

impl Photo {
    /// Create a photo without tags.
    ///
    /// # Errors
    ///
    /// Returns `PhotoError::InvalidPath` if the path has no UTF-8 file name.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, PhotoError> {
        let (folder, file_name) = split_path(path.as_ref())?;
        Ok(Self { folder, file_name, tags: Vec::new() })
    }

    /// Create a photo whose name already carries `tags`. No rename happens.
    ///
    /// Duplicate tags are dropped, keeping the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns `PhotoError::InvalidPath` if the path has no UTF-8 file name.
    pub fn with_tags(path: impl AsRef<Path>, tags: impl IntoIterator<Item = Tag>) -> Result<Self, PhotoError> {
        let mut photo = Self::new(path)?;
        for tag in tags {
            if !photo.tags.contains(&tag) {
                photo.tags.push(tag);
            }
        }
        Ok(photo)
    }

    /// Create a photo from a file found on disk, reading its tags from the name.
    ///
    /// # Errors
    ///
    /// Returns `PhotoError::InvalidPath` if the path has no UTF-8 file name.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, PhotoError> {
        let mut photo = Self::new(path)?;
        photo.tags = codec::decode(&photo.file_name).to_tags();
        Ok(photo)
    }

    /// Full path of the backing file
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.folder.join(&self.file_name)
    }

    /// Folder containing the file
    #[must_use]
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// File name with extension (`pic1 @a.jpg`)
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Extension including the dot, or empty
    #[must_use]
    pub fn extension(&self) -> &str {
        codec::split_extension(&self.file_name).1
    }

    /// Current tags in file-name order
    #[must_use]
    pub fn current_tags(&self) -> &[Tag] {
        &self.tags
    }

    #[must_use]
    pub fn tag_set(&self) -> TagSet {
        self.tags.iter().cloned().collect()
    }

    #[must_use]
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Where the file would live under a different file name
    #[must_use]
    pub fn sibling(&self, file_name: &str) -> PathBuf {
        self.folder.join(file_name)
    }

    /// Attach `tag` and rename the file to match.
    ///
    /// Returns `Ok(false)` without touching anything if the tag is already present.
    ///
    /// # Errors
    ///
    /// Returns `PhotoError::Rename` if the file cannot be renamed; the photo is
    /// left unchanged in that case.
    pub fn add_tag<R: Renamer + ?Sized>(&mut self, tag: &Tag, renamer: &R) -> Result<bool, PhotoError> {
        if self.has_tag(tag) {
            return Ok(false);
        }
        let new_name = codec::simulate_add(&self.file_name, std::slice::from_ref(tag));
        self.rename_to(new_name, renamer)?;
        self.tags.push(tag.clone());
        Ok(true)
    }

    /// Detach `tag` and rename the file to match.
    ///
    /// Returns `Ok(false)` without touching anything if the tag is absent.
    ///
    /// # Errors
    ///
    /// Returns `PhotoError::Rename` if the file cannot be renamed; the photo is
    /// left unchanged in that case.
    pub fn delete_tag<R: Renamer + ?Sized>(&mut self, tag: &Tag, renamer: &R) -> Result<bool, PhotoError> {
        if !self.has_tag(tag) {
            return Ok(false);
        }
        let new_name = codec::simulate_delete(&self.file_name, std::slice::from_ref(tag));
        self.rename_to(new_name, renamer)?;
        self.tags.retain(|t| t != tag);
        Ok(true)
    }

    /// Move the backing file to `new_path` and record the new location.
    ///
    /// # Errors
    ///
    /// Returns `PhotoError::InvalidPath` for a path without a UTF-8 file name,
    /// or `PhotoError::Rename` if the move fails. The stored path only changes
    /// on success.
    pub fn set_directory<R: Renamer + ?Sized>(&mut self, new_path: impl AsRef<Path>, renamer: &R) -> Result<(), PhotoError> {
        let new_path = new_path.as_ref();
        let (folder, file_name) = split_path(new_path)?;
        let old_path = self.path();

        renamer.rename(&old_path, new_path).map_err(|source| PhotoError::Rename {
            from: old_path,
            to: new_path.to_path_buf(),
            source,
        })?;

        self.folder = folder;
        self.file_name = file_name;
        Ok(())
    }

    fn rename_to<R: Renamer + ?Sized>(&mut self, new_name: String, renamer: &R) -> Result<(), PhotoError> {
        let from = self.path();
        let to = self.sibling(&new_name);
        renamer
            .rename(&from, &to)
            .map_err(|source| PhotoError::Rename { from, to, source })?;
        self.file_name = new_name;
        Ok(())
    }
}

/// Photos are equal iff they live at the same path
impl PartialEq for Photo {
    fn eq(&self, other: &Self) -> bool {
        self.folder == other.folder && self.file_name == other.file_name
    }
}

impl Eq for Photo {}

fn split_path(path: &Path) -> Result<(PathBuf, String), PhotoError> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| PhotoError::InvalidPath(path.display().to_string()))?;
    let folder = path.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok((folder, file_name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FailingRenamer, MemoryRenamer};

    fn tag(name: &str) -> Tag {
        Tag::parse(name).unwrap()
    }

    #[test]
    fn test_add_tag_renames_file() {
        let fs = MemoryRenamer::with_files(["/p/pic1.jpg"]);
        let mut photo = Photo::new("/p/pic1.jpg").unwrap();

        assert!(photo.add_tag(&tag("@a"), &fs).unwrap());
        assert!(photo.add_tag(&tag("@b"), &fs).unwrap());

        assert_eq!(photo.path(), PathBuf::from("/p/pic1 @a @b.jpg"));
        assert!(fs.contains("/p/pic1 @a @b.jpg"));
        assert!(!fs.contains("/p/pic1.jpg"));
    }

    #[test]
    fn test_add_same_tag_twice_is_idempotent() {
        let fs = MemoryRenamer::with_files(["/p/pic1.jpg"]);
        let mut photo = Photo::new("/p/pic1.jpg").unwrap();
        photo.add_tag(&tag("@a"), &fs).unwrap();

        assert!(!photo.add_tag(&tag("@a"), &fs).unwrap());
        assert_eq!(photo.file_name(), "pic1 @a.jpg");
        assert_eq!(photo.current_tags(), &[tag("@a")]);
    }

    #[test]
    fn test_delete_absent_tag_is_noop() {
        let fs = MemoryRenamer::with_files(["/p/pic1 @a.jpg"]);
        let mut photo = Photo::discover("/p/pic1 @a.jpg").unwrap();

        assert!(!photo.delete_tag(&tag("@zzz"), &fs).unwrap());
        assert_eq!(photo.file_name(), "pic1 @a.jpg");
        assert_eq!(photo.current_tags(), &[tag("@a")]);
    }

    #[test]
    fn test_delete_tag_renames_file() {
        let fs = MemoryRenamer::with_files(["/p/pic1 @a @b.jpg"]);
        let mut photo = Photo::discover("/p/pic1 @a @b.jpg").unwrap();

        assert!(photo.delete_tag(&tag("@a"), &fs).unwrap());
        assert_eq!(photo.file_name(), "pic1 @b.jpg");
        assert!(fs.contains("/p/pic1 @b.jpg"));
    }

    #[test]
    fn test_failed_rename_leaves_photo_unchanged() {
        let mut photo = Photo::new("/p/pic1.jpg").unwrap();

        let err = photo.add_tag(&tag("@a"), &FailingRenamer).unwrap_err();
        assert!(matches!(err, PhotoError::Rename { .. }));
        assert_eq!(photo.file_name(), "pic1.jpg");
        assert!(photo.current_tags().is_empty());
    }

    #[test]
    fn test_set_directory_moves_file() {
        let fs = MemoryRenamer::with_files(["/p/pic1 @a.jpg"]);
        let mut photo = Photo::discover("/p/pic1 @a.jpg").unwrap();

        photo.set_directory("/q/pic1 @a.jpg", &fs).unwrap();
        assert_eq!(photo.folder(), Path::new("/q"));
        assert_eq!(photo.current_tags(), &[tag("@a")]);
        assert!(fs.contains("/q/pic1 @a.jpg"));
    }

    #[test]
    fn test_set_directory_failure_keeps_path() {
        let mut photo = Photo::new("/p/pic1.jpg").unwrap();
        assert!(photo.set_directory("/q/pic1.jpg", &FailingRenamer).is_err());
        assert_eq!(photo.path(), PathBuf::from("/p/pic1.jpg"));
    }

    #[test]
    fn test_equality_is_by_path() {
        let a = Photo::new("/p/pic1.jpg").unwrap();
        let b = Photo::with_tags("/p/pic1.jpg", [tag("@x")]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Photo::new("/q/pic1.jpg").unwrap());
    }

    #[test]
    fn test_discover_reads_tags_and_extension() {
        let photo = Photo::discover("/p/beach @sun @sea.PNG").unwrap();
        assert_eq!(photo.current_tags(), &[tag("@sun"), tag("@sea")]);
        assert_eq!(photo.extension(), ".PNG");
    }

    #[test]
    fn test_invalid_path() {
        assert!(matches!(Photo::new("/"), Err(PhotoError::InvalidPath(_))));
    }
}
