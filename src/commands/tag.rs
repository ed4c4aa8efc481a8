//! Tag, untag and retag commands

use super::report;
use crate::PhotagError;
use crate::rename::Renamer;
use crate::session::Session;
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, PhotagError>;

/// Execute the tag command - add tags to a photo, indexing it first if needed
///
/// # Errors
/// Returns an error if the file cannot be accessed, a tag is invalid, the new
/// name is taken, or the rename fails
pub fn execute<R: Renamer>(session: &mut Session<R>, file: Option<PathBuf>, tags: &[String], quiet: bool) -> Result<()> {
    let Some(file) = file else {
        return Err(PhotagError::InvalidInput("No file provided".into()));
    };
    if tags.is_empty() {
        return Err(PhotagError::InvalidInput("No tags provided".into()));
    }

    let tags = session.parse_tags(tags)?;
    let id = session.import_file(&file)?;
    let outcome = session.add_tags(id, &tags)?;
    report(&outcome, quiet)
}

/// Execute the untag command - remove some or all tags from a photo
///
/// # Errors
/// Returns an error if the photo is not indexed, no tags were given, the new
/// name is taken, or the rename fails
pub fn untag<R: Renamer>(
    session: &mut Session<R>,
    file: Option<PathBuf>,
    tags: &[String],
    all: bool,
    quiet: bool,
) -> Result<()> {
    let Some(file) = file else {
        return Err(PhotagError::InvalidInput("No file provided".into()));
    };
    let id = session.require(&file)?;

    let tags = if all {
        let current = session
            .db()
            .photo(id)
            .map(|photo| photo.current_tags().to_vec())
            .unwrap_or_default();
        if current.is_empty() {
            if !quiet {
                println!("{} has no tags", file.display());
            }
            return Ok(());
        }
        current
    } else if tags.is_empty() {
        return Err(PhotagError::InvalidInput(
            "No tags provided. Use -t to specify tags or --all to remove all tags".into(),
        ));
    } else {
        session.parse_tags(tags)?
    };

    let outcome = session.delete_tags(id, &tags)?;
    report(&outcome, quiet)
}

/// Execute the retag command - replace every tag of a photo
///
/// # Errors
/// Returns an error if the file cannot be accessed, a tag is invalid, the new
/// name is taken, or a rename fails
pub fn retag<R: Renamer>(session: &mut Session<R>, file: &Path, tags: &[String], quiet: bool) -> Result<()> {
    let tags = session.parse_tags(tags)?;
    let id = session.import_file(file)?;
    let outcome = session.replace_all_tags(id, &tags)?;
    report(&outcome, quiet)
}
