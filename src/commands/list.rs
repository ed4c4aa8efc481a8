//! List command - browse photos by tag and file name

use crate::config::PathFormat;
use crate::db::PhotoId;
use crate::rename::Renamer;
use crate::session::Session;
use crate::{PhotagError, output};
use glob::Pattern as GlobPattern;
use serde::Serialize;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, PhotagError>;

/// One photo in JSON output
#[derive(Debug, Serialize)]
struct ListedPhoto {
    path: PathBuf,
    tags: Vec<String>,
}

/// Execute the list command
///
/// # Errors
/// Returns an error if a tag or the glob pattern is invalid, or JSON output fails
pub fn execute<R: Renamer>(
    session: &Session<R>,
    tags: &[String],
    any: bool,
    pattern: Option<&str>,
    json: bool,
    path_format: PathFormat,
    quiet: bool,
) -> Result<()> {
    let ids = matching_photos(session, tags, any, pattern)?;
    let photos = ids.iter().filter_map(|id| session.db().photo(*id));

    if json {
        let listed: Vec<ListedPhoto> = photos
            .map(|photo| ListedPhoto {
                path: photo.path(),
                tags: photo.current_tags().iter().map(|t| t.name().to_string()).collect(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listed)?);
        return Ok(());
    }

    if ids.is_empty() {
        if !quiet {
            println!("No photos found.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Photos ({}):", ids.len());
    }
    for photo in photos {
        println!("{}", output::photo_with_tags(&photo.path(), photo.current_tags(), path_format, quiet));
    }
    Ok(())
}

/// Photos matching the tag filter and, if given, the file-name glob
///
/// # Errors
/// Returns an error if a tag or the glob pattern is invalid
pub fn matching_photos<R: Renamer>(
    session: &Session<R>,
    tags: &[String],
    any: bool,
    pattern: Option<&str>,
) -> Result<Vec<PhotoId>> {
    let tags = session.parse_tags(tags)?;
    let glob = pattern
        .map(GlobPattern::new)
        .transpose()
        .map_err(|e| PhotagError::InvalidInput(format!("Invalid pattern: {e}")))?;

    Ok(session
        .photos_with_tags(&tags, any)
        .into_iter()
        .filter(|id| {
            glob.as_ref().is_none_or(|glob| {
                session.db().photo(*id).is_some_and(|photo| glob.matches(photo.file_name()))
            })
        })
        .collect())
}
