//! Move and open commands

use crate::config::PathFormat;
use crate::manager::MoveOutcome;
use crate::rename::Renamer;
use crate::session::Session;
use crate::{PhotagError, output};
use std::path::Path;

type Result<T> = std::result::Result<T, PhotagError>;

/// Execute the move command - move a photo into another folder
///
/// # Errors
/// Returns an error if the photo is not indexed, the folder cannot be
/// accessed, the destination is taken, or the move fails
pub fn move_photo<R: Renamer>(
    session: &mut Session<R>,
    file: &Path,
    dir: &Path,
    path_format: PathFormat,
    quiet: bool,
) -> Result<()> {
    let id = session.require(file)?;
    match session.move_photo(id, dir)? {
        MoveOutcome::Moved { from, to } => {
            if quiet {
                println!("{}", output::format_path(&to, path_format));
            } else {
                println!(
                    "Moved {} -> {}",
                    output::format_path(&from, path_format),
                    output::colorize_path(&to, path_format)
                );
            }
            Ok(())
        }
        MoveOutcome::Conflict { path } => Err(PhotagError::InvalidInput(format!(
            "'{}' already exists",
            path.display()
        ))),
    }
}

/// Execute the open command - show the photo's folder in the system file browser
///
/// # Errors
/// Returns an error if the photo is not indexed or the folder cannot be opened
pub fn open_folder<R: Renamer>(session: &Session<R>, file: &Path, quiet: bool) -> Result<()> {
    let id = session.require(file)?;
    let folder = session
        .db()
        .photo(id)
        .map(|photo| photo.folder().to_path_buf())
        .ok_or_else(|| PhotagError::InvalidInput(format!("'{}' is not in the index", file.display())))?;

    open::that(&folder)?;
    if !quiet {
        println!("Opened {}", folder.display());
    }
    Ok(())
}
