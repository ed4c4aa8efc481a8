//! Scan command - index the images in a folder

use crate::config::PathFormat;
use crate::rename::Renamer;
use crate::session::Session;
use crate::{PhotagError, output};
use std::path::Path;

type Result<T> = std::result::Result<T, PhotagError>;

/// Execute the scan command
///
/// # Errors
/// Returns an error if the folder cannot be accessed or a photo cannot be indexed
pub fn execute<R: Renamer>(session: &mut Session<R>, dir: &Path, path_format: PathFormat, quiet: bool) -> Result<()> {
    let report = session.import_dir(dir)?;

    if quiet {
        for id in &report.added {
            if let Some(photo) = session.db().photo(*id) {
                println!("{}", output::format_path(&photo.path(), path_format));
            }
        }
        return Ok(());
    }

    for id in &report.added {
        if let Some(photo) = session.db().photo(*id) {
            println!("{}", output::photo_with_tags(&photo.path(), photo.current_tags(), path_format, false));
        }
    }
    println!(
        "Indexed {} new photo(s) in {} ({} already known, {} skipped)",
        report.added.len(),
        output::format_path(dir, path_format),
        report.already_indexed,
        report.skipped
    );
    Ok(())
}
