//! History and revert commands

use super::report;
use crate::PhotagError;
use crate::db::PhotoId;
use crate::model::{Tag, TagSet};
use crate::output;
use crate::rename::Renamer;
use crate::session::Session;
use dialoguer::{Select, theme::ColorfulTheme};
use std::path::Path;

type Result<T> = std::result::Result<T, PhotagError>;

/// Execute the history command - print every tag set a photo has had
///
/// # Errors
/// Returns an error if the photo is not indexed or JSON output fails
pub fn execute<R: Renamer>(session: &Session<R>, file: &Path, json: bool, quiet: bool) -> Result<()> {
    let id = session.require(file)?;
    let (log, current) = history_of(session, id);

    if json {
        let entries: Vec<Vec<&str>> = log.iter().map(|set| set.iter().map(Tag::name).collect()).collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if !quiet {
        println!("Tag history of {}:", file.display());
    }
    for (index, set) in log.iter().enumerate() {
        println!("{}", output::history_entry(index, set, *set == current));
    }
    Ok(())
}

/// Execute the revert command - restore a tag set from the history
///
/// Without `index` the user picks an entry interactively.
///
/// # Errors
/// Returns an error if the photo is not indexed, the entry does not exist,
/// the prompt fails, or the rename fails
pub fn revert<R: Renamer>(session: &mut Session<R>, file: &Path, index: Option<usize>, quiet: bool) -> Result<()> {
    let id = session.require(file)?;

    let index = match index {
        Some(index) => index,
        None => {
            let (log, current) = history_of(session, id);
            let items: Vec<String> = log
                .iter()
                .enumerate()
                .map(|(i, set)| output::history_entry(i, set, *set == current))
                .collect();
            let default = log.iter().position(|set| *set == current).unwrap_or(0);

            let picked = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("Restore which tag set?")
                .items(&items)
                .default(default)
                .interact_opt()
                .map_err(|e| PhotagError::IoError(std::io::Error::other(e)))?;
            match picked {
                Some(index) => index,
                None => return Ok(()),
            }
        }
    };

    let outcome = session.revert(id, index)?;
    report(&outcome, quiet)
}

fn history_of<R: Renamer>(session: &Session<R>, id: PhotoId) -> (Vec<TagSet>, TagSet) {
    let log = session.db().tag_log(id).unwrap_or_default().to_vec();
    let current = session.db().photo(id).map(|photo| photo.tag_set()).unwrap_or_default();
    (log, current)
}
