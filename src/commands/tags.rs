//! Tags command - tag registry management

use crate::model::Tag;
use crate::rename::Renamer;
use crate::session::Session;
use crate::{PhotagError, cli::TagsCommands, output};

type Result<T> = std::result::Result<T, PhotagError>;

/// Execute the tags management command
///
/// # Errors
/// Returns an error if a tag name is invalid, or a removed tag is unknown or still in use
pub fn execute<R: Renamer>(session: &mut Session<R>, command: &TagsCommands, quiet: bool) -> Result<()> {
    match command {
        TagsCommands::List => {
            list_tags(session, quiet);
            Ok(())
        }
        TagsCommands::Add { name } => {
            let tag = Tag::parse(name)?;
            let added = session.declare_tag(tag.clone());
            if !quiet {
                if added {
                    println!("Registered {tag}");
                } else {
                    println!("{tag} is already registered");
                }
            }
            Ok(())
        }
        TagsCommands::Remove { name } => {
            let tag = Tag::parse(name)?;
            session.remove_tag(&tag)?;
            if !quiet {
                println!("Removed {tag}");
            }
            Ok(())
        }
    }
}

fn list_tags<R: Renamer>(session: &Session<R>, quiet: bool) {
    let tags = session.db().current_existing_tags();

    if tags.is_empty() {
        if !quiet {
            println!("No tags registered.");
        }
        return;
    }

    if !quiet {
        println!("Registered tags:");
    }
    for tag in tags {
        let count = session.db().photos_with_tag(tag).len();
        println!("{}", output::tag_with_count(tag, count, quiet));
    }
}
