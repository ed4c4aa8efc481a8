//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the operation against the session.

pub mod files;
pub mod history;
pub mod list;
pub mod log;
pub mod scan;
pub mod tag;
pub mod tags;

// Re-export execute functions for convenience
pub use history::execute as history;
pub use list::execute as list;
pub use log::execute as log;
pub use scan::execute as scan;
pub use tag::execute as tag;
pub use tags::execute as tags;

use crate::PhotagError;
use crate::manager::TagOutcome;
use crate::output;

/// Print an applied outcome; a conflict becomes an error naming the clash
fn report(outcome: &TagOutcome, quiet: bool) -> Result<(), PhotagError> {
    match outcome {
        TagOutcome::Applied { old_name, new_name } => {
            if quiet {
                println!("{new_name}");
            } else {
                println!("{}", output::rename(old_name, new_name));
            }
            Ok(())
        }
        TagOutcome::Conflict { path } => Err(PhotagError::InvalidInput(format!(
            "Another photo is already named '{}'",
            path.display()
        ))),
    }
}
