//! Log command - print the rename log

use crate::PhotagError;
use crate::rename::Renamer;
use crate::session::Session;

type Result<T> = std::result::Result<T, PhotagError>;

/// Execute the log command
///
/// # Errors
/// Returns an error if the log file exists but cannot be read
pub fn execute<R: Renamer>(session: &Session<R>, quiet: bool) -> Result<()> {
    let Some(log) = session.audit_log() else {
        if !quiet {
            println!("No rename log configured.");
        }
        return Ok(());
    };

    let lines = log.read_lines()?;
    if lines.is_empty() && !quiet {
        println!("No renames logged yet ({}).", log.path().display());
    }
    for line in lines {
        println!("{line}");
    }
    Ok(())
}
