//! Photag CLI application entry point
//!
//! Tags live in the file names themselves: tagging `beach.jpg` with `sun`
//! renames it to `beach @sun.jpg`. The index of known photos, registered tags
//! and tag history is kept in an embedded database between runs.
//!
//! # Usage
//!
//! ```bash
//! # Index a folder (tags already in file names are picked up)
//! photag scan ~/Pictures/holiday
//!
//! # Tag, untag, replace
//! photag tag beach.jpg sun sea
//! photag untag "beach @sun @sea.jpg" sea
//! photag retag "beach @sun.jpg" evening
//!
//! # Browse by tag
//! photag list -t sun -t sea --any
//!
//! # History
//! photag history "beach @evening.jpg"
//! photag revert "beach @evening.jpg" 1
//! ```
//!
//! # Configuration
//!
//! On first run, photag will prompt for initial setup. Configuration is stored in
//! the user's config directory (`~/.config/photag/config.toml` on Linux).

use photag::{
    PhotagError,
    audit::AuditLog,
    cli::{Cli, Commands},
    commands,
    config::PhotagConfig,
    db::Store,
    session::Session,
};

type Result<T> = std::result::Result<T, PhotagError>;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = PhotagConfig::load_or_setup()?;

    let quiet = cli.quiet || config.quiet;
    let path_format = cli.get_path_format().unwrap_or(config.path_format);
    let command = cli.get_command();

    let mut scan = config.scan_options();
    if let Commands::Scan { no_recursive: true, .. } = &command {
        scan.recursive = false;
    }

    let db_path = cli.db.clone().unwrap_or_else(|| config.database.clone());
    tracing::debug!(db = %db_path.display(), "opening index");
    let store = Store::open(&db_path)?;

    let mut session = Session::new(scan).with_audit_log(AuditLog::new(&config.audit_log));
    session.restore(&store)?;

    let result = match &command {
        Commands::Scan { dir, .. } => commands::scan(&mut session, dir, path_format, quiet),
        Commands::Tag { .. } => {
            let file = command.get_file_from_tag();
            let tags = command.get_tags_from_tag();
            commands::tag(&mut session, file, tags, quiet)
        }
        Commands::Untag { .. } => {
            let file = command.get_file_from_tag();
            let tags = command.get_tags_from_tag();
            let all = command.get_all_from_untag();
            commands::tag::untag(&mut session, file, tags, all, quiet)
        }
        Commands::Retag { file, tags } => commands::tag::retag(&mut session, file, tags, quiet),
        Commands::History { file, json } => commands::history(&session, file, *json, quiet),
        Commands::Revert { file, index } => commands::history::revert(&mut session, file, *index, quiet),
        Commands::Tags { command } => commands::tags(&mut session, command, quiet),
        Commands::List { tags, any, pattern, json } => {
            commands::list(&session, tags, *any, pattern.as_deref(), *json, path_format, quiet)
        }
        Commands::Move { file, dir } => commands::files::move_photo(&mut session, file, dir, path_format, quiet),
        Commands::Open { file } => commands::files::open_folder(&session, file, quiet),
        Commands::Log => commands::log(&session, quiet),
    };

    // Renames that happened before a failure are already on disk, so the
    // index is saved either way.
    session.persist(&store)?;
    result
}
