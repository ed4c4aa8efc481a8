//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for photag using the `clap` crate.
//!
//! # Commands
//!
//! - **scan**: Index the images in a folder
//! - **tag** / **untag** / **retag**: Change the tags encoded in a file name
//! - **history** / **revert**: Inspect and restore earlier tag sets
//! - **tags**: Manage the tag registry
//! - **list**: Browse photos by tag (default)
//! - **move** / **open**: Relocate a photo, or show its folder
//! - **log**: Print the rename log
//!
//! `tag` and `untag` accept both flag-based (`-f file -t tag1`) and positional
//! (`file tag1`) syntax.

use crate::config::PathFormat;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "photag")]
#[command(about = "Tag photos by writing @tags into their file names", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Index database directory (overrides config)
    #[arg(long = "db", value_name = "PATH", global = true)]
    pub db: Option<PathBuf>,

    /// Display absolute paths (overrides config)
    #[arg(long = "absolute", global = true, conflicts_with = "relative")]
    pub absolute: bool,

    /// Display relative paths (overrides config)
    #[arg(long = "relative", global = true, conflicts_with = "absolute")]
    pub relative: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Index every image in a folder, reading tags from the file names
    #[command(visible_alias = "s")]
    Scan {
        /// Folder to scan
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Only look at the folder itself, not its subfolders
        #[arg(long = "no-recursive")]
        no_recursive: bool,
    },

    /// Add tags to a photo
    #[command(visible_alias = "t")]
    Tag {
        /// Photo to tag (flag form)
        #[arg(short = 'f', long = "file", value_name = "FILE")]
        file_flag: Option<PathBuf>,

        /// Tags to add (flag form)
        #[arg(short = 't', long = "tags", value_name = "TAG", num_args = 1..)]
        tags_flag: Vec<String>,

        /// Photo to tag
        #[arg(value_name = "FILE", conflicts_with = "file_flag")]
        file_pos: Option<PathBuf>,

        /// Tags to add; a leading @ is optional
        #[arg(value_name = "TAGS", conflicts_with = "tags_flag")]
        tags_pos: Vec<String>,
    },

    /// Remove tags from a photo
    #[command(visible_alias = "u")]
    Untag {
        /// Photo to untag (flag form)
        #[arg(short = 'f', long = "file", value_name = "FILE")]
        file_flag: Option<PathBuf>,

        /// Tags to remove (flag form)
        #[arg(short = 't', long = "tags", value_name = "TAG", num_args = 1..)]
        tags_flag: Vec<String>,

        /// Photo to untag
        #[arg(value_name = "FILE", conflicts_with = "file_flag")]
        file_pos: Option<PathBuf>,

        /// Tags to remove
        #[arg(value_name = "TAGS", conflicts_with = "tags_flag")]
        tags_pos: Vec<String>,

        /// Remove every tag
        #[arg(short = 'a', long = "all", conflicts_with_all = ["tags_flag", "tags_pos"])]
        all: bool,
    },

    /// Replace all tags of a photo
    #[command(visible_alias = "r")]
    Retag {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[arg(value_name = "TAGS", required = true)]
        tags: Vec<String>,
    },

    /// Show the tag sets a photo has had
    #[command(visible_alias = "h")]
    History {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Restore an earlier tag set (pick interactively without INDEX)
    Revert {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// History entry as numbered by `history`
        #[arg(value_name = "INDEX")]
        index: Option<usize>,
    },

    /// Manage registered tags
    Tags {
        #[command(subcommand)]
        command: TagsCommands,
    },

    /// List photos, optionally filtered by tags and file name (default)
    #[command(visible_alias = "ls")]
    List {
        /// Only photos carrying this tag (repeatable)
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Match photos carrying any of the tags instead of all of them
        #[arg(long = "any")]
        any: bool,

        /// Only photos whose file name matches this glob
        #[arg(short = 'p', long = "pattern", value_name = "GLOB")]
        pattern: Option<String>,

        /// Print as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Move a photo into another folder
    #[command(visible_alias = "mv")]
    Move {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },

    /// Open the folder containing a photo
    Open {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the rename log
    Log,
}

/// Tag registry subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum TagsCommands {
    /// List registered tags with their photo counts
    List,

    /// Register a tag without attaching it to a photo
    Add {
        name: String,
    },

    /// Unregister a tag no photo carries any more
    #[command(visible_alias = "rm")]
    Remove {
        name: String,
    },
}

impl Commands {
    /// Helper method to get the file path from either flag or positional argument
    #[must_use]
    pub fn get_file_from_tag(&self) -> Option<PathBuf> {
        match self {
            Self::Tag { file_flag, file_pos, .. } | Self::Untag { file_flag, file_pos, .. } => {
                file_flag.clone().or_else(|| file_pos.clone())
            }
            _ => None,
        }
    }

    /// Helper method to get tags from either flag or positional arguments
    #[must_use]
    pub fn get_tags_from_tag(&self) -> &[String] {
        match self {
            Self::Tag { tags_flag, tags_pos, .. } | Self::Untag { tags_flag, tags_pos, .. } => {
                if tags_flag.is_empty() {
                    tags_pos
                } else {
                    tags_flag
                }
            }
            _ => &[],
        }
    }

    /// Helper method to check if untag should remove all tags
    #[must_use]
    pub const fn get_all_from_untag(&self) -> bool {
        match self {
            Self::Untag { all, .. } => *all,
            _ => false,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to an unfiltered `list`
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::List {
            tags: Vec::new(),
            any: false,
            pattern: None,
            json: false,
        })
    }

    /// Helper method to get the path format override from global flags
    #[must_use]
    pub const fn get_path_format(&self) -> Option<PathFormat> {
        if self.absolute {
            Some(PathFormat::Absolute)
        } else if self.relative {
            Some(PathFormat::Relative)
        } else {
            None
        }
    }

    /// Most verbose level the stderr logger lets through
    #[must_use]
    pub const fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag_with_flags() {
        let cli = Cli::parse_from(["photag", "tag", "-f", "pic.jpg", "-t", "beach", "sun"]);
        let command = cli.command.unwrap();
        assert!(matches!(command, Commands::Tag { .. }));
        assert_eq!(command.get_file_from_tag(), Some(PathBuf::from("pic.jpg")));
        assert_eq!(command.get_tags_from_tag(), ["beach".to_string(), "sun".to_string()]);
    }

    #[test]
    fn test_parse_tag_with_positional() {
        let cli = Cli::parse_from(["photag", "tag", "pic.jpg", "beach", "@sun"]);
        let command = cli.command.unwrap();
        assert_eq!(command.get_file_from_tag(), Some(PathBuf::from("pic.jpg")));
        assert_eq!(command.get_tags_from_tag(), ["beach".to_string(), "@sun".to_string()]);
    }

    #[test]
    fn test_parse_untag_all() {
        let cli = Cli::parse_from(["photag", "untag", "pic.jpg", "--all"]);
        let command = cli.command.unwrap();
        assert!(command.get_all_from_untag());
        assert!(command.get_tags_from_tag().is_empty());
    }

    #[test]
    fn test_untag_all_conflicts_with_tags() {
        assert!(Cli::try_parse_from(["photag", "untag", "pic.jpg", "beach", "--all"]).is_err());
    }

    #[test]
    fn test_retag_requires_tags() {
        assert!(Cli::try_parse_from(["photag", "retag", "pic.jpg"]).is_err());
    }

    #[test]
    fn test_default_is_list() {
        let cli = Cli::parse_from(["photag"]);
        assert!(cli.command.is_none());
        assert!(matches!(cli.get_command(), Commands::List { any: false, json: false, .. }));
    }

    #[test]
    fn test_parse_list_filters() {
        let cli = Cli::parse_from(["photag", "ls", "-t", "a", "-t", "b", "--any", "-p", "IMG_*"]);
        match cli.get_command() {
            Commands::List { tags, any, pattern, json } => {
                assert_eq!(tags, vec!["a".to_string(), "b".to_string()]);
                assert!(any);
                assert_eq!(pattern.as_deref(), Some("IMG_*"));
                assert!(!json);
            }
            other => panic!("Expected List command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_revert_without_index() {
        let cli = Cli::parse_from(["photag", "revert", "pic.jpg"]);
        assert!(matches!(cli.command, Some(Commands::Revert { index: None, .. })));
    }

    #[test]
    fn test_tags_subcommands() {
        let cli = Cli::parse_from(["photag", "tags", "rm", "@old"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Tags { command: TagsCommands::Remove { ref name } }) if name == "@old"
        ));
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["photag", "log", "-q", "-vv", "--relative", "--db", "/tmp/x"]);
        assert!(cli.quiet);
        assert_eq!(cli.log_level(), Level::DEBUG);
        assert_eq!(cli.get_path_format(), Some(PathFormat::Relative));
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn test_default_log_level() {
        let cli = Cli::parse_from(["photag", "log"]);
        assert_eq!(cli.log_level(), Level::WARN);
        assert_eq!(cli.get_path_format(), None);
    }
}
