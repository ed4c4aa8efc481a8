//! Output formatting for CLI display
//!
//! This module provides utilities for formatting output in the CLI,
//! including path display formatting and photo/tag formatting.

use crate::config::PathFormat;
use crate::model::{Tag, TagSet};
use colored::Colorize;
use std::path::Path;

/// Format a path according to the display mode
#[must_use]
pub fn format_path(path: &Path, format: PathFormat) -> String {
    match format {
        PathFormat::Absolute => path.display().to_string(),
        PathFormat::Relative => {
            if let Ok(cwd) = std::env::current_dir()
                && let Ok(rel_path) = path.strip_prefix(&cwd)
            {
                return rel_path.display().to_string();
            }
            // Fallback to absolute if relative path cannot be computed
            path.display().to_string()
        }
    }
}

/// Format a photo with its tags for display
#[must_use]
pub fn photo_with_tags(path: &Path, tags: &[Tag], format: PathFormat, quiet: bool) -> String {
    let path_str = colorize_path(path, format);

    if quiet {
        format_path(path, format)
    } else if tags.is_empty() {
        format!("  {path_str} {}", "(no tags)".dimmed())
    } else {
        format!("  {path_str} [{}]", join_tags(tags.iter()).cyan())
    }
}

/// Format a tag with usage count
#[must_use]
pub fn tag_with_count(tag: &Tag, count: usize, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else if count == 0 {
        format!("  {} {}", tag.name().cyan(), "(unused)".dimmed())
    } else {
        format!("  {} (used by {count} photo(s))", tag.name().cyan())
    }
}

/// Format one numbered history entry
#[must_use]
pub fn history_entry(index: usize, set: &TagSet, current: bool) -> String {
    let tags = if set.is_empty() { "(no tags)".to_string() } else { join_tags(set.iter()) };
    if current {
        format!("{index:>4}  {} {}", tags.bold(), "(current)".green())
    } else {
        format!("{index:>4}  {tags}")
    }
}

/// Print a rename as `old -> new`
#[must_use]
pub fn rename(old_name: &str, new_name: &str) -> String {
    if old_name == new_name {
        format!("{} {}", new_name.yellow(), "(unchanged)".dimmed())
    } else {
        format!("{} -> {}", old_name.dimmed(), new_name.green())
    }
}

/// Color a path based on file existence (green if exists, red if missing)
#[must_use]
pub fn colorize_path(path: &Path, format: PathFormat) -> String {
    let formatted = format_path(path, format);
    if path.exists() {
        formatted.green().to_string()
    } else {
        formatted.red().to_string()
    }
}

fn join_tags<'a>(tags: impl Iterator<Item = &'a Tag>) -> String {
    tags.map(Tag::name).collect::<Vec<_>>().join(" ")
}
