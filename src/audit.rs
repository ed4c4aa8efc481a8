//! Rename audit log
//!
//! A plain text file with one line per rename:
//!
//! ```text
//! 2026-10-16T09:12:44.120+02:00 Old Name: pic1.jpg New Name: pic1 @beach.jpg
//! ```

use crate::db::IndexEvent;
use chrono::{Local, SecondsFormat};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Append-only log of file renames
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one rename line. Nothing is written when the names are equal.
    ///
    /// Returns whether a line was written.
    ///
    /// # Errors
    ///
    /// Returns an `io::Error` if the log file or its folder cannot be written.
    pub fn add_log(&self, old_name: &str, new_name: &str) -> io::Result<bool> {
        if old_name == new_name {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        let timestamp = Local::now().to_rfc3339_opts(SecondsFormat::Millis, false);
        writeln!(file, "{timestamp} Old Name: {old_name} New Name: {new_name}")?;
        Ok(true)
    }

    /// Log the rename carried by `event`, if it has one
    ///
    /// # Errors
    ///
    /// Returns an `io::Error` if the line cannot be written.
    pub fn record(&self, event: &IndexEvent) -> io::Result<bool> {
        match event.rename_pair() {
            Some((old_name, new_name)) => self.add_log(old_name, new_name),
            None => Ok(false),
        }
    }

    /// All lines logged so far; empty when the file does not exist yet
    ///
    /// # Errors
    ///
    /// Returns an `io::Error` if the file exists but cannot be read.
    pub fn read_lines(&self) -> io::Result<Vec<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(contents.lines().map(str::to_string).collect()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }
}
