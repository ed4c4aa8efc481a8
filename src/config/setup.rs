//! Interactive setup wizard for first-time configuration
//!
//! This module handles the interactive prompts for creating an initial
//! configuration when photag is run for the first time.

use super::PhotagConfig;
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::PathBuf;

/// Interactive first-time setup - prompts for the index and audit log locations
///
/// Both prompts default to the system data directory. The answers are saved
/// to the config file.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - User input cannot be read
/// - The configuration cannot be saved
pub fn first_time_setup() -> Result<PhotagConfig, ConfigError> {
    println!("Welcome to photag! Let's decide where your photo index lives.\n");

    let defaults = PhotagConfig::default();

    let database = prompt_path("Index location", &defaults.database)?;
    let audit_log = prompt_path("Rename log location", &defaults.audit_log)?;

    let config = PhotagConfig { database, audit_log, ..defaults };
    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}

fn prompt_path(prompt: &str, default: &std::path::Path) -> Result<PathBuf, ConfigError> {
    let answer: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default.to_string_lossy().to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;
    Ok(PathBuf::from(answer))
}
