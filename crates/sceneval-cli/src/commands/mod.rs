//! CLI command implementations

pub mod rules;
pub mod validate;

use anyhow::{Context, Result};
use sceneval_validator::{ValidatorSettings, DEFAULT_SETTINGS_FILE};
use std::path::Path;
use tracing::debug;

/// Load settings from `config`, or from `sceneval.toml` in the working
/// directory when present, or fall back to defaults
pub fn load_settings(config: Option<&str>) -> Result<ValidatorSettings> {
    let path = match config {
        Some(path) => Path::new(path),
        None if Path::new(DEFAULT_SETTINGS_FILE).is_file() => Path::new(DEFAULT_SETTINGS_FILE),
        None => {
            debug!("No settings file found, using defaults");
            return Ok(ValidatorSettings::default());
        }
    };

    debug!("Loading settings from {}", path.display());
    ValidatorSettings::load_file(path)
        .with_context(|| format!("Error loading configuration from {}", path.display()))
}
