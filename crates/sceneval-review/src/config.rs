//! Layered review configuration
//!
//! Review settings are resolved with three layers of precedence (highest wins):
//! 1. Environment variables: `SCENEVAL_GEMINI_API_KEY`, `SCENEVAL_GEMINI_MODEL`
//! 2. The `[review]` section of the validator settings file
//! 3. Global: `~/.sceneval/config.toml` (`[review]` table)

use sceneval_core::{Result, SceneValError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENV_GEMINI_API_KEY: &str = "SCENEVAL_GEMINI_API_KEY";
pub const ENV_GEMINI_MODEL: &str = "SCENEVAL_GEMINI_MODEL";

/// Settings for the secondary reviewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewConfig {
    /// One of `none`, `mock`, `gemini`
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_provider() -> String {
    "none".to_string()
}

fn default_model() -> String {
    "gemini-pro".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            api_key: None,
            api_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Global config file structure
#[derive(Debug, Default, Deserialize)]
struct GlobalConfigFile {
    #[serde(default)]
    review: ReviewConfig,
}

impl ReviewConfig {
    /// Review through Gemini with the given model
    pub fn gemini(model: impl Into<String>) -> Self {
        Self {
            provider: "gemini".to_string(),
            model: model.into(),
            ..Self::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.provider != "none"
    }

    /// Resolve this (settings-file) layer against the global config and environment
    pub fn resolve(self) -> Result<Self> {
        Self::resolve_with_global(self, Self::global_config_path().as_deref())
    }

    /// Like [`ReviewConfig::resolve`] with an explicit global config path (for testing)
    pub fn resolve_with_global(local: Self, global_path: Option<&Path>) -> Result<Self> {
        let mut config = match global_path {
            Some(path) if path.exists() => Self::load_global(path)?,
            _ => Self::default(),
        };

        Self::merge_into(&mut config, local);
        Self::apply_env_overrides(&mut config);
        Ok(config)
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".sceneval").join("config.toml"))
    }

    fn load_global(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: GlobalConfigFile = toml::from_str(&content).map_err(|e| {
            SceneValError::ConfigError(format!("Failed to parse config {}: {}", path.display(), e))
        })?;
        Ok(file.review)
    }

    fn merge_into(base: &mut Self, overlay: Self) {
        if overlay.provider != default_provider() {
            base.provider = overlay.provider;
        }
        if overlay.model != default_model() {
            base.model = overlay.model;
        }
        if overlay.api_key.is_some() {
            base.api_key = overlay.api_key;
        }
        if overlay.api_url.is_some() {
            base.api_url = overlay.api_url;
        }
        if overlay.timeout_secs != default_timeout_secs() {
            base.timeout_secs = overlay.timeout_secs;
        }
    }

    fn apply_env_overrides(config: &mut Self) {
        if let Ok(key) = std::env::var(ENV_GEMINI_API_KEY) {
            config.api_key = Some(key);
        }
        if let Ok(model) = std::env::var(ENV_GEMINI_MODEL) {
            config.model = model;
        }
    }
}
