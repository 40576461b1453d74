//! Reviewer registry
//!
//! Maps provider names to concrete reviewer implementations.

pub mod gemini;
pub mod mock;

use crate::config::ReviewConfig;
use crate::reviewer::{NullReviewer, SceneReviewer};
use sceneval_core::{Result, SceneValError};

/// Create a reviewer by the provider named in `config`
pub fn create_reviewer(config: &ReviewConfig) -> Result<Box<dyn SceneReviewer>> {
    match config.provider.as_str() {
        "none" => Ok(Box::new(NullReviewer)),
        "mock" => Ok(Box::new(mock::MockReviewer::new())),
        "gemini" => Ok(Box::new(gemini::GeminiReviewer::from_config(config)?)),
        other => Err(SceneValError::ConfigError(format!(
            "Unknown review provider '{}'. Available: {}",
            other,
            available_providers().join(", ")
        ))),
    }
}

/// List all available provider names
pub fn available_providers() -> Vec<&'static str> {
    vec!["none", "mock", "gemini"]
}
