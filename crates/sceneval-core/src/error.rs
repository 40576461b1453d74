//! Error types for sceneval

use thiserror::Error;

/// The main error type for sceneval operations
#[derive(Debug, Error)]
pub enum SceneValError {
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    #[error("Scene not found: {0}")]
    SceneNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(String),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),

    #[error("Review error: {0}")]
    ReviewError(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Result type alias for sceneval operations
pub type Result<T> = std::result::Result<T, SceneValError>;

impl From<serde_json::Error> for SceneValError {
    fn from(err: serde_json::Error) -> Self {
        SceneValError::JsonError(err.to_string())
    }
}

impl From<toml::de::Error> for SceneValError {
    fn from(err: toml::de::Error) -> Self {
        SceneValError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for SceneValError {
    fn from(err: toml::ser::Error) -> Self {
        SceneValError::TomlSerError(err.to_string())
    }
}
