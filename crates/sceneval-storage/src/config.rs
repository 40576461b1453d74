//! Storage settings

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root used when only a bucket name is configured
pub const DEFAULT_STORAGE_ROOT: &str = ".sceneval/storage";

/// Where scenes are fetched from and results archived to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the blobs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// Bucket name, carried into storage log lines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl StorageConfig {
    pub fn is_enabled(&self) -> bool {
        self.root.is_some() || self.bucket.is_some()
    }

    /// Effective blob directory, if storage is enabled
    pub fn effective_root(&self) -> Option<PathBuf> {
        match (&self.root, &self.bucket) {
            (Some(root), _) => Some(root.clone()),
            (None, Some(_)) => Some(PathBuf::from(DEFAULT_STORAGE_ROOT)),
            (None, None) => None,
        }
    }
}
