//! Directory-backed scene store

use crate::store::SceneStore;
use sceneval_core::{Result, SceneValError, ValidationReport};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const SCENES_PREFIX: &str = "scenes";
const RESULTS_PREFIX: &str = "validation_results";

/// A store that keeps JSON blobs under a local directory
///
/// The bucket name only labels log lines; returned URIs always point at the
/// file that was written.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
    bucket: Option<String>,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>, bucket: Option<String>) -> Self {
        Self {
            root: root.into(),
            bucket,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    fn blob_name(prefix: &str, id: &str) -> Result<String> {
        let unsafe_id = id.is_empty()
            || id == "."
            || id == ".."
            || id.contains(['/', '\\'])
            || id.chars().any(char::is_control);
        if unsafe_id {
            return Err(SceneValError::StorageError(format!(
                "Invalid blob identifier '{}'",
                id
            )));
        }
        Ok(format!("{}/{}.json", prefix, id))
    }

    fn uri(&self, blob_name: &str) -> String {
        format!("file://{}", self.root.join(blob_name).display())
    }

    fn write_blob(&self, blob_name: &str, content: &str) -> Result<String> {
        let path = self.root.join(blob_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(self.uri(blob_name))
    }
}

impl SceneStore for LocalStore {
    fn name(&self) -> &str {
        "local"
    }

    fn download_scene(&self, scene_id: &str) -> Result<Option<serde_json::Value>> {
        let blob_name = Self::blob_name(SCENES_PREFIX, scene_id)?;
        let path = self.root.join(&blob_name);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let scene = serde_json::from_str(&content).map_err(|e| {
            SceneValError::StorageError(format!("Stored scene {} is not valid JSON: {}", blob_name, e))
        })?;
        info!(bucket = ?self.bucket, "Downloaded scene {} from {}", scene_id, self.uri(&blob_name));
        Ok(Some(scene))
    }

    fn upload_scene(&self, scene_id: &str, scene: &serde_json::Value) -> Result<String> {
        let blob_name = Self::blob_name(SCENES_PREFIX, scene_id)?;
        let uri = self.write_blob(&blob_name, &serde_json::to_string_pretty(scene)?)?;
        info!(bucket = ?self.bucket, "Uploaded scene {} to {}", scene_id, uri);
        Ok(uri)
    }

    fn upload_validation_result(&self, validation_id: &str, report: &ValidationReport) -> Result<String> {
        let blob_name = Self::blob_name(RESULTS_PREFIX, validation_id)?;
        let uri = self.write_blob(&blob_name, &serde_json::to_string_pretty(report)?)?;
        info!(bucket = ?self.bucket, "Uploaded validation result {} to {}", validation_id, uri);
        Ok(uri)
    }
}
