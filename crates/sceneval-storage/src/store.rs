//! Storage trait and the no-op store

use crate::config::StorageConfig;
use crate::local::LocalStore;
use sceneval_core::{Result, SceneValError, ValidationReport};
use tracing::info;

/// Trait implemented by scene stores
pub trait SceneStore: Send + Sync {
    /// Store name (e.g. "none", "local")
    fn name(&self) -> &str;

    /// Fetch raw scene data; `Ok(None)` when the scene does not exist
    fn download_scene(&self, scene_id: &str) -> Result<Option<serde_json::Value>>;

    /// Store raw scene data, returning its URI
    fn upload_scene(&self, scene_id: &str, scene: &serde_json::Value) -> Result<String>;

    /// Archive a validation report, returning its URI
    fn upload_validation_result(&self, validation_id: &str, report: &ValidationReport) -> Result<String>;
}

/// Store used when storage is not configured
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStore;

impl SceneStore for NullStore {
    fn name(&self) -> &str {
        "none"
    }

    fn download_scene(&self, _scene_id: &str) -> Result<Option<serde_json::Value>> {
        Ok(None)
    }

    fn upload_scene(&self, scene_id: &str, _scene: &serde_json::Value) -> Result<String> {
        Err(SceneValError::StorageError(format!(
            "Cannot upload scene '{}': no storage configured",
            scene_id
        )))
    }

    fn upload_validation_result(&self, validation_id: &str, _report: &ValidationReport) -> Result<String> {
        Err(SceneValError::StorageError(format!(
            "Cannot upload validation result '{}': no storage configured",
            validation_id
        )))
    }
}

/// Create the store described by `config`
pub fn create_store(config: &StorageConfig) -> Box<dyn SceneStore> {
    match config.effective_root() {
        Some(root) => {
            info!("Scene storage initialized at {}", root.display());
            Box::new(LocalStore::new(root, config.bucket.clone()))
        }
        None => Box::new(NullStore),
    }
}
