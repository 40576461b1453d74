//! Sceneval Storage - Scene and validation result storage
//!
//! Scenes are fetched and validation results archived through the
//! `SceneStore` trait. `NullStore` is used when no storage is configured;
//! `LocalStore` keeps blobs in a directory using the bucket layout
//! `scenes/<id>.json` and `validation_results/<id>.json`.

mod config;
mod local;
mod store;

pub use config::StorageConfig;
pub use local::LocalStore;
pub use store::{create_store, NullStore, SceneStore};
