//! Sceneval Scene - Scene data model and schema parsing
//!
//! This crate turns untyped scene data (parsed JSON, or TOML scene files)
//! into typed `Scene` values, rejecting anything that does not match the
//! scene schema with `SceneValError::InvalidSchema`.

mod format;
mod loader;

pub use format::{parse_timestamp, Scene, SceneElement};
pub use loader::{load_scene_data, parse_scene, parse_scene_str, recover_scene_id, UNKNOWN_SCENE_ID};
