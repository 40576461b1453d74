//! Sceneval Validator - Scene validation orchestrator
//!
//! `SceneValidator` parses raw scene data, runs the rule evaluator, appends
//! the secondary reviewer's findings and assembles a `ValidationReport`.
//! `ValidatorSettings` loads the rule, review and storage configuration
//! from one settings file.

mod metrics;
mod settings;
mod validator;

pub use metrics::{complexity_score, scene_metrics};
pub use settings::{ValidatorSettings, DEFAULT_SETTINGS_FILE};
pub use validator::SceneValidator;
