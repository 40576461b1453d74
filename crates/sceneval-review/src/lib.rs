//! Sceneval Review - Secondary semantic review of scenes
//!
//! Provides the `SceneReviewer` capability trait, a failure-absorbing
//! `ReviewAdapter` around it, and the built-in reviewers: `none` (no-op),
//! `mock` (offline heuristics) and `gemini` (Google generative AI).

pub mod config;
pub mod prompt;
pub mod providers;
pub mod response;
pub mod reviewer;

pub use config::ReviewConfig;
pub use providers::{available_providers, create_reviewer};
pub use reviewer::{review_failed_warning, NullReviewer, ReviewAdapter, SceneReviewer};
