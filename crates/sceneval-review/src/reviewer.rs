//! Reviewer trait and the adapter that keeps reviewer failures contained

use sceneval_core::codes;
use sceneval_core::{Findings, Result, ValidationWarning};
use sceneval_scene::Scene;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, error};

/// Trait implemented by each secondary reviewer (none, mock, gemini).
///
/// Implementations must be safe to call from several threads at once.
pub trait SceneReviewer: Send + Sync {
    /// Reviewer name (e.g. "none", "mock", "gemini")
    fn name(&self) -> &str;

    /// Review a scene, returning errors and warnings in the shared finding vocabulary
    fn review(&self, scene: &Scene) -> Result<Findings>;
}

/// Reviewer used when secondary review is not configured. Contributes nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReviewer;

impl SceneReviewer for NullReviewer {
    fn name(&self) -> &str {
        "none"
    }

    fn review(&self, _scene: &Scene) -> Result<Findings> {
        Ok(Findings::new())
    }
}

/// The single warning that replaces a failed review
pub fn review_failed_warning() -> ValidationWarning {
    ValidationWarning::new(
        codes::GEMINI_VALIDATION_FAILED,
        "Intelligent validation with Gemini failed",
    )
    .with_suggestion("Check logs for details and try again later")
}

/// Wraps a reviewer so that nothing it does can fail a validation.
///
/// Errors and panics from the wrapped reviewer are logged and turned into
/// zero errors plus one `GEMINI_VALIDATION_FAILED` warning.
pub struct ReviewAdapter {
    reviewer: Box<dyn SceneReviewer>,
}

impl ReviewAdapter {
    pub fn new(reviewer: Box<dyn SceneReviewer>) -> Self {
        Self { reviewer }
    }

    /// An adapter around [`NullReviewer`]
    pub fn disabled() -> Self {
        Self::new(Box::new(NullReviewer))
    }

    pub fn name(&self) -> &str {
        self.reviewer.name()
    }

    pub fn review(&self, scene: &Scene) -> Findings {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.reviewer.review(scene)));

        match outcome {
            Ok(Ok(findings)) => {
                debug!(
                    reviewer = self.reviewer.name(),
                    errors = findings.errors.len(),
                    warnings = findings.warnings.len(),
                    "Secondary review finished"
                );
                findings
            }
            Ok(Err(e)) => {
                error!(reviewer = self.reviewer.name(), "Error during secondary review: {}", e);
                Self::failed()
            }
            Err(_) => {
                error!(reviewer = self.reviewer.name(), "Secondary review panicked");
                Self::failed()
            }
        }
    }

    fn failed() -> Findings {
        let mut findings = Findings::new();
        findings.push_warning(review_failed_warning());
        findings
    }
}

impl Default for ReviewAdapter {
    fn default() -> Self {
        Self::disabled()
    }
}
