//! Mock reviewer for offline use and testing
//!
//! Produces the same kinds of findings an AI reviewer would, from a few
//! fixed heuristics, without any network calls.

use crate::reviewer::SceneReviewer;
use sceneval_core::codes;
use sceneval_core::{Findings, Resolution, Result, Severity, ValidationError, ValidationWarning};
use sceneval_scene::Scene;

/// A reviewer that applies local heuristics
#[derive(Debug, Default)]
pub struct MockReviewer;

impl MockReviewer {
    pub fn new() -> Self {
        Self
    }
}

impl SceneReviewer for MockReviewer {
    fn name(&self) -> &str {
        "mock"
    }

    fn review(&self, scene: &Scene) -> Result<Findings> {
        let mut findings = Findings::new();

        if scene.resolution.is_below(&Resolution::FULL_HD) {
            findings.push_warning(
                ValidationWarning::new(
                    "LOW_RESOLUTION",
                    "The scene resolution is below 1080p, which may result in lower quality output",
                )
                .with_suggestion(
                    "Consider increasing resolution to at least 1920x1080 for better quality",
                ),
            );
        }

        for element in &scene.elements {
            if element.element_type == "camera" && element.property("focal_length").is_none() {
                findings.push_error(
                    ValidationError::new(
                        "CAMERA_MISSING_FOCAL_LENGTH",
                        "Camera element is missing focal length property",
                        Severity::Medium,
                    )
                    .with_element(&element.element_id)
                    .with_suggestion("Add 'focal_length' property to the camera element"),
                );
            }
        }

        findings.push_warning(
            ValidationWarning::new(
                codes::IMPROVEMENT_SUGGESTION,
                "Consider adding depth information to improve scene composition",
            )
            .with_suggestion("Proper depth cues enhance visual perception and realism"),
        );

        Ok(findings)
    }
}
