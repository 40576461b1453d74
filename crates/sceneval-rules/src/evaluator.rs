//! Rule evaluation engine

use crate::types::RuleConfig;
use sceneval_core::codes;
use sceneval_core::{Findings, Severity, ValidationError, ValidationWarning};
use sceneval_scene::{Scene, SceneElement};
use tracing::debug;

/// Frame rates accepted without a warning; compared exactly
pub const STANDARD_FRAME_RATES: [f64; 8] = [23.976, 24.0, 25.0, 29.97, 30.0, 50.0, 59.94, 60.0];

/// Checks scenes against a rule configuration.
///
/// Every check is a pure function of the scene and the config, so one
/// evaluator can be shared freely.
pub struct RuleEvaluator<'a> {
    config: &'a RuleConfig,
}

impl<'a> RuleEvaluator<'a> {
    /// Create a new evaluator
    pub fn new(config: &'a RuleConfig) -> Self {
        Self { config }
    }

    /// Run every check in order: resolution, color space, frame rate, then
    /// each element in scene order
    pub fn evaluate(&self, scene: &Scene) -> Findings {
        let mut findings = Findings::new();

        if let Some(error) = self.check_resolution(scene) {
            findings.push_error(error);
        }
        if let Some(error) = self.check_color_space(scene) {
            findings.push_error(error);
        }
        if let Some(warning) = self.check_frame_rate(scene) {
            findings.push_warning(warning);
        }
        for element in &scene.elements {
            self.check_element(element, &mut findings);
        }

        debug!(
            scene_id = %scene.scene_id,
            errors = findings.errors.len(),
            warnings = findings.warnings.len(),
            "Rule evaluation finished"
        );

        findings
    }

    /// `INVALID_RESOLUTION` when either axis is below the configured minimum
    pub fn check_resolution(&self, scene: &Scene) -> Option<ValidationError> {
        let min = &self.config.min_resolution;
        if !scene.resolution.is_below(min) {
            return None;
        }

        Some(
            ValidationError::new(
                codes::INVALID_RESOLUTION,
                format!(
                    "Resolution {} is below the minimum requirement of {}",
                    scene.resolution, min
                ),
                Severity::High,
            )
            .with_suggestion(format!("Increase resolution to at least {}", min)),
        )
    }

    /// `INVALID_COLOR_SPACE` when an allow-list exists and does not contain the scene's space
    pub fn check_color_space(&self, scene: &Scene) -> Option<ValidationError> {
        let allowed = &self.config.allowed_color_spaces;
        if allowed.is_empty() || allowed.contains(&scene.color_space) {
            return None;
        }

        let listed = allowed.join(", ");
        Some(
            ValidationError::new(
                codes::INVALID_COLOR_SPACE,
                format!(
                    "Color space '{}' is not in the allowed list: {}",
                    scene.color_space, listed
                ),
                Severity::Medium,
            )
            .with_suggestion(format!("Use one of the allowed color spaces: {}", listed)),
        )
    }

    /// `NON_STANDARD_FRAME_RATE` warning for anything outside [`STANDARD_FRAME_RATES`]
    pub fn check_frame_rate(&self, scene: &Scene) -> Option<ValidationWarning> {
        if STANDARD_FRAME_RATES.contains(&scene.frame_rate) {
            return None;
        }

        let listed = STANDARD_FRAME_RATES
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Some(
            ValidationWarning::new(
                codes::NON_STANDARD_FRAME_RATE,
                format!("Frame rate {} is not a standard frame rate", scene.frame_rate),
            )
            .with_suggestion(format!("Consider using a standard frame rate: {}", listed)),
        )
    }

    /// Check one element against the rule for its type.
    ///
    /// Unconfigured types yield at most an `UNKNOWN_ELEMENT_TYPE` error and
    /// nothing else. Missing-property errors precede range errors.
    pub fn check_element(&self, element: &SceneElement, findings: &mut Findings) {
        let Some(rule) = self.config.element_rule(&element.element_type) else {
            if !self.config.allow_unknown_elements {
                findings.push_error(self.unknown_type_error(element));
            }
            return;
        };

        for property in &rule.required_properties {
            if !element.properties.contains_key(property) {
                findings.push_error(
                    ValidationError::new(
                        codes::MISSING_REQUIRED_PROPERTY,
                        format!(
                            "Element '{}' is missing required property '{}'",
                            element.element_id, property
                        ),
                        Severity::High,
                    )
                    .with_element(&element.element_id)
                    .with_suggestion(format!("Add the '{}' property to the element", property)),
                );
            }
        }

        for range in &rule.ranges {
            let Some(value) = element.property(&range.property) else {
                continue;
            };

            match value.as_number() {
                Some(n) if range.contains(n) => {}
                Some(n) => findings.push_error(
                    ValidationError::new(
                        codes::PROPERTY_OUT_OF_RANGE,
                        format!(
                            "Property '{}' value {} is outside the allowed range [{}, {}]",
                            range.property, n, range.min, range.max
                        ),
                        Severity::Medium,
                    )
                    .with_element(&element.element_id)
                    .with_suggestion(format!(
                        "Adjust '{}' to be within range [{}, {}]",
                        range.property, range.min, range.max
                    )),
                ),
                None => findings.push_error(
                    ValidationError::new(
                        codes::PROPERTY_TYPE_MISMATCH,
                        format!(
                            "Property '{}' must be a number to check range [{}, {}], got {} {}",
                            range.property,
                            range.min,
                            range.max,
                            value.type_name(),
                            value
                        ),
                        Severity::Medium,
                    )
                    .with_element(&element.element_id)
                    .with_suggestion(format!(
                        "Set '{}' to a number within range [{}, {}]",
                        range.property, range.min, range.max
                    )),
                ),
            }
        }
    }

    fn unknown_type_error(&self, element: &SceneElement) -> ValidationError {
        ValidationError::new(
            codes::UNKNOWN_ELEMENT_TYPE,
            format!("Element type '{}' is not allowed", element.element_type),
            Severity::Medium,
        )
        .with_element(&element.element_id)
        .with_suggestion(format!(
            "Use one of the allowed element types: {}",
            self.config.known_types().join(", ")
        ))
    }
}
