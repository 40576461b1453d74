//! Validation orchestrator

use crate::metrics::scene_metrics;
use crate::settings::ValidatorSettings;
use sceneval_core::codes;
use sceneval_core::{
    Findings, PerformanceMetrics, Result, SceneValError, Severity, ValidationError,
    ValidationReport,
};
use sceneval_review::{create_reviewer, NullReviewer, ReviewAdapter, SceneReviewer};
use sceneval_rules::{RuleConfig, RuleEvaluator};
use sceneval_scene::{load_scene_data, parse_scene, recover_scene_id};
use sceneval_storage::{create_store, NullStore, SceneStore};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Validates scenes against a fixed rule set, an optional secondary
/// reviewer and an optional scene store.
///
/// Holds no per-call state; `validate` may be called from several threads
/// at once.
pub struct SceneValidator {
    rules: RuleConfig,
    reviewer: ReviewAdapter,
    store: Box<dyn SceneStore>,
}

impl SceneValidator {
    /// A validator with the given rules, no reviewer and no store
    pub fn new(rules: RuleConfig) -> Self {
        Self {
            rules,
            reviewer: ReviewAdapter::disabled(),
            store: Box::new(NullStore),
        }
    }

    /// Build a validator from resolved settings.
    ///
    /// Fails with `ConfigError` when an explicitly configured reviewer cannot
    /// be constructed (unknown provider, missing API key). A reviewer implied
    /// by legacy `cloud_settings` is skipped with a warning instead.
    pub fn from_settings(settings: ValidatorSettings) -> Result<Self> {
        let ValidatorSettings {
            rules,
            review,
            storage,
            review_optional,
        } = settings;

        let reviewer: Box<dyn SceneReviewer> = match create_reviewer(&review) {
            Ok(reviewer) => reviewer,
            Err(e) if review_optional => {
                warn!(
                    provider = %review.provider,
                    "Failed to initialize reviewer, continuing without secondary review: {}", e
                );
                Box::new(NullReviewer)
            }
            Err(e) => return Err(e),
        };
        let store = create_store(&storage);

        let validator = Self::new(rules)
            .with_reviewer(reviewer)
            .with_store(store);

        info!(
            reviewer = validator.reviewer.name(),
            store = validator.store.name(),
            element_types = validator.rules.element_rules.len(),
            "SceneValidator initialized"
        );
        Ok(validator)
    }

    pub fn with_reviewer(mut self, reviewer: Box<dyn SceneReviewer>) -> Self {
        self.reviewer = ReviewAdapter::new(reviewer);
        self
    }

    pub fn with_store(mut self, store: Box<dyn SceneStore>) -> Self {
        self.store = store;
        self
    }

    pub fn rules(&self) -> &RuleConfig {
        &self.rules
    }

    pub fn reviewer_name(&self) -> &str {
        self.reviewer.name()
    }

    pub fn store_name(&self) -> &str {
        self.store.name()
    }

    /// Validate raw scene data.
    ///
    /// Never fails: malformed input yields a report with a single critical
    /// `INVALID_SCHEMA` error and empty metrics.
    pub fn validate(&self, raw: &serde_json::Value) -> ValidationReport {
        let start = Instant::now();

        let scene = match parse_scene(raw) {
            Ok(scene) => scene,
            Err(e) => {
                let scene_id = recover_scene_id(raw);
                warn!("Scene {} failed schema validation: {}", scene_id, e);

                let mut findings = Findings::new();
                findings.push_error(schema_error(&e));
                return ValidationReport::new(
                    scene_id,
                    findings,
                    PerformanceMetrics::default(),
                    elapsed_ms(start),
                );
            }
        };

        let mut findings = RuleEvaluator::new(&self.rules).evaluate(&scene);

        let mut review = self.reviewer.review(&scene);
        let cleared = review.retain_known_elements(|id| scene.contains_element(id));
        if cleared > 0 {
            warn!(
                reviewer = self.reviewer.name(),
                cleared, "Cleared element references not present in scene {}", scene.scene_id
            );
        }
        findings.append(review);

        let report = ValidationReport::new(
            scene.scene_id.as_str(),
            findings,
            scene_metrics(&scene),
            elapsed_ms(start),
        );

        if report.is_valid() {
            info!(
                "Scene {} validated successfully with {} warnings",
                report.scene_id(),
                report.warning_count()
            );
        } else {
            warn!(
                "Scene {} validation failed with {} errors",
                report.scene_id(),
                report.error_count()
            );
        }

        report
    }

    /// Validate a scene named by a file path or a store identifier.
    ///
    /// Existing files are read as JSON (or TOML by extension); anything else
    /// is looked up in the configured store. Load failures are returned as
    /// errors rather than reported as findings.
    pub fn validate_from_source(&self, identifier: &str) -> Result<ValidationReport> {
        let path = Path::new(identifier);
        let raw = if path.is_file() {
            debug!("Loading scene from file {}", path.display());
            load_scene_data(path)?
        } else {
            debug!("Looking up scene {} in {} store", identifier, self.store.name());
            self.store
                .download_scene(identifier)?
                .ok_or_else(|| SceneValError::SceneNotFound(identifier.to_string()))?
        };

        Ok(self.validate(&raw))
    }

    /// Archive a report to the configured store, returning its URI
    pub fn archive(&self, report: &ValidationReport) -> Result<String> {
        let validation_id = report.validation_id().to_string();
        self.store.upload_validation_result(&validation_id, report)
    }
}

fn schema_error(e: &SceneValError) -> ValidationError {
    let detail = match e {
        SceneValError::InvalidSchema(msg) => msg.clone(),
        other => other.to_string(),
    };
    ValidationError::new(
        codes::INVALID_SCHEMA,
        format!("Failed to parse scene data: {}", detail),
        Severity::Critical,
    )
    .with_suggestion("Ensure scene data conforms to the required schema")
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
