//! Validation report types

use crate::finding::{Findings, ValidationError, ValidationWarning};
use crate::id::ValidationId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Derived scene metrics. Both fields are absent when the scene could not be parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity_score: Option<f64>,
}

impl PerformanceMetrics {
    pub fn new(element_count: usize, complexity_score: f64) -> Self {
        Self {
            element_count: Some(element_count),
            complexity_score: Some(complexity_score),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.element_count.is_none() && self.complexity_score.is_none()
    }
}

/// The result of validating one scene.
///
/// Built once per validation through [`ValidationReport::new`], which derives
/// `valid` from the error list; there are no mutators afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    scene_id: String,
    validation_id: ValidationId,
    timestamp: DateTime<Utc>,
    valid: bool,
    #[serde(default)]
    errors: Vec<ValidationError>,
    #[serde(default)]
    warnings: Vec<ValidationWarning>,
    #[serde(default)]
    performance_metrics: PerformanceMetrics,
    validation_time_ms: u64,
}

impl ValidationReport {
    /// Assemble a report with a fresh id and the current time
    pub fn new(
        scene_id: impl Into<String>,
        findings: Findings,
        performance_metrics: PerformanceMetrics,
        validation_time_ms: u64,
    ) -> Self {
        let Findings { errors, warnings } = findings;
        Self {
            scene_id: scene_id.into(),
            validation_id: ValidationId::new(),
            timestamp: Utc::now(),
            valid: errors.is_empty(),
            errors,
            warnings,
            performance_metrics,
            validation_time_ms,
        }
    }

    pub fn scene_id(&self) -> &str {
        &self.scene_id
    }

    pub fn validation_id(&self) -> ValidationId {
        self.validation_id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// True if and only if there are no errors
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    pub fn metrics(&self) -> &PerformanceMetrics {
        &self.performance_metrics
    }

    pub fn validation_time_ms(&self) -> u64 {
        self.validation_time_ms
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Get a human-readable summary
    pub fn summary(&self) -> String {
        if self.errors.is_empty() && self.warnings.is_empty() {
            return format!("Scene '{}' passed with no findings.", self.scene_id);
        }

        format!(
            "Scene '{}' {}: {} error(s), {} warning(s)",
            self.scene_id,
            if self.valid { "passed" } else { "failed" },
            self.error_count(),
            self.warning_count(),
        )
    }
}
