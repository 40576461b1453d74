//! Validation findings: errors, warnings and their accumulator

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity level of a validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Parse a severity name case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Severity::Low),
            "medium" => Some(Severity::Medium),
            "high" => Some(Severity::High),
            "critical" => Some(Severity::Critical),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// A rule violation found during validation. Any error makes a scene invalid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub error_code: String,
    pub error_message: String,
    pub severity: Severity,
    #[serde(default)]
    pub element_id: Option<String>,
    #[serde(default)]
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(code: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            error_code: code.into(),
            error_message: message.into(),
            severity,
            element_id: None,
            suggestion: None,
        }
    }

    pub fn with_element(mut self, element_id: impl Into<String>) -> Self {
        self.element_id = Some(element_id.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// A non-blocking observation. Warnings never affect validity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationWarning {
    pub warning_code: String,
    pub warning_message: String,
    #[serde(default)]
    pub element_id: Option<String>,
    #[serde(default)]
    pub suggestion: Option<String>,
}

impl ValidationWarning {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            warning_code: code.into(),
            warning_message: message.into(),
            element_id: None,
            suggestion: None,
        }
    }

    pub fn with_element(mut self, element_id: impl Into<String>) -> Self {
        self.element_id = Some(element_id.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Ordered errors and warnings produced by one validation source
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Findings {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn push_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Append another source's findings after this one's, keeping both orders
    pub fn append(&mut self, other: Findings) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Error codes in order (handy for assertions and logging)
    pub fn error_codes(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.error_code.as_str()).collect()
    }

    /// Warning codes in order
    pub fn warning_codes(&self) -> Vec<&str> {
        self.warnings.iter().map(|w| w.warning_code.as_str()).collect()
    }

    /// Drop element references that fail `is_known`, keeping the finding itself
    pub fn retain_known_elements<F>(&mut self, is_known: F) -> usize
    where
        F: Fn(&str) -> bool,
    {
        let mut cleared = 0;
        for error in &mut self.errors {
            if error.element_id.as_deref().is_some_and(|id| !is_known(id)) {
                error.element_id = None;
                cleared += 1;
            }
        }
        for warning in &mut self.warnings {
            if warning.element_id.as_deref().is_some_and(|id| !is_known(id)) {
                warning.element_id = None;
                cleared += 1;
            }
        }
        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_serde_lowercase() {
        let json = serde_json::to_string(&Severity::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
        let parsed: Severity = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, Severity::Medium);
    }

    #[test]
    fn test_severity_from_name() {
        assert_eq!(Severity::from_name("HIGH"), Some(Severity::High));
        assert_eq!(Severity::from_name(" low "), Some(Severity::Low));
        assert_eq!(Severity::from_name("severe"), None);
    }

    #[test]
    fn test_error_field_names() {
        let err = ValidationError::new("INVALID_RESOLUTION", "too small", Severity::High)
            .with_suggestion("increase it");
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["error_code"], "INVALID_RESOLUTION");
        assert_eq!(value["error_message"], "too small");
        assert_eq!(value["severity"], "high");
        assert!(value["element_id"].is_null());
        assert_eq!(value["suggestion"], "increase it");
    }

    #[test]
    fn test_append_preserves_order() {
        let mut first = Findings::new();
        first.push_error(ValidationError::new("A", "a", Severity::Low));
        first.push_warning(ValidationWarning::new("W1", "w1"));

        let mut second = Findings::new();
        second.push_error(ValidationError::new("B", "b", Severity::High));
        second.push_warning(ValidationWarning::new("W2", "w2"));

        first.append(second);
        assert_eq!(first.error_codes(), vec!["A", "B"]);
        assert_eq!(first.warning_codes(), vec!["W1", "W2"]);
    }

    #[test]
    fn test_retain_known_elements() {
        let mut findings = Findings::new();
        findings.push_error(ValidationError::new("A", "a", Severity::Low).with_element("cam1"));
        findings.push_error(ValidationError::new("B", "b", Severity::Low).with_element("ghost"));
        findings.push_warning(ValidationWarning::new("W", "w").with_element("ghost"));

        let cleared = findings.retain_known_elements(|id| id == "cam1");
        assert_eq!(cleared, 2);
        assert_eq!(findings.errors[0].element_id.as_deref(), Some("cam1"));
        assert_eq!(findings.errors[1].element_id, None);
        assert_eq!(findings.warnings[0].element_id, None);
    }
}
