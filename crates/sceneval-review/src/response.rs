//! Conversion of reviewer answers into findings

use sceneval_core::codes;
use sceneval_core::{Findings, Result, SceneValError, Severity, ValidationError, ValidationWarning};
use serde_json::Value;

/// Parse the JSON document embedded in a model's text answer.
///
/// Models often wrap JSON in a markdown code fence; the fence is stripped.
pub fn extract_json_payload(text: &str) -> Result<Value> {
    let mut body = text.trim();

    if let Some(rest) = body.strip_prefix("```") {
        body = rest.trim_start_matches(|c: char| c.is_ascii_alphabetic());
        body = body.strip_suffix("```").unwrap_or(body).trim();
    }

    serde_json::from_str(body).map_err(|e| {
        SceneValError::ReviewError(format!("Reviewer answer is not valid JSON: {}", e))
    })
}

/// Convert a review document (`errors`, `warnings`, `improvements`) into findings.
///
/// Missing fields fall back to defaults; unknown severities become medium;
/// improvements become `IMPROVEMENT_SUGGESTION` warnings.
pub fn parse_review_response(response: &Value) -> Result<Findings> {
    let doc = response.as_object().ok_or_else(|| {
        SceneValError::ReviewError("Reviewer answer must be a JSON object".to_string())
    })?;

    let mut findings = Findings::new();

    for item in entries(doc.get("errors")) {
        let severity = text(item, "severity")
            .and_then(Severity::from_name)
            .unwrap_or(Severity::Medium);
        let mut error = ValidationError::new(
            text(item, "code").unwrap_or(codes::UNKNOWN_ERROR),
            text(item, "message").unwrap_or("Unknown error"),
            severity,
        );
        error.element_id = text(item, "element_id").map(str::to_string);
        error.suggestion = text(item, "suggestion").map(str::to_string);
        findings.push_error(error);
    }

    for item in entries(doc.get("warnings")) {
        let mut warning = ValidationWarning::new(
            text(item, "code").unwrap_or(codes::UNKNOWN_WARNING),
            text(item, "message").unwrap_or("Unknown warning"),
        );
        warning.element_id = text(item, "element_id").map(str::to_string);
        warning.suggestion = text(item, "suggestion").map(str::to_string);
        findings.push_warning(warning);
    }

    for item in entries(doc.get("improvements")) {
        findings.push_warning(
            ValidationWarning::new(
                codes::IMPROVEMENT_SUGGESTION,
                text(item, "description").unwrap_or_default(),
            )
            .with_suggestion(text(item, "rationale").unwrap_or_default()),
        );
    }

    Ok(findings)
}

fn entries(list: Option<&Value>) -> impl Iterator<Item = &Value> {
    list.and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter(|item| item.is_object())
}

fn text<'a>(item: &'a Value, key: &str) -> Option<&'a str> {
    item.get(key).and_then(Value::as_str)
}
