//! Gemini reviewer (Google generative language API)
//!
//! Sends a description of the scene to `models/{model}:generateContent` and
//! converts the JSON answer into findings. Requests block until the model
//! answers or the configured timeout expires.

use crate::config::{ReviewConfig, ENV_GEMINI_API_KEY};
use crate::prompt::build_review_prompt;
use crate::response::{extract_json_payload, parse_review_response};
use crate::reviewer::SceneReviewer;
use sceneval_core::{Findings, Result, SceneValError};
use sceneval_scene::Scene;
use std::time::Duration;
use tracing::{debug, info};

const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const MAX_RETRIES: usize = 3;
const RETRY_BASE_DELAY_MS: u64 = 500;

/// Reviewer backed by a Gemini model
pub struct GeminiReviewer {
    api_key: String,
    api_url: String,
    model: String,
    timeout: Duration,
}

impl GeminiReviewer {
    /// Create a new GeminiReviewer from config
    pub fn from_config(config: &ReviewConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                SceneValError::ConfigError(format!(
                    "Gemini API key not configured. Set {} or add api_key to the [review] section",
                    ENV_GEMINI_API_KEY
                ))
            })?
            .to_string();

        let api_url = config
            .api_url
            .as_deref()
            .unwrap_or(DEFAULT_GEMINI_URL)
            .trim_end_matches('/')
            .to_string();

        info!("GeminiReviewer initialized with model {}", config.model);

        Ok(Self {
            api_key,
            api_url,
            model: config.model.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    /// Full `generateContent` URL for the configured model
    pub fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.api_url, self.model)
    }

    /// Request body asking for a JSON answer to `prompt`
    pub fn request_body(prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": {
                "temperature": 0.2,
                "responseMimeType": "application/json"
            }
        })
    }

    fn post_json_with_retry(&self, payload: &serde_json::Value) -> Result<serde_json::Value> {
        let url = self.endpoint();

        for attempt in 0..MAX_RETRIES {
            let agent = self.build_agent();
            let response = agent
                .post(&url)
                .header("x-goog-api-key", self.api_key.as_str())
                .send_json(payload);

            match response {
                Ok(mut ok) => {
                    return ok.body_mut().read_json().map_err(|e| {
                        SceneValError::ReviewError(format!(
                            "Failed to parse Gemini response: {}",
                            e
                        ))
                    });
                }
                Err(e) => {
                    if attempt + 1 < MAX_RETRIES && is_retryable_error(&e) {
                        debug!(attempt, "Gemini request failed, retrying: {}", e);
                        sleep_backoff(attempt);
                        continue;
                    }
                    return Err(SceneValError::ReviewError(format!(
                        "Gemini API request failed: {}",
                        e
                    )));
                }
            }
        }

        Err(SceneValError::ReviewError(
            "Gemini API request failed after retries".to_string(),
        ))
    }

    fn build_agent(&self) -> ureq::Agent {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(self.timeout))
            .build();
        config.into()
    }
}

/// Concatenate the text parts of the first candidate in a `generateContent` response
pub fn extract_candidate_text(response: &serde_json::Value) -> Result<String> {
    let parts = response
        .get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|arr| arr.first())
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
        .ok_or_else(|| {
            let reason = response
                .get("promptFeedback")
                .and_then(|f| f.get("blockReason"))
                .and_then(|r| r.as_str())
                .unwrap_or("no candidates returned");
            SceneValError::ReviewError(format!("Unexpected Gemini response: {}", reason))
        })?;

    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
        .collect();

    if text.trim().is_empty() {
        return Err(SceneValError::ReviewError(
            "Gemini response contained no text".to_string(),
        ));
    }

    Ok(text)
}

fn is_retryable_error(e: &ureq::Error) -> bool {
    match e {
        ureq::Error::Timeout(_)
        | ureq::Error::Io(_)
        | ureq::Error::ConnectionFailed
        | ureq::Error::HostNotFound => true,
        ureq::Error::StatusCode(code) => matches!(code, 429 | 500 | 502 | 503 | 504),
        _ => false,
    }
}

fn sleep_backoff(attempt: usize) {
    let delay_ms = RETRY_BASE_DELAY_MS.saturating_mul(1u64 << attempt);
    std::thread::sleep(Duration::from_millis(delay_ms));
}

impl SceneReviewer for GeminiReviewer {
    fn name(&self) -> &str {
        "gemini"
    }

    fn review(&self, scene: &Scene) -> Result<Findings> {
        let prompt = build_review_prompt(scene);
        let response = self.post_json_with_retry(&Self::request_body(&prompt))?;
        let text = extract_candidate_text(&response)?;
        let payload = extract_json_payload(&text)?;
        parse_review_response(&payload)
    }
}
