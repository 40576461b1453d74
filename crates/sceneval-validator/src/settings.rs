//! Validator settings file
//!
//! One file configures rules, secondary review and storage. TOML is the
//! native format; `.json` files are read as JSON and may use the legacy
//! layout (`validation_rules` plus a `cloud_settings` table).

use sceneval_core::{Result, SceneValError};
use sceneval_review::ReviewConfig;
use sceneval_rules::RuleConfig;
use sceneval_storage::StorageConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default settings file name looked up by the CLI
pub const DEFAULT_SETTINGS_FILE: &str = "sceneval.toml";

/// Everything needed to build a [`crate::SceneValidator`]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidatorSettings {
    pub rules: RuleConfig,
    pub review: ReviewConfig,
    pub storage: StorageConfig,
    /// Set when the reviewer was only implied by legacy `cloud_settings`;
    /// a reviewer that cannot be built is then skipped instead of failing
    #[serde(skip)]
    pub review_optional: bool,
}

/// On-disk layout, including the legacy keys
#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default, alias = "validation_rules")]
    rules: RuleConfig,
    #[serde(default)]
    review: Option<ReviewConfig>,
    #[serde(default)]
    storage: StorageConfig,
    #[serde(default)]
    cloud_settings: Option<CloudSettings>,
}

#[derive(Debug, Default, Deserialize)]
struct CloudSettings {
    gemini_model: Option<String>,
    api_key: Option<String>,
    storage_bucket: Option<String>,
    project_id: Option<String>,
}

impl ValidatorSettings {
    /// Load settings from a file; `.json` files are read as JSON, anything else as TOML
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SceneValError::ConfigError(format!("Failed to read settings {}: {}", path.display(), e))
        })?;

        let is_json = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: SettingsFile = toml::from_str(content).map_err(|e| {
            SceneValError::ConfigError(format!("Failed to parse settings TOML: {}", e))
        })?;
        Ok(file.into_settings())
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: SettingsFile = serde_json::from_str(content).map_err(|e| {
            SceneValError::ConfigError(format!("Failed to parse settings JSON: {}", e))
        })?;
        Ok(file.into_settings())
    }

    /// Layer the review section over the global config and environment
    pub fn resolve(mut self) -> Result<Self> {
        self.review = self.review.resolve()?;
        Ok(self)
    }
}

impl SettingsFile {
    fn into_settings(self) -> ValidatorSettings {
        let mut review = self.review.unwrap_or_default();
        let mut storage = self.storage;
        let mut review_optional = false;

        // Explicit [review]/[storage] values win over cloud_settings
        if let Some(cloud) = self.cloud_settings {
            if let Some(model) = cloud.gemini_model {
                if !review.is_enabled() {
                    review = ReviewConfig {
                        api_key: review.api_key.or(cloud.api_key),
                        ..ReviewConfig::gemini(model)
                    };
                    review_optional = true;
                }
            }
            if storage.bucket.is_none() {
                storage.bucket = cloud.storage_bucket;
            }
            if storage.project_id.is_none() {
                storage.project_id = cloud.project_id;
            }
        }

        ValidatorSettings {
            rules: self.rules,
            review,
            storage,
            review_optional,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sceneval_core::Resolution;
    use std::io::Write;

    #[test]
    fn test_toml_settings() {
        let settings = ValidatorSettings::from_toml_str(
            r#"
[rules]
min_resolution = { width = 1920, height = 1080 }
allowed_color_spaces = ["sRGB"]

[rules.element_rules.light]
required_properties = ["intensity"]

[review]
provider = "mock"

[storage]
root = "scenes-store"
"#,
        )
        .unwrap();

        assert_eq!(settings.rules.min_resolution, Resolution::FULL_HD);
        assert!(settings.rules.element_rule("light").is_some());
        assert_eq!(settings.review.provider, "mock");
        assert_eq!(settings.storage.root.as_deref(), Some(Path::new("scenes-store")));
        assert_eq!(settings.storage.bucket, None);
    }

    #[test]
    fn test_empty_settings_are_defaults() {
        let settings = ValidatorSettings::from_toml_str("").unwrap();
        assert_eq!(settings, ValidatorSettings::default());
        assert!(!settings.review.is_enabled());
        assert!(!settings.storage.is_enabled());
    }

    #[test]
    fn test_legacy_json_layout() {
        let settings = ValidatorSettings::from_json_str(
            r#"{
                "validation_rules": {
                    "min_resolution": { "width": 1280, "height": 720 },
                    "allowed_color_spaces": ["sRGB", "Rec.709"],
                    "element_rules": {
                        "light": {
                            "required_properties": ["intensity"],
                            "constraints": { "intensity_range": [0, 10] }
                        }
                    }
                },
                "cloud_settings": {
                    "project_id": "media-prod",
                    "gemini_model": "gemini-1.5-pro",
                    "storage_bucket": "media-scenes"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(settings.rules.min_resolution, Resolution::new(1280, 720));
        assert_eq!(settings.rules.element_rule("light").unwrap().ranges.len(), 1);
        assert_eq!(settings.review.provider, "gemini");
        assert_eq!(settings.review.model, "gemini-1.5-pro");
        assert_eq!(settings.storage.bucket.as_deref(), Some("media-scenes"));
        assert_eq!(settings.storage.project_id.as_deref(), Some("media-prod"));
        assert!(settings.review_optional);
    }

    #[test]
    fn test_explicit_review_section_wins_over_cloud_settings() {
        let settings = ValidatorSettings::from_toml_str(
            r#"
[review]
provider = "mock"

[storage]
bucket = "explicit"

[cloud_settings]
gemini_model = "gemini-pro"
storage_bucket = "legacy"
"#,
        )
        .unwrap();

        assert_eq!(settings.review.provider, "mock");
        assert!(!settings.review_optional);
        assert_eq!(settings.storage.bucket.as_deref(), Some("explicit"));
    }

    #[test]
    fn test_invalid_rules_fail_loading() {
        let err = ValidatorSettings::from_toml_str(
            r#"
[rules.element_rules.light]
ranges = [{ property = "intensity", min = 10.0, max = 0.0 }]
"#,
        )
        .unwrap_err();
        assert!(matches!(err, SceneValError::ConfigError(_)));
    }

    #[test]
    fn test_load_file_by_extension() {
        let dir = std::env::temp_dir().join(format!("sceneval_settings_test_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();

        let json_path = dir.join("config.json");
        let mut f = std::fs::File::create(&json_path).unwrap();
        f.write_all(br#"{ "validation_rules": { "allow_unknown_elements": false } }"#)
            .unwrap();
        let settings = ValidatorSettings::load_file(&json_path).unwrap();
        assert!(!settings.rules.allow_unknown_elements);

        let toml_path = dir.join("sceneval.toml");
        std::fs::write(&toml_path, "[rules]\nallow_unknown_elements = false\n").unwrap();
        let settings = ValidatorSettings::load_file(&toml_path).unwrap();
        assert!(!settings.rules.allow_unknown_elements);

        let missing = ValidatorSettings::load_file(dir.join("missing.toml")).unwrap_err();
        assert!(matches!(missing, SceneValError::ConfigError(_)));

        std::fs::remove_dir_all(&dir).ok();
    }
}
