//! Loading and querying rule configurations

use crate::types::{ElementRule, RuleConfig};
use sceneval_core::{Result, SceneValError};
use std::fs;
use std::path::Path;

impl RuleConfig {
    /// Load rules from a file; `.json` files are read as JSON, anything else as TOML
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

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

    /// Load rules from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            SceneValError::ConfigError(format!("Failed to parse rule TOML: {}", e))
        })
    }

    /// Load rules from a JSON string
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            SceneValError::ConfigError(format!("Failed to parse rule JSON: {}", e))
        })
    }

    /// Serialize the effective rules back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Register (or replace) the rule for an element type
    pub fn register(&mut self, element_type: impl Into<String>, rule: ElementRule) {
        self.element_rules.insert(element_type.into(), rule);
    }

    /// Get the rule for an element type, if configured
    pub fn element_rule(&self, element_type: &str) -> Option<&ElementRule> {
        self.element_rules.get(element_type)
    }

    /// Configured element types in sorted order
    pub fn known_types(&self) -> Vec<&str> {
        self.element_rules.keys().map(String::as_str).collect()
    }

    /// Whether any color space restriction is in effect
    pub fn restricts_color_space(&self) -> bool {
        !self.allowed_color_spaces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sceneval_core::Resolution;
    use std::io::Write;

    fn sample_toml() -> &'static str {
        r#"
min_resolution = { width = 1920, height = 1080 }
allowed_color_spaces = ["sRGB"]

[element_rules.camera]
required_properties = ["focal_length"]
ranges = [{ property = "focal_length", min = 10.0, max = 200.0 }]

[element_rules.light]
required_properties = ["intensity"]
"#
    }

    fn temp_file(name: &str, content: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("sceneval_rules_test_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_from_toml_string() {
        let config = RuleConfig::from_toml_str(sample_toml()).unwrap();
        assert_eq!(config.known_types(), vec!["camera", "light"]);
        assert!(config.restricts_color_space());
        assert!(config.element_rule("camera").is_some());
        assert!(config.element_rule("prop").is_none());
    }

    #[test]
    fn test_load_legacy_json_file() {
        let json = r#"{
            "min_resolution": { "width": 1280, "height": 720 },
            "allowed_color_spaces": [],
            "allow_unknown_elements": false,
            "element_rules": {
                "camera": {
                    "required_properties": ["focal_length"],
                    "constraints": { "focal_length_range": [10, 200] }
                }
            }
        }"#;
        let path = temp_file("rules.json", json);
        let config = RuleConfig::load_file(&path).unwrap();

        assert_eq!(config.min_resolution, Resolution::new(1280, 720));
        assert!(!config.restricts_color_space());
        assert!(!config.allow_unknown_elements);
        let camera = config.element_rule("camera").unwrap();
        assert_eq!(camera.ranges[0].property, "focal_length");
        assert_eq!(camera.ranges[0].max, 200.0);

        std::fs::remove_file(&path).ok();
        std::fs::remove_dir(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = RuleConfig::from_toml_str("min_resolution = 12").unwrap_err();
        assert!(matches!(err, SceneValError::ConfigError(_)));
    }

    #[test]
    fn test_register_directly() {
        let mut config = RuleConfig::default();
        config.register("prop", ElementRule::new().with_required("mesh"));
        assert_eq!(config.known_types(), vec!["prop"]);
        assert_eq!(config.element_rule("prop").unwrap().required_properties, vec!["mesh"]);
    }

    #[test]
    fn test_toml_output_reloads() {
        let config = RuleConfig::from_toml_str(sample_toml()).unwrap();
        let text = config.to_toml_string().unwrap();
        let reloaded = RuleConfig::from_toml_str(&text).unwrap();
        assert_eq!(reloaded, config);
    }
}
