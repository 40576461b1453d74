//! Rule configuration type definitions

use sceneval_core::Resolution;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Suffix of legacy `constraints` keys that name a numeric range
const LEGACY_RANGE_SUFFIX: &str = "_range";

/// An inclusive numeric bound on one element property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeConstraint {
    pub property: String,
    pub min: f64,
    pub max: f64,
}

impl RangeConstraint {
    pub fn new(property: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            property: property.into(),
            min,
            max,
        }
    }

    /// True when `value` lies within `[min, max]`
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Requirements for one element type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ElementRuleDef")]
pub struct ElementRule {
    /// Checked in this order; duplicates are removed at load
    pub required_properties: Vec<String>,
    pub ranges: Vec<RangeConstraint>,
}

impl ElementRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_required(mut self, property: impl Into<String>) -> Self {
        let property = property.into();
        if !self.required_properties.contains(&property) {
            self.required_properties.push(property);
        }
        self
    }

    pub fn with_range(mut self, property: impl Into<String>, min: f64, max: f64) -> Self {
        self.ranges.push(RangeConstraint::new(property, min, max));
        self
    }
}

/// On-disk form of an [`ElementRule`].
///
/// Besides explicit `ranges`, the older `constraints` table is accepted:
/// every `<property>_range = [min, max]` entry becomes a structured range
/// (appended after explicit ranges, in file order). Other keys are ignored.
#[derive(Deserialize)]
struct ElementRuleDef {
    #[serde(default)]
    required_properties: Vec<String>,
    #[serde(default)]
    ranges: Vec<RangeConstraint>,
    #[serde(default)]
    constraints: serde_json::Map<String, serde_json::Value>,
}

impl TryFrom<ElementRuleDef> for ElementRule {
    type Error = String;

    fn try_from(def: ElementRuleDef) -> Result<Self, Self::Error> {
        let mut rule = ElementRule::new();
        for property in def.required_properties {
            rule = rule.with_required(property);
        }

        rule.ranges = def.ranges;
        for (key, value) in &def.constraints {
            if let Some(property) = key.strip_suffix(LEGACY_RANGE_SUFFIX) {
                let (min, max) = parse_range_pair(key, value)?;
                rule.ranges.push(RangeConstraint::new(property, min, max));
            }
        }

        for range in &rule.ranges {
            if range.property.is_empty() {
                return Err("range constraint has an empty property name".to_string());
            }
            if !range.min.is_finite() || !range.max.is_finite() || range.min > range.max {
                return Err(format!(
                    "range for '{}' must satisfy min <= max, got [{}, {}]",
                    range.property, range.min, range.max
                ));
            }
        }

        Ok(rule)
    }
}

fn parse_range_pair(key: &str, value: &serde_json::Value) -> Result<(f64, f64), String> {
    let pair = value
        .as_array()
        .filter(|items| items.len() == 2)
        .ok_or_else(|| format!("constraint '{}' must be a [min, max] pair", key))?;

    match (pair[0].as_f64(), pair[1].as_f64()) {
        (Some(min), Some(max)) => Ok((min, max)),
        _ => Err(format!("constraint '{}' must contain two numbers", key)),
    }
}

fn default_true() -> bool {
    true
}

/// The configured rule set a scene is validated against.
///
/// Loaded once when a validator is built and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    #[serde(default)]
    pub min_resolution: Resolution,
    /// Empty means any color space is accepted
    #[serde(default)]
    pub allowed_color_spaces: Vec<String>,
    #[serde(default = "default_true")]
    pub allow_unknown_elements: bool,
    #[serde(default)]
    pub element_rules: BTreeMap<String, ElementRule>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            min_resolution: Resolution::default(),
            allowed_color_spaces: Vec::new(),
            allow_unknown_elements: true,
            element_rules: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rules_from_toml() {
        let toml_str = r#"
min_resolution = { width = 1920, height = 1080 }
allowed_color_spaces = ["sRGB", "Rec.709"]
allow_unknown_elements = false

[element_rules.camera]
required_properties = ["focal_length", "sensor_size"]
ranges = [{ property = "focal_length", min = 10.0, max = 200.0 }]
"#;

        let config: RuleConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.min_resolution, Resolution::FULL_HD);
        assert_eq!(config.allowed_color_spaces, vec!["sRGB", "Rec.709"]);
        assert!(!config.allow_unknown_elements);

        let camera = &config.element_rules["camera"];
        assert_eq!(camera.required_properties, vec!["focal_length", "sensor_size"]);
        assert_eq!(camera.ranges, vec![RangeConstraint::new("focal_length", 10.0, 200.0)]);
    }

    #[test]
    fn test_defaults() {
        let config: RuleConfig = toml::from_str("").unwrap();
        assert_eq!(config, RuleConfig::default());
        assert!(config.allow_unknown_elements);
        assert_eq!(config.min_resolution, Resolution::new(0, 0));
    }

    #[test]
    fn test_legacy_range_constraints_become_structured() {
        let json = r#"{
            "required_properties": ["intensity"],
            "constraints": {
                "intensity_range": [0, 10],
                "color_temperature_range": [1000, 12000],
                "blend_mode": "additive"
            }
        }"#;

        let rule: ElementRule = serde_json::from_str(json).unwrap();
        assert_eq!(
            rule.ranges,
            vec![
                RangeConstraint::new("intensity", 0.0, 10.0),
                RangeConstraint::new("color_temperature", 1000.0, 12000.0),
            ]
        );
    }

    #[test]
    fn test_legacy_ranges_keep_file_order() {
        let json = r#"{ "constraints": { "zoom_range": [1, 4], "aperture_range": [1.4, 22] } }"#;
        let rule: ElementRule = serde_json::from_str(json).unwrap();
        let properties: Vec<&str> = rule.ranges.iter().map(|r| r.property.as_str()).collect();
        assert_eq!(properties, vec!["zoom", "aperture"]);

        let toml_str = r#"
[constraints]
zoom_range = [1, 4]
aperture_range = [1.4, 22]
"#;
        let rule: ElementRule = toml::from_str(toml_str).unwrap();
        let properties: Vec<&str> = rule.ranges.iter().map(|r| r.property.as_str()).collect();
        assert_eq!(properties, vec!["zoom", "aperture"]);
    }

    #[test]
    fn test_explicit_ranges_come_before_legacy() {
        let json = r#"{
            "ranges": [{ "property": "zoom", "min": 1, "max": 4 }],
            "constraints": { "aperture_range": [1.4, 22] }
        }"#;
        let rule: ElementRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.ranges[0].property, "zoom");
        assert_eq!(rule.ranges[1].property, "aperture");
    }

    #[test]
    fn test_malformed_range_rejected() {
        let bad_pair = r#"{ "constraints": { "x_range": [1, 2, 3] } }"#;
        assert!(serde_json::from_str::<ElementRule>(bad_pair).is_err());

        let not_numbers = r#"{ "constraints": { "x_range": ["a", "b"] } }"#;
        assert!(serde_json::from_str::<ElementRule>(not_numbers).is_err());

        let inverted = r#"{ "ranges": [{ "property": "x", "min": 5, "max": 1 }] }"#;
        let err = serde_json::from_str::<ElementRule>(inverted).unwrap_err();
        assert!(err.to_string().contains("min <= max"));
    }

    #[test]
    fn test_required_properties_deduplicated() {
        let json = r#"{ "required_properties": ["a", "b", "a"] }"#;
        let rule: ElementRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.required_properties, vec!["a", "b"]);
    }

    #[test]
    fn test_range_contains_is_inclusive() {
        let range = RangeConstraint::new("focal_length", 10.0, 200.0);
        assert!(range.contains(10.0));
        assert!(range.contains(200.0));
        assert!(!range.contains(9.99));
        assert!(!range.contains(200.01));
    }
}
