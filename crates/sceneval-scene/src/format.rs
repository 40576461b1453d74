//! Scene data format definitions

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use sceneval_core::{Dimensions, Position, PropertyValue, Resolution};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// A named sub-component of a scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneElement {
    /// Unique within the owning scene
    pub element_id: String,
    /// Open vocabulary; matched against the configured element rules
    pub element_type: String,
    pub position: Position,
    pub dimensions: Dimensions,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
}

impl SceneElement {
    pub fn new(element_id: impl Into<String>, element_type: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            element_type: element_type.into(),
            position: Position::ORIGIN,
            dimensions: Dimensions::default(),
            properties: BTreeMap::new(),
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }
}

/// A structured description of a media composition; the unit of validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub scene_id: String,
    pub project_id: String,
    /// Timestamps without an offset are taken as UTC
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub scene_type: String,
    pub resolution: Resolution,
    pub frame_rate: f64,
    pub color_space: String,
    pub elements: Vec<SceneElement>,
    #[serde(default)]
    pub metadata: BTreeMap<String, PropertyValue>,
}

impl Scene {
    /// Create a scene with no elements, timestamped now
    pub fn new(
        scene_id: impl Into<String>,
        resolution: Resolution,
        frame_rate: f64,
        color_space: impl Into<String>,
    ) -> Self {
        Self {
            scene_id: scene_id.into(),
            project_id: String::new(),
            timestamp: Utc::now(),
            scene_type: String::new(),
            resolution,
            frame_rate,
            color_space: color_space.into(),
            elements: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = project_id.into();
        self
    }

    pub fn with_scene_type(mut self, scene_type: impl Into<String>) -> Self {
        self.scene_type = scene_type.into();
        self
    }

    pub fn with_element(mut self, element: SceneElement) -> Self {
        self.elements.push(element);
        self
    }

    pub fn element(&self, element_id: &str) -> Option<&SceneElement> {
        self.elements.iter().find(|e| e.element_id == element_id)
    }

    pub fn contains_element(&self, element_id: &str) -> bool {
        self.element(element_id).is_some()
    }
}

/// Parse an ISO 8601 timestamp.
///
/// Accepts RFC 3339, date-times with no offset (`2025-06-20T10:00:00`,
/// optionally space-separated or with fractional seconds) and bare dates.
/// Values without an offset are interpreted as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = raw.parse::<DateTime<FixedOffset>>() {
        return Some(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| {
        de::Error::custom(format!(
            "invalid timestamp '{}', expected an ISO 8601 date-time",
            raw
        ))
    })
}
