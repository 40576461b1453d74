//! Scene parsing from untyped data

use crate::format::Scene;
use sceneval_core::{Result, SceneValError};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Scene id reported when none can be recovered from malformed input
pub const UNKNOWN_SCENE_ID: &str = "unknown";

/// Parse untyped scene data into a `Scene`.
///
/// Fails with `InvalidSchema` when a required field is absent or mistyped, or
/// when the data breaks a scene invariant (zero resolution, non-positive
/// frame rate, negative element extents, duplicate element ids).
pub fn parse_scene(raw: &serde_json::Value) -> Result<Scene> {
    let scene = Scene::deserialize(raw).map_err(|e| SceneValError::InvalidSchema(e.to_string()))?;
    check_scene_shape(&scene)?;
    Ok(scene)
}

/// Parse a scene from a JSON string
pub fn parse_scene_str(content: &str) -> Result<Scene> {
    let raw: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| SceneValError::ParseError(format!("Invalid scene JSON: {}", e)))?;
    parse_scene(&raw)
}

/// Load raw scene data from a file without schema checks.
///
/// `.toml` files are converted into the same untyped form as JSON; TOML
/// datetimes become RFC 3339 strings. Everything else is read as JSON.
pub fn load_scene_data<P: AsRef<Path>>(path: P) -> Result<serde_json::Value> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_toml = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("toml"))
        .unwrap_or(false);

    if is_toml {
        let value: toml::Value = toml::from_str(&content)?;
        Ok(toml_to_json(value))
    } else {
        serde_json::from_str(&content).map_err(|e| {
            SceneValError::ParseError(format!("Invalid scene JSON in {}: {}", path.display(), e))
        })
    }
}

/// Best-effort scene id from raw data, for reporting schema failures
pub fn recover_scene_id(raw: &serde_json::Value) -> String {
    raw.get("scene_id")
        .and_then(|v| v.as_str())
        .unwrap_or(UNKNOWN_SCENE_ID)
        .to_string()
}

fn check_scene_shape(scene: &Scene) -> Result<()> {
    if scene.resolution.width == 0 || scene.resolution.height == 0 {
        return Err(SceneValError::InvalidSchema(format!(
            "resolution must be positive, got {}",
            scene.resolution
        )));
    }

    if !scene.frame_rate.is_finite() || scene.frame_rate <= 0.0 {
        return Err(SceneValError::InvalidSchema(format!(
            "frame_rate must be positive, got {}",
            scene.frame_rate
        )));
    }

    let mut seen = HashSet::new();
    for element in &scene.elements {
        if !seen.insert(element.element_id.as_str()) {
            return Err(SceneValError::InvalidSchema(format!(
                "duplicate element_id '{}'",
                element.element_id
            )));
        }
        if let Some(axis) = element.dimensions.invalid_axis() {
            return Err(SceneValError::InvalidSchema(format!(
                "element '{}' has invalid dimensions.{}",
                element.element_id, axis
            )));
        }
    }

    Ok(())
}

fn toml_to_json(value: toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s),
        toml::Value::Integer(i) => serde_json::Value::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        toml::Value::Boolean(b) => serde_json::Value::Bool(b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(items) => {
            serde_json::Value::Array(items.into_iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => serde_json::Value::Object(
            table.into_iter().map(|(k, v)| (k, toml_to_json(v))).collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn valid_raw() -> serde_json::Value {
        json!({
            "scene_id": "scene_001",
            "project_id": "proj",
            "timestamp": "2025-06-20T00:00:00Z",
            "scene_type": "interior",
            "resolution": { "width": 1920, "height": 1080 },
            "frame_rate": 24.0,
            "color_space": "sRGB",
            "elements": [
                {
                    "element_id": "cam1",
                    "element_type": "camera",
                    "position": { "x": 0, "y": 0, "z": 0 },
                    "dimensions": { "width": 1, "height": 1, "depth": 1 }
                }
            ]
        })
    }

    #[test]
    fn test_parse_valid_scene() {
        let scene = parse_scene(&valid_raw()).unwrap();
        assert_eq!(scene.scene_id, "scene_001");
        assert_eq!(scene.elements.len(), 1);
    }

    #[test]
    fn test_missing_field_is_invalid_schema() {
        let mut raw = valid_raw();
        raw.as_object_mut().unwrap().remove("frame_rate");
        let err = parse_scene(&raw).unwrap_err();
        assert!(matches!(err, SceneValError::InvalidSchema(ref msg) if msg.contains("frame_rate")));
    }

    #[test]
    fn test_wrong_type_is_invalid_schema() {
        let mut raw = valid_raw();
        raw["resolution"] = json!("1920x1080");
        assert!(matches!(parse_scene(&raw), Err(SceneValError::InvalidSchema(_))));

        let mut raw = valid_raw();
        raw["elements"][0]["position"] = json!("origin");
        assert!(matches!(parse_scene(&raw), Err(SceneValError::InvalidSchema(_))));
    }

    #[test]
    fn test_shape_invariants() {
        let mut raw = valid_raw();
        raw["resolution"]["width"] = json!(0);
        assert!(matches!(parse_scene(&raw), Err(SceneValError::InvalidSchema(_))));

        let mut raw = valid_raw();
        raw["frame_rate"] = json!(-24.0);
        assert!(matches!(parse_scene(&raw), Err(SceneValError::InvalidSchema(_))));

        let mut raw = valid_raw();
        raw["elements"][0]["dimensions"]["depth"] = json!(-1.0);
        let err = parse_scene(&raw).unwrap_err();
        assert!(err.to_string().contains("dimensions.depth"));

        let mut raw = valid_raw();
        let dup = raw["elements"][0].clone();
        raw["elements"].as_array_mut().unwrap().push(dup);
        let err = parse_scene(&raw).unwrap_err();
        assert!(err.to_string().contains("duplicate element_id 'cam1'"));
    }

    #[test]
    fn test_recover_scene_id() {
        assert_eq!(recover_scene_id(&valid_raw()), "scene_001");
        assert_eq!(recover_scene_id(&json!({ "scene_id": 7 })), UNKNOWN_SCENE_ID);
        assert_eq!(recover_scene_id(&json!([1, 2])), UNKNOWN_SCENE_ID);
    }

    #[test]
    fn test_parse_scene_str_rejects_bad_json() {
        assert!(matches!(parse_scene_str("{ not json"), Err(SceneValError::ParseError(_))));
    }

    #[test]
    fn test_load_toml_scene_file() {
        let dir = std::env::temp_dir().join(format!("sceneval_scene_test_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("scene.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(
            br#"
scene_id = "toml_scene"
project_id = "proj"
timestamp = 2025-06-20T00:00:00Z
scene_type = "exterior"
frame_rate = 25
color_space = "Rec.709"
elements = []

[resolution]
width = 3840
height = 2160
"#,
        )
        .unwrap();

        let raw = load_scene_data(&path).unwrap();
        let scene = parse_scene(&raw).unwrap();
        assert_eq!(scene.scene_id, "toml_scene");
        assert_eq!(scene.resolution.width, 3840);
        assert_eq!(scene.frame_rate, 25.0);

        std::fs::remove_file(&path).ok();
        std::fs::remove_dir(&dir).ok();
    }

    #[test]
    fn test_toml_local_datetime_is_utc() {
        let dir = std::env::temp_dir().join(format!("sceneval_scene_test_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("local_time.toml");
        std::fs::write(
            &path,
            r#"
scene_id = "local_time"
project_id = "proj"
timestamp = 2025-06-20T10:00:00
scene_type = "exterior"
frame_rate = 24
color_space = "sRGB"
elements = []

[resolution]
width = 1920
height = 1080
"#,
        )
        .unwrap();

        let raw = load_scene_data(&path).unwrap();
        assert_eq!(raw["timestamp"], json!("2025-06-20T10:00:00"));
        let scene = parse_scene(&raw).unwrap();
        assert_eq!(scene.timestamp.to_rfc3339(), "2025-06-20T10:00:00+00:00");

        std::fs::remove_dir_all(&dir).ok();
    }
}
