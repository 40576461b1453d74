//! Review prompt construction

use sceneval_scene::Scene;

const RESPONSE_FORMAT: &str = r#"Respond with JSON only, in this format:
{
  "errors": [
    {"code": "ERROR_CODE", "message": "Detailed error message", "element_id": "affected_element_id or null", "severity": "low|medium|high|critical", "suggestion": "How to fix it"}
  ],
  "warnings": [
    {"code": "WARNING_CODE", "message": "Detailed warning message", "element_id": "affected_element_id or null", "suggestion": "How to address it"}
  ],
  "improvements": [
    {"description": "Suggestion for improvement", "rationale": "Why this would help"}
  ]
}"#;

/// Build the prompt that asks a model to review `scene`
pub fn build_review_prompt(scene: &Scene) -> String {
    let mut prompt = format!(
        "You are an expert media scene validator. Analyze the following scene \
         description and identify any technical issues, inconsistencies, or \
         potential improvements.\n\n\
         Scene ID: {}\n\
         Project ID: {}\n\
         Scene Type: {}\n\
         Resolution: {}\n\
         Frame Rate: {}\n\
         Color Space: {}\n\n\
         Elements ({}):\n",
        scene.scene_id,
        scene.project_id,
        scene.scene_type,
        scene.resolution,
        scene.frame_rate,
        scene.color_space,
        scene.elements.len()
    );

    for element in &scene.elements {
        let properties = serde_json::to_string(&element.properties).unwrap_or_default();
        let p = element.position;
        let d = element.dimensions;
        prompt.push_str(&format!(
            "- ID: {}\n  Type: {}\n  Position: ({}, {}, {})\n  Dimensions: {}x{}x{}\n  Properties: {}\n",
            element.element_id,
            element.element_type,
            p.x,
            p.y,
            p.z,
            d.width,
            d.height,
            d.depth,
            properties
        ));
    }

    prompt.push('\n');
    prompt.push_str(RESPONSE_FORMAT);
    prompt
}
