//! Scene metrics reported alongside the findings

use sceneval_core::{PerformanceMetrics, Resolution};
use sceneval_scene::Scene;

const REFERENCE_FRAME_RATE: f64 = 24.0;

/// `element_count × (pixels / 1080p pixels) × (fps / 24)`
pub fn complexity_score(scene: &Scene) -> f64 {
    let element_count = scene.elements.len() as f64;
    let resolution_factor =
        scene.resolution.pixel_count() as f64 / Resolution::FULL_HD.pixel_count() as f64;
    let frame_rate_factor = scene.frame_rate / REFERENCE_FRAME_RATE;

    element_count * resolution_factor * frame_rate_factor
}

pub fn scene_metrics(scene: &Scene) -> PerformanceMetrics {
    PerformanceMetrics::new(scene.elements.len(), complexity_score(scene))
}
