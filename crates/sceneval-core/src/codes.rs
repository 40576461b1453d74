//! Stable finding codes shared across crates

pub const INVALID_SCHEMA: &str = "INVALID_SCHEMA";
pub const INVALID_RESOLUTION: &str = "INVALID_RESOLUTION";
pub const INVALID_COLOR_SPACE: &str = "INVALID_COLOR_SPACE";
pub const NON_STANDARD_FRAME_RATE: &str = "NON_STANDARD_FRAME_RATE";
pub const UNKNOWN_ELEMENT_TYPE: &str = "UNKNOWN_ELEMENT_TYPE";
pub const MISSING_REQUIRED_PROPERTY: &str = "MISSING_REQUIRED_PROPERTY";
pub const PROPERTY_OUT_OF_RANGE: &str = "PROPERTY_OUT_OF_RANGE";
pub const PROPERTY_TYPE_MISMATCH: &str = "PROPERTY_TYPE_MISMATCH";

/// Emitted in place of any findings when the secondary reviewer fails
pub const GEMINI_VALIDATION_FAILED: &str = "GEMINI_VALIDATION_FAILED";
pub const IMPROVEMENT_SUGGESTION: &str = "IMPROVEMENT_SUGGESTION";
pub const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";
pub const UNKNOWN_WARNING: &str = "UNKNOWN_WARNING";
