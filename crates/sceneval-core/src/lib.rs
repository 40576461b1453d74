//! Sceneval Core - Foundational types for scene validation
//!
//! This crate provides the core types that all other sceneval crates depend on:
//! - `PropertyValue` - Tagged values for open-ended element properties
//! - `Position`, `Dimensions`, `Resolution` - Spatial types
//! - `ValidationError`, `ValidationWarning`, `Findings` - Validation findings
//! - `ValidationReport`, `ValidationId` - The result of one validation pass
//! - `codes` - Stable finding codes
//! - Error types and Result alias

pub mod codes;
mod error;
mod finding;
mod id;
mod report;
mod types;
mod value;

pub use error::{Result, SceneValError};
pub use finding::{Findings, Severity, ValidationError, ValidationWarning};
pub use id::ValidationId;
pub use report::{PerformanceMetrics, ValidationReport};
pub use types::{Dimensions, Position, Resolution};
pub use value::PropertyValue;
