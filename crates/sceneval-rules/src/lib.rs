//! Sceneval Rules - Rule configuration and evaluation
//!
//! This crate provides the configurable rule set (minimum resolution, allowed
//! color spaces, per-element-type requirements) and the evaluator that checks
//! a scene against it.

mod evaluator;
mod registry;
mod types;

pub use evaluator::{RuleEvaluator, STANDARD_FRAME_RATES};
pub use types::{ElementRule, RangeConstraint, RuleConfig};
