//! Submission-time validation for movie records.
//!
//! This crate provides:
//! - Rule trait and implementations for the individual checks
//! - RulePipeline for running them in a fixed order
//!
//! ## Example Usage
//! ```ignore
//! use validation::RulePipeline;
//!
//! let pipeline = RulePipeline::standard();
//! let record = session.record().normalized();
//! pipeline.validate(&record)?;
//! ```

pub mod rule_pipeline;
pub mod rules;
pub mod traits;

// Re-export main types
pub use rule_pipeline::RulePipeline;
pub use traits::Rule;
