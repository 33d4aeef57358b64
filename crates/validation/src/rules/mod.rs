//! Rule implementations for submission validation.
//!
//! This module contains the concrete rules that can be composed into a
//! RulePipeline.

pub mod non_negative;
pub mod required_text;
pub mod runtime_range;
pub mod year_range;

// Re-export for convenience
pub use non_negative::NonNegativeRule;
pub use required_text::RequiredTextRule;
pub use runtime_range::RuntimeRangeRule;
pub use year_range::YearRangeRule;
