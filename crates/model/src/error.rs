//! Error types for the model crate.
//!
//! Two families live here:
//! - `FormError`: a raw input event could not be turned into a field update
//! - `ValidationError`: a complete record was rejected at submission time

use thiserror::Error;

/// Errors raised while applying raw input to a form.
///
/// None of these modify the record; the field keeps its previous value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The input event names a field the record does not have
    #[error("unknown field: {name}")]
    UnknownField { name: String },

    /// A numeric field received text that is not an integer
    #[error("invalid number for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// The genre is not one of the options the form offers
    #[error("unknown genre: {value:?}")]
    UnknownGenre { value: String },

    /// A yes/no field received something other than a flag
    #[error("invalid flag for {field}: {value:?}")]
    InvalidFlag { field: &'static str, value: String },
}

/// Reasons a record is rejected before it reaches a scorer.
///
/// The messages start with the short phrase shown to the user, followed by
/// the offending value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("invalid year: {year} (expected {min}-{max})")]
    InvalidYear { year: i32, min: i32, max: i32 },

    #[error("invalid runtime: {runtime} minutes (expected {min}-{max})")]
    InvalidRuntime { runtime: i32, min: i32, max: i32 },

    #[error("negative revenue: {revenue}")]
    NegativeRevenue { revenue: i64 },

    #[error("negative budget: {budget}")]
    NegativeBudget { budget: i64 },
}

/// Convenience type alias for form updates
pub type Result<T> = std::result::Result<T, FormError>;
