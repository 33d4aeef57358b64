//! # Model Crate
//!
//! Domain types shared by every part of the cult classic calculator.
//!
//! ## Main Components
//!
//! - **types**: `MovieRecord`, `Genre`, `ScoreResult`, `Factor`
//! - **form**: typed `FieldUpdate`s built from raw input events
//! - **parser**: text to value conversions used by the form
//! - **error**: `FormError` and `ValidationError`
//!
//! ## Example Usage
//!
//! ```ignore
//! use model::{FieldUpdate, MovieRecord};
//!
//! let mut record = MovieRecord::new();
//! FieldUpdate::parse("title", "Repo Man")?.apply_to(&mut record);
//! FieldUpdate::parse("runtime", "92")?.apply_to(&mut record);
//! ```

pub mod error;
pub mod form;
pub mod parser;
pub mod types;

pub use error::{FormError, ValidationError};
pub use form::{Field, FieldUpdate};
pub use types::{
    // Field domains
    DEFAULT_RUNTIME,
    MAX_RUNTIME,
    MAX_YEAR,
    MIN_RUNTIME,
    MIN_YEAR,
    // Core types
    Factor,
    FactorName,
    Genre,
    MovieRecord,
    ScoreResult,
};
