//! Core trait for submission-time validation.
//!
//! This module defines the Rule trait that lets independent checks be
//! composed into a `RulePipeline`.

use model::{MovieRecord, ValidationError};

/// A single check a record must pass before it is scored.
///
/// ## Design Note
/// - `Send + Sync` so a pipeline can be shared by a dispatcher across tasks
/// - Rules only borrow the record; normalization happens before they run
pub trait Rule: Send + Sync {
    /// Returns the name of this rule (for logging/debugging)
    fn name(&self) -> &str;

    /// Check the record.
    ///
    /// # Returns
    /// * `Ok(())` - The record satisfies this rule
    /// * `Err(ValidationError)` - Why it does not
    fn check(&self, record: &MovieRecord) -> Result<(), ValidationError>;
}
