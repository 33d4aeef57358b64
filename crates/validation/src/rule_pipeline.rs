//! The RulePipeline runs validation rules in order.
//!
//! Rules are chained with the builder pattern and evaluated one after the
//! other; the first failure stops the pipeline.

use crate::rules::{NonNegativeRule, RequiredTextRule, RuntimeRangeRule, YearRangeRule};
use crate::traits::Rule;
use model::{MovieRecord, ValidationError};

/// Ordered list of validation rules.
///
/// ## Usage
/// ```ignore
/// let pipeline = RulePipeline::new()
///     .add_rule(RequiredTextRule)
///     .add_rule(YearRangeRule::default());
///
/// pipeline.validate(&record.normalized())?;
/// ```
pub struct RulePipeline {
    rules: Vec<Box<dyn Rule>>,
}

impl RulePipeline {
    /// Create a new empty RulePipeline.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The rules every submission goes through, in the order their errors
    /// are reported: required text, year, runtime, revenue, budget.
    pub fn standard() -> Self {
        Self::new()
            .add_rule(RequiredTextRule)
            .add_rule(YearRangeRule::default())
            .add_rule(RuntimeRangeRule::default())
            .add_rule(NonNegativeRule::revenue())
            .add_rule(NonNegativeRule::budget())
    }

    /// Add a rule to the end of the pipeline (builder pattern).
    pub fn add_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Number of rules in the pipeline
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule in order against the record.
    ///
    /// # Returns
    /// * `Ok(())` - All rules passed
    /// * `Err` - The error from the first rule that failed
    pub fn validate(&self, record: &MovieRecord) -> Result<(), ValidationError> {
        for rule in &self.rules {
            tracing::debug!("Applying rule: {}", rule.name());
            if let Err(err) = rule.check(record) {
                tracing::debug!("Rule {} rejected record: {}", rule.name(), err);
                return Err(err);
            }
        }
        Ok(())
    }
}

impl Default for RulePipeline {
    fn default() -> Self {
        Self::standard()
    }
}
