//! Rule bounding the runtime.

use crate::traits::Rule;
use model::{MovieRecord, ValidationError, MAX_RUNTIME, MIN_RUNTIME};

/// Keeps the runtime, in minutes, inside `[min_minutes, max_minutes]`.
pub struct RuntimeRangeRule {
    min_minutes: i32,
    max_minutes: i32,
}

impl RuntimeRangeRule {
    pub fn new(min_minutes: i32, max_minutes: i32) -> Self {
        Self {
            min_minutes,
            max_minutes,
        }
    }
}

impl Default for RuntimeRangeRule {
    fn default() -> Self {
        Self::new(MIN_RUNTIME, MAX_RUNTIME)
    }
}

impl Rule for RuntimeRangeRule {
    fn name(&self) -> &str {
        "RuntimeRangeRule"
    }

    fn check(&self, record: &MovieRecord) -> Result<(), ValidationError> {
        if (self.min_minutes..=self.max_minutes).contains(&record.runtime) {
            Ok(())
        } else {
            Err(ValidationError::InvalidRuntime {
                runtime: record.runtime,
                min: self.min_minutes,
                max: self.max_minutes,
            })
        }
    }
}
