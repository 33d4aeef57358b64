//! Rule bounding the release year.

use crate::traits::Rule;
use model::{MovieRecord, ValidationError, MAX_YEAR, MIN_YEAR};

/// Keeps the release year inside `[min_year, max_year]`.
pub struct YearRangeRule {
    min_year: i32,
    max_year: i32,
}

impl YearRangeRule {
    /// Create a new YearRangeRule with inclusive bounds
    pub fn new(min_year: i32, max_year: i32) -> Self {
        Self { min_year, max_year }
    }
}

impl Default for YearRangeRule {
    fn default() -> Self {
        Self::new(MIN_YEAR, MAX_YEAR)
    }
}

impl Rule for YearRangeRule {
    fn name(&self) -> &str {
        "YearRangeRule"
    }

    fn check(&self, record: &MovieRecord) -> Result<(), ValidationError> {
        if (self.min_year..=self.max_year).contains(&record.year) {
            Ok(())
        } else {
            Err(ValidationError::InvalidYear {
                year: record.year,
                min: self.min_year,
                max: self.max_year,
            })
        }
    }
}
