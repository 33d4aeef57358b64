//! Rule rejecting negative money amounts.

use crate::traits::Rule;
use model::{MovieRecord, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Amount {
    Revenue,
    Budget,
}

/// Rejects a negative revenue or budget.
///
/// One instance guards one field; use `revenue()` and `budget()`.
pub struct NonNegativeRule {
    amount: Amount,
}

impl NonNegativeRule {
    pub fn revenue() -> Self {
        Self {
            amount: Amount::Revenue,
        }
    }

    pub fn budget() -> Self {
        Self {
            amount: Amount::Budget,
        }
    }
}

impl Rule for NonNegativeRule {
    fn name(&self) -> &str {
        match self.amount {
            Amount::Revenue => "NonNegativeRule(revenue)",
            Amount::Budget => "NonNegativeRule(budget)",
        }
    }

    fn check(&self, record: &MovieRecord) -> Result<(), ValidationError> {
        match self.amount {
            Amount::Revenue if record.revenue < 0 => Err(ValidationError::NegativeRevenue {
                revenue: record.revenue,
            }),
            Amount::Budget if record.budget < 0 => Err(ValidationError::NegativeBudget {
                budget: record.budget,
            }),
            _ => Ok(()),
        }
    }
}
