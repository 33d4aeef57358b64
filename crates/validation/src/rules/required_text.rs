//! Rule requiring the free-text fields to be filled in.

use crate::traits::Rule;
use model::{MovieRecord, ValidationError};

/// Rejects records whose title, tagline or description is blank.
///
/// Whitespace-only values count as blank. Fields are checked in form
/// order, so the error names the first one that is missing.
pub struct RequiredTextRule;

impl Rule for RequiredTextRule {
    fn name(&self) -> &str {
        "RequiredTextRule"
    }

    fn check(&self, record: &MovieRecord) -> Result<(), ValidationError> {
        let fields = [
            ("title", &record.title),
            ("tagline", &record.tagline),
            ("description", &record.description),
        ];

        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(ValidationError::MissingRequiredField { field: *field }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_record() -> MovieRecord {
        MovieRecord {
            title: "Donnie Darko".to_string(),
            tagline: "Dark. Darker. Darko.".to_string(),
            description: "A troubled teenager is plagued by visions.".to_string(),
            ..MovieRecord::new()
        }
    }

    #[test]
    fn test_filled_record_passes() {
        assert!(RequiredTextRule.check(&filled_record()).is_ok());
    }

    #[test]
    fn test_blank_fields_are_missing() {
        let mut record = filled_record();
        record.tagline = "   \t".to_string();
        assert_eq!(
            RequiredTextRule.check(&record),
            Err(ValidationError::MissingRequiredField { field: "tagline" })
        );
    }

    #[test]
    fn test_reports_first_missing_field() {
        let mut record = filled_record();
        record.title.clear();
        record.description.clear();
        assert_eq!(
            RequiredTextRule.check(&record),
            Err(ValidationError::MissingRequiredField { field: "title" })
        );
    }
}
