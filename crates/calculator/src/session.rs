//! Form session: the record being edited and the latest result.

use tracing::debug;

use model::{FieldUpdate, FormError, MovieRecord, ScoreResult};

use crate::dispatcher::SubmissionDispatcher;
use crate::error::SubmitError;

/// One user's form.
///
/// The session owns its record and result outright; views read them
/// through `record()` and `result()` and change them only through
/// `set_field`, `apply` and `submit`.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    record: MovieRecord,
    result: Option<ScoreResult>,
}

impl FormSession {
    /// A freshly mounted form with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// A form prefilled with an existing record
    pub fn with_record(record: MovieRecord) -> Self {
        Self {
            record,
            result: None,
        }
    }

    /// Current record snapshot
    pub fn record(&self) -> &MovieRecord {
        &self.record
    }

    /// Result of the last successful submission, if it is still current
    pub fn result(&self) -> Option<&ScoreResult> {
        self.result.as_ref()
    }

    /// Apply a raw input event. On error the record is unchanged.
    pub fn set_field(&mut self, name: &str, raw: &str) -> Result<(), FormError> {
        let update = FieldUpdate::parse(name, raw)?;
        self.apply(update);
        Ok(())
    }

    /// Apply an already-typed update
    pub fn apply(&mut self, update: FieldUpdate) {
        debug!("Updating field {}", update.field());
        update.apply_to(&mut self.record);
    }

    /// Submit the current record.
    ///
    /// Once the dispatcher accepts the submission the previous result is
    /// dropped; it is replaced only if the new submission succeeds. The
    /// record itself is never modified, so a failed attempt can be fixed
    /// and resubmitted.
    pub async fn submit(
        &mut self,
        dispatcher: &SubmissionDispatcher,
    ) -> Result<&ScoreResult, SubmitError> {
        match dispatcher.submit(&self.record).await {
            Ok(result) => Ok(&*self.result.insert(result)),
            Err(SubmitError::Busy) => Err(SubmitError::Busy),
            Err(err) => {
                self.result = None;
                Err(err)
            }
        }
    }

    /// Start over with a blank form
    pub fn reset(&mut self) {
        self.record = MovieRecord::new();
        self.result = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::MockScorer;
    use model::Genre;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_new_session_is_blank() {
        let session = FormSession::new();
        assert_eq!(session.record(), &MovieRecord::new());
        assert!(session.result().is_none());
    }

    #[test]
    fn test_set_field() {
        let mut session = FormSession::new();
        session.set_field("title", "Heathers").unwrap();
        session.set_field("genre", "Comedy").unwrap();
        session.set_field("year", "1989").unwrap();

        assert_eq!(session.record().title, "Heathers");
        assert_eq!(session.record().genre, Genre::Comedy);
        assert_eq!(session.record().year, 1989);
    }

    #[test]
    fn test_bad_input_leaves_record_unchanged() {
        let mut session = FormSession::new();
        session.set_field("runtime", "103").unwrap();
        let before = session.record().clone();

        let err = session.set_field("runtime", "one hour").unwrap_err();
        assert!(matches!(err, FormError::InvalidNumber { field: "runtime", .. }));
        assert!(session.set_field("genre", "Opera").is_err());
        assert!(session.set_field("rating", "5").is_err());

        assert_eq!(session.record(), &before);
    }

    #[tokio::test]
    async fn test_prefilled_session_submits_its_record() {
        let record = MovieRecord {
            title: "Donnie Darko".to_string(),
            year: 2001,
            runtime: 113,
            genre: Genre::ScienceFiction,
            tagline: "Dark. Darker. Darko.".to_string(),
            description: "A troubled teenager is plagued by visions.".to_string(),
            ..MovieRecord::new()
        };
        let mut session = FormSession::with_record(record.clone());
        assert_eq!(session.record(), &record);
        assert!(session.result().is_none());

        let dispatcher = SubmissionDispatcher::new(Arc::new(MockScorer::new(Duration::ZERO)));
        let result = session.submit(&dispatcher).await.unwrap();
        assert_eq!(result.movie_details, record);
        assert!(session.result().is_some());
    }

    #[test]
    fn test_reset() {
        let mut session = FormSession::new();
        session.set_field("title", "Brazil").unwrap();
        session.reset();
        assert!(session.record().title.is_empty());
    }
}
