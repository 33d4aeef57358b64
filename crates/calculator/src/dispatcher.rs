//! # Submission Dispatcher
//!
//! This module runs one submission from start to finish:
//! 1. Claim the busy flag (reject if another submission holds it)
//! 2. Normalize the record
//! 3. Run the validation rules
//! 4. Hand the record to the configured scorer
//! 5. Release the busy flag, whatever happened

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use tracing::{info, warn};

use model::{MovieRecord, ScoreResult};
use validation::RulePipeline;

use crate::config::CalculatorConfig;
use crate::error::SubmitError;
use crate::scorer::Scorer;

/// Validates records and sends them to a scorer, one at a time.
///
/// Clones share the busy flag, so the one-in-flight limit holds across
/// every handle to the same dispatcher.
#[derive(Clone)]
pub struct SubmissionDispatcher {
    rules: Arc<RulePipeline>,
    scorer: Arc<dyn Scorer>,
    busy: Arc<AtomicBool>,
}

impl SubmissionDispatcher {
    /// Create a dispatcher with the standard validation rules
    pub fn new(scorer: Arc<dyn Scorer>) -> Self {
        Self::with_rules(RulePipeline::standard(), scorer)
    }

    pub fn with_rules(rules: RulePipeline, scorer: Arc<dyn Scorer>) -> Self {
        Self {
            rules: Arc::new(rules),
            scorer,
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a dispatcher using the scorer the configuration selects
    pub fn from_config(config: &CalculatorConfig) -> Self {
        info!("Scoring mode: {}", config.mode);
        Self::new(config.build_scorer())
    }

    /// True while a submission is in flight. Views use this to disable
    /// the submit control.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn scorer_name(&self) -> &str {
        self.scorer.name()
    }

    /// Validate a record and score it.
    ///
    /// The record is normalized first, so the scorer and the echoed
    /// `movie_details` see trimmed text. A record that fails validation is
    /// never passed to the scorer.
    ///
    /// # Returns
    /// * `Ok(ScoreResult)` - The scorer's result
    /// * `Err(SubmitError::Busy)` - Another submission is in flight
    /// * `Err(SubmitError::Validation)` - The first rule the record broke
    /// * `Err(SubmitError::Network)` - The scorer failed
    pub async fn submit(&self, record: &MovieRecord) -> Result<ScoreResult, SubmitError> {
        let Some(_in_flight) = InFlight::claim(&self.busy) else {
            warn!("Rejected submission of \"{}\": already busy", record.title);
            return Err(SubmitError::Busy);
        };

        let start_time = Instant::now();
        let record = record.normalized();

        if let Err(err) = self.rules.validate(&record) {
            warn!("Rejected \"{}\": {}", record.title, err);
            return Err(err.into());
        }

        info!(
            "Submitting \"{}\" to the {} scorer",
            record.title,
            self.scorer.name()
        );
        let result = self.scorer.score(&record).await?;

        info!(
            "Scored \"{}\" at {}% in {:.2?}",
            record.title,
            result.probability,
            start_time.elapsed()
        );
        Ok(result)
    }
}

/// Holds the busy flag for the duration of one submission.
struct InFlight<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlight<'a> {
    fn claim(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
