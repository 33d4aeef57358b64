//! Scoring strategies.
//!
//! A dispatcher holds exactly one `Scorer`, picked from configuration:
//! - `MockScorer` fabricates a fixed result for demonstrations
//! - `RemoteScorer` asks the external scoring service

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error};

use model::{Factor, FactorName, MovieRecord, ScoreResult};
use scoring_client::ScoringClient;

use crate::error::NetworkError;

/// Probability every mock result reports
pub const MOCK_PROBABILITY: f64 = 75.5;

/// How long the mock scorer pretends to work
pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_secs(1);

/// Produces a score for a record that has already been validated.
#[async_trait]
pub trait Scorer: Send + Sync {
    /// Returns the name of this scorer (for logging/debugging)
    fn name(&self) -> &str;

    /// Score a normalized, validated record.
    async fn score(&self, record: &MovieRecord) -> Result<ScoreResult, NetworkError>;
}

// ============================================================================
// Mock
// ============================================================================

/// Scorer that waits for a fixed delay and returns a canned result.
#[derive(Debug, Clone)]
pub struct MockScorer {
    delay: Duration,
}

impl MockScorer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockScorer {
    fn default() -> Self {
        Self::new(DEFAULT_MOCK_DELAY)
    }
}

#[async_trait]
impl Scorer for MockScorer {
    fn name(&self) -> &str {
        "mock"
    }

    async fn score(&self, record: &MovieRecord) -> Result<ScoreResult, NetworkError> {
        debug!("Mock scoring \"{}\" after {:?}", record.title, self.delay);
        tokio::time::sleep(self.delay).await;
        Ok(mock_result(record))
    }
}

/// The canned result: 75.5% from runtime, genre, tagline and description.
pub fn mock_result(record: &MovieRecord) -> ScoreResult {
    let mut factors = BTreeMap::new();
    factors.insert(
        FactorName::Runtime,
        Factor::new(70.0, 20.0, "Good runtime for cult potential"),
    );
    factors.insert(
        FactorName::Genre,
        Factor::new(90.0, 25.0, "High cult potential genre"),
    );
    factors.insert(
        FactorName::Tagline,
        Factor::new(85.0, 25.0, "Strong, memorable tagline"),
    );
    factors.insert(
        FactorName::Description,
        Factor::new(75.0, 30.0, "Interesting description"),
    );

    ScoreResult {
        probability: MOCK_PROBABILITY,
        factors,
        movie_details: record.clone(),
    }
}

// ============================================================================
// Remote
// ============================================================================

/// Scorer backed by the external scoring service.
#[derive(Debug, Clone)]
pub struct RemoteScorer {
    client: ScoringClient,
}

impl RemoteScorer {
    pub fn new(client: ScoringClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Scorer for RemoteScorer {
    fn name(&self) -> &str {
        "remote"
    }

    async fn score(&self, record: &MovieRecord) -> Result<ScoreResult, NetworkError> {
        self.client.calculate(record).await.map_err(|e| {
            error!(
                "Scoring service at {} failed for \"{}\": {}",
                self.client.base_url(),
                record.title,
                e
            );
            NetworkError::new(e)
        })
    }
}
