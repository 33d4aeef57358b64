//! Errors surfaced by a submission.

use model::ValidationError;
use scoring_client::ScoringClientError;
use thiserror::Error;

/// The scorer could not produce a result.
///
/// The message is generic. The underlying cause is kept as the error source.
#[derive(Error, Debug)]
#[error("failed to calculate cult classic probability")]
pub struct NetworkError {
    #[source]
    source: ScoringClientError,
}

impl NetworkError {
    pub fn new(source: ScoringClientError) -> Self {
        Self { source }
    }

    /// The client error that caused this failure
    pub fn cause(&self) -> &ScoringClientError {
        &self.source
    }
}

/// Why a submission produced no result.
///
/// Every variant ends only the current attempt; the form stays usable.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The record was rejected locally; nothing was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The scorer failed
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// Another submission is still in flight
    #[error("a submission is already in progress")]
    Busy,
}
