//! Calculator crate for the cult classic calculator.
//!
//! This crate ties the form, the validation rules and the scorers together:
//! - `FormSession` owns the record being edited and the latest result
//! - `SubmissionDispatcher` validates and scores one submission at a time
//! - `Scorer` is the strategy seam, with mock and remote implementations
//! - `CalculatorConfig` picks the strategy from the environment

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod scorer;
pub mod session;

pub use config::{CalculatorConfig, ConfigError, ScoringMode};
pub use dispatcher::SubmissionDispatcher;
pub use error::{NetworkError, SubmitError};
pub use scorer::{MockScorer, RemoteScorer, Scorer};
pub use session::FormSession;
