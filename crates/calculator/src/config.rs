//! Calculator configuration.
//!
//! Settings come from `CULT_CALC_*` environment variables, with a `.env`
//! file read first when one exists. Command line flags may override them.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use scoring_client::ScoringClient;

use crate::scorer::{DEFAULT_MOCK_DELAY, MockScorer, RemoteScorer, Scorer};

/// Where scores come from. Fixed for the lifetime of a dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringMode {
    /// Canned result after an artificial delay
    Mock,
    /// `POST /calculate` against the scoring service
    Remote,
}

impl FromStr for ScoringMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mock" | "demo" => Ok(Self::Mock),
            "remote" | "http" => Ok(Self::Remote),
            _ => Err(ConfigError::InvalidMode {
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringMode::Mock => f.write_str("mock"),
            ScoringMode::Remote => f.write_str("remote"),
        }
    }
}

/// Top-level configuration for the calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorConfig {
    pub mode: ScoringMode,
    pub base_url: String,
    pub mock_delay: Duration,
}

impl CalculatorConfig {
    pub const MODE_VAR: &'static str = "CULT_CALC_MODE";
    pub const BASE_URL_VAR: &'static str = "CULT_CALC_BASE_URL";
    pub const MOCK_DELAY_VAR: &'static str = "CULT_CALC_MOCK_DELAY_MS";

    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key/value source. Missing keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let mode = match lookup(Self::MODE_VAR) {
            Some(value) => value.parse()?,
            None => defaults.mode,
        };

        let base_url = match lookup(Self::BASE_URL_VAR) {
            Some(value) => check_base_url(&value)?,
            None => defaults.base_url,
        };

        let mock_delay = match lookup(Self::MOCK_DELAY_VAR) {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidDelay { value })?,
            None => defaults.mock_delay,
        };

        Ok(Self {
            mode,
            base_url,
            mock_delay,
        })
    }

    /// Replace the base URL, e.g. from a command line flag.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.base_url = check_base_url(base_url)?;
        Ok(self)
    }

    pub fn with_mode(mut self, mode: ScoringMode) -> Self {
        self.mode = mode;
        self
    }

    /// Build the scorer this configuration selects.
    pub fn build_scorer(&self) -> Arc<dyn Scorer> {
        match self.mode {
            ScoringMode::Mock => Arc::new(MockScorer::new(self.mock_delay)),
            ScoringMode::Remote => Arc::new(RemoteScorer::new(ScoringClient::new(
                self.base_url.clone(),
            ))),
        }
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            mode: ScoringMode::Mock,
            base_url: "http://localhost:8000".to_string(),
            mock_delay: DEFAULT_MOCK_DELAY,
        }
    }
}

/// Base URLs must parse as absolute http(s) URLs with a host.
fn check_base_url(value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    let invalid = || ConfigError::InvalidBaseUrl {
        value: value.to_string(),
    };

    let url = Url::parse(trimmed).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
        return Err(invalid());
    }
    Ok(trimmed.to_string())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid scoring mode {value:?}, expected \"mock\" or \"remote\"")]
    InvalidMode { value: String },
    #[error("invalid base URL {value:?}, expected http:// or https://")]
    InvalidBaseUrl { value: String },
    #[error("invalid mock delay {value:?}, expected milliseconds")]
    InvalidDelay { value: String },
}
