//! Scoring client for the external cult classic backend.
//!
//! This crate provides a Rust client for the scoring service's JSON API.
//! It handles:
//! - Serializing a `MovieRecord` into the `POST /calculate` body
//! - Turning non-2xx statuses and unreadable bodies into typed errors
//! - Checking that a decoded `ScoreResult` is well formed
//! - The `GET /` welcome probe

use model::{MovieRecord, ScoreResult};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error, info};

/// Errors that can occur when talking to the scoring service
#[derive(Error, Debug)]
pub enum ScoringClientError {
    /// The HTTP exchange itself failed (connect, DNS, TLS, reset, ...)
    #[error("Request to scoring service failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-2xx status
    #[error("Scoring service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The body could not be decoded or failed the shape check
    #[error("Invalid response from scoring service: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Deserialize)]
struct WelcomeResponse {
    message: String,
}

/// Client for the scoring service.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ScoringClient {
    client: reqwest::Client,
    base_url: String,
}

impl ScoringClient {
    /// Create a client for the service at `base_url`
    /// (e.g. "http://localhost:8000"). A trailing slash is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        info!("Scoring service at {}", base_url);
        Self { client, base_url }
    }

    /// Get the address of the scoring service this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Score a movie.
    ///
    /// Sends the record as the JSON body of `POST /calculate` and decodes
    /// the reply as a `ScoreResult`. The record is sent as given; callers
    /// normalize and validate it first.
    ///
    /// Error handling:
    /// - transport failures become `Request`
    /// - any non-2xx status becomes `Status`, with no per-code handling
    /// - a body that is not a well formed `ScoreResult` becomes `InvalidResponse`
    pub async fn calculate(&self, record: &MovieRecord) -> Result<ScoreResult, ScoringClientError> {
        let url = format!("{}/calculate", self.base_url);
        debug!("Scoring \"{}\" via {}", record.title, url);

        let response = self.client.post(&url).json(record).send().await.map_err(|e| {
            error!("Request to {} failed: {}", url, e);
            ScoringClientError::Request(e)
        })?;

        let result: ScoreResult = Self::parse_response(response).await?;

        if let Some(problem) = result.shape_problem() {
            error!("Malformed score for \"{}\": {}", record.title, problem);
            return Err(ScoringClientError::InvalidResponse(problem));
        }

        debug!(
            "Scored \"{}\": {}% from {} factors",
            record.title,
            result.probability,
            result.factors.len()
        );
        Ok(result)
    }

    /// Fetch the service's welcome message from `GET /`.
    pub async fn welcome(&self) -> Result<String, ScoringClientError> {
        let url = format!("{}/", self.base_url);
        let response = self.client.get(&url).send().await?;
        let welcome: WelcomeResponse = Self::parse_response(response).await?;
        Ok(welcome.message)
    }

    // ---- private helpers ----

    /// Reject non-2xx responses, then decode the body as JSON.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ScoringClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            error!("Scoring service returned {}: {}", status, body);
            return Err(ScoringClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            error!("Could not decode scoring service response: {}", e);
            ScoringClientError::InvalidResponse(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{Factor, FactorName, Genre};
    use serde_json::json;
    use std::collections::BTreeMap;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_record() -> MovieRecord {
        MovieRecord {
            title: "Repo Man".to_string(),
            year: 1984,
            runtime: 92,
            revenue: 3_759_525,
            budget: 1_500_000,
            adult: false,
            genre: Genre::ScienceFiction,
            tagline: "It's 4 a.m., do you know where your car is?".to_string(),
            description: "A punk becomes a repossession agent.".to_string(),
        }
    }

    fn test_result(record: &MovieRecord) -> ScoreResult {
        let mut factors = BTreeMap::new();
        factors.insert(FactorName::Year, Factor::new(64.0, 40.0, "Eighties release"));
        factors.insert(FactorName::Budget, Factor::new(88.0, 60.0, "Shoestring budget"));
        ScoreResult {
            probability: 81.25,
            factors,
            movie_details: record.clone(),
        }
    }

    #[test]
    fn test_trailing_slash_is_dropped() {
        let client = ScoringClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[tokio::test]
    async fn test_calculate_posts_record_and_returns_body() {
        let server = MockServer::start().await;
        let record = test_record();
        let expected = test_result(&record);

        Mock::given(method("POST"))
            .and(path("/calculate"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "title": "Repo Man",
                "year": 1984,
                "runtime": 92,
                "revenue": 3_759_525,
                "budget": 1_500_000,
                "adult": false,
                "genre": "Science Fiction",
                "tagline": "It's 4 a.m., do you know where your car is?",
                "description": "A punk becomes a repossession agent."
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(&expected))
            .expect(1)
            .mount(&server)
            .await;

        let client = ScoringClient::new(server.uri());
        let result = client.calculate(&record).await.unwrap();

        assert_eq!(result, expected);
        assert_eq!(result.movie_details, record);
    }

    #[tokio::test]
    async fn test_calculate_server_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/calculate"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = ScoringClient::new(server.uri());
        let err = client.calculate(&test_record()).await.unwrap_err();

        match err {
            ScoringClientError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected Status, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_calculate_empty_object_is_invalid() {
        // The placeholder backend answers `{}`
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/calculate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = ScoringClient::new(server.uri());
        let err = client.calculate(&test_record()).await.unwrap_err();
        assert!(matches!(err, ScoringClientError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_calculate_out_of_range_probability_is_invalid() {
        let server = MockServer::start().await;
        let record = test_record();
        let mut body = test_result(&record);
        body.probability = 140.0;

        Mock::given(method("POST"))
            .and(path("/calculate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let client = ScoringClient::new(server.uri());
        let err = client.calculate(&record).await.unwrap_err();
        assert!(matches!(err, ScoringClientError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_calculate_unreachable_service() {
        // Bind a port, then free it so nothing is listening there
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ScoringClient::new(format!("http://{}", addr));
        let err = client.calculate(&test_record()).await.unwrap_err();
        assert!(matches!(err, ScoringClientError::Request(_)));
    }

    #[tokio::test]
    async fn test_welcome() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Welcome to the Cult Classic Calculator API"
            })))
            .mount(&server)
            .await;

        let client = ScoringClient::new(server.uri());
        let message = client.welcome().await.unwrap();
        assert_eq!(message, "Welcome to the Cult Classic Calculator API");
    }
}
