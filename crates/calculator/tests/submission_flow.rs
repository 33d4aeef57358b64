//! End-to-end submission tests.
//!
//! A form session is filled in through raw input events and submitted
//! through a dispatcher, against either the mock scorer or a stub
//! scoring service.

use std::sync::Arc;
use std::time::Duration;

use calculator::{
    CalculatorConfig, FormSession, MockScorer, RemoteScorer, ScoringMode, SubmissionDispatcher,
    SubmitError,
};
use model::{Factor, FactorName, MovieRecord, ScoreResult, ValidationError};
use scoring_client::ScoringClient;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Test Fixtures
// ============================================================================

/// A session filled in the way a user would type it
fn filled_session() -> FormSession {
    let mut session = FormSession::new();
    for (name, raw) in [
        ("title", "The Big Lebowski"),
        ("year", "1998"),
        ("runtime", "117"),
        ("revenue", "46189568"),
        ("budget", "15000000"),
        ("adult", "false"),
        ("genre", "Comedy"),
        ("tagline", "Times like these call for a Big Lebowski."),
        ("description", "A slacker is mistaken for a millionaire."),
    ] {
        session.set_field(name, raw).unwrap();
    }
    session
}

fn mock_dispatcher() -> SubmissionDispatcher {
    SubmissionDispatcher::new(Arc::new(MockScorer::default()))
}

fn remote_dispatcher(server: &MockServer) -> SubmissionDispatcher {
    let config = CalculatorConfig::default()
        .with_mode(ScoringMode::Remote)
        .with_base_url(&server.uri())
        .unwrap();
    SubmissionDispatcher::from_config(&config)
}

fn backend_result(record: &MovieRecord) -> ScoreResult {
    let mut factors = std::collections::BTreeMap::new();
    factors.insert(FactorName::Year, Factor::new(55.0, 35.0, "Late nineties"));
    factors.insert(FactorName::Revenue, Factor::new(80.0, 40.0, "Modest box office"));
    factors.insert(FactorName::Adult, Factor::new(50.0, 25.0, "General audience"));
    ScoreResult {
        probability: 91.3,
        factors,
        movie_details: record.clone(),
    }
}

// ============================================================================
// Validation
// ============================================================================

#[tokio::test]
async fn test_missing_fields_make_no_network_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/calculate"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let dispatcher = remote_dispatcher(&server);

    for field in ["title", "tagline", "description"] {
        let mut session = filled_session();
        session.set_field(field, "  ").unwrap();

        let err = session.submit(&dispatcher).await.unwrap_err();
        assert!(
            matches!(
                err,
                SubmitError::Validation(ValidationError::MissingRequiredField { field: f }) if f == field
            ),
            "unexpected error for {}: {:?}",
            field,
            err
        );
        assert!(session.result().is_none());
    }
    // `expect(0)` is verified when the server drops
}

#[tokio::test]
async fn test_range_errors() {
    let dispatcher = SubmissionDispatcher::new(Arc::new(MockScorer::new(Duration::ZERO)));

    let cases = [
        ("year", "1899", "invalid year"),
        ("year", "2025", "invalid year"),
        ("runtime", "29", "invalid runtime"),
        ("runtime", "301", "invalid runtime"),
        ("revenue", "-1", "negative revenue"),
        ("budget", "-250", "negative budget"),
    ];

    for (field, raw, message) in cases {
        let mut session = filled_session();
        session.set_field(field, raw).unwrap();

        let err = session.submit(&dispatcher).await.unwrap_err();
        assert!(matches!(err, SubmitError::Validation(_)));
        assert!(
            err.to_string().starts_with(message),
            "{}={} gave {:?}",
            field,
            raw,
            err.to_string()
        );
    }
}

// ============================================================================
// Mock Mode
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_mock_mode_result() {
    let dispatcher = mock_dispatcher();
    let mut session = filled_session();
    let start = tokio::time::Instant::now();

    let result = session.submit(&dispatcher).await.unwrap().clone();

    assert!(start.elapsed() >= Duration::from_secs(1));
    assert_eq!(result.probability, 75.5);
    assert_eq!(result.factors.len(), 4);
    for name in [
        FactorName::Runtime,
        FactorName::Genre,
        FactorName::Tagline,
        FactorName::Description,
    ] {
        assert!(result.factors.contains_key(&name), "missing factor {}", name);
    }
    assert_eq!(&result.movie_details, session.record());
    assert_eq!(session.result(), Some(&result));
}

#[tokio::test(start_paused = true)]
async fn test_mock_mode_echoes_trimmed_text() {
    let dispatcher = mock_dispatcher();
    let mut session = filled_session();
    session.set_field("title", "  Barbarella\n").unwrap();

    let result = session.submit(&dispatcher).await.unwrap();
    assert_eq!(result.movie_details.title, "Barbarella");

    // The session keeps what the user typed
    assert_eq!(session.record().title, "  Barbarella\n");
}

// ============================================================================
// Remote Mode
// ============================================================================

#[tokio::test]
async fn test_remote_mode_returns_body_unchanged() {
    let server = MockServer::start().await;
    let session_record = filled_session().record().clone();
    let body = backend_result(&session_record);

    Mock::given(method("POST"))
        .and(path("/calculate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = remote_dispatcher(&server);
    let mut session = filled_session();
    let result = session.submit(&dispatcher).await.unwrap();

    assert_eq!(result, &body);
    assert_eq!(result.movie_details, session_record);
}

#[tokio::test]
async fn test_remote_failure_keeps_form_values() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/calculate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = remote_dispatcher(&server);
    let mut session = filled_session();
    let before = session.record().clone();

    let err = session.submit(&dispatcher).await.unwrap_err();

    assert!(matches!(err, SubmitError::Network(_)));
    assert_eq!(err.to_string(), "failed to calculate cult classic probability");
    assert_eq!(session.record(), &before);
    assert!(session.result().is_none());
    assert!(!dispatcher.is_busy());
}

#[tokio::test]
async fn test_remote_malformed_body_is_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/calculate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "probability": "high" })))
        .mount(&server)
        .await;

    let dispatcher = remote_dispatcher(&server);
    let mut session = filled_session();

    let err = session.submit(&dispatcher).await.unwrap_err();
    assert!(matches!(err, SubmitError::Network(_)));
}

#[tokio::test]
async fn test_failed_resubmission_clears_stale_result() {
    let server = MockServer::start().await;
    let record = filled_session().record().clone();

    Mock::given(method("POST"))
        .and(path("/calculate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(backend_result(&record)))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/calculate"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let dispatcher = SubmissionDispatcher::new(Arc::new(RemoteScorer::new(ScoringClient::new(
        server.uri(),
    ))));
    let mut session = filled_session();

    session.submit(&dispatcher).await.unwrap();
    assert!(session.result().is_some());

    let err = session.submit(&dispatcher).await.unwrap_err();
    assert!(matches!(err, SubmitError::Network(_)));
    assert!(session.result().is_none());

    // The form is still usable after a failure
    session.set_field("runtime", "120").unwrap();
    assert_eq!(session.record().runtime, 120);
}
