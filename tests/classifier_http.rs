//! Tests for the Safe Browsing client against a mock reputation service.
//!
//! These tests verify:
//! - The request shape (method, path, key parameter, JSON body)
//! - Response mapping to verdicts, including deduplication
//! - Each failure kind: status, malformed body, timeout, network

mod helpers;

use std::time::Duration;

use helpers::{client_for, client_for_closed_port, LOOKUP_PATH, TEST_API_KEY};
use phishing_checker::{ErrorType, ReputationService, ScanError, ThreatType, Verdict};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_lookup_request_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LOOKUP_PATH))
        .and(query_param("key", TEST_API_KEY))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "client": { "clientId": "phishing-checker" },
            "threatInfo": {
                "threatTypes": [
                    "MALWARE",
                    "SOCIAL_ENGINEERING",
                    "UNWANTED_SOFTWARE",
                    "POTENTIALLY_HARMFUL_APPLICATION"
                ],
                "platformTypes": ["ANY_PLATFORM"],
                "threatEntryTypes": ["URL"],
                "threatEntries": [{ "url": "https://example.com" }]
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 5);
    let verdict = client
        .classify("https://example.com", TEST_API_KEY)
        .await
        .expect("lookup should succeed");

    assert_eq!(verdict, Verdict::Safe);
}

#[tokio::test]
async fn test_empty_matches_array_is_safe() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "matches": [] })))
        .mount(&server)
        .await;

    let verdict = client_for(&server, 5)
        .classify("https://example.com", TEST_API_KEY)
        .await
        .expect("lookup should succeed");

    assert_eq!(verdict, Verdict::Safe);
}

#[tokio::test]
async fn test_null_matches_is_safe() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"matches":null}"#))
        .mount(&server)
        .await;

    let verdict = client_for(&server, 5)
        .classify("https://example.com", TEST_API_KEY)
        .await
        .expect("null matches should be accepted");

    assert_eq!(verdict, Verdict::Safe);
}

#[tokio::test]
async fn test_duplicate_matches_collapse() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "matches": [
                { "threatType": "MALWARE", "platformType": "WINDOWS" },
                { "threatType": "MALWARE", "platformType": "LINUX" },
                { "threatType": "SOCIAL_ENGINEERING", "platformType": "ANY_PLATFORM" }
            ]
        })))
        .mount(&server)
        .await;

    let verdict = client_for(&server, 5)
        .classify("https://malicious-test.com", TEST_API_KEY)
        .await
        .expect("lookup should succeed");

    match verdict {
        Verdict::Threat { threat_types } => {
            let types: Vec<_> = threat_types.into_iter().collect();
            assert_eq!(
                types,
                vec![ThreatType::Malware, ThreatType::SocialEngineering]
            );
        }
        other => panic!("expected Threat, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unknown_threat_tag_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "matches": [{ "threatType": "THREAT_TYPE_UNSPECIFIED" }]
        })))
        .mount(&server)
        .await;

    let verdict = client_for(&server, 5)
        .classify("https://odd.test", TEST_API_KEY)
        .await
        .expect("lookup should succeed");

    match verdict {
        Verdict::Threat { threat_types } => {
            let threat = threat_types.into_iter().next().expect("one threat");
            assert_eq!(threat.label(), "THREAT_TYPE_UNSPECIFIED");
        }
        other => panic!("expected Threat, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_200_status_reports_snippet() {
    let server = MockServer::start().await;
    let long_body = format!("API key not valid. {}", "x".repeat(500));
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string(long_body))
        .mount(&server)
        .await;

    let err = client_for(&server, 5)
        .classify("https://example.com", TEST_API_KEY)
        .await
        .expect_err("403 should fail");

    assert_eq!(err.error_type(), ErrorType::ApiStatusError);
    match &err {
        ScanError::ApiStatus { status, snippet } => {
            assert_eq!(*status, 403);
            assert!(snippet.starts_with("API key not valid."));
            assert_eq!(snippet.chars().count(), 200);
        }
        other => panic!("expected ApiStatus, got {:?}", other),
    }
    assert!(err.to_string().starts_with("API returned status 403: "));
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server, 5)
        .classify("https://example.com", TEST_API_KEY)
        .await
        .expect_err("garbage body should fail");

    assert_eq!(err.error_type(), ErrorType::ApiResponseError);
    assert_eq!(
        err.to_string(),
        "Received an invalid response from the API."
    );
}

#[tokio::test]
async fn test_slow_service_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{}")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let err = client_for(&server, 1)
        .classify("https://example.com", TEST_API_KEY)
        .await
        .expect_err("delayed response should time out");

    assert_eq!(err.error_type(), ErrorType::TimeoutError);
    assert!(err.to_string().contains("timed out"));
}

#[tokio::test]
async fn test_unreachable_service_is_network_error() {
    let err = client_for_closed_port()
        .classify("https://example.com", TEST_API_KEY)
        .await
        .expect_err("closed port should fail");

    assert_eq!(err.error_type(), ErrorType::NetworkError);
    assert_eq!(
        err.to_string(),
        "Network error - check your internet connection."
    );
    // The request URL carries the key; it must not leak through the error
    assert!(!format!("{:?}", err).contains(TEST_API_KEY));
}
