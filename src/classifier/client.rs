//! Reputation service client.

use log::debug;
use reqwest::header::CONTENT_TYPE;

use super::verdict::Verdict;
use super::wire::{FindThreatMatchesRequest, FindThreatMatchesResponse};
use crate::config::{API_KEY_QUERY_PARAM, HTTP_STATUS_OK, MAX_ERROR_BODY_SNIPPET_CHARS};
use crate::error_handling::{categorize_reqwest_error, ScanError};
use crate::utils::sanitize_and_truncate;

/// Something that can look a URL up and return a verdict.
///
/// Implementations return `Verdict::Safe` or `Verdict::Threat`; failures are
/// reported through `ScanError` and turned into `Verdict::Error` by the session.
#[allow(async_fn_in_trait)] // Sessions are single-task; no Send bound needed
pub trait ReputationService {
    async fn classify(&self, url: &str, api_key: &str) -> Result<Verdict, ScanError>;
}

/// Google Safe Browsing v4 lookup client.
///
/// Every call is one fresh POST: no retries and no caching.
#[derive(Debug, Clone)]
pub struct SafeBrowsingClient {
    client: reqwest::Client,
    endpoint: String,
}

impl SafeBrowsingClient {
    /// Wraps an HTTP client (which carries the request timeout) and the endpoint URL.
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ReputationService for SafeBrowsingClient {
    async fn classify(&self, url: &str, api_key: &str) -> Result<Verdict, ScanError> {
        let request = FindThreatMatchesRequest::for_url(url);
        let body = serde_json::to_vec(&request)
            .map_err(|e| ScanError::Unexpected(format!("failed to encode request: {e}")))?;

        debug!("Looking up {url} via {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[(API_KEY_QUERY_PARAM, api_key)])
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(categorize_reqwest_error)?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(categorize_reqwest_error)?;
        debug!("Reputation service answered {status} ({} bytes)", text.len());

        if status != HTTP_STATUS_OK {
            return Err(ScanError::ApiStatus {
                status,
                snippet: sanitize_and_truncate(&text, MAX_ERROR_BODY_SNIPPET_CHARS),
            });
        }

        let parsed: FindThreatMatchesResponse =
            serde_json::from_str(&text).map_err(|e| ScanError::ApiResponse {
                detail: e.to_string(),
            })?;
        Ok(Verdict::from_matches(parsed.matches))
    }
}
