//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client for reputation lookups.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Total request timeout from the configuration (10 seconds by default)
///
/// # Arguments
///
/// * `config` - Configuration containing user-agent and timeout settings
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}
