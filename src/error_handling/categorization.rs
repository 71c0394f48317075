//! Error categorization.
//!
//! Maps transport-level `reqwest` failures onto the scan error kinds shown to
//! the user.

use log::debug;

use super::types::ScanError;

/// Categorizes a `reqwest::Error` into a `ScanError`.
///
/// The request URL carries the API key, so it is stripped from the error before
/// anything is logged or surfaced. Timeouts are checked before connection
/// failures because a connect timeout reports both.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` raised while talking to the reputation service
///
/// # Returns
///
/// The `ScanError` to present and record.
pub fn categorize_reqwest_error(error: reqwest::Error) -> ScanError {
    let error = error.without_url();
    debug!("Categorizing reputation lookup error: {error:?}");
    if error.is_timeout() {
        ScanError::Timeout
    } else if error.is_connect() {
        ScanError::Network(error)
    } else if error.is_decode() {
        ScanError::ApiResponse {
            detail: error.to_string(),
        }
    } else {
        ScanError::Unexpected(error.to_string())
    }
}
