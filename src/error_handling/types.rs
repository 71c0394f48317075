//! Error type definitions.
//!
//! This module defines the scan failure kinds surfaced to the user and the
//! initialization errors raised while setting up the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// No API key in any configuration store; scanning is refused.
    #[error("API key {0} is not configured")]
    MissingApiKeyError(&'static str),
}

/// A failed scan attempt.
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Error, Debug)]
pub enum ScanError {
    /// No URL was supplied.
    #[error("Please enter a URL before scanning.")]
    MissingInput,

    /// The normalized URL failed the syntactic check.
    #[error("\"{0}\" does not look like a valid URL. Make sure it includes a domain like example.com.")]
    InvalidUrl(String),

    /// The reputation service answered with a status other than 200.
    #[error("API returned status {status}: {snippet}")]
    ApiStatus { status: u16, snippet: String },

    /// The reputation service answered 200 with a body that is not the expected JSON.
    #[error("Received an invalid response from the API.")]
    ApiResponse { detail: String },

    /// The connection to the reputation service failed.
    #[error("Network error - check your internet connection.")]
    Network(#[source] ReqwestError),

    /// The lookup exceeded the request timeout.
    #[error("The request timed out. Please try again.")]
    Timeout,

    /// Anything else; the detail is surfaced verbatim.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl ScanError {
    /// The counter tag for this failure.
    pub fn error_type(&self) -> ErrorType {
        match self {
            ScanError::MissingInput => ErrorType::MissingInput,
            ScanError::InvalidUrl(_) => ErrorType::InvalidUrl,
            ScanError::ApiStatus { .. } => ErrorType::ApiStatusError,
            ScanError::ApiResponse { .. } => ErrorType::ApiResponseError,
            ScanError::Network(_) => ErrorType::NetworkError,
            ScanError::Timeout => ErrorType::TimeoutError,
            ScanError::Unexpected(_) => ErrorType::UnexpectedError,
        }
    }

    /// Whether the failure happened after validation and so belongs in the history.
    pub fn is_recorded(&self) -> bool {
        self.error_type().is_recorded()
    }
}

/// Types of scan failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // Input errors (never reach the reputation service)
    MissingInput,
    InvalidUrl,
    // Reputation service errors
    ApiStatusError,
    ApiResponseError,
    NetworkError,
    TimeoutError,
    UnexpectedError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::MissingInput => "Missing input",
            ErrorType::InvalidUrl => "Invalid URL",
            ErrorType::ApiStatusError => "API status error",
            ErrorType::ApiResponseError => "API response error",
            ErrorType::NetworkError => "Network error",
            ErrorType::TimeoutError => "Request timeout",
            ErrorType::UnexpectedError => "Unexpected error",
        }
    }

    /// Input errors are warned about but leave the ledger untouched.
    pub fn is_recorded(&self) -> bool {
        !matches!(self, ErrorType::MissingInput | ErrorType::InvalidUrl)
    }
}
