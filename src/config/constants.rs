//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including the reputation service endpoint, timeouts, and display limits.

/// Google Safe Browsing v4 threat matching endpoint.
pub const SAFE_BROWSING_ENDPOINT: &str =
    "https://safebrowsing.googleapis.com/v4/threatMatches:find";

/// Client identifier sent in every lookup request.
pub const CLIENT_ID: &str = "phishing-checker";

/// Client version sent in every lookup request.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the secret holding the Safe Browsing API key.
pub const API_KEY_NAME: &str = "GOOGLE_API_KEY";

/// Query parameter carrying the API key.
pub const API_KEY_QUERY_PARAM: &str = "key";

/// Per-request timeout in seconds for the reputation lookup.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default secrets file consulted after the environment.
pub const DEFAULT_SECRETS_FILE: &str = "secrets.toml";

/// Number of history entries handed to presenters.
pub const HISTORY_DISPLAY_LIMIT: usize = 15;

/// URLs longer than this are shortened in the history view.
pub const HISTORY_URL_DISPLAY_CHARS: usize = 55;

/// Maximum characters of an error response body kept for diagnostics.
pub const MAX_ERROR_BODY_SNIPPET_CHARS: usize = 200;

/// Timestamp format for history entries (local wall clock).
pub const HISTORY_TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// Default User-Agent for requests to the reputation service.
pub const DEFAULT_USER_AGENT: &str = concat!("phishing_checker/", env!("CARGO_PKG_VERSION"));

// HTTP status codes
pub const HTTP_STATUS_OK: u16 = 200;
