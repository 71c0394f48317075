//! Main application modules.
//!
//! This module drives submissions through a scan session and prints the
//! session statistics used by the main application.

pub mod statistics;
pub mod submissions;

// Re-export public API
pub use statistics::{log_error_statistics, log_session_summary};
pub use submissions::{run_submissions, run_urls, scan_and_present};
