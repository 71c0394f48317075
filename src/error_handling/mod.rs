//! Error handling and failure statistics.
//!
//! This module provides:
//! - Scan error definitions, one variant per user-visible failure kind
//! - Categorization of transport errors from the HTTP client
//! - Per-session failure counters

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use stats::ProcessingStats;
pub use types::{ErrorType, InitializationError, ScanError};
