//! Per-session failure statistics.
//!
//! Counts scan failures by `ErrorType`. A session owns its stats exclusively,
//! so plain counters are enough.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::ErrorType;

/// Failure counters for one session.
///
/// Every `ErrorType` is initialized to zero on creation.
#[derive(Debug, Clone)]
pub struct ProcessingStats {
    errors: HashMap<ErrorType, usize>,
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStats {
    pub fn new() -> Self {
        let errors = ErrorType::iter().map(|error| (error, 0)).collect();
        ProcessingStats { errors }
    }

    /// Increment an error counter.
    pub fn increment_error(&mut self, error: ErrorType) {
        *self.errors.entry(error).or_insert(0) += 1;
    }

    /// Get the count for an error type.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors.get(&error).copied().unwrap_or(0)
    }

    /// Total failures across all error types.
    pub fn total_errors(&self) -> usize {
        self.errors.values().sum()
    }
}
