//! Ledger record types.

use std::fmt;

use serde::Serialize;

use crate::classifier::Verdict;

/// Outcome class of a recorded scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    Safe,
    Threat,
    Error,
}

impl ScanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanStatus::Safe => "safe",
            ScanStatus::Threat => "threat",
            ScanStatus::Error => "error",
        }
    }
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&Verdict> for ScanStatus {
    fn from(verdict: &Verdict) -> Self {
        match verdict {
            Verdict::Safe => ScanStatus::Safe,
            Verdict::Threat { .. } => ScanStatus::Threat,
            Verdict::Error { .. } => ScanStatus::Error,
        }
    }
}

/// One completed scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub url: String,
    pub status: ScanStatus,
    pub timestamp: String,
}

/// Read-only view of a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerSnapshot<'a> {
    /// Full history, oldest first.
    pub history: &'a [HistoryEntry],
    pub safe_count: usize,
    pub threat_count: usize,
}

impl<'a> LedgerSnapshot<'a> {
    /// Number of recorded scans, errors included.
    pub fn total(&self) -> usize {
        self.history.len()
    }

    pub fn error_count(&self) -> usize {
        self.total() - self.safe_count - self.threat_count
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// The most recent `limit` entries, newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &'a HistoryEntry> {
        let history: &'a [HistoryEntry] = self.history;
        history.iter().rev().take(limit)
    }
}
