//! Per-session scan history and counters.
//!
//! The ledger is append-only: each completed scan adds exactly one entry and
//! bumps at most one counter. Entries are never edited or removed, and the
//! full history is kept for the lifetime of the owning session.

mod types;

pub use types::{HistoryEntry, LedgerSnapshot, ScanStatus};

/// Append-only scan history owned by one session.
#[derive(Debug, Default, Clone)]
pub struct SessionLedger {
    history: Vec<HistoryEntry>,
    safe_count: usize,
    threat_count: usize,
}

impl SessionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one entry and increments the counter matching `status`.
    ///
    /// `Error` entries are kept in the history but increment neither counter.
    pub fn record(
        &mut self,
        url: impl Into<String>,
        status: ScanStatus,
        timestamp: impl Into<String>,
    ) {
        match status {
            ScanStatus::Safe => self.safe_count += 1,
            ScanStatus::Threat => self.threat_count += 1,
            ScanStatus::Error => {}
        }
        self.history.push(HistoryEntry {
            url: url.into(),
            status,
            timestamp: timestamp.into(),
        });
    }

    pub fn snapshot(&self) -> LedgerSnapshot<'_> {
        LedgerSnapshot {
            history: &self.history,
            safe_count: self.safe_count,
            threat_count: self.threat_count,
        }
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
