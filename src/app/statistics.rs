//! Session statistics logging.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, ProcessingStats};
use crate::ledger::SessionLedger;

/// Logs a one-line summary of the session ledger followed by error counts.
pub fn log_session_summary(ledger: &SessionLedger, error_stats: &ProcessingStats) {
    let snapshot = ledger.snapshot();
    info!(
        "Scanned {} URL{} ({} safe, {} threat, {} error)",
        snapshot.total(),
        if snapshot.total() == 1 { "" } else { "s" },
        snapshot.safe_count,
        snapshot.threat_count,
        snapshot.error_count()
    );
    log_error_statistics(error_stats);
}

/// Logs per-type error counts, including rejected inputs that never reach the ledger.
pub fn log_error_statistics(error_stats: &ProcessingStats) {
    let total_errors = error_stats.total_errors();
    if total_errors == 0 {
        return;
    }

    info!("Error Counts ({} total):", total_errors);
    for error_type in ErrorType::iter() {
        let count = error_stats.get_error_count(error_type);
        if count > 0 {
            info!("   {}: {}", error_type.as_str(), count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::ScanStatus;

    #[test]
    fn test_log_error_statistics_no_errors() {
        let stats = ProcessingStats::new();
        // Should not panic when there are no errors
        log_error_statistics(&stats);
    }

    #[test]
    fn test_log_session_summary_with_errors() {
        let mut ledger = SessionLedger::new();
        ledger.record("https://example.com", ScanStatus::Safe, "10:00:00");
        ledger.record("https://bad.test", ScanStatus::Error, "10:00:01");
        let mut stats = ProcessingStats::new();
        stats.increment_error(ErrorType::TimeoutError);
        stats.increment_error(ErrorType::InvalidUrl);
        // Should not panic
        log_session_summary(&ledger, &stats);
    }
}
