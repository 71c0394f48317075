//! Per-session scan orchestration.
//!
//! A `ScanSession` owns the ledger and failure counters of one user session
//! and runs each submit through
//! `Idle -> Validating -> Classifying -> Recording -> Done`, or into `Errored`.
//! Input errors short-circuit before the reputation service is called and are
//! never recorded; lookup failures are recorded as `error` entries.

use std::fmt;

use log::{debug, warn};

use crate::classifier::{ReputationService, Verdict};
use crate::config::{ConfigStore, API_KEY_NAME, HISTORY_TIMESTAMP_FORMAT};
use crate::error_handling::{ErrorType, InitializationError, ProcessingStats, ScanError};
use crate::ledger::{ScanStatus, SessionLedger};
use crate::presenter::Presentation;
use crate::validator::{is_valid, normalize};

/// Step of the per-scan state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    Validating,
    Classifying,
    Recording,
    Done,
    Errored,
}

impl fmt::Display for ScanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScanState::Idle => "idle",
            ScanState::Validating => "validating",
            ScanState::Classifying => "classifying",
            ScanState::Recording => "recording",
            ScanState::Done => "done",
            ScanState::Errored => "errored",
        };
        f.write_str(name)
    }
}

/// Result of one submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Normalized URL; `None` when the input was empty.
    pub url: Option<String>,
    pub verdict: Verdict,
    /// Failure kind when the scan did not complete.
    pub error: Option<ErrorType>,
    /// Final state: `Done` or `Errored`.
    pub state: ScanState,
}

impl ScanOutcome {
    pub fn presentation(&self) -> Presentation {
        Presentation::from_verdict(self.url.as_deref().unwrap_or_default(), &self.verdict)
    }
}

/// Local wall-clock time used for history entries.
pub fn local_timestamp() -> String {
    chrono::Local::now()
        .format(HISTORY_TIMESTAMP_FORMAT)
        .to_string()
}

/// One user session: a reputation service, the API key, and the ledger.
///
/// Each session owns an independent ledger; nothing is shared between sessions.
pub struct ScanSession<S> {
    service: S,
    api_key: String,
    ledger: SessionLedger,
    stats: ProcessingStats,
    clock: fn() -> String,
}

impl<S: ReputationService> ScanSession<S> {
    pub fn new(service: S, api_key: impl Into<String>) -> Self {
        Self {
            service,
            api_key: api_key.into(),
            ledger: SessionLedger::new(),
            stats: ProcessingStats::new(),
            clock: local_timestamp,
        }
    }

    /// Starts a session with the API key looked up in `store`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::MissingApiKeyError` when the store has no
    /// (non-blank) key; no session exists and no scans can be made.
    pub fn from_store(service: S, store: &dyn ConfigStore) -> Result<Self, InitializationError> {
        match store.get(API_KEY_NAME) {
            Some(key) if !key.trim().is_empty() => Ok(Self::new(service, key.trim())),
            _ => Err(InitializationError::MissingApiKeyError(API_KEY_NAME)),
        }
    }

    /// Replaces the timestamp source.
    pub fn with_clock(mut self, clock: fn() -> String) -> Self {
        self.clock = clock;
        self
    }

    pub fn ledger(&self) -> &SessionLedger {
        &self.ledger
    }

    pub fn stats(&self) -> &ProcessingStats {
        &self.stats
    }

    /// Runs one submit through validation, lookup and recording.
    pub async fn scan(&mut self, raw: &str) -> ScanOutcome {
        let mut state = ScanState::Idle;
        if raw.trim().is_empty() {
            return self.reject(&mut state, None, ScanError::MissingInput);
        }

        advance(&mut state, ScanState::Validating);
        let url = normalize(raw);
        if !is_valid(&url) {
            return self.reject(&mut state, Some(url.clone()), ScanError::InvalidUrl(url));
        }

        advance(&mut state, ScanState::Classifying);
        let result = self.service.classify(&url, &self.api_key).await;
        let timestamp = (self.clock)();

        match result {
            Ok(verdict) => {
                advance(&mut state, ScanState::Recording);
                self.ledger
                    .record(url.as_str(), ScanStatus::from(&verdict), timestamp);
                advance(&mut state, ScanState::Done);
                ScanOutcome {
                    url: Some(url),
                    verdict,
                    error: None,
                    state,
                }
            }
            Err(err) => {
                self.ledger.record(url.as_str(), ScanStatus::Error, timestamp);
                self.reject(&mut state, Some(url), err)
            }
        }
    }

    fn reject(&mut self, state: &mut ScanState, url: Option<String>, err: ScanError) -> ScanOutcome {
        let error_type = err.error_type();
        if error_type.is_recorded() {
            warn!(
                "Scan of {} failed: {err}",
                url.as_deref().unwrap_or_default()
            );
        } else {
            debug!("Rejected input: {err}");
        }
        self.stats.increment_error(error_type);
        advance(state, ScanState::Errored);
        ScanOutcome {
            url,
            verdict: Verdict::Error {
                message: err.to_string(),
            },
            error: Some(error_type),
            state: *state,
        }
    }
}

fn advance(state: &mut ScanState, next: ScanState) {
    debug!("Scan state {state} -> {next}");
    *state = next;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ThreatType;
    use crate::config::MemoryStore;
    use std::cell::Cell;
    use std::collections::BTreeSet;

    /// Reputation service returning a canned result and counting calls.
    struct FakeService {
        respond: fn() -> Result<Verdict, ScanError>,
        calls: Cell<usize>,
    }

    impl FakeService {
        fn new(respond: fn() -> Result<Verdict, ScanError>) -> Self {
            Self {
                respond,
                calls: Cell::new(0),
            }
        }
    }

    impl ReputationService for FakeService {
        async fn classify(&self, _url: &str, _api_key: &str) -> Result<Verdict, ScanError> {
            self.calls.set(self.calls.get() + 1);
            (self.respond)()
        }
    }

    fn fixed_clock() -> String {
        "12:34:56".to_string()
    }

    fn session(respond: fn() -> Result<Verdict, ScanError>) -> ScanSession<FakeService> {
        ScanSession::new(FakeService::new(respond), "test-key").with_clock(fixed_clock)
    }

    #[tokio::test]
    async fn test_whitespace_input_is_missing_input() {
        let mut session = session(|| Ok(Verdict::Safe));
        let outcome = session.scan("   ").await;

        assert_eq!(outcome.error, Some(ErrorType::MissingInput));
        assert_eq!(outcome.state, ScanState::Errored);
        assert_eq!(outcome.url, None);
        assert_eq!(
            outcome.presentation(),
            Presentation::Warning {
                message: "Please enter a URL before scanning.".to_string()
            }
        );
        assert!(session.ledger().is_empty());
        assert_eq!(session.service.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_invalid_url_short_circuits() {
        let mut session = session(|| Ok(Verdict::Safe));
        let outcome = session.scan("bad url").await;

        assert_eq!(outcome.error, Some(ErrorType::InvalidUrl));
        assert_eq!(outcome.url.as_deref(), Some("https://bad url"));
        assert!(matches!(
            outcome.presentation(),
            Presentation::Warning { message } if message.contains("does not look like a valid URL")
        ));
        assert!(session.ledger().is_empty());
        assert_eq!(session.service.calls.get(), 0);
        assert_eq!(session.stats().get_error_count(ErrorType::InvalidUrl), 1);
    }

    #[tokio::test]
    async fn test_safe_scan_is_recorded() {
        let mut session = session(|| Ok(Verdict::Safe));
        let outcome = session.scan("example.com").await;

        assert_eq!(outcome.state, ScanState::Done);
        assert_eq!(outcome.verdict, Verdict::Safe);
        assert_eq!(outcome.url.as_deref(), Some("https://example.com"));

        let snapshot = session.ledger().snapshot();
        assert_eq!(snapshot.total(), 1);
        assert_eq!(snapshot.safe_count, 1);
        assert_eq!(snapshot.history[0].url, "https://example.com");
        assert_eq!(snapshot.history[0].status, ScanStatus::Safe);
        assert_eq!(snapshot.history[0].timestamp, "12:34:56");
    }

    #[tokio::test]
    async fn test_threat_scan_is_recorded() {
        let mut session = session(|| {
            Ok(Verdict::Threat {
                threat_types: BTreeSet::from([ThreatType::SocialEngineering]),
            })
        });
        let outcome = session.scan("malicious-test.com").await;

        match outcome.presentation() {
            Presentation::Threat { badges, .. } => {
                assert_eq!(badges.len(), 1);
                assert_eq!(badges[0].label, "Phishing / Social Eng");
            }
            other => panic!("expected threat presentation, got {other:?}"),
        }
        let snapshot = session.ledger().snapshot();
        assert_eq!(snapshot.threat_count, 1);
        assert_eq!(snapshot.safe_count, 0);
        assert_eq!(snapshot.history[0].status, ScanStatus::Threat);
    }

    #[tokio::test]
    async fn test_timeout_records_error_entry() {
        let mut session = session(|| Err(ScanError::Timeout));
        let outcome = session.scan("example.com").await;

        assert_eq!(outcome.error, Some(ErrorType::TimeoutError));
        assert_eq!(outcome.state, ScanState::Errored);
        assert!(matches!(
            outcome.presentation(),
            Presentation::Warning { message } if message.contains("timed out")
        ));

        let snapshot = session.ledger().snapshot();
        assert_eq!(snapshot.total(), 1);
        assert_eq!(snapshot.history[0].status, ScanStatus::Error);
        assert_eq!(snapshot.safe_count, 0);
        assert_eq!(snapshot.threat_count, 0);
    }

    #[tokio::test]
    async fn test_session_stays_usable_after_failure() {
        let mut session = session(|| {
            Err(ScanError::ApiStatus {
                status: 500,
                snippet: "backend error".to_string(),
            })
        });
        session.scan("a.com").await;
        session.scan("b.com").await;
        session.scan("").await;

        assert_eq!(session.ledger().len(), 2);
        assert_eq!(session.stats().get_error_count(ErrorType::ApiStatusError), 2);
        assert_eq!(session.stats().get_error_count(ErrorType::MissingInput), 1);
        assert_eq!(session.service.calls.get(), 2);
    }

    #[test]
    fn test_from_store_requires_api_key() {
        let missing =
            ScanSession::from_store(FakeService::new(|| Ok(Verdict::Safe)), &MemoryStore::new());
        assert!(matches!(
            missing,
            Err(InitializationError::MissingApiKeyError("GOOGLE_API_KEY"))
        ));

        let blank = ScanSession::from_store(
            FakeService::new(|| Ok(Verdict::Safe)),
            &MemoryStore::new().with("GOOGLE_API_KEY", "  "),
        );
        assert!(blank.is_err());

        let store = MemoryStore::new().with("GOOGLE_API_KEY", "abc");
        let session = ScanSession::from_store(FakeService::new(|| Ok(Verdict::Safe)), &store)
            .expect("key present");
        assert_eq!(session.api_key, "abc");
    }

    #[test]
    fn test_local_timestamp_format() {
        let ts = local_timestamp();
        assert_eq!(ts.len(), 8);
        assert_eq!(ts.as_bytes()[2], b':');
        assert_eq!(ts.as_bytes()[5], b':');
    }

    #[tokio::test]
    async fn test_independent_sessions_do_not_share_ledgers() {
        let mut first = session(|| Ok(Verdict::Safe));
        let second = session(|| Ok(Verdict::Safe));
        first.scan("example.com").await;

        assert_eq!(first.ledger().len(), 1);
        assert!(second.ledger().is_empty());
    }
}
