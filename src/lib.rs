//! phishing_checker library: URL reputation checks against Google Safe Browsing
//!
//! This library validates user-submitted URLs, classifies them with the Safe
//! Browsing v4 `threatMatches:find` API, and keeps a per-session ledger of
//! results that a presenter renders after every scan.
//!
//! # Example
//!
//! ```no_run
//! use phishing_checker::{Config, run_checker};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     urls: vec!["example.com".to_string()],
//!     ..Default::default()
//! };
//!
//! let report = run_checker(config).await?;
//! println!("Scanned {} URLs: {} safe, {} threats",
//!          report.total, report.safe, report.threat);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod app;
pub mod classifier;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod ledger;
pub mod presenter;
pub mod session;
mod utils;
pub mod validator;

// Re-export public API
pub use classifier::{ReputationService, SafeBrowsingClient, ThreatType, Verdict};
pub use config::{Config, LogFormat, LogLevel, Opt, OutputFormat};
pub use error_handling::{ErrorType, InitializationError, ScanError};
pub use ledger::{HistoryEntry, LedgerSnapshot, ScanStatus, SessionLedger};
pub use presenter::{JsonPresenter, Presentation, PresentationSink, TerminalPresenter};
pub use run::{run_checker, run_checker_with, SessionReport};
pub use session::{ScanOutcome, ScanSession, ScanState};

// Internal run module (wires config, key lookup, client and presenter together)
mod run {
    use anyhow::{Context, Result};
    use log::{debug, info};
    use tokio::io::BufReader;

    use crate::app::{log_session_summary, run_submissions, run_urls};
    use crate::classifier::SafeBrowsingClient;
    use crate::config::{Config, ConfigStore, EnvStore, OutputFormat, StoreChain, API_KEY_NAME};
    use crate::error_handling::{ErrorType, InitializationError};
    use crate::initialization::init_client;
    use crate::ledger::SessionLedger;
    use crate::presenter::{JsonPresenter, Presentation, PresentationSink, TerminalPresenter};
    use crate::session::ScanSession;

    /// Results of a checker session.
    ///
    /// Counts come from the session ledger, except `rejected`, which counts
    /// submissions refused before any lookup (missing or malformed input).
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct SessionReport {
        /// Number of recorded scans
        pub total: usize,
        /// Scans classified safe
        pub safe: usize,
        /// Scans with at least one threat match
        pub threat: usize,
        /// Scans whose lookup failed
        pub errors: usize,
        /// Submissions rejected by validation
        pub rejected: usize,
    }

    fn build_sink(config: &Config) -> Box<dyn PresentationSink> {
        match config.output {
            OutputFormat::Plain => Box::new(
                TerminalPresenter::new(std::io::stdout()).with_history_limit(config.history_limit),
            ),
            OutputFormat::Json => Box::new(
                JsonPresenter::new(std::io::stdout()).with_history_limit(config.history_limit),
            ),
        }
    }

    /// Runs a checker session with the provided configuration.
    ///
    /// The API key is looked up in the process environment first, then in
    /// `config.secrets_file`. Results are rendered on stdout in the format
    /// chosen by `config.output`. See [`run_checker_with`] for the session itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the secrets file is needed for the key but cannot be
    /// read or parsed, and in every case listed on [`run_checker_with`].
    pub async fn run_checker(config: Config) -> Result<SessionReport> {
        let store = StoreChain::layered(EnvStore, &config.secrets_file, API_KEY_NAME)
            .context("Failed to load secrets file")?;
        let mut sink = build_sink(&config);
        run_checker_with(&config, &store, &mut *sink).await
    }

    /// Runs a checker session with an explicit key store and result sink.
    ///
    /// URLs from `config.urls` are scanned in order; when there are none,
    /// submissions are read line by line from stdin.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The HTTP client cannot be built
    /// - No API key is configured (after rendering setup instructions); the
    ///   underlying `InitializationError::MissingApiKeyError` can be recovered
    ///   with `downcast_ref`
    /// - Reading stdin fails in interactive mode
    pub async fn run_checker_with<P>(
        config: &Config,
        store: &dyn ConfigStore,
        sink: &mut P,
    ) -> Result<SessionReport>
    where
        P: PresentationSink + ?Sized,
    {
        let client = init_client(config).context("Failed to initialize HTTP client")?;
        let service = SafeBrowsingClient::new(client, config.endpoint.clone());
        debug!("Using reputation endpoint {}", service.endpoint());

        let mut session = match ScanSession::from_store(service, store) {
            Ok(session) => session,
            Err(InitializationError::MissingApiKeyError(key_name)) => {
                let empty = SessionLedger::new();
                sink.present(
                    &Presentation::ApiKeyMissing {
                        key_name: key_name.to_string(),
                        secrets_file: config.secrets_file.clone(),
                    },
                    empty.snapshot(),
                )
                .context("Failed to render setup instructions")?;
                return Err(InitializationError::MissingApiKeyError(key_name).into());
            }
            Err(e) => return Err(e.into()),
        };

        if config.urls.is_empty() {
            let stdin = BufReader::new(tokio::io::stdin());
            run_submissions(&mut session, stdin, sink)
                .await
                .context("Failed to read submissions from stdin")?;
        } else {
            info!("Scanning {} URL(s)", config.urls.len());
            run_urls(&mut session, &config.urls, sink).await;
        }

        log_session_summary(session.ledger(), session.stats());

        let snapshot = session.ledger().snapshot();
        let stats = session.stats();
        Ok(SessionReport {
            total: snapshot.total(),
            safe: snapshot.safe_count,
            threat: snapshot.threat_count,
            errors: snapshot.error_count(),
            rejected: stats.get_error_count(ErrorType::MissingInput)
                + stats.get_error_count(ErrorType::InvalidUrl),
        })
    }
}
