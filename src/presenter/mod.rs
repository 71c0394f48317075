//! Presentation contract and render sinks.
//!
//! The scanning core never formats output itself. After each scan it hands a
//! `Presentation` plus a read-only ledger view to a `PresentationSink`.

mod json;
mod terminal;

use std::io;
use std::path::PathBuf;

use serde::Serialize;

use crate::classifier::{BadgeCategory, Verdict};
use crate::ledger::LedgerSnapshot;

pub use json::JsonPresenter;
pub use terminal::TerminalPresenter;

/// One threat badge: display label and style category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreatBadge {
    pub label: String,
    pub category: BadgeCategory,
}

/// What the user should see after a submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Presentation {
    Safe {
        url: String,
    },
    Threat {
        url: String,
        badges: Vec<ThreatBadge>,
    },
    Warning {
        message: String,
    },
    /// Startup condition: no API key, scans are refused.
    ApiKeyMissing {
        key_name: String,
        secrets_file: PathBuf,
    },
}

impl Presentation {
    /// Maps a verdict for `url` onto what is shown.
    pub fn from_verdict(url: &str, verdict: &Verdict) -> Self {
        match verdict {
            Verdict::Safe => Presentation::Safe {
                url: url.to_string(),
            },
            Verdict::Threat { threat_types } => Presentation::Threat {
                url: url.to_string(),
                badges: threat_types
                    .iter()
                    .map(|threat| ThreatBadge {
                        label: threat.label().to_string(),
                        category: threat.category(),
                    })
                    .collect(),
            },
            Verdict::Error { message } => Presentation::Warning {
                message: message.clone(),
            },
        }
    }
}

/// Displays presentations. Return values are only used for diagnostics.
pub trait PresentationSink {
    fn present(
        &mut self,
        presentation: &Presentation,
        ledger: LedgerSnapshot<'_>,
    ) -> io::Result<()>;
}
