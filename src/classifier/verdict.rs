//! Scan verdicts.

use std::collections::BTreeSet;

use serde::Serialize;

use super::threat::ThreatType;
use super::wire::ThreatMatch;

/// Outcome of one classification attempt. Never mutated once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "lowercase")]
pub enum Verdict {
    /// No match in the reputation database.
    Safe,
    /// At least one match; the distinct categories that matched.
    Threat { threat_types: BTreeSet<ThreatType> },
    /// The scan could not be completed.
    Error { message: String },
}

impl Verdict {
    /// Builds the verdict for a list of matches. Duplicate tags collapse into one.
    pub fn from_matches(matches: Vec<ThreatMatch>) -> Self {
        if matches.is_empty() {
            return Verdict::Safe;
        }
        let threat_types = matches.into_iter().map(|m| m.threat_type).collect();
        Verdict::Threat { threat_types }
    }
}
