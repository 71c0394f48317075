//! Threat type tags returned by the reputation service.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Tag used when a match carries no `threatType` field.
pub const UNKNOWN_THREAT_TAG: &str = "UNKNOWN";

/// Category tag attached to a threat match.
///
/// Tags the scanner does not know about are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ThreatType {
    Malware,
    SocialEngineering,
    UnwantedSoftware,
    PotentiallyHarmfulApplication,
    Other(String),
}

impl ThreatType {
    /// The four categories every lookup asks about.
    pub const REQUESTED: [ThreatType; 4] = [
        ThreatType::Malware,
        ThreatType::SocialEngineering,
        ThreatType::UnwantedSoftware,
        ThreatType::PotentiallyHarmfulApplication,
    ];

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "MALWARE" => ThreatType::Malware,
            "SOCIAL_ENGINEERING" => ThreatType::SocialEngineering,
            "UNWANTED_SOFTWARE" => ThreatType::UnwantedSoftware,
            "POTENTIALLY_HARMFUL_APPLICATION" => ThreatType::PotentiallyHarmfulApplication,
            other => ThreatType::Other(other.to_string()),
        }
    }

    /// Wire tag as sent and received by the reputation service.
    pub fn as_tag(&self) -> &str {
        match self {
            ThreatType::Malware => "MALWARE",
            ThreatType::SocialEngineering => "SOCIAL_ENGINEERING",
            ThreatType::UnwantedSoftware => "UNWANTED_SOFTWARE",
            ThreatType::PotentiallyHarmfulApplication => "POTENTIALLY_HARMFUL_APPLICATION",
            ThreatType::Other(tag) => tag,
        }
    }

    /// Human-readable badge label; unknown tags are shown as-is.
    pub fn label(&self) -> &str {
        match self {
            ThreatType::Malware => "Malware",
            ThreatType::SocialEngineering => "Phishing / Social Eng",
            ThreatType::UnwantedSoftware => "Unwanted Software",
            ThreatType::PotentiallyHarmfulApplication => "Harmful App",
            ThreatType::Other(tag) => tag,
        }
    }

    /// Badge style; unknown tags fall back to the generic harmful style.
    pub fn category(&self) -> BadgeCategory {
        match self {
            ThreatType::Malware => BadgeCategory::Malware,
            ThreatType::SocialEngineering => BadgeCategory::Social,
            ThreatType::UnwantedSoftware => BadgeCategory::Unwanted,
            ThreatType::PotentiallyHarmfulApplication | ThreatType::Other(_) => {
                BadgeCategory::Harmful
            }
        }
    }
}

impl Default for ThreatType {
    fn default() -> Self {
        ThreatType::Other(UNKNOWN_THREAT_TAG.to_string())
    }
}

impl fmt::Display for ThreatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl Serialize for ThreatType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for ThreatType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(ThreatType::from_tag(&tag))
    }
}

/// Visual category of a threat badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeCategory {
    Malware,
    Social,
    Unwanted,
    Harmful,
}

impl BadgeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeCategory::Malware => "malware",
            BadgeCategory::Social => "social",
            BadgeCategory::Unwanted => "unwanted",
            BadgeCategory::Harmful => "harmful",
        }
    }
}
