//! Safe Browsing v4 `threatMatches:find` request and response bodies.

use serde::{Deserialize, Deserializer, Serialize};

use super::threat::ThreatType;
use crate::config::{CLIENT_ID, CLIENT_VERSION};

const ANY_PLATFORM: &str = "ANY_PLATFORM";
const URL_ENTRY_TYPE: &str = "URL";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindThreatMatchesRequest<'a> {
    pub client: ClientInfo<'a>,
    pub threat_info: ThreatInfo<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo<'a> {
    pub client_id: &'a str,
    pub client_version: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatInfo<'a> {
    pub threat_types: Vec<ThreatType>,
    pub platform_types: [&'a str; 1],
    pub threat_entry_types: [&'a str; 1],
    pub threat_entries: Vec<ThreatEntry<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ThreatEntry<'a> {
    pub url: &'a str,
}

impl<'a> FindThreatMatchesRequest<'a> {
    /// Lookup of a single URL against all requested threat categories on any platform.
    pub fn for_url(url: &'a str) -> Self {
        Self {
            client: ClientInfo {
                client_id: CLIENT_ID,
                client_version: CLIENT_VERSION,
            },
            threat_info: ThreatInfo {
                threat_types: ThreatType::REQUESTED.to_vec(),
                platform_types: [ANY_PLATFORM],
                threat_entry_types: [URL_ENTRY_TYPE],
                threat_entries: vec![ThreatEntry { url }],
            },
        }
    }
}

/// Response body; the service sends `{}` when nothing matched.
#[derive(Debug, Default, Deserialize)]
pub struct FindThreatMatchesResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub matches: Vec<ThreatMatch>,
}

/// `"matches": null` means no matches.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ThreatMatch>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ThreatMatch>>::deserialize(deserializer)?.unwrap_or_default())
}

/// One match. Only the threat type matters to the verdict.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatMatch {
    #[serde(default)]
    pub threat_type: ThreatType,
}
