//! Threat classification against the reputation service.
//!
//! This module provides:
//! - Threat type tags and their badge labels
//! - The `Verdict` produced by each lookup
//! - The `ReputationService` seam and its Safe Browsing implementation

mod client;
mod threat;
mod verdict;
mod wire;

// Re-export public API
pub use client::{ReputationService, SafeBrowsingClient};
pub use threat::{BadgeCategory, ThreatType, UNKNOWN_THREAT_TAG};
pub use verdict::Verdict;
pub use wire::{FindThreatMatchesRequest, FindThreatMatchesResponse, ThreatMatch};
