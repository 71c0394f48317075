//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoint, timeouts, display limits)
//! - CLI option types and parsing
//! - The key-value configuration store used to look up the API key

mod constants;
mod store;
mod types;

// Re-export all constants
pub use constants::*;
pub use store::{ConfigStore, EnvStore, MemoryStore, SecretsFile, StoreChain};
pub use types::{Config, ConfigError, LogFormat, LogLevel, Opt, OutputFormat};
