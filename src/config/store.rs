//! Key-value configuration stores.
//!
//! The scanner only ever needs one secret (the API key), so the store contract
//! is a single lookup. Stores can be chained; the first non-empty value wins.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::types::ConfigError;

/// A source of named configuration values.
pub trait ConfigStore {
    /// Returns the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads values from the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvStore;

impl ConfigStore for EnvStore {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory store, used for embedding and tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl ConfigStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Flat TOML secrets file (`GOOGLE_API_KEY = "..."`).
///
/// Only top-level string values are exposed. A file that does not exist is
/// treated as an empty store so the environment alone can supply the key.
#[derive(Debug, Clone)]
pub struct SecretsFile {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl SecretsFile {
    /// Loads the secrets file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::SecretsRead` if the file exists but cannot be read,
    /// or `ConfigError::SecretsParse` if it is not valid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_path_buf();
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Secrets file {} not found, skipping", path.display());
                return Ok(Self {
                    path,
                    values: HashMap::new(),
                });
            }
            Err(source) => return Err(ConfigError::SecretsRead { path, source }),
        };
        Self::parse(path, &text)
    }

    fn parse(path: PathBuf, text: &str) -> Result<Self, ConfigError> {
        let table = text
            .parse::<toml::Table>()
            .map_err(|source| ConfigError::SecretsParse {
                path: path.clone(),
                source,
            })?;
        let values = table
            .into_iter()
            .filter_map(|(key, value)| match value {
                toml::Value::String(s) => Some((key, s)),
                _ => None,
            })
            .collect();
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for SecretsFile {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Ordered list of stores; the first non-empty value wins.
#[derive(Default)]
pub struct StoreChain {
    stores: Vec<Box<dyn ConfigStore>>,
}

impl StoreChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, store: impl ConfigStore + 'static) -> Self {
        self.stores.push(Box::new(store));
        self
    }

    /// Chains `primary` in front of the secrets file at `secrets_file`.
    ///
    /// A secrets file that cannot be read or parsed only matters when
    /// `primary` has no non-blank `required_key`; otherwise it is skipped
    /// with a warning.
    ///
    /// # Errors
    ///
    /// Returns the `ConfigError` from `SecretsFile::load` when the key has to
    /// come from the file.
    pub fn layered(
        primary: impl ConfigStore + 'static,
        secrets_file: &Path,
        required_key: &str,
    ) -> Result<Self, ConfigError> {
        let has_key = primary
            .get(required_key)
            .is_some_and(|value| !value.trim().is_empty());
        let chain = Self::new().push(primary);
        match SecretsFile::load(secrets_file) {
            Ok(secrets) => Ok(chain.push(secrets)),
            Err(e) if has_key => {
                warn!("Ignoring secrets file: {}", e);
                Ok(chain)
            }
            Err(e) => Err(e),
        }
    }
}

impl ConfigStore for StoreChain {
    fn get(&self, key: &str) -> Option<String> {
        self.stores
            .iter()
            .filter_map(|store| store.get(key))
            .find(|value| !value.trim().is_empty())
    }
}
