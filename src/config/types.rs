//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::config::constants::{
    DEFAULT_SECRETS_FILE, DEFAULT_USER_AGENT, HISTORY_DISPLAY_LIMIT, REQUEST_TIMEOUT_SECS,
    SAFE_BROWSING_ENDPOINT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How scan results are rendered on stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored cards, stats bar and history
    Plain,
    /// One JSON object per scan
    Json,
}

/// Invalid configuration value.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An option has a value outside its accepted range.
    #[error("Invalid value for {field}: {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },

    /// The secrets file exists but could not be read.
    #[error("Failed to read secrets file {path}: {source}")]
    SecretsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The secrets file is not valid TOML.
    #[error("Failed to parse secrets file {path}: {source}")]
    SecretsParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without going through `clap`.
///
/// # Examples
///
/// ```no_run
/// use phishing_checker::Config;
///
/// let config = Config {
///     urls: vec!["example.com".to_string()],
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// URLs to scan; empty means read submissions from stdin
    pub urls: Vec<String>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Result rendering
    pub output: OutputFormat,

    /// TOML file consulted for the API key after the environment
    pub secrets_file: PathBuf,

    /// Reputation service endpoint
    pub endpoint: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// Number of history rows shown after each scan
    pub history_limit: usize,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            output: OutputFormat::Plain,
            secrets_file: PathBuf::from(DEFAULT_SECRETS_FILE),
            endpoint: SAFE_BROWSING_ENDPOINT.to_string(),
            timeout_seconds: REQUEST_TIMEOUT_SECS,
            history_limit: HISTORY_DISPLAY_LIMIT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Checks option values that `clap` cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_seconds",
                message: "must be greater than 0".to_string(),
            });
        }
        if self.history_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "history_limit",
                message: "must be greater than 0".to_string(),
            });
        }
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                field: "endpoint",
                message: format!("expected an http(s) URL, got {:?}", self.endpoint),
            });
        }
        Ok(())
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Scan two URLs and exit
/// phishing_checker example.com http://suspicious-site.test/login
///
/// # Interactive session: one URL per line on stdin
/// phishing_checker
///
/// # Machine-readable output
/// phishing_checker --output json example.com
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "phishing_checker",
    about = "Checks URLs against the Google Safe Browsing threat database."
)]
pub struct Opt {
    /// URLs to scan (reads one URL per line from stdin when omitted)
    pub urls: Vec<String>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Result output: plain|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,

    /// Secrets file holding GOOGLE_API_KEY (the environment is checked first)
    #[arg(long, value_parser, default_value = DEFAULT_SECRETS_FILE)]
    pub secrets_file: PathBuf,

    /// Reputation service endpoint
    #[arg(long, hide = true, default_value = SAFE_BROWSING_ENDPOINT)]
    pub endpoint: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Number of history rows shown after each scan
    #[arg(long, default_value_t = HISTORY_DISPLAY_LIMIT)]
    pub history_limit: usize,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            urls: opt.urls,
            log_level: opt.log_level,
            log_format: opt.log_format,
            output: opt.output,
            secrets_file: opt.secrets_file,
            endpoint: opt.endpoint,
            timeout_seconds: opt.timeout_seconds,
            history_limit: opt.history_limit,
            user_agent: opt.user_agent,
        }
    }
}
