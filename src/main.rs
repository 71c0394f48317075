//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `phishing_checker` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use phishing_checker::initialization::init_logger_with;
use phishing_checker::{run_checker, Config, InitializationError, Opt};

/// Exit code used when no API key is configured.
const EXIT_MISSING_API_KEY: i32 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // This allows setting GOOGLE_API_KEY in .env without exporting it manually
    // Try loading from current directory first, then from the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    // Parse command-line arguments into Config
    let config = Config::from(Opt::parse());
    if let Err(e) = config.validate() {
        eprintln!("phishing_checker error: {}", e);
        process::exit(1);
    }

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_checker(config).await {
        Ok(report) => {
            if report.errors > 0 {
                eprintln!(
                    "{} of {} scan{} could not be completed",
                    report.errors,
                    report.total,
                    if report.total == 1 { "" } else { "s" }
                );
            }
            Ok(())
        }
        Err(e) => {
            if let Some(InitializationError::MissingApiKeyError(_)) =
                e.downcast_ref::<InitializationError>()
            {
                process::exit(EXIT_MISSING_API_KEY);
            }
            eprintln!("phishing_checker error: {:#}", e);
            process::exit(1);
        }
    }
}
