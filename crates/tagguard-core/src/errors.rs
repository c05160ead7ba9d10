use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Message reported when the run guard expires.
pub const TIMEOUT_MESSAGE: &str =
    "The action was unable to execute within the allotted time and has been stopped";

/// Errors raised while loading or checking the action configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Config JSON is malformed.
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// A config value failed validation.
    #[error("invalid config value: {0}")]
    Invalid(#[from] tagguard_model::ValidationError),
}

/// Errors raised by host lookups.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// Resource listing could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Resource listing is malformed.
    #[error("invalid resource listing: {0}")]
    Parse(#[from] serde_json::Error),
    /// The host could not provide resources.
    #[error("resources unavailable: {0}")]
    Unavailable(String),
}

/// Errors that end a before-save evaluation without a decision.
#[derive(Error, Debug)]
pub enum HookError {
    /// Looking up resources failed.
    #[error("resource lookup failed: {0}")]
    Directory(#[from] DirectoryError),
    /// The evaluation ran past its configured budget.
    #[error("{}", TIMEOUT_MESSAGE)]
    Timeout {
        /// Time spent before the guard fired.
        elapsed: Duration,
        /// Configured budget.
        budget: Duration,
    },
}
