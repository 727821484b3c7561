//! Error types for the scenario engine
//!
//! The dispatch layer never catches or retries: every error raised by a
//! hook, an `execute`, or a verifier propagates unmodified to the harness,
//! which owns per-case failure reporting.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the scenario engine
#[derive(Error, Debug)]
pub enum Error {
    // === Lifecycle Errors ===
    #[error("Hook failed: {0}")]
    Hook(String),

    #[error("Scenario execution failed: {0}")]
    Execute(String),

    // === Verification Errors ===
    #[error("Verification failed: {0}")]
    Verification(String),

    #[error("Invalid comparison pattern: {0}")]
    Pattern(#[from] regex::Error),

    // === Suite Errors ===
    #[error("Invalid suite definition: {0}")]
    Suite(String),

    #[error("Failed to parse suite file: {0}")]
    SuiteParse(#[from] serde_yaml::Error),

    #[error("Command '{command}' exited with status {code:?}")]
    CommandFailed { command: String, code: Option<i32> },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Internal Errors ===
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a hook failure from any displayable cause
    pub fn hook(message: impl Into<String>) -> Self {
        Self::Hook(message.into())
    }

    /// Create an execute failure from any displayable cause
    pub fn execute(message: impl Into<String>) -> Self {
        Self::Execute(message.into())
    }

    /// Create a verification failure
    pub fn verification(message: impl Into<String>) -> Self {
        Self::Verification(message.into())
    }
}
