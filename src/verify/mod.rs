//! Verifiers: predicate checks against a scenario's execute result
//!
//! Verifiers are stateless with respect to the scenario tree and are
//! consulted read-only, in attachment order; the first failure halts the
//! remaining verifiers for that scenario.

use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;

use crate::common::{Error, Result};

/// A predicate checker applied to a scenario's result after execution.
#[async_trait]
pub trait Verifier<R>: Send + Sync {
    /// Optional context attached to failure messages
    fn message(&self) -> Option<&str> {
        None
    }

    /// Check `result`, failing with [`Error::Verification`] when the
    /// configured predicate is not satisfied.
    async fn verify(&self, result: &R) -> Result<()>;
}

/// How [`StringVerifier`] compares the result against its comparison string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMode {
    Equals,
    Contains,
    StartsWith,
    EndsWith,
    /// Treat the comparison string as a regular expression
    Matches,
}

/// String predicate verifier with negatable comparison modes.
#[derive(Debug, Clone)]
pub struct StringVerifier {
    comparison: String,
    message: Option<String>,
    mode: ComparisonMode,
    negate: bool,
}

impl StringVerifier {
    /// Create an `Equals` verifier for `comparison`.
    pub fn new(comparison: impl Into<String>) -> Self {
        Self {
            comparison: comparison.into(),
            message: None,
            mode: ComparisonMode::Equals,
            negate: false,
        }
    }

    pub fn with_mode(mut self, mode: ComparisonMode) -> Self {
        self.mode = mode;
        self
    }

    /// Invert the predicate.
    pub fn negated(mut self) -> Self {
        self.negate = true;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn mismatch_message(&self, result: &str) -> String {
        let relation = match self.mode {
            ComparisonMode::Equals => "to equal",
            ComparisonMode::Contains => "to contain",
            ComparisonMode::StartsWith => "to start with",
            ComparisonMode::EndsWith => "to end with",
            ComparisonMode::Matches => "to match",
        };
        let negation = if self.negate { "not " } else { "" };
        let expectation = format!(
            "expected \"{result}\" {negation}{relation} \"{}\"",
            self.comparison
        );
        match &self.message {
            Some(message) => format!("{expectation} ({message})"),
            None => expectation,
        }
    }
}

#[async_trait]
impl Verifier<String> for StringVerifier {
    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    async fn verify(&self, result: &String) -> Result<()> {
        let matched = match self.mode {
            ComparisonMode::Equals => result == &self.comparison,
            ComparisonMode::Contains => result.contains(&self.comparison),
            ComparisonMode::StartsWith => result.starts_with(&self.comparison),
            ComparisonMode::EndsWith => result.ends_with(&self.comparison),
            ComparisonMode::Matches => Regex::new(&self.comparison)?.is_match(result),
        };
        if matched != self.negate {
            Ok(())
        } else {
            Err(Error::Verification(self.mismatch_message(result)))
        }
    }
}
