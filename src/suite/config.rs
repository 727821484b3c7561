//! Suite definition types
//!
//! Defines the data structures for deserializing YAML suites.

use serde::Deserialize;

use crate::verify::ComparisonMode;

/// A complete suite loaded from a YAML file
#[derive(Deserialize, Debug)]
pub struct SuiteConfig {
    /// Name of the suite; becomes the runner (group) description
    pub name: String,
    /// Opaque parameters exposed to `init` hooks through the execution
    /// context
    #[serde(default)]
    pub params: serde_json::Value,
    /// Top-level scenarios, in registration order
    pub scenarios: Vec<ScenarioConfig>,
}

/// One scenario entry: exactly one of `shell` or `sequence`
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    /// Name of the scenario; becomes its case name
    pub name: String,
    /// Shell command whose trimmed stdout is the scenario result
    pub shell: Option<String>,
    /// Child scenarios replayed strictly in order
    pub sequence: Option<Vec<ScenarioConfig>>,
    /// String verifiers consulted against the result, in order
    #[serde(default)]
    pub verify: Vec<VerifyConfig>,
}

/// Builds one string verifier
#[derive(Deserialize, Debug)]
pub struct VerifyConfig {
    /// The comparison string (or regex for `matches`)
    pub comparison: String,
    /// Comparison mode (default: `equals`)
    #[serde(default = "default_mode")]
    pub mode: ComparisonMode,
    /// Invert the predicate
    #[serde(default)]
    pub negate: bool,
    /// Context appended to failure messages
    pub message: Option<String>,
}

fn default_mode() -> ComparisonMode {
    ComparisonMode::Equals
}
