//! Run-scoped execution context
//!
//! One [`ExecutionContext`] is built per `Runner::run()` invocation and the
//! same instance is passed by reference to every scenario and mixin `init`
//! hook in that run, so all participants observe one consistent set of
//! run-scoped parameters.

use serde_json::Value;

/// Immutable handle describing the runner that owns the current run.
#[derive(Debug, Clone)]
pub struct RunnerHandle {
    description: String,
    scenarios: Vec<String>,
}

impl RunnerHandle {
    pub fn new(description: impl Into<String>, scenarios: Vec<String>) -> Self {
        Self {
            description: description.into(),
            scenarios,
        }
    }

    /// Description of the runner driving this run
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Descriptions of the top-level scenarios, in registration order
    pub fn scenarios(&self) -> &[String] {
        &self.scenarios
    }
}

/// Initialization payload shared by every participant in a run.
///
/// Immutable after construction; construction cannot fail. `params` is an
/// open payload the caller shapes however the surrounding collaborators
/// require.
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    runner: RunnerHandle,
    params: Value,
}

impl ExecutionContext {
    pub fn new(runner: RunnerHandle, params: Value) -> Self {
        Self { runner, params }
    }

    pub fn runner(&self) -> &RunnerHandle {
        &self.runner
    }

    pub fn params(&self) -> &Value {
        &self.params
    }
}
