//! Top-level run driver
//!
//! The [`Runner`] owns a flat ordered list of scenarios and drives one run:
//! one [`ExecutionContext`], one initialization pass, one registered harness
//! group with one case per scenario, then a final teardown sweep after the
//! harness has executed every case.

pub mod dispatch;

use std::sync::Arc;

use serde_json::Value;

use crate::common::Result;
use crate::context::{ExecutionContext, RunnerHandle};
use crate::harness::{CaseReport, Harness, TestCase};
use crate::observer::{DispatchObserver, TracingObserver};
use crate::scenario::{Phase, Scenario};

use dispatch::{call_hook, call_init_for_all, run_body};

/// Drives top-level scenarios through one run.
pub struct Runner<R> {
    description: String,
    scenarios: Vec<Scenario<R>>,
    params: Value,
    observer: Arc<dyn DispatchObserver>,
}

impl<R> std::fmt::Debug for Runner<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runner")
            .field("description", &self.description)
            .field("scenarios", &self.scenarios.len())
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl<R> Runner<R> {
    pub fn new(description: impl Into<String>, scenarios: Vec<Scenario<R>>) -> Self {
        Self {
            description: description.into(),
            scenarios,
            params: Value::Null,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Opaque payload exposed to every `init` through the execution context
    pub fn with_params(mut self, params: Value) -> Self {
        self.params = params;
        self
    }

    /// Replace the default `tracing` observer.
    pub fn with_observer(mut self, observer: Arc<dyn DispatchObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn scenarios(&self) -> &[Scenario<R>] {
        &self.scenarios
    }

    /// Drive one run on `harness`.
    ///
    /// Builds one context, runs the initialization pass over all top-level
    /// scenarios (sequences forward it to their children), registers one
    /// case per scenario with the harness, and sweeps teardown over every
    /// top-level scenario once the harness has executed all cases. A failing
    /// case never aborts its siblings or the teardown sweep; initialization
    /// and teardown errors propagate.
    pub async fn run(&self, harness: &dyn Harness) -> Result<Vec<CaseReport>>
    where
        R: Send + Sync,
    {
        let observer: &dyn DispatchObserver = self.observer.as_ref();
        observer.run_started(&self.description);

        let handle = RunnerHandle::new(
            self.description.clone(),
            self.scenarios
                .iter()
                .map(|s| s.description().to_string())
                .collect(),
        );
        let context = ExecutionContext::new(handle, self.params.clone());
        call_init_for_all(&self.scenarios, &context, observer).await?;

        let cases: Vec<TestCase<'_>> = self
            .scenarios
            .iter()
            .map(|scenario| {
                observer.scenario_started(scenario.description());
                TestCase {
                    name: scenario.description().to_string(),
                    before_all: Box::new(move || {
                        call_hook(scenario, Phase::BeforeAll, observer)
                    }),
                    before_each: Box::new(move || {
                        call_hook(scenario, Phase::BeforeEach, observer)
                    }),
                    body: Box::new(move || run_body(scenario, observer)),
                    after_each: Box::new(move || {
                        call_hook(scenario, Phase::AfterEach, observer)
                    }),
                    after_all: Box::new(move || {
                        call_hook(scenario, Phase::AfterAll, observer)
                    }),
                }
            })
            .collect();

        let reports = harness.run_group(&self.description, cases).await;

        // final sweep, not interleaved per scenario
        for scenario in &self.scenarios {
            call_hook(scenario, Phase::Teardown, observer).await?;
        }

        observer.run_finished(&self.description);
        Ok(reports)
    }
}
