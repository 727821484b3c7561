//! Seam to the external test-execution harness
//!
//! The engine never schedules test cases itself: the [`Runner`] registers
//! one group with one [`TestCase`] per scenario, each carrying five phase
//! callbacks, and trusts the harness to invoke them. Scheduling, repetition
//! of the inner cycle (retries), and per-case failure reporting are the
//! harness's contract.
//!
//! [`Runner`]: crate::runner::Runner

use async_trait::async_trait;
use futures_util::future::BoxFuture;
use tracing::{debug, info};

use crate::common::Result;

/// One repeatably-invokable phase callback registered with the harness.
pub type PhaseFn<'run> = Box<dyn Fn() -> BoxFuture<'run, Result<()>> + Send + Sync + 'run>;

/// A named test case: the phase callbacks plus the execute/verify body of
/// one scenario. The harness may invoke `before_each`/`body`/`after_each`
/// any number of times; `before_all` and `after_all` bracket them.
pub struct TestCase<'run> {
    pub name: String,
    pub before_all: PhaseFn<'run>,
    pub before_each: PhaseFn<'run>,
    pub body: PhaseFn<'run>,
    pub after_each: PhaseFn<'run>,
    pub after_all: PhaseFn<'run>,
}

/// Per-case outcome reported back by the harness.
#[derive(Debug)]
pub struct CaseReport {
    pub name: String,
    pub outcome: Result<()>,
}

impl CaseReport {
    pub fn passed(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// External test-execution harness contract.
#[async_trait]
pub trait Harness: Send + Sync {
    /// Execute every registered case of one group and report per-case
    /// outcomes. Invocation order across cases is the harness's choice.
    async fn run_group(&self, group: &str, cases: Vec<TestCase<'_>>) -> Vec<CaseReport>;
}

/// In-process harness that runs cases sequentially in registration order.
///
/// Each case runs as `before_all` → (`before_each` → body → `after_each`)
/// × `iterations` → `after_all`, fail-fast within the case. A failed case is
/// recorded in its report and the remaining cases still run.
#[derive(Debug, Clone)]
pub struct SequentialHarness {
    iterations: usize,
}

impl SequentialHarness {
    pub fn new() -> Self {
        Self { iterations: 1 }
    }

    /// Repeat each case's inner `before_each`/body/`after_each` cycle.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations.max(1);
        self
    }

    async fn run_case(&self, case: &TestCase<'_>) -> Result<()> {
        (case.before_all)().await?;
        for iteration in 0..self.iterations {
            debug!(case = %case.name, iteration, "running case body");
            (case.before_each)().await?;
            (case.body)().await?;
            (case.after_each)().await?;
        }
        (case.after_all)().await?;
        Ok(())
    }
}

impl Default for SequentialHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Harness for SequentialHarness {
    async fn run_group(&self, group: &str, cases: Vec<TestCase<'_>>) -> Vec<CaseReport> {
        info!(group, cases = cases.len(), "running group");
        let mut reports = Vec::with_capacity(cases.len());
        for case in &cases {
            let outcome = self.run_case(case).await;
            match &outcome {
                Ok(()) => debug!(case = %case.name, "case passed"),
                Err(err) => info!(case = %case.name, error = %err, "case failed"),
            }
            reports.push(CaseReport {
                name: case.name.clone(),
                outcome,
            });
        }
        reports
    }
}
