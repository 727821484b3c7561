//! stagehand - scenario orchestration for end-to-end test suites
//!
//! Composes reusable scenarios with mixins (cross-cutting capability
//! bundles), drives them through a fixed lifecycle of phases, and checks
//! each produced result against a list of verifiers. The engine only
//! orchestrates *when* each participant's optional hook runs and in what
//! order; scheduling of the registered test cases belongs to the
//! [`harness::Harness`] collaborator.
//!
//! The lifecycle, per scenario and per run:
//!
//! ```text
//! init -> { before_all -> (before_each -> execute -> verify -> after_each)*
//!           -> after_all } -> teardown
//! ```
//!
//! All invocations are awaited sequentially; there is no parallel execution
//! of scenarios, mixins, or verifiers within the engine.

pub mod common;
pub mod context;
pub mod harness;
pub mod observer;
pub mod runner;
pub mod scenario;
pub mod suite;
pub mod verify;

pub use common::{Error, Result};
pub use context::{ExecutionContext, RunnerHandle};
pub use harness::{CaseReport, Harness, PhaseFn, SequentialHarness, TestCase};
pub use observer::{DispatchObserver, NullObserver, TracingObserver};
pub use runner::Runner;
pub use scenario::{
    HookResult, LeafScenario, Mixin, Phase, Scenario, SequenceScenario,
};
pub use verify::{ComparisonMode, StringVerifier, Verifier};
