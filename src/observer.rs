//! Injectable diagnostics seam for the dispatch layer
//!
//! The dispatch core has no process-wide logging dependency: it reports
//! run/scenario lifecycle events and hook presence/absence through this
//! trait. [`TracingObserver`] is the default and forwards everything to
//! `tracing`; [`NullObserver`] silences everything. Observers never affect
//! control flow.

use tracing::{debug, info, warn};

/// Observes dispatch-layer events. Every method is a no-op by default.
pub trait DispatchObserver: Send + Sync {
    /// A run started
    fn run_started(&self, _runner: &str) {}

    /// A run finished, teardown sweep included
    fn run_finished(&self, _runner: &str) {}

    /// A scenario is about to be driven through its cycle
    fn scenario_started(&self, _scenario: &str) {}

    /// A present hook is being invoked
    fn hook_called(&self, _participant: &str, _phase: &str) {}

    /// An absent hook was skipped as a no-op
    fn hook_missing(&self, _participant: &str, _phase: &str) {}

    /// A verifier is being consulted against the execute result
    fn verifier_called(&self, _scenario: &str, _index: usize) {}

    /// A hook error was superseded by an earlier failure of the same case
    fn hook_suppressed(&self, _participant: &str, _phase: &str, _detail: &str) {}
}

/// Default observer: writes dispatch diagnostics to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl DispatchObserver for TracingObserver {
    fn run_started(&self, runner: &str) {
        info!(runner, "starting runner");
    }

    fn run_finished(&self, runner: &str) {
        info!(runner, "runner complete");
    }

    fn scenario_started(&self, scenario: &str) {
        info!(scenario, "executing scenario");
    }

    fn hook_called(&self, participant: &str, phase: &str) {
        debug!(participant, phase, "calling hook");
    }

    fn hook_missing(&self, participant: &str, phase: &str) {
        debug!(participant, phase, "no hook defined, skipping");
    }

    fn verifier_called(&self, scenario: &str, index: usize) {
        debug!(scenario, index, "running verifier");
    }

    fn hook_suppressed(&self, participant: &str, phase: &str, detail: &str) {
        warn!(participant, phase, detail, "hook error superseded by earlier failure");
    }
}

/// Observer that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl DispatchObserver for NullObserver {}
