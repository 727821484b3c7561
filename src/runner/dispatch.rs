//! The hook-dispatch protocol
//!
//! Three dispatch operations applied uniformly whether scenarios are flat
//! (driven by the [`Runner`](super::Runner)) or nested (driven by a
//! [`SequenceScenario`](crate::scenario::SequenceScenario)):
//!
//! 1. the initialization pass ([`call_init_for_all`]),
//! 2. named-phase dispatch ([`call_hook`]),
//! 3. around-execute dispatch ([`call_before_execute`] /
//!    [`call_after_execute`]).
//!
//! Ordering guarantees: the scenario's own hook for a phase completes before
//! any mixin's hook for the same phase begins; mixins run strictly in
//! attachment order. Every invocation is awaited before the next starts.
//!
//! Failure semantics: fail-fast. Nothing here catches, retries, or does
//! partial-failure bookkeeping; the first error aborts the remaining hooks
//! of that phase for that scenario and propagates to the caller.

use futures_util::future::BoxFuture;

use crate::common::Result;
use crate::context::ExecutionContext;
use crate::observer::DispatchObserver;
use crate::scenario::{Phase, Scenario};

/// Initialization pass: for each scenario in order, its `init` (if present),
/// then each attached mixin's `init` in attachment order.
///
/// The pass does not recurse into containers by itself; a sequence
/// scenario's own `init` forwards the pass to its children.
pub fn call_init_for_all<'a, R>(
    scenarios: &'a [Scenario<R>],
    context: &'a ExecutionContext,
    observer: &'a dyn DispatchObserver,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        for scenario in scenarios {
            match scenario {
                Scenario::Leaf(leaf) => {
                    match &leaf.init {
                        Some(init) => {
                            observer.hook_called(leaf.description(), "init");
                            init(context).await?;
                        }
                        None => observer.hook_missing(leaf.description(), "init"),
                    }
                    for mixin in &leaf.mixins {
                        match &mixin.init {
                            Some(init) => {
                                observer.hook_called(mixin.description(), "init");
                                init(context, scenario).await?;
                            }
                            None => observer.hook_missing(mixin.description(), "init"),
                        }
                    }
                }
                Scenario::Sequence(seq) => {
                    observer.hook_called(seq.description(), "init");
                    seq.init(context, observer).await?;
                }
            }
        }
        Ok(())
    })
}

/// Named-phase dispatch: the scenario's own hook first, then each mixin's
/// hook with the owning scenario as its argument, in attachment order.
/// Absence of any hook is an observed no-op.
pub fn call_hook<'a, R>(
    scenario: &'a Scenario<R>,
    phase: Phase,
    observer: &'a dyn DispatchObserver,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        match scenario {
            Scenario::Leaf(leaf) => {
                match leaf.hooks.get(phase) {
                    Some(hook) => {
                        observer.hook_called(leaf.description(), phase.as_str());
                        hook().await?;
                    }
                    None => observer.hook_missing(leaf.description(), phase.as_str()),
                }
                for mixin in &leaf.mixins {
                    match mixin.hook(phase) {
                        Some(hook) => {
                            observer.hook_called(mixin.description(), phase.as_str());
                            hook(scenario).await?;
                        }
                        None => observer.hook_missing(mixin.description(), phase.as_str()),
                    }
                }
            }
            Scenario::Sequence(seq) => match phase {
                // teardown is the only named phase a sequence implements:
                // a sweep over its children
                Phase::Teardown => {
                    observer.hook_called(seq.description(), phase.as_str());
                    seq.teardown(observer).await?;
                }
                _ => observer.hook_missing(seq.description(), phase.as_str()),
            },
        }
        Ok(())
    })
}

/// Around-execute dispatch: every mixin's `before_execute`, in attachment
/// order, each awaited before the next.
pub async fn call_before_execute<R>(
    scenario: &Scenario<R>,
    observer: &dyn DispatchObserver,
) -> Result<()> {
    for mixin in scenario.mixins() {
        match &mixin.before_execute {
            Some(hook) => {
                observer.hook_called(mixin.description(), "before_execute");
                hook(scenario).await?;
            }
            None => observer.hook_missing(mixin.description(), "before_execute"),
        }
    }
    Ok(())
}

/// Around-execute dispatch: every mixin's `after_execute`, in attachment
/// order. `result` is `None` when `execute` itself failed.
pub async fn call_after_execute<R>(
    scenario: &Scenario<R>,
    result: Option<&R>,
    observer: &dyn DispatchObserver,
) -> Result<()> {
    for mixin in scenario.mixins() {
        match &mixin.after_execute {
            Some(hook) => {
                observer.hook_called(mixin.description(), "after_execute");
                hook(scenario, result).await?;
            }
            None => observer.hook_missing(mixin.description(), "after_execute"),
        }
    }
    Ok(())
}

/// Execute-and-verify body of one scenario.
///
/// For a leaf: `before_execute` mixins, `execute`, `after_execute` mixins,
/// then the verifiers in attachment order, first failure halting the rest.
/// `after_execute` always runs; when `execute` fails the hooks see `None`,
/// the execute error takes precedence over any hook error raised during the
/// sweep, and no verifier runs.
///
/// For a sequence: the ordered replay of the full cycle over its children.
pub fn run_body<'a, R: Send + Sync>(
    scenario: &'a Scenario<R>,
    observer: &'a dyn DispatchObserver,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        match scenario {
            Scenario::Leaf(leaf) => {
                call_before_execute(scenario, observer).await?;
                match (leaf.execute)().await {
                    Ok(result) => {
                        call_after_execute(scenario, Some(&result), observer).await?;
                        for (index, verifier) in leaf.verifiers.iter().enumerate() {
                            observer.verifier_called(leaf.description(), index);
                            verifier.verify(&result).await?;
                        }
                        Ok(())
                    }
                    Err(err) => {
                        if let Err(sweep_err) =
                            call_after_execute(scenario, None, observer).await
                        {
                            observer.hook_suppressed(
                                leaf.description(),
                                "after_execute",
                                &sweep_err.to_string(),
                            );
                        }
                        Err(err)
                    }
                }
            }
            Scenario::Sequence(seq) => seq.execute(observer).await,
        }
    })
}

/// Full per-scenario cycle, replayed inline for sequence children: the named
/// phases bracket the body exactly as the harness brackets a top-level case.
pub fn run_case<'a, R: Send + Sync>(
    scenario: &'a Scenario<R>,
    observer: &'a dyn DispatchObserver,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        call_hook(scenario, Phase::BeforeAll, observer).await?;
        call_hook(scenario, Phase::BeforeEach, observer).await?;
        run_body(scenario, observer).await?;
        call_hook(scenario, Phase::AfterEach, observer).await?;
        call_hook(scenario, Phase::AfterAll, observer).await?;
        Ok(())
    })
}
