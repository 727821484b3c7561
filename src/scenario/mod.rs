//! Scenario model: lifecycle phases, leaf scenarios, and the sequence
//! composite
//!
//! A scenario is the unit of test behavior: an optional lifecycle, a
//! required `execute` producing a result, and attached mixins and verifiers.
//! Hooks are explicit optional fields iterated through the fixed [`Phase`]
//! list; absence of a hook is a documented no-op, never an error.

mod mixin;

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;

use crate::common::Result;
use crate::context::ExecutionContext;
use crate::observer::DispatchObserver;
use crate::runner::dispatch;
use crate::verify::Verifier;

pub use mixin::{AfterExecuteHook, Mixin, MixinHook, MixinInitHook};

/// Named lifecycle phases dispatched through the hook protocol.
///
/// The execute-bracketing `before_execute`/`after_execute` phases exist only
/// on mixins and are dispatched separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    BeforeAll,
    BeforeEach,
    AfterAll,
    AfterEach,
    Teardown,
}

impl Phase {
    /// Fixed dispatch order used when sweeping every named phase.
    pub const ALL: [Phase; 5] = [
        Phase::BeforeAll,
        Phase::BeforeEach,
        Phase::AfterAll,
        Phase::AfterEach,
        Phase::Teardown,
    ];

    /// Stable name used in diagnostics
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::BeforeAll => "before_all",
            Phase::BeforeEach => "before_each",
            Phase::AfterAll => "after_all",
            Phase::AfterEach => "after_each",
            Phase::Teardown => "teardown",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single hook invocation
pub type HookResult = Result<()>;

/// Scenario-owned hook: zero-argument, awaited by the dispatcher
pub type ScenarioHook = Box<dyn Fn() -> BoxFuture<'static, HookResult> + Send + Sync>;

/// Scenario `init`, receiving the run-scoped context
pub type InitHook =
    Box<dyn Fn(&ExecutionContext) -> BoxFuture<'static, HookResult> + Send + Sync>;

/// The required result-producing operation
pub type ExecuteFn<R> = Box<dyn Fn() -> BoxFuture<'static, Result<R>> + Send + Sync>;

/// Per-phase optional hook record for a scenario.
#[derive(Default)]
pub(crate) struct PhaseHooks {
    before_all: Option<ScenarioHook>,
    before_each: Option<ScenarioHook>,
    after_all: Option<ScenarioHook>,
    after_each: Option<ScenarioHook>,
    teardown: Option<ScenarioHook>,
}

impl PhaseHooks {
    pub(crate) fn get(&self, phase: Phase) -> Option<&ScenarioHook> {
        match phase {
            Phase::BeforeAll => self.before_all.as_ref(),
            Phase::BeforeEach => self.before_each.as_ref(),
            Phase::AfterAll => self.after_all.as_ref(),
            Phase::AfterEach => self.after_each.as_ref(),
            Phase::Teardown => self.teardown.as_ref(),
        }
    }

    fn set(&mut self, phase: Phase, hook: ScenarioHook) {
        let slot = match phase {
            Phase::BeforeAll => &mut self.before_all,
            Phase::BeforeEach => &mut self.before_each,
            Phase::AfterAll => &mut self.after_all,
            Phase::AfterEach => &mut self.after_each,
            Phase::Teardown => &mut self.teardown,
        };
        *slot = Some(hook);
    }
}

/// A unit of test behavior, polymorphic over two variants: a leaf producing
/// a concrete result, or a sequence replaying the protocol over children.
pub enum Scenario<R> {
    Leaf(LeafScenario<R>),
    Sequence(SequenceScenario<R>),
}

impl<R> Scenario<R> {
    pub fn description(&self) -> &str {
        match self {
            Scenario::Leaf(leaf) => leaf.description(),
            Scenario::Sequence(seq) => seq.description(),
        }
    }

    /// Whether this scenario is a container delegating to children
    pub fn is_container(&self) -> bool {
        matches!(self, Scenario::Sequence(_))
    }

    /// Attached mixins, in attachment order. Sequences carry none.
    pub(crate) fn mixins(&self) -> &[Arc<Mixin<R>>] {
        match self {
            Scenario::Leaf(leaf) => &leaf.mixins,
            Scenario::Sequence(_) => &[],
        }
    }
}

impl<R> From<LeafScenario<R>> for Scenario<R> {
    fn from(leaf: LeafScenario<R>) -> Self {
        Scenario::Leaf(leaf)
    }
}

impl<R> From<SequenceScenario<R>> for Scenario<R> {
    fn from(seq: SequenceScenario<R>) -> Self {
        Scenario::Sequence(seq)
    }
}

/// A leaf scenario: the required `execute` plus independently optional hooks.
///
/// Mixins and verifiers are attached behind `Arc` so one instance may be
/// shared across any number of scenarios.
pub struct LeafScenario<R> {
    pub(crate) description: String,
    pub(crate) init: Option<InitHook>,
    pub(crate) hooks: PhaseHooks,
    pub(crate) execute: ExecuteFn<R>,
    pub(crate) mixins: Vec<Arc<Mixin<R>>>,
    pub(crate) verifiers: Vec<Arc<dyn Verifier<R>>>,
}

impl<R> LeafScenario<R> {
    pub fn new<F, Fut>(description: impl Into<String>, execute: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R>> + Send + 'static,
    {
        Self {
            description: description.into(),
            init: None,
            hooks: PhaseHooks::default(),
            execute: Box::new(move || execute().boxed()),
            mixins: Vec::new(),
            verifiers: Vec::new(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Install the `init` hook, called once with the run-scoped context.
    ///
    /// The hook reads what it needs from the context before returning its
    /// future; the future itself does not borrow the context.
    pub fn on_init<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn(&ExecutionContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HookResult> + Send + 'static,
    {
        self.init = Some(Box::new(move |context| hook(context).boxed()));
        self
    }

    /// Install the hook for one named phase.
    pub fn on<F, Fut>(mut self, phase: Phase, hook: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HookResult> + Send + 'static,
    {
        self.hooks.set(phase, Box::new(move || hook().boxed()));
        self
    }

    /// Attach a mixin. Mixins dispatch in attachment order, always after the
    /// scenario's own hook for the same phase.
    pub fn with_mixin(mut self, mixin: Arc<Mixin<R>>) -> Self {
        self.mixins.push(mixin);
        self
    }

    /// Attach a verifier, consulted against the execute result.
    pub fn with_verifier(mut self, verifier: Arc<dyn Verifier<R>>) -> Self {
        self.verifiers.push(verifier);
        self
    }
}

/// Composite scenario: an ordered list of children driven through the full
/// per-scenario cycle, strictly in order, as one scenario.
///
/// A sequence carries no mixins or verifiers of its own; cross-cutting
/// behavior is attached to its children individually.
pub struct SequenceScenario<R> {
    pub(crate) description: String,
    pub(crate) children: Vec<Scenario<R>>,
}

impl<R> SequenceScenario<R> {
    pub fn new(description: impl Into<String>, children: Vec<Scenario<R>>) -> Self {
        Self {
            description: description.into(),
            children,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn children(&self) -> &[Scenario<R>] {
        &self.children
    }

    /// Forward the initialization pass to the children. The dispatcher does
    /// not recurse into containers on its own; the composite delegates so
    /// the same pass is reused at every containment level.
    pub fn init<'a>(
        &'a self,
        context: &'a ExecutionContext,
        observer: &'a dyn DispatchObserver,
    ) -> BoxFuture<'a, Result<()>> {
        dispatch::call_init_for_all(&self.children, context, observer)
    }

    /// Replay the full per-scenario cycle over each child, in list order.
    /// A child's cycle, verifiers included, completes before the next
    /// child's begins; children are never interleaved.
    pub fn execute<'a>(&'a self, observer: &'a dyn DispatchObserver) -> BoxFuture<'a, Result<()>>
    where
        R: Send + Sync,
    {
        Box::pin(async move {
            for child in &self.children {
                observer.scenario_started(child.description());
                dispatch::run_case(child, observer).await?;
            }
            Ok(())
        })
    }

    /// Sweep teardown over all children, after all children have executed.
    pub fn teardown<'a>(&'a self, observer: &'a dyn DispatchObserver) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            for child in &self.children {
                dispatch::call_hook(child, Phase::Teardown, observer).await?;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_order_is_fixed() {
        let names: Vec<&str> = Phase::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(
            names,
            ["before_all", "before_each", "after_all", "after_each", "teardown"]
        );
    }

    #[test]
    fn container_check_is_a_pattern_match() {
        let leaf: Scenario<String> =
            LeafScenario::new("leaf", || async { Ok("done".to_string()) }).into();
        let seq: Scenario<String> = SequenceScenario::new("seq", vec![]).into();
        assert!(!leaf.is_container());
        assert!(seq.is_container());
        assert_eq!(seq.description(), "seq");
    }
}
