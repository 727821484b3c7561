//! Mixins: reusable bundles of optional lifecycle callbacks
//!
//! A mixin injects cross-cutting behavior (timing, counters, resource
//! capture) into one or more scenarios without subclassing. Every hook
//! except `init` receives the owning scenario as an argument; a mixin
//! attached behind an `Arc` may be shared across scenarios.

use std::future::Future;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;

use super::{HookResult, Phase, Scenario};
use crate::context::ExecutionContext;

/// Mixin hook for a named phase, receiving the owning scenario.
///
/// The hook reads what it needs from the scenario before returning its
/// future; the future itself does not borrow the scenario.
pub type MixinHook<R> =
    Box<dyn Fn(&Scenario<R>) -> BoxFuture<'static, HookResult> + Send + Sync>;

/// Mixin `init`, receiving the run-scoped context and the owning scenario
pub type MixinInitHook<R> = Box<
    dyn Fn(&ExecutionContext, &Scenario<R>) -> BoxFuture<'static, HookResult> + Send + Sync,
>;

/// Mixin `after_execute`, receiving the execute result, or `None` when
/// `execute` itself failed
pub type AfterExecuteHook<R> = Box<
    dyn Fn(&Scenario<R>, Option<&R>) -> BoxFuture<'static, HookResult> + Send + Sync,
>;

/// A named, optional set of lifecycle callbacks attachable to scenarios.
pub struct Mixin<R> {
    pub(crate) description: String,
    pub(crate) init: Option<MixinInitHook<R>>,
    pub(crate) before_all: Option<MixinHook<R>>,
    pub(crate) before_each: Option<MixinHook<R>>,
    pub(crate) after_all: Option<MixinHook<R>>,
    pub(crate) after_each: Option<MixinHook<R>>,
    pub(crate) teardown: Option<MixinHook<R>>,
    pub(crate) before_execute: Option<MixinHook<R>>,
    pub(crate) after_execute: Option<AfterExecuteHook<R>>,
}

impl<R> Mixin<R> {
    /// Create a mixin with no hooks. Every absent hook is a no-op.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            init: None,
            before_all: None,
            before_each: None,
            after_all: None,
            after_each: None,
            teardown: None,
            before_execute: None,
            after_execute: None,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Install the `init` hook.
    pub fn on_init<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn(&ExecutionContext, &Scenario<R>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HookResult> + Send + 'static,
    {
        self.init = Some(Box::new(move |context, scenario| {
            hook(context, scenario).boxed()
        }));
        self
    }

    /// Install the hook for one named phase.
    pub fn on<F, Fut>(mut self, phase: Phase, hook: F) -> Self
    where
        F: Fn(&Scenario<R>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HookResult> + Send + 'static,
    {
        let boxed: MixinHook<R> = Box::new(move |scenario| hook(scenario).boxed());
        let slot = match phase {
            Phase::BeforeAll => &mut self.before_all,
            Phase::BeforeEach => &mut self.before_each,
            Phase::AfterAll => &mut self.after_all,
            Phase::AfterEach => &mut self.after_each,
            Phase::Teardown => &mut self.teardown,
        };
        *slot = Some(boxed);
        self
    }

    /// Install the execute-bracketing `before_execute` hook.
    pub fn on_before_execute<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn(&Scenario<R>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HookResult> + Send + 'static,
    {
        self.before_execute = Some(Box::new(move |scenario| hook(scenario).boxed()));
        self
    }

    /// Install the execute-bracketing `after_execute` hook. It always runs,
    /// receiving `None` when `execute` failed.
    pub fn on_after_execute<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn(&Scenario<R>, Option<&R>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HookResult> + Send + 'static,
    {
        self.after_execute = Some(Box::new(move |scenario, result| {
            hook(scenario, result).boxed()
        }));
        self
    }

    /// Look up the hook for one named phase.
    pub(crate) fn hook(&self, phase: Phase) -> Option<&MixinHook<R>> {
        match phase {
            Phase::BeforeAll => self.before_all.as_ref(),
            Phase::BeforeEach => self.before_each.as_ref(),
            Phase::AfterAll => self.after_all.as_ref(),
            Phase::AfterEach => self.after_each.as_ref(),
            Phase::Teardown => self.teardown.as_ref(),
        }
    }
}
