//! `Delegate`: the observer interface driven by `Engine::step`/`run`
//! (spec.md §6). Purely observational -- every method takes `&self` and
//! shared references only, so the compiler enforces "must not mutate
//! engine/container state" structurally rather than by convention.

use sepro_core::Symbol;

/// Per-symbol counts raised by actuators during one step (spec.md §3,
/// "traps: multiset<Symbol>").
pub type TrapMultiset = Vec<(Symbol, usize)>;

/// Observer hooks around a run/step. No method may mutate engine or
/// container state; the trait's `&self` receiver and shared-reference
/// arguments make that a compile-time property, not a documented
/// convention.
pub trait Delegate {
    /// Called once before `run`'s step loop begins.
    fn will_run(&self) {}
    /// Called once after `run`'s step loop ends (by exhaustion or halt).
    fn did_run(&self) {}
    /// Called at the start of every `step()`, before dispatch.
    fn will_step(&self) {}
    /// Called at the end of every `step()`, after dispatch, before
    /// probing and trap delivery.
    fn did_step(&self) {}
    /// Called once per step if any traps were raised.
    fn handle_trap(&self, _traps: &TrapMultiset) {}
    /// Called once, the first time `run` observes the halt flag set
    /// after a step.
    fn handle_halt(&self) {}
}

/// A `Delegate` that does nothing, for callers that don't need hooks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDelegate;

impl Delegate for NullDelegate {}
