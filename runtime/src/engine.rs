//! `Engine`: owns a [`Model`] and a [`Container`], runs the step/run loop
//! (spec.md §4.6).

use std::collections::HashMap;
use std::io::Write;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use sepro_core::container::Container;
use sepro_core::model::Model;
use sepro_core::object::ObjectRef;
use sepro_core::Symbol;

use crate::config::EngineConfig;
use crate::delegate::{Delegate, NullDelegate, TrapMultiset};
use crate::dispatch::dispatch;
use crate::error::EngineError;
use crate::instantiate::{initialize, instantiate as instantiate_one};
use crate::logger::{Logger, Record};
use crate::probe::probe;

/// Orchestrates one run of a compiled [`Model`] against a live
/// [`Container`]: shuffles and dispatches actuators each step, collects
/// traps, honors the halt flag, and drives the optional [`Delegate`]/
/// [`Logger`] observer hooks.
///
/// `Engine` holds no references to its observers across calls -- `step`
/// and `run` take them as parameters -- so one `Engine` can be driven by
/// different observers (or none) across separate calls without
/// re-construction.
pub struct Engine {
    model: Model,
    container: Container,
    rng: StdRng,
    step_count: u32,
    is_halted: bool,
    traps: TrapMultiset,
    notifications: Vec<Symbol>,
}

impl Engine {
    /// Build an engine over `model` with a fresh, empty [`Container`].
    /// No world is instantiated yet; call [`Engine::initialize`] before
    /// stepping if the model relies on `ROOT` or named instances.
    #[must_use]
    pub fn new(model: Model, config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            model,
            container: Container::new(),
            rng,
            step_count: 0,
            is_halted: false,
            traps: TrapMultiset::new(),
            notifications: Vec::new(),
        }
    }

    /// Number of steps run so far.
    #[must_use]
    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    /// Whether the most recently dispatched step left the halt flag set.
    /// [`Engine::run`] stops before dispatching another step once this is
    /// true, but a caller driving [`Engine::step`] directly in a loop of
    /// its own can observe it cleared by a later step whose actuators
    /// matched but did not request `HALT` (spec.md §9, Open Question 1).
    #[must_use]
    pub fn is_halted(&self) -> bool {
        self.is_halted
    }

    /// Read-only access to the live container, for probing or
    /// inspection between steps.
    #[must_use]
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Populate the container from the named world.
    ///
    /// # Errors
    ///
    /// Forwards [`sepro_core::ModelError::NoSuchWorld`]/`NoSuchConcept`
    /// from `sepro-core`.
    pub fn initialize(&mut self, world_name: Symbol) -> Result<HashMap<Symbol, ObjectRef>, EngineError> {
        Ok(initialize(&mut self.container, &self.model, world_name)?)
    }

    /// Create one additional instance of `concept_name` in the live
    /// container, outside of world instantiation.
    ///
    /// # Errors
    ///
    /// Forwards [`sepro_core::ModelError::NoSuchConcept`].
    pub fn instantiate(
        &mut self,
        concept_name: Symbol,
        initializers: &[sepro_core::model::Initializer],
    ) -> Result<ObjectRef, EngineError> {
        Ok(instantiate_one(&mut self.container, &self.model, concept_name, initializers)?)
    }

    /// Run one step: reset the trap multiset, shuffle the model's
    /// actuators with this engine's RNG, dispatch each in the shuffled
    /// order, fold traps and the halt flag across the step, then
    /// increment the step counter.
    ///
    /// The halt flag is an unconditional assignment
    /// (`is_halted = actuator.does_halt`), not an OR, for every actuator
    /// that had at least one candidate pair to consider -- a later such
    /// actuator with `does_halt == false` clears a halt an earlier one in
    /// the same step requested. This mirrors the reference engine's
    /// documented quirk (spec.md §9, Open Question 1) rather than the
    /// more defensive OR a new design would pick. Traps and
    /// notifications are both folded in unconditionally, once per
    /// dispatched actuator regardless of whether it matched anything --
    /// spec.md §4.5 lists all three as per-actuator side effects "after
    /// matches processed" with no match condition attached, and §8 states
    /// that explicitly for traps.
    pub fn step(&mut self) {
        let mut order: Vec<usize> = (0..self.model.actuators.len()).collect();
        order.shuffle(&mut self.rng);
        log::trace!("step {}: dispatch order {:?}", self.step_count, order);
        self.step_in_order(&order);
    }

    /// The body of [`Engine::step`], parameterized on dispatch order so
    /// the shuffle itself can be swapped out in tests.
    fn step_in_order(&mut self, order: &[usize]) {
        self.traps.clear();
        self.notifications.clear();

        for &idx in order {
            let actuator = &self.model.actuators[idx];
            let matched = dispatch(&mut self.container, actuator);
            log::trace!("step {}: dispatched actuator #{idx} (matched={matched})", self.step_count);

            for &trap in &actuator.traps {
                bump_trap(&mut self.traps, trap);
            }
            self.notifications.extend(actuator.notifications.iter().copied());
            if matched {
                self.is_halted = actuator.does_halt;
            }
        }

        log::debug!(
            "step {} complete: {} traps, halted={}",
            self.step_count,
            self.traps.len(),
            self.is_halted
        );
        self.step_count += 1;
    }

    /// Run up to `steps` steps, stopping early if [`Engine::is_halted`]
    /// becomes true. Drives `delegate`'s hooks around the loop and each
    /// step, and (if `logger` is `Some`) probes and reports a [`Record`]
    /// once before the loop and once after every step.
    ///
    /// Returns the number of steps actually executed.
    pub fn run(&mut self, steps: u32, delegate: &dyn Delegate, logger: Option<&dyn Logger>) -> u32 {
        delegate.will_run();
        if let Some(logger) = logger {
            logger.logging_will_start(&self.model.measures, steps);
            logger.log_record(self.step_count, &self.probe_now());
        }

        let mut ran = 0;
        for _ in 0..steps {
            if self.is_halted {
                break;
            }

            delegate.will_step();
            self.step();
            delegate.did_step();
            ran += 1;

            if let Some(logger) = logger {
                let record: Record = self.probe_now();
                logger.log_record(self.step_count, &record);
                for &notification in self.pending_notifications() {
                    logger.log_notification(self.step_count, notification);
                }
            }
            if !self.traps.is_empty() {
                delegate.handle_trap(&self.traps);
            }
            if self.is_halted {
                delegate.handle_halt();
            }
        }

        if let Some(logger) = logger {
            logger.logging_did_end(ran);
        }
        delegate.did_run();
        ran
    }

    fn probe_now(&self) -> Record {
        probe(&self.container, &self.model.measures)
    }

    /// Notification symbols raised by the most recently dispatched step,
    /// in dispatch order, one entry per dispatched actuator regardless of
    /// whether it matched anything (spec.md §4.5, same as traps). Unlike
    /// traps these are not deduplicated into a multiset -- spec.md §4.6
    /// reports each occurrence to the logger individually.
    fn pending_notifications(&self) -> &[Symbol] {
        &self.notifications
    }

    /// Write a human-readable dump of every live object (id, tags,
    /// counters, bindings) to `writer`, for test fixtures and manual
    /// inspection. Mirrors the teacher's `debugDump`/`dump_state`
    /// fixture helper.
    ///
    /// # Errors
    ///
    /// Propagates any I/O error from `writer`.
    pub fn debug_dump(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer, "step {} (halted={})", self.step_count, self.is_halted)?;
        for id in self.container.select(&sepro_core::predicate::Selector::All) {
            let Some(obj) = self.container.get(id) else { continue };
            writeln!(writer, "  object {:?}", id)?;
            writeln!(writer, "    tags: {:?}", obj.tags().iter().collect::<Vec<_>>())?;
            writeln!(writer, "    counters: {:?}", obj.counters().iter().collect::<Vec<_>>())?;
            writeln!(writer, "    bindings: {:?}", obj.bindings().iter().collect::<Vec<_>>())?;
        }
        Ok(())
    }
}

fn bump_trap(traps: &mut TrapMultiset, symbol: Symbol) {
    if let Some(entry) = traps.iter_mut().find(|(s, _)| *s == symbol) {
        entry.1 += 1;
    } else {
        traps.push((symbol, 1));
    }
}
