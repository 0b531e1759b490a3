//! Predicate evaluation (spec.md §4.2) and selector conjunction.

use crate::container::Container;
use crate::object::{Object, ObjectRef};
use crate::symbol::Symbol;
use crate::tags::TagList;

/// The boolean test a [`Predicate`] performs before negation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredicateKind {
    /// Always true.
    All,
    /// `t ⊆ object.tags`.
    TagSet(TagList),
    /// `object.counters[c] == 0` (false if `c` is absent).
    CounterZero(Symbol),
    /// `object.bindings[s]` is present.
    IsBound(Symbol),
}

/// A boolean test over one object, optionally dereferenced through a
/// named slot first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub kind: PredicateKind,
    pub is_negated: bool,
    pub in_slot: Option<Symbol>,
}

impl Predicate {
    /// Construct an unnegated, non-dereferenced predicate.
    #[must_use]
    pub fn new(kind: PredicateKind) -> Self {
        Self {
            kind,
            is_negated: false,
            in_slot: None,
        }
    }

    /// Negate this predicate.
    #[must_use]
    pub fn negated(mut self) -> Self {
        self.is_negated = !self.is_negated;
        self
    }

    /// Evaluate through the named slot first.
    #[must_use]
    pub fn in_slot(mut self, slot: Symbol) -> Self {
        self.in_slot = Some(slot);
        self
    }
}

fn base_matches(kind: &PredicateKind, object: &Object) -> bool {
    match kind {
        PredicateKind::All => true,
        PredicateKind::TagSet(t) => t.is_subset(object.tags()),
        PredicateKind::CounterZero(c) => object.counters().get(*c) == Some(0),
        PredicateKind::IsBound(s) => object.bindings().binding(*s).is_some(),
    }
}

/// Evaluate `predicate` against the object referred to by `target` under
/// `container`.
///
/// 1. If `predicate.in_slot` is set: look up the binding on `target` for
///    that slot. If unbound, return `false` unconditionally -- negation
///    does not flip this outcome.
/// 2. Otherwise compute the base boolean against `target` directly.
/// 3. Return `base XOR predicate.is_negated`.
#[must_use]
pub fn evaluate(container: &Container, predicate: &Predicate, target: ObjectRef) -> bool {
    let object = container
        .get(target)
        .expect("evaluate: target must exist in the container");

    let effective = match predicate.in_slot {
        Some(slot) => match object.bindings().binding(slot) {
            Some(bound) => bound,
            None => return false,
        },
        None => target,
    };
    let object = container
        .get(effective)
        .expect("evaluate: slot binding must reference a live object");
    let base = base_matches(&predicate.kind, object);
    base ^ predicate.is_negated
}

/// Evaluate every predicate in `predicates` against `target`; `true` iff
/// all hold (conjunction), short-circuiting on the first `false`.
#[must_use]
pub fn all_match(container: &Container, predicates: &[Predicate], target: ObjectRef) -> bool {
    predicates.iter().all(|p| evaluate(container, p, target))
}

/// Either "match every object" or a conjunction of predicates.
///
/// An [`crate::model::Actuator`] carries one `Selector` for its `this`
/// side and, for combined (cartesian) actuators, a second `Selector` for
/// its `other` side (`Actuator::combined_selector`); `Selector` itself
/// does not nest an "other" half.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    /// Matches every object.
    #[default]
    All,
    /// A conjunction of predicates.
    Match { predicates: Vec<Predicate> },
}

impl Selector {
    /// Whether this selector matches `target`. `Selector::All` always
    /// matches; `Selector::Match` conjoins `predicates`.
    #[must_use]
    pub fn matches(&self, container: &Container, target: ObjectRef) -> bool {
        match self {
            Self::All => true,
            Self::Match { predicates } => all_match(container, predicates, target),
        }
    }

    /// The left-side predicate list, if this is a `Match` selector.
    #[must_use]
    pub fn predicates(&self) -> Option<&[Predicate]> {
        match self {
            Self::All => None,
            Self::Match { predicates } => Some(predicates),
        }
    }
}
