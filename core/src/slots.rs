//! `SlotMap` (bindings): `Symbol` → optional `ObjectRef`.
//!
//! A slot is *declared* on an object iff its key exists in the map;
//! *bound* iff the value is present. The set of declared slots is fixed
//! at object creation (`Container::createObject`); only bindings change.

use std::collections::BTreeMap;

use crate::object::ObjectRef;
use crate::symbol::Symbol;

/// Binding state for a fixed set of declared slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotMap(BTreeMap<Symbol, Option<ObjectRef>>);

impl SlotMap {
    /// Declare `slots` with no binding.
    #[must_use]
    pub fn declare(slots: impl IntoIterator<Item = Symbol>) -> Self {
        Self(slots.into_iter().map(|s| (s, None)).collect())
    }

    /// Whether `slot` is declared.
    #[must_use]
    pub fn is_declared(&self, slot: Symbol) -> bool {
        self.0.contains_key(&slot)
    }

    /// The current binding of `slot`, or `None` if unbound. Panics (via
    /// the caller's own assertion, not here) is not this method's job:
    /// it simply reports "no such declared slot" as `None`, same as
    /// "unbound"; callers that must distinguish the two check
    /// [`SlotMap::is_declared`] first, as `sepro-core::resolve` does.
    #[must_use]
    pub fn binding(&self, slot: Symbol) -> Option<ObjectRef> {
        self.0.get(&slot).copied().flatten()
    }

    /// Bind `slot` to `target`. No-op if `slot` is not declared.
    pub fn bind(&mut self, slot: Symbol, target: ObjectRef) {
        if let Some(entry) = self.0.get_mut(&slot) {
            *entry = Some(target);
        }
    }

    /// Clear the binding of `slot`, leaving it declared but unbound.
    /// No-op if `slot` is not declared.
    pub fn unbind(&mut self, slot: Symbol) {
        if let Some(entry) = self.0.get_mut(&slot) {
            *entry = None;
        }
    }

    /// Iterate declared slot names.
    pub fn declared(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.0.keys().copied()
    }

    /// Iterate `(slot, binding)` pairs for every declared slot, in slot
    /// name order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, Option<ObjectRef>)> + '_ {
        self.0.iter().map(|(&slot, &binding)| (slot, binding))
    }
}
