//! `ObjectRef` and `Object`: the rewriteable unit and its stable handle.

use crate::counters::CounterMap;
use crate::slots::SlotMap;
use crate::symbol::Symbol;
use crate::tags::TagList;

/// A stable, copyable handle to an [`Object`] owned by some [`crate::container::Container`].
///
/// Not a lifetime token: the referenced object may be mutated (or, in
/// principle, never removed — the container only ever grows within a
/// run; see `Container::removeAll`) freely without invalidating the
/// handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectRef(u64);

impl ObjectRef {
    /// Construct a handle from a raw id. Only `Container` should call
    /// this in practice; exposed for tests and fixtures that need to
    /// construct a handle without a live container.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw id backing this handle.
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// The rewriteable unit: tags, counters, and slot bindings, identified
/// only by its [`ObjectRef`].
#[derive(Debug, Clone)]
pub struct Object {
    id: ObjectRef,
    tags: TagList,
    counters: CounterMap,
    bindings: SlotMap,
}

impl Object {
    pub(crate) fn new(id: ObjectRef, tags: TagList, counters: CounterMap, bindings: SlotMap) -> Self {
        Self {
            id,
            tags,
            counters,
            bindings,
        }
    }

    /// This object's stable identifier.
    #[must_use]
    pub fn id(&self) -> ObjectRef {
        self.id
    }

    /// The object's tag set.
    #[must_use]
    pub fn tags(&self) -> &TagList {
        &self.tags
    }

    /// Mutable access to the tag set, for the modifier executor.
    pub fn tags_mut(&mut self) -> &mut TagList {
        &mut self.tags
    }

    /// The object's counters.
    #[must_use]
    pub fn counters(&self) -> &CounterMap {
        &self.counters
    }

    /// Mutable access to the counters, for the modifier executor.
    pub fn counters_mut(&mut self) -> &mut CounterMap {
        &mut self.counters
    }

    /// The object's slot bindings.
    #[must_use]
    pub fn bindings(&self) -> &SlotMap {
        &self.bindings
    }

    /// Mutable access to the bindings, for the modifier executor.
    pub fn bindings_mut(&mut self) -> &mut SlotMap {
        &mut self.bindings
    }

    /// Whether `slot` was declared at creation time.
    #[must_use]
    pub fn declares_slot(&self, slot: Symbol) -> bool {
        self.bindings.is_declared(slot)
    }
}
