//! `Container`: owns all [`Object`]s, assigns identifiers, exposes
//! selection by predicate list, designates a root.

use std::collections::BTreeMap;

use crate::counters::CounterMap;
use crate::object::{Object, ObjectRef};
use crate::predicate::{Predicate, Selector};
use crate::slots::SlotMap;
use crate::symbol::Symbol;
use crate::tags::TagList;

/// The arena owning all [`Object`]s during a run.
///
/// Objects are owned solely by the container; elsewhere they are
/// referenced by [`ObjectRef`]. Created empty; populated by
/// `create_object`/instantiation; emptied only by [`Container::remove_all`].
///
/// Backed by a `BTreeMap` keyed on `ObjectRef`, the same
/// deterministic-iteration convention `tags`/`counters`/`slots` already
/// use, rather than `HashMap`: a `HashMap`'s iteration order depends on
/// its per-instance `RandomState` seed, so two independently-constructed
/// containers over the same objects would iterate in different orders.
/// spec.md §8's "determinism under a fixed RNG seed" scenario requires
/// two runs of the same `(model, world, steps)` to produce identical
/// final states byte-for-byte, which a random per-container seed would
/// break regardless of the RNG used for actuator shuffling.
#[derive(Debug, Default)]
pub struct Container {
    objects: BTreeMap<ObjectRef, Object>,
    next_id: u64,
    root: Option<ObjectRef>,
}

impl Container {
    /// An empty container with no root assigned.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh [`ObjectRef`] and store a new [`Object`] with the
    /// given tags, counter defaults, and declared slots (all initially
    /// unbound). Ids are unique within this container's lifetime.
    pub fn create_object(
        &mut self,
        tags: TagList,
        counters: CounterMap,
        slots: impl IntoIterator<Item = Symbol>,
    ) -> ObjectRef {
        let id = ObjectRef::new(self.next_id);
        self.next_id += 1;
        let bindings = SlotMap::declare(slots);
        self.objects.insert(id, Object::new(id, tags, counters, bindings));
        id
    }

    /// Look up an object by its handle.
    #[must_use]
    pub fn get(&self, id: ObjectRef) -> Option<&Object> {
        self.objects.get(&id)
    }

    /// Look up an object by its handle, mutably.
    pub fn get_mut(&mut self, id: ObjectRef) -> Option<&mut Object> {
        self.objects.get_mut(&id)
    }

    /// Empty the container and reset the id counter. The root becomes
    /// invalid until re-assigned by [`Container::set_root`].
    pub fn remove_all(&mut self) {
        self.objects.clear();
        self.next_id = 0;
        self.root = None;
    }

    /// Assign the distinguished root.
    pub fn set_root(&mut self, root: ObjectRef) {
        self.root = Some(root);
    }

    /// The distinguished root. Present after a successful `initialize`.
    ///
    /// # Panics
    ///
    /// Panics if no root has been assigned yet -- `Root` references are a
    /// programmer error if used before `initialize` (spec.md §7).
    #[must_use]
    pub fn root(&self) -> ObjectRef {
        self.root.expect("Container::root: no root assigned yet")
    }

    /// The distinguished root, if one has been assigned.
    #[must_use]
    pub fn root_opt(&self) -> Option<ObjectRef> {
        self.root
    }

    /// Number of live objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the container holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Every live [`ObjectRef`], in ascending `ObjectRef` order (creation
    /// order, since ids are assigned monotonically): the vector is
    /// materialized once, so later mutation of matched objects
    /// (including mutation performed by the actuator that triggered the
    /// selection) cannot change which refs this call returned. This
    /// order is deterministic across independently-built containers for
    /// the same sequence of `create_object` calls, which spec.md §8's
    /// fixed-seed determinism scenario relies on.
    #[must_use]
    pub fn select(&self, selector: &Selector) -> Vec<ObjectRef> {
        match selector {
            Selector::All => self.objects.keys().copied().collect(),
            Selector::Match { .. } => self
                .objects
                .keys()
                .copied()
                .filter(|&id| selector.matches(self, id))
                .collect(),
        }
    }

    /// Evaluate `preds` (a conjunction) against the object currently
    /// referred to by `id`. Used for the post-mutation recheck in
    /// combined actuators.
    #[must_use]
    pub fn predicates_match(&self, preds: &[Predicate], id: ObjectRef) -> bool {
        crate::predicate::all_match(self, preds, id)
    }
}
