//! Modifier executor: guard (`can_apply`) and `apply` (spec.md §4.4).
//!
//! `Unbind` is special: spec.md documents that it writes to `this`
//! regardless of `modifier.target`, which looks like a bug in the
//! reference implementation but is preserved verbatim (spec.md §9, Open
//! Question 2). The guard for `Unbind` still resolves through
//! `modifier.target` as every other action does; only `apply` carries
//! the asymmetry.

use crate::container::Container;
use crate::model::{Modifier, ModifierAction};
use crate::object::ObjectRef;
use crate::resolve::get_current;

/// Guard-check `modifier` for the `(this[, other])` pair. Does not
/// mutate the container.
#[must_use]
pub fn can_apply(
    container: &Container,
    modifier: &Modifier,
    this: ObjectRef,
    other: Option<ObjectRef>,
) -> bool {
    let resolved = || get_current(container, &modifier.target, this, other);

    match &modifier.action {
        ModifierAction::Nothing | ModifierAction::SetTags(_) | ModifierAction::UnsetTags(_) => true,
        ModifierAction::Inc(c) | ModifierAction::Clear(c) => resolved()
            .and_then(|id| container.get(id))
            .is_some_and(|obj| obj.counters().contains(*c)),
        ModifierAction::Dec(c) => resolved()
            .and_then(|id| container.get(id))
            .is_some_and(|obj| obj.counters().get(*c).is_some_and(|v| v > 0)),
        ModifierAction::Bind { slot, target } => {
            let current = resolved().and_then(|id| container.get(id));
            let bind_target = get_current(container, target, this, other);
            current.is_some_and(|obj| obj.declares_slot(*slot)) && bind_target.is_some()
        }
        ModifierAction::Unbind { slot } => resolved()
            .and_then(|id| container.get(id))
            .is_some_and(|obj| obj.declares_slot(*slot)),
    }
}

/// Apply `modifier` for the `(this[, other])` pair.
///
/// Precondition: [`can_apply`] returned `true` for *every* modifier in
/// the actuator's group for this pair (enforced by the caller, not
/// here).
pub fn apply(container: &mut Container, modifier: &Modifier, this: ObjectRef, other: Option<ObjectRef>) {
    match &modifier.action {
        ModifierAction::Nothing => {}
        ModifierAction::SetTags(tags) => {
            if let Some(id) = get_current(container, &modifier.target, this, other) {
                if let Some(obj) = container.get_mut(id) {
                    obj.tags_mut().union_with(tags);
                }
            }
        }
        ModifierAction::UnsetTags(tags) => {
            if let Some(id) = get_current(container, &modifier.target, this, other) {
                if let Some(obj) = container.get_mut(id) {
                    obj.tags_mut().difference_with(tags);
                }
            }
        }
        ModifierAction::Inc(c) => {
            if let Some(id) = get_current(container, &modifier.target, this, other) {
                if let Some(obj) = container.get_mut(id) {
                    obj.counters_mut().increment(*c);
                }
            }
        }
        ModifierAction::Dec(c) => {
            if let Some(id) = get_current(container, &modifier.target, this, other) {
                if let Some(obj) = container.get_mut(id) {
                    obj.counters_mut().decrement(*c);
                }
            }
        }
        ModifierAction::Clear(c) => {
            if let Some(id) = get_current(container, &modifier.target, this, other) {
                if let Some(obj) = container.get_mut(id) {
                    obj.counters_mut().clear(*c);
                }
            }
        }
        ModifierAction::Bind { slot, target } => {
            let current = get_current(container, &modifier.target, this, other);
            let bind_target = get_current(container, target, this, other);
            if let (Some(current), Some(bind_target)) = (current, bind_target) {
                if let Some(obj) = container.get_mut(current) {
                    obj.bindings_mut().bind(*slot, bind_target);
                }
            }
        }
        ModifierAction::Unbind { slot } => {
            // Asymmetry preserved from the reference implementation:
            // writes on `this`, not on `modifier.target`'s resolution.
            if let Some(obj) = container.get_mut(this) {
                obj.bindings_mut().unbind(*slot);
            }
        }
    }
}
