//! Reference resolver: `getCurrent(ref, this, other)` (spec.md §4.3).

use crate::container::Container;
use crate::model::{ModifierTarget, TargetKind};
use crate::object::ObjectRef;

/// Resolve `target` to a concrete object under the given `(this, other)`
/// binding pair.
///
/// - `Root` resolves to `container.root()`; fatal (panics) if no root is
///   assigned yet, per spec.md §7 ("programmer error if not").
/// - `This` resolves to `this`.
/// - `Other` resolves to `other`; fatal (panics) if `other` is `None`,
///   since `Other` is only meaningful inside combined dispatch.
/// - If `target.slot` is unset, the chosen object is returned directly.
/// - Otherwise the slot must be declared on the chosen object (fatal if
///   not); the call returns `Some` of whatever it's bound to, or `None`
///   if the slot is declared but currently unbound ("nothing to act
///   on" -- not an error).
///
/// # Panics
///
/// Panics on the two fatal conditions above: missing root, missing
/// `other`, or an undeclared slot. These are spec.md §7's "fatal —
/// program error" cases, not recoverable [`crate::ModelError`]s.
#[must_use]
pub fn get_current(
    container: &Container,
    target: &ModifierTarget,
    this: ObjectRef,
    other: Option<ObjectRef>,
) -> Option<ObjectRef> {
    let chosen = match target.kind {
        TargetKind::Root => container.root(),
        TargetKind::This => this,
        TargetKind::Other => other.expect("getCurrent: OTHER used outside combined dispatch"),
    };

    let Some(slot) = target.slot else {
        return Some(chosen);
    };

    let object = container
        .get(chosen)
        .expect("getCurrent: resolved object must exist in the container");
    assert!(
        object.declares_slot(slot),
        "getCurrent: undeclared slot '{slot}' on object {chosen:?}"
    );
    object.bindings().binding(slot)
}
