//! Actuator dispatcher: unary vs. combined (cartesian) selection and
//! modifier application (spec.md §4.5).

use sepro_core::container::Container;
use sepro_core::model::Actuator;
use sepro_core::modifier::{apply, can_apply};
use sepro_core::object::ObjectRef;
use sepro_core::predicate::Selector;

/// Dispatch one actuator against `container`: select matches, guard and
/// apply its modifiers as an atomic group per match, then (for combined
/// actuators) recheck the left selector after every applied pair.
///
/// Returns whether the actuator had at least one candidate `this[, other]`
/// pair to consider (regardless of whether that pair's modifier guards
/// passed). The caller (`Engine::step`) uses this to gate the actuator's
/// halt assignment (spec.md §9, Open Question 1); traps and
/// notifications are both applied unconditionally by the caller instead,
/// per spec.md §4.5/§8.
pub fn dispatch(container: &mut Container, actuator: &Actuator) -> bool {
    if actuator.is_combined() {
        dispatch_combined(container, actuator)
    } else {
        dispatch_unary(container, actuator)
    }
}

fn all_guards_pass(
    container: &Container,
    actuator: &Actuator,
    this: ObjectRef,
    other: Option<ObjectRef>,
) -> bool {
    actuator
        .modifiers
        .iter()
        .all(|m| can_apply(container, m, this, other))
}

fn apply_all(container: &mut Container, actuator: &Actuator, this: ObjectRef, other: Option<ObjectRef>) {
    for m in &actuator.modifiers {
        apply(container, m, this, other);
    }
}

/// `for this in container.select(A.selector): if all modifiers guard
/// true, apply them all; between distinct `this` objects no atomicity
/// is required.`
fn dispatch_unary(container: &mut Container, actuator: &Actuator) -> bool {
    let this_set = container.select(&actuator.selector);
    let matched = !this_set.is_empty();
    for this in this_set {
        if all_guards_pass(container, actuator, this, None) {
            apply_all(container, actuator, this, None);
        }
    }
    matched
}

/// Cartesian dispatch: both sets are materialized up front (spec.md §9:
/// "`otherSet` is captured before the inner loop but object contents may
/// mutate during iteration; that is intentional"); `this` never pairs
/// with itself; the inner loop advances to the next `this` as soon as
/// `this` stops matching the left selector after a successful pair.
fn dispatch_combined(container: &mut Container, actuator: &Actuator) -> bool {
    let this_set = container.select(&actuator.selector);
    let other_selector = actuator
        .combined_selector
        .as_ref()
        .expect("dispatch_combined requires combined_selector");
    let other_set = container.select(other_selector);
    let mut matched = false;

    'this_loop: for this in this_set {
        for &other in &other_set {
            if this == other {
                continue;
            }
            matched = true;
            if all_guards_pass(container, actuator, this, Some(other)) {
                apply_all(container, actuator, this, Some(other));

                if let Selector::Match { predicates } = &actuator.selector {
                    if !container.predicates_match(predicates, this) {
                        continue 'this_loop;
                    }
                }
            }
        }
    }
    matched
}
