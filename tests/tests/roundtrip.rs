//! Round-trip and idempotence properties (spec.md §8).
//!
//! These exercise `sepro-core`'s modifier executor directly against a
//! bare `Container` -- `sepro-runtime::Engine` only exposes a shared
//! `container()` accessor, so black-box tests of single-modifier
//! round-trips build their own container rather than going through it.

use sepro_core::container::Container;
use sepro_core::counters::CounterMap;
use sepro_core::modifier::apply;
use sepro_core::model::{Modifier, ModifierAction, ModifierTarget, TargetKind};
use sepro_core::tags::TagList;
use sepro_core::Symbol;

fn sym(s: &str) -> Symbol {
    Symbol::new(s)
}

#[test]
fn set_tags_then_unset_tags_restores_original_tag_set_when_disjoint() {
    let mut c = Container::new();
    let free = sym("free");
    let ready = sym("ready");
    let mut tags = TagList::new();
    tags.insert(free);
    let id = c.create_object(tags.clone(), CounterMap::new(), []);

    let set = Modifier::new(
        ModifierTarget::new(TargetKind::This),
        ModifierAction::SetTags([ready].into_iter().collect()),
    );
    let unset = Modifier::new(
        ModifierTarget::new(TargetKind::This),
        ModifierAction::UnsetTags([ready].into_iter().collect()),
    );

    apply(&mut c, &set, id, None);
    apply(&mut c, &unset, id, None);

    assert_eq!(c.get(id).unwrap().tags(), &tags);
}

#[test]
fn clear_is_idempotent_across_consecutive_calls() {
    let mut c = Container::new();
    let visits = sym("visits");
    let counters: CounterMap = [(visits, 5)].into_iter().collect();
    let id = c.create_object(TagList::new(), counters, []);

    let clear = Modifier::new(ModifierTarget::new(TargetKind::This), ModifierAction::Clear(visits));
    apply(&mut c, &clear, id, None);
    apply(&mut c, &clear, id, None);

    assert_eq!(c.get(id).unwrap().counters().get(visits), Some(0));
}

#[test]
fn bind_then_unbind_on_this_restores_prior_binding() {
    let mut c = Container::new();
    let slot = sym("left");
    let this = c.create_object(TagList::new(), CounterMap::new(), [slot]);
    let candidate = c.create_object(TagList::new(), CounterMap::new(), []);

    let prior = c.get(this).unwrap().bindings().binding(slot);

    let bind = Modifier::new(
        ModifierTarget::new(TargetKind::This),
        ModifierAction::Bind {
            slot,
            target: ModifierTarget::new(TargetKind::Other),
        },
    );
    let unbind = Modifier::new(ModifierTarget::new(TargetKind::This), ModifierAction::Unbind { slot });

    apply(&mut c, &bind, this, Some(candidate));
    apply(&mut c, &unbind, this, Some(candidate));

    assert_eq!(c.get(this).unwrap().bindings().binding(slot), prior);
}
