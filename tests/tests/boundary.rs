//! Boundary behaviors (spec.md §8).

use sepro_core::container::Container;
use sepro_core::counters::CounterMap;
use sepro_core::model::{
    Actuator, Concept, Model, Modifier, ModifierAction, ModifierTarget, TargetKind,
};
use sepro_core::predicate::{Predicate, PredicateKind, Selector};
use sepro_core::tags::TagList;
use sepro_core::Symbol;
use sepro_runtime::dispatch::dispatch;
use sepro_runtime::{Delegate, Engine, EngineConfig};

fn sym(s: &str) -> Symbol {
    Symbol::new(s)
}

#[test]
fn predicate_with_in_slot_pointing_to_unbound_slot_is_false_even_when_negated() {
    let mut c = Container::new();
    let left = sym("left");
    let holder = c.create_object(TagList::new(), CounterMap::new(), [left]);

    let predicate = Predicate::new(PredicateKind::All).in_slot(left).negated();
    assert!(!sepro_core::predicate::evaluate(&c, &predicate, holder));
}

#[test]
fn combined_actuator_with_empty_other_set_makes_no_mutations() {
    let mut c = Container::new();
    let linker = sym("linker");
    let mut tags = TagList::new();
    tags.insert(linker);
    let only = c.create_object(tags, CounterMap::new(), []);
    let done = sym("done");

    let actuator = Actuator {
        selector: Selector::Match {
            predicates: vec![Predicate::new(PredicateKind::TagSet([linker].into_iter().collect()))],
        },
        combined_selector: Some(Selector::Match {
            predicates: vec![Predicate::new(PredicateKind::TagSet(
                [sym("link")].into_iter().collect(),
            ))],
        }),
        modifiers: vec![Modifier::new(
            ModifierTarget::new(TargetKind::This),
            ModifierAction::SetTags([done].into_iter().collect()),
        )],
        ..Actuator::default()
    };

    dispatch(&mut c, &actuator);
    assert!(!c.get(only).unwrap().tags().contains(done));
}

#[test]
fn combined_actuator_never_pairs_an_object_with_itself() {
    let mut c = Container::new();
    let both = sym("both");
    let mut tags = TagList::new();
    tags.insert(both);
    let id = c.create_object(tags.clone(), CounterMap::new(), []);
    let done = sym("done");

    let selector = Selector::Match {
        predicates: vec![Predicate::new(PredicateKind::TagSet([both].into_iter().collect()))],
    };
    let actuator = Actuator {
        selector: selector.clone(),
        combined_selector: Some(selector),
        modifiers: vec![Modifier::new(
            ModifierTarget::new(TargetKind::This),
            ModifierAction::SetTags([done].into_iter().collect()),
        )],
        ..Actuator::default()
    };

    dispatch(&mut c, &actuator);
    assert!(!c.get(id).unwrap().tags().contains(done));
}

#[derive(Default)]
struct HaltCounter {
    halts_seen: std::sync::Mutex<u32>,
    steps_seen: std::sync::Mutex<u32>,
}

impl Delegate for HaltCounter {
    fn did_step(&self) {
        *self.steps_seen.lock().unwrap() += 1;
    }
    fn handle_halt(&self) {
        *self.halts_seen.lock().unwrap() += 1;
    }
}

#[test]
fn halt_stops_the_run_after_the_halting_step_completes_but_its_callbacks_still_fire() {
    let concept = sym("sentinel");
    let mut model = Model::new();
    model.add_concept(Concept {
        name: concept,
        tags: [concept].into_iter().collect(),
        counters: CounterMap::new(),
        slots: Vec::new(),
    });
    model.add_actuator(Actuator {
        selector: Selector::Match {
            predicates: vec![Predicate::new(PredicateKind::TagSet([concept].into_iter().collect()))],
        },
        does_halt: true,
        ..Actuator::default()
    });

    let mut engine = Engine::new(model, EngineConfig::with_seed(5));
    engine.instantiate(concept, &[]).unwrap();

    let observer = HaltCounter::default();
    let ran = engine.run(10, &observer, None);

    assert_eq!(ran, 1);
    assert!(engine.is_halted());
    assert_eq!(*observer.steps_seen.lock().unwrap(), 1);
    assert_eq!(*observer.halts_seen.lock().unwrap(), 1);
}
