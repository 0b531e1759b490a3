//! The six named end-to-end scenarios (spec.md §8), built against the
//! shared chain-builder fixture in `sepro_tests`.

use sepro_core::model::Initializer;
use sepro_runtime::{Delegate, Engine, EngineConfig};

fn node() -> sepro_core::Symbol {
    sepro_core::Symbol::new("node")
}

#[test]
fn ready_linker_binds_a_free_link() {
    let mut engine = Engine::new(sepro_tests::chain_model(), EngineConfig::with_seed(1));
    let linker = engine.instantiate(node(), &[Initializer::Tag(sepro_tests::tag_linker())]).unwrap();
    let link = engine.instantiate(node(), &[Initializer::Tag(sepro_tests::tag_link())]).unwrap();

    engine.step();

    let linker_obj = engine.container().get(linker).unwrap();
    assert_eq!(linker_obj.bindings().binding(sepro_tests::slot_next()), Some(link));
    let link_obj = engine.container().get(link).unwrap();
    assert!(link_obj.tags().contains(sepro_tests::tag_bound()));
    assert!(!link_obj.tags().contains(sepro_tests::tag_link()));
}

#[test]
fn chain_construction_succeeds_without_a_fault() {
    let mut engine = Engine::new(sepro_tests::chain_model(), EngineConfig::with_seed(2));
    let mut ids = Vec::new();
    for _ in 0..4 {
        ids.push(
            engine
                .instantiate(
                    node(),
                    &[Initializer::Tag(sepro_tests::tag_linker()), Initializer::Tag(sepro_tests::tag_link())],
                )
                .unwrap(),
        );
    }

    engine.run(10, &sepro_runtime::delegate::NullDelegate, None);

    // Every node except one (the final, unclaimed tail) ends up bound.
    let bound_count = ids
        .iter()
        .filter(|&&id| engine.container().get(id).unwrap().tags().contains(sepro_tests::tag_bound()))
        .count();
    assert_eq!(bound_count, 3);
}

#[test]
fn fault_blocks_chain_growth() {
    let mut engine = Engine::new(sepro_tests::chain_model(), EngineConfig::with_seed(3));
    let faulty_linker = engine
        .instantiate(
            node(),
            &[Initializer::Tag(sepro_tests::tag_linker()), Initializer::Tag(sepro_tests::tag_fault())],
        )
        .unwrap();
    let free_link = engine.instantiate(node(), &[Initializer::Tag(sepro_tests::tag_link())]).unwrap();

    engine.run(5, &sepro_runtime::delegate::NullDelegate, None);

    assert_eq!(
        engine.container().get(faulty_linker).unwrap().bindings().binding(sepro_tests::slot_next()),
        None
    );
    assert!(engine.container().get(free_link).unwrap().tags().contains(sepro_tests::tag_link()));
}

#[derive(Default)]
struct TrapRecorder {
    traps: std::sync::Mutex<Vec<Vec<(sepro_core::Symbol, usize)>>>,
}

impl Delegate for TrapRecorder {
    fn handle_trap(&self, traps: &sepro_runtime::delegate::TrapMultiset) {
        self.traps.lock().unwrap().push(traps.clone());
    }
}

#[test]
fn trap_raised_every_step_the_fault_is_present() {
    let mut engine = Engine::new(sepro_tests::chain_model(), EngineConfig::with_seed(4));
    engine
        .instantiate(node(), &[Initializer::Tag(sepro_tests::tag_fault())])
        .unwrap();

    let recorder = TrapRecorder::default();
    let ran = engine.run(3, &recorder, None);

    let traps = recorder.traps.lock().unwrap();
    assert_eq!(traps.len() as u32, ran);
    for step_traps in traps.iter() {
        assert_eq!(step_traps, &vec![(sepro_tests::trap_fault_detected(), 1)]);
    }
}

#[test]
fn halt_terminates_the_run_at_the_step_it_fires() {
    let mut engine = Engine::new(sepro_tests::chain_model(), EngineConfig::with_seed(5));
    engine.instantiate(node(), &[Initializer::Tag(sepro_tests::tag_done())]).unwrap();

    let ran = engine.run(10, &sepro_runtime::delegate::NullDelegate, None);

    assert_eq!(ran, 1);
    assert!(engine.is_halted());
}

#[test]
fn determinism_under_a_fixed_rng_seed() {
    fn run_once(seed: u64) -> String {
        let mut engine = Engine::new(sepro_tests::chain_model(), EngineConfig::with_seed(seed));
        for _ in 0..3 {
            engine.instantiate(node(), &[Initializer::Tag(sepro_tests::tag_linker())]).unwrap();
        }
        for _ in 0..3 {
            engine.instantiate(node(), &[Initializer::Tag(sepro_tests::tag_link())]).unwrap();
        }
        engine.run(10, &sepro_runtime::delegate::NullDelegate, None);

        let mut out = Vec::new();
        engine.debug_dump(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    assert_eq!(run_once(99), run_once(99));
}
