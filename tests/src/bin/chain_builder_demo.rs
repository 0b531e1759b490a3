//! Builds the chain-builder model directly via Rust constructors,
//! populates a small free-standing linker/link population, runs it to
//! completion, and dumps the final object state.
//!
//! Usage: `chain_builder_demo <seed> <steps>`
//! Output: one `debug_dump` block per run via `Engine::debug_dump`.

use sepro_core::model::Initializer;
use sepro_runtime::{Delegate, EngineConfig};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let seed: u64 = args.get(1).map_or(1, |s| s.parse().expect("seed must be u64"));
    let steps: u32 = args.get(2).map_or(10, |s| s.parse().expect("steps must be u32"));

    let model = sepro_tests::chain_model();
    let mut engine = sepro_runtime::Engine::new(model, EngineConfig::with_seed(seed));

    let node = sepro_core::Symbol::new("node");
    for _ in 0..3 {
        engine
            .instantiate(node, &[Initializer::Tag(sepro_tests::tag_linker())])
            .expect("node concept is declared");
    }
    for _ in 0..3 {
        engine
            .instantiate(node, &[Initializer::Tag(sepro_tests::tag_link())])
            .expect("node concept is declared");
    }

    struct Printer;
    impl Delegate for Printer {
        fn did_step(&self) {
            println!("-- step complete --");
        }
    }

    engine.run(steps, &Printer, None);

    let mut out = std::io::stdout();
    engine.debug_dump(&mut out).expect("stdout write");
}
