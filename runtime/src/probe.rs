//! Probing (spec.md §4.7): fold every object through every declared
//! measure once per step, producing one scalar per measure.

use sepro_core::container::Container;
use sepro_core::predicate::Predicate;
use sepro_core::Symbol;

use crate::logger::{Record, Value};

/// How a measure's accumulator folds matching objects into one scalar.
pub use sepro_core::model::MeasureKind;

/// A named measure: predicates select which objects count, `kind`
/// decides how they're folded.
pub use sepro_core::model::Measure;

/// A single measure's running accumulator during one `probe()` call.
/// Discarded after the call; holds no state across steps.
struct Accumulator {
    kind: MeasureKind,
    value: i64,
}

impl Accumulator {
    fn new(kind: MeasureKind) -> Self {
        Self { kind, value: 0 }
    }

    fn probe(&mut self, object: &sepro_core::Object) {
        match self.kind {
            MeasureKind::Count => self.value += 1,
            MeasureKind::SumCounter(c) => self.value += object.counters().get(c).unwrap_or(0),
        }
    }

    fn finish(self) -> Value {
        Value::Int(self.value)
    }
}

/// Run every declared measure against every live object in `container`,
/// once each, in a single pass over the container per the spec's
/// complexity note (O(#objects × #measures); implementations may fuse
/// loops but must not change the set of objects a measure considers --
/// this implementation keeps the outer loop over objects and the inner
/// loop over measures, so no measure is skipped for any object).
#[must_use]
pub fn probe(container: &Container, measures: &[Measure]) -> Record {
    let mut accumulators: Vec<(Symbol, &[Predicate], Accumulator)> = measures
        .iter()
        .map(|m| (m.name, m.predicates.as_slice(), Accumulator::new(m.kind)))
        .collect();

    for id in container.select(&sepro_core::predicate::Selector::All) {
        let object = container.get(id).expect("selected object must exist");
        for (_, predicates, acc) in &mut accumulators {
            if container.predicates_match(predicates, id) {
                acc.probe(object);
            }
        }
    }

    accumulators
        .into_iter()
        .map(|(name, _, acc)| (name, acc.finish()))
        .collect()
}
