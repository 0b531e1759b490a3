//! World instantiation (spec.md §4.8): turning a [`Model`]'s declared
//! concepts and worlds into live objects inside a [`Container`].

use std::collections::HashMap;

use sepro_core::container::Container;
use sepro_core::model::{InstanceType, Initializer, Model};
use sepro_core::object::ObjectRef;
use sepro_core::{ModelError, Symbol};

/// Create one instance of `concept_name`, applying `initializers` on top
/// of the concept's declared defaults.
///
/// The concept's own name is unioned into the tag set unconditionally
/// (spec.md §4.8: `tags ← concept.tags ∪ {name} ∪ ...`), so callers need
/// not declare it among a concept's default tags themselves. Tag
/// initializers union in on top of that; counter initializers overwrite
/// (not add to) the concept's default value for that counter, applied in
/// order, so a later initializer for the same counter wins. Declared
/// slots come from the concept alone -- initializers cannot add or
/// remove slots.
///
/// # Errors
///
/// Returns [`ModelError::NoSuchConcept`] if `concept_name` is not
/// declared in `model`.
pub fn instantiate(
    container: &mut Container,
    model: &Model,
    concept_name: Symbol,
    initializers: &[Initializer],
) -> Result<ObjectRef, ModelError> {
    let concept = model.concepts.get(&concept_name).ok_or_else(|| ModelError::NoSuchConcept {
        name: concept_name.name().to_string(),
    })?;

    let mut tags = concept.tags.clone();
    tags.insert(concept_name);
    let mut counters = concept.counters.clone();
    for init in initializers {
        match init {
            Initializer::Tag(t) => tags.insert(*t),
            Initializer::Counter(c, v) => counters.set(*c, *v),
        }
    }

    Ok(container.create_object(tags, counters, concept.slots.iter().copied()))
}

/// Populate `container` from the world declared under `world_name`:
/// instantiate its root concept (if any) and set it as the container's
/// root, then instantiate every entry in its instance graph in
/// declaration order. `Named` instances are recorded in the returned
/// map under their given name; `Counted` instances are created and
/// discarded (their refs are not individually retrievable afterward).
///
/// # Errors
///
/// Returns [`ModelError::NoSuchWorld`] if `world_name` is not declared,
/// or [`ModelError::NoSuchConcept`] (bubbled from [`instantiate`]) if any
/// instance spec names an undeclared concept.
pub fn initialize(
    container: &mut Container,
    model: &Model,
    world_name: Symbol,
) -> Result<HashMap<Symbol, ObjectRef>, ModelError> {
    let world = model.worlds.get(&world_name).ok_or_else(|| ModelError::NoSuchWorld {
        name: world_name.name().to_string(),
    })?;

    let mut named = HashMap::new();

    if let Some(root_concept) = world.root {
        let root = instantiate(container, model, root_concept, &[])?;
        container.set_root(root);
        log::debug!("world '{world_name}': root instantiated as {root_concept}");
    }

    for spec in &world.graph.instances {
        match spec.instance_type {
            InstanceType::Named(name) => {
                let id = instantiate(container, model, spec.concept, &spec.initializers)?;
                named.insert(name, id);
            }
            InstanceType::Counted(count) => {
                for _ in 0..count {
                    instantiate(container, model, spec.concept, &spec.initializers)?;
                }
            }
        }
    }

    log::debug!("world '{world_name}' initialized with {} named instances", named.len());
    Ok(named)
}
