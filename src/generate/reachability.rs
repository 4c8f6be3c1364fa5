//! Computes which entity types the generators must emit.

use std::collections::HashSet;

use log::{debug, warn};

use crate::metadata::{EntityType, Schema};

use super::config::GeneratorConfig;
use super::types::{navigation_target, unqualified_name};

/// Resolve the set of entity types to generate: every entity exposed
/// through an entity set, plus everything transitively referenced by
/// navigation properties, minus the excluded entities.
///
/// The result keeps the schema's declaration order, so traversal order
/// never leaks into the output. References that resolve to no entity type
/// in the schema are dropped with a diagnostic rather than failing; the
/// generator always produces output for whatever does resolve.
pub fn reachable_entities<'a>(
    schema: &'a Schema,
    config: &GeneratorConfig,
) -> Vec<&'a EntityType> {
    let mut worklist: Vec<&str> = Vec::new();

    for entity_set in &schema.entity_container.entity_sets {
        let name = unqualified_name(&entity_set.entity_type);
        if config.excluded_entities.contains(name) {
            debug!("Skipping excluded entity set '{}' ({})", entity_set.name, name);
            continue;
        }
        worklist.push(name);
    }

    // Explicit worklist rather than recursion: the visited set only grows
    // and is bounded by the schema's entity count, so cyclic and
    // self-referencing navigation graphs terminate.
    let mut visited: HashSet<&str> = HashSet::new();

    while let Some(name) = worklist.pop() {
        if !visited.insert(name) {
            continue;
        }

        let Some(entity) = find_entity_type(schema, name) else {
            warn!("Reference to unknown entity type '{}', dropping it from output", name);
            continue;
        };

        for nav_prop in &entity.navigation_properties {
            let target = navigation_target(&nav_prop.type_name);
            if target == name {
                continue; // self-reference, nothing new to visit
            }
            if config.excluded_entities.contains(target) || visited.contains(target) {
                continue;
            }
            worklist.push(target);
        }
    }

    debug!("Reachability closure holds {} entity names", visited.len());

    schema
        .entity_types
        .iter()
        .filter(|entity| visited.contains(entity.name.as_str()))
        .collect()
}

fn find_entity_type<'a>(schema: &'a Schema, name: &str) -> Option<&'a EntityType> {
    schema.entity_types.iter().find(|entity| entity.name == name)
}
