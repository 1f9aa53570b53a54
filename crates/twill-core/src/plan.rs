//! The model-construction pipeline: identifier allocation, identity mapping
//! and text rendering for one generation pass.
//!
//! Values never cross the wire themselves. Each leaf value receives an
//! identifier, the identifier goes into the model text, and the identity map
//! carries enough state to reverse the substitution when the generator's
//! output comes back.

use log::debug;

use twill_model::{ModelSpec, ParamValue};
use twill_wire::{IdAllocator, ModelBuilder, SeedBuilder, ValuesIdMap};

use crate::error::TwillError;

/// Everything one generator invocation needs: rendered model text, optional
/// seed text, and the map that later reverses the identifier substitution.
#[derive(Debug)]
pub struct Plan<V> {
    pub model_text: String,
    pub seed_text: Option<String>,
    pub id_map: ValuesIdMap<V>,
}

/// Drives the allocator and identity map over the spec in input order and
/// renders the model and seed text.
///
/// The spec is expected to be shape-validated already; this step raises the
/// reference and identity errors: sub-models naming unknown parameters,
/// seed rows naming unknown parameters or unregistered values, duplicate
/// values within one parameter.
pub fn build_plan<V: Clone + PartialEq>(spec: &ModelSpec<V>) -> Result<Plan<V>, TwillError> {
    let mut builder = ModelBuilder::new();
    let mut ids = IdAllocator::new();
    let mut map = ValuesIdMap::new();

    for parameter in &spec.parameters {
        let parameter_id = ids.next_parameter();
        for value in &parameter.values {
            match value {
                ParamValue::Alias(values) => {
                    let mut tokens = Vec::with_capacity(values.len());
                    for leaf in values {
                        let value_id = ids.next_value();
                        map.add(&parameter.key, &parameter_id, leaf.clone(), value_id.clone())?;
                        tokens.push(value_id);
                    }
                    builder.add_alias_parameter(&parameter_id, &tokens);
                }
                ParamValue::Negative(leaf) => {
                    let value_id = ids.next_value();
                    map.add(&parameter.key, &parameter_id, leaf.clone(), value_id.clone())?;
                    builder.add_negative_parameter(&parameter_id, &value_id);
                }
                ParamValue::Weighted { value: leaf, weight } => {
                    let value_id = ids.next_value();
                    map.add(&parameter.key, &parameter_id, leaf.clone(), value_id.clone())?;
                    builder.add_weighted_parameter(&parameter_id, &value_id, *weight);
                }
                ParamValue::Plain(leaf) => {
                    let value_id = ids.next_value();
                    map.add(&parameter.key, &parameter_id, leaf.clone(), value_id.clone())?;
                    builder.add_parameter(&parameter_id, &value_id);
                }
            }
        }
    }

    for sub in &spec.sub_models {
        let mut sub_ids = Vec::with_capacity(sub.keys.len());
        for key in &sub.keys {
            sub_ids.push(map.parameter_id(key)?.to_string());
        }
        builder.add_sub_model(&sub_ids, sub.order)?;
    }

    for constraint in &spec.constraints {
        builder.add_constraint(constraint);
    }

    let seed_text = if spec.seeds.is_empty() {
        None
    } else {
        let mut seeds = SeedBuilder::new();
        for row in &spec.seeds {
            let mut tokens = Vec::new();
            for (key, value) in row.iter() {
                let (parameter_id, value_id) = map.ids_for_value(key, value)?;
                tokens.push((parameter_id.to_string(), value_id.to_string()));
            }
            seeds.add(tokens)?;
        }
        Some(seeds.render())
    };

    debug!(
        "planned model: {} parameters, {} leaf values, {} sub-models, {} constraints",
        spec.parameters.len(),
        map.len(),
        spec.sub_models.len(),
        spec.constraints.len()
    );

    Ok(Plan {
        model_text: builder.model_text(),
        seed_text,
        id_map: map,
    })
}
