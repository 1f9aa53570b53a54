use std::collections::HashSet;

use crate::types::{ModelSpec, Separators};
use crate::value::ParamValue;

/// Input-shape failures, raised before any allocation happens.
#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    #[error("model must contain at least one parameter")]
    EmptyModel,

    #[error("duplicate parameter key '{0}'")]
    DuplicateKey(String),

    #[error("parameter '{0}' has no values")]
    EmptyValues(String),

    #[error("parameter '{0}' contains an empty alias group")]
    EmptyAlias(String),

    #[error("parameter '{0}' carries a zero weight")]
    ZeroWeight(String),

    #[error("order {order} out of range [1, {parameters}]")]
    OrderOutOfRange { order: u32, parameters: usize },

    #[error("sub-model order {order} out of range [1, {keys}]")]
    SubModelOrderOutOfRange { order: u32, keys: usize },

    #[error("alias, value and negative separators must be distinct")]
    SeparatorClash,

    #[error("seed row {0} is empty")]
    EmptySeedRow(usize),
}

/// Checks the top-level shape of a model spec: non-empty parameter list,
/// unique keys, non-empty value lists, positive weights, well-formed
/// sub-model orders, non-empty seed rows.
///
/// Reference checks (sub-model keys, seed keys and values) are left to the
/// construction pipeline, which resolves them against the identity map.
pub fn validate_spec<V>(spec: &ModelSpec<V>) -> Result<(), ShapeError> {
    if spec.parameters.is_empty() {
        return Err(ShapeError::EmptyModel);
    }

    let mut seen = HashSet::new();
    for parameter in &spec.parameters {
        if !seen.insert(parameter.key.as_str()) {
            return Err(ShapeError::DuplicateKey(parameter.key.clone()));
        }
        if parameter.values.is_empty() {
            return Err(ShapeError::EmptyValues(parameter.key.clone()));
        }
        for value in &parameter.values {
            match value {
                ParamValue::Alias(values) if values.is_empty() => {
                    return Err(ShapeError::EmptyAlias(parameter.key.clone()));
                }
                ParamValue::Weighted { weight: 0, .. } => {
                    return Err(ShapeError::ZeroWeight(parameter.key.clone()));
                }
                _ => {}
            }
        }
    }

    for sub in &spec.sub_models {
        if let Some(order) = sub.order {
            if order == 0 || order as usize > sub.keys.len() {
                return Err(ShapeError::SubModelOrderOutOfRange {
                    order,
                    keys: sub.keys.len(),
                });
            }
        }
    }

    for (index, row) in spec.seeds.iter().enumerate() {
        if row.is_empty() {
            return Err(ShapeError::EmptySeedRow(index));
        }
    }

    Ok(())
}

/// Checks a model-wide coverage order against the parameter count.
pub fn validate_order(order: u32, parameters: usize) -> Result<(), ShapeError> {
    if order == 0 || order as usize > parameters {
        return Err(ShapeError::OrderOutOfRange { order, parameters });
    }
    Ok(())
}

/// Checks that the three configured separators do not collide.
pub fn validate_separators(separators: &Separators) -> Result<(), ShapeError> {
    if separators.alias == separators.value
        || separators.alias == separators.negative
        || separators.value == separators.negative
    {
        return Err(ShapeError::SeparatorClash);
    }
    Ok(())
}
