//! Bidirectional mapping between typed values and wire identifiers.
//!
//! Only identifiers ever cross the wire; the original values stay here, so
//! the text round trip is lossless for values of any type. The map holds two
//! indices that must stay mutually consistent: (parameter key, value) →
//! identifier and identifier → (parameter id, parameter key, value). One map
//! lives per construction pass and is dropped once that pass's output has
//! been decoded.

use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum IdMapError {
    #[error("parameter '{0}' not found")]
    ParameterNotFound(String),

    #[error("value already registered under parameter '{0}'")]
    DuplicateValue(String),

    #[error("identifier '{0}' already registered")]
    DuplicateId(String),

    #[error("no value registered under parameter '{0}' matches the seed value")]
    ValueNotFound(String),

    #[error("no value registered for identifier '{0}'")]
    IdNotFound(String),
}

#[derive(Debug)]
struct ParameterEntry<V> {
    key: String,
    id: String,
    /// Value → identifier pairs in registration order.
    values: Vec<(V, String)>,
}

/// A value resolved from its wire identifier.
#[derive(Debug, PartialEq)]
pub struct ResolvedValue<'a, V> {
    pub parameter_id: &'a str,
    pub parameter_key: &'a str,
    pub value: &'a V,
}

/// Identity map for one model-build pass.
///
/// Lookup by value scans the owning parameter's registration list with
/// `PartialEq`, so equality is structural; parameter value lists are small
/// enough that this stays cheap even for large generated outputs, which only
/// ever resolve by identifier through a hash index.
#[derive(Debug, Default)]
pub struct ValuesIdMap<V> {
    parameters: Vec<ParameterEntry<V>>,
    /// Identifier → (parameter index, value index).
    by_id: HashMap<String, (usize, usize)>,
}

impl<V: PartialEq> ValuesIdMap<V> {
    pub fn new() -> Self {
        Self {
            parameters: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// Registers one leaf value under a parameter.
    ///
    /// The first registration for a key records the parameter id; later ones
    /// must agree. Registering an equal value twice under one parameter, or
    /// reusing an identifier, is an invariant violation.
    pub fn add(
        &mut self,
        parameter_key: &str,
        parameter_id: &str,
        value: V,
        value_id: String,
    ) -> Result<(), IdMapError> {
        if self.by_id.contains_key(&value_id) {
            return Err(IdMapError::DuplicateId(value_id));
        }

        let index = match self.find_parameter(parameter_key) {
            Some(index) => {
                let entry = &self.parameters[index];
                debug_assert_eq!(entry.id, parameter_id, "parameter id changed between adds");
                if entry.values.iter().any(|(existing, _)| *existing == value) {
                    return Err(IdMapError::DuplicateValue(parameter_key.to_string()));
                }
                index
            }
            None => {
                self.parameters.push(ParameterEntry {
                    key: parameter_key.to_string(),
                    id: parameter_id.to_string(),
                    values: Vec::new(),
                });
                self.parameters.len() - 1
            }
        };

        let value_index = self.parameters[index].values.len();
        self.by_id.insert(value_id.clone(), (index, value_index));
        self.parameters[index].values.push((value, value_id));
        Ok(())
    }

    /// The wire identifier allocated for a parameter key.
    pub fn parameter_id(&self, parameter_key: &str) -> Result<&str, IdMapError> {
        self.find_parameter(parameter_key)
            .map(|index| self.parameters[index].id.as_str())
            .ok_or_else(|| IdMapError::ParameterNotFound(parameter_key.to_string()))
    }

    /// Resolves a value identifier back to the original value and its parameter.
    pub fn value_by_id(&self, value_id: &str) -> Result<ResolvedValue<'_, V>, IdMapError> {
        let (parameter_index, value_index) = self
            .by_id
            .get(value_id)
            .copied()
            .ok_or_else(|| IdMapError::IdNotFound(value_id.to_string()))?;
        let entry = &self.parameters[parameter_index];
        Ok(ResolvedValue {
            parameter_id: &entry.id,
            parameter_key: &entry.key,
            value: &entry.values[value_index].0,
        })
    }

    /// Resolves a (parameter key, value) pair to its identifiers, as needed
    /// when translating seed rows.
    pub fn ids_for_value(
        &self,
        parameter_key: &str,
        value: &V,
    ) -> Result<(&str, &str), IdMapError> {
        let index = self
            .find_parameter(parameter_key)
            .ok_or_else(|| IdMapError::ParameterNotFound(parameter_key.to_string()))?;
        let entry = &self.parameters[index];
        let value_id = entry
            .values
            .iter()
            .find(|(existing, _)| existing == value)
            .map(|(_, id)| id.as_str())
            .ok_or_else(|| IdMapError::ValueNotFound(parameter_key.to_string()))?;
        Ok((entry.id.as_str(), value_id))
    }

    /// Number of registered leaf values across all parameters.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    fn find_parameter(&self, parameter_key: &str) -> Option<usize> {
        self.parameters
            .iter()
            .position(|entry| entry.key == parameter_key)
    }
}
