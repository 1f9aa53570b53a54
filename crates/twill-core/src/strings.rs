//! The string-mode generation API.
//!
//! Values here are already strings, so no identity map is built: tokens go
//! onto the wire as themselves (sanitized), and output cells come back as
//! the values directly. In exchange the grammar's reserved characters become
//! the caller's problem, which is why the separator set is configurable and
//! every token is checked against it.

use twill_engine::{run_generator, EngineConfig, GeneratorFlags};
use twill_model::{
    validate_separators, validate_spec, ModelSpec, ParamValue, Random, Separators,
};
use twill_wire::{decode_string_cases, BuildError, Case, ModelBuilder, SeedBuilder};

use crate::error::TwillError;
use crate::typed::resolve_order;

/// Options for string-mode generation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StringOptions {
    pub order: Option<u32>,
    pub random: Option<Random>,
    pub case_sensitive: bool,
    /// Grammar characters; configure these when values need the defaults.
    pub separators: Separators,
}

impl StringOptions {
    pub fn with_separators(separators: Separators) -> Self {
        Self {
            separators,
            ..Default::default()
        }
    }
}

/// Generates test cases for an all-strings model.
pub fn generate_strings(
    spec: &ModelSpec<String>,
    options: &StringOptions,
    config: &EngineConfig,
) -> Result<Vec<Case<String>>, TwillError> {
    validate_spec(spec)?;
    validate_separators(&options.separators)?;
    let order = resolve_order(options.order, spec.parameters.len())?;

    let mut builder = ModelBuilder::with_separators(options.separators);

    for parameter in &spec.parameters {
        let key = builder.sanitize_token(&parameter.key)?;
        for value in &parameter.values {
            match value {
                ParamValue::Plain(token) => {
                    let token = builder.sanitize_token(token)?;
                    builder.add_parameter(&key, &token);
                }
                ParamValue::Alias(tokens) => {
                    let mut sanitized = Vec::with_capacity(tokens.len());
                    for token in tokens {
                        sanitized.push(builder.sanitize_token(token)?);
                    }
                    builder.add_alias_parameter(&key, &sanitized);
                }
                ParamValue::Negative(token) => {
                    let token = builder.sanitize_token(token)?;
                    builder.add_negative_parameter(&key, &token);
                }
                ParamValue::Weighted { value: token, weight } => {
                    let token = builder.sanitize_token(token)?;
                    builder.add_weighted_parameter(&key, &token, *weight);
                }
            }
        }
    }

    for sub in &spec.sub_models {
        builder.add_sub_model(&sub.keys, sub.order)?;
    }

    for constraint in &spec.constraints {
        builder.add_constraint(constraint);
    }

    let seed_text = build_seed_text(spec)?;

    let flags = GeneratorFlags {
        order: Some(order),
        random: options.random,
        case_sensitive: options.case_sensitive,
        separators: Some(*builder.separators()),
        ..Default::default()
    };

    let raw = run_generator(config, &builder.model_text(), seed_text.as_deref(), &flags)?;
    Ok(decode_string_cases(&raw, options.separators.negative))
}

/// Resolves seed rows against the declared value lists. A row may only pin a
/// declared parameter to one of its declared leaf values.
fn build_seed_text(spec: &ModelSpec<String>) -> Result<Option<String>, TwillError> {
    if spec.seeds.is_empty() {
        return Ok(None);
    }

    let mut seeds = SeedBuilder::new();
    for row in &spec.seeds {
        let mut tokens = Vec::new();
        for (key, value) in row.iter() {
            let parameter = spec
                .parameters
                .iter()
                .find(|parameter| parameter.key == key)
                .ok_or_else(|| BuildError::UnknownSeedParameter(key.to_string()))?;
            if !parameter.values.iter().any(|entry| entry.contains_leaf(value)) {
                return Err(BuildError::UnknownSeedValue {
                    parameter: key.to_string(),
                    value: value.clone(),
                }
                .into());
            }
            tokens.push((key.to_string(), value.clone()));
        }
        seeds.add(tokens)?;
    }
    Ok(Some(seeds.render()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use twill_model::{plain, Parameter, SeedRow};

    #[test]
    fn test_seed_unknown_parameter() {
        let spec = ModelSpec::new(vec![Parameter::new("a", vec![plain("1".to_string())])])
            .with_seeds(vec![SeedRow::new().set("ghost", "1".to_string())]);
        let err = build_seed_text(&spec).unwrap_err();
        assert!(matches!(
            err,
            TwillError::Build(BuildError::UnknownSeedParameter(key)) if key == "ghost"
        ));
    }

    #[test]
    fn test_seed_unknown_value() {
        let spec = ModelSpec::new(vec![Parameter::new("a", vec![plain("1".to_string())])])
            .with_seeds(vec![SeedRow::new().set("a", "2".to_string())]);
        let err = build_seed_text(&spec).unwrap_err();
        assert!(matches!(
            err,
            TwillError::Build(BuildError::UnknownSeedValue { .. })
        ));
    }

    #[test]
    fn test_seed_known_pair_serializes() {
        let spec = ModelSpec::new(vec![Parameter::new("a", vec![plain("1".to_string())])])
            .with_seeds(vec![SeedRow::new().set("a", "1".to_string())]);
        assert_eq!(build_seed_text(&spec).unwrap().unwrap(), "a\n1");
    }

    #[test]
    fn test_seed_matches_annotated_leaves() {
        let spec = ModelSpec::new(vec![Parameter::new(
            "a",
            vec![twill_model::alias(["x".to_string(), "y".to_string()])],
        )])
        .with_seeds(vec![SeedRow::new().set("a", "y".to_string())]);
        assert!(build_seed_text(&spec).unwrap().is_some());
    }
}
