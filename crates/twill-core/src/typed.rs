//! The identifier-mapped generation API for models over arbitrary value
//! types. Values round-trip by identity: whatever went into the spec comes
//! back out of the decoded cases, whether it was a string, a number, null,
//! or a structured document.

use std::time::Instant;

use log::debug;

use twill_engine::{run_generator, EngineConfig, GeneratorFlags};
use twill_model::{validate_order, validate_spec, GenOptions, ModelSpec, Separators, ShapeError};
use twill_wire::{decode_cases, parse_statistics, Case, Statistics};

use crate::error::TwillError;
use crate::plan::build_plan;

/// Generates test cases for a typed model: validate, plan, invoke the
/// generator, decode its table back into typed records.
pub fn generate<V: Clone + PartialEq>(
    spec: &ModelSpec<V>,
    options: &GenOptions,
    config: &EngineConfig,
) -> Result<Vec<Case<V>>, TwillError> {
    let (plan, flags) = prepare(spec, options)?;
    let raw = run_generator(config, &plan.model_text, plan.seed_text.as_deref(), &flags)?;
    let cases = decode_cases(&raw, &plan.id_map, Separators::default().negative)?;
    debug!("decoded {} cases", cases.len());
    Ok(cases)
}

/// Generates statistics for a typed model instead of cases: same pipeline,
/// but the generator reports combination and case counts.
pub fn generate_stats<V: Clone + PartialEq>(
    spec: &ModelSpec<V>,
    options: &GenOptions,
    config: &EngineConfig,
) -> Result<Statistics, TwillError> {
    let (plan, mut flags) = prepare(spec, options)?;
    flags.statistics = true;

    let start = Instant::now();
    let raw = run_generator(config, &plan.model_text, plan.seed_text.as_deref(), &flags)?;
    Ok(parse_statistics(&raw, start.elapsed())?)
}

fn prepare<V: Clone + PartialEq>(
    spec: &ModelSpec<V>,
    options: &GenOptions,
) -> Result<(crate::plan::Plan<V>, GeneratorFlags), TwillError> {
    validate_spec(spec)?;
    let order = resolve_order(options.order, spec.parameters.len())?;
    let plan = build_plan(spec)?;
    let flags = GeneratorFlags {
        order: Some(order),
        random: options.random,
        case_sensitive: options.case_sensitive,
        ..Default::default()
    };
    Ok((plan, flags))
}

/// A requested order is checked against the parameter count; an absent one
/// defaults to pairwise, clamped to the model size.
pub(crate) fn resolve_order(
    requested: Option<u32>,
    parameters: usize,
) -> Result<u32, ShapeError> {
    match requested {
        Some(order) => {
            validate_order(order, parameters)?;
            Ok(order)
        }
        None => Ok(parameters.min(2) as u32),
    }
}
