//! Raw-text passthrough API for callers who maintain their own model file
//! in the generator's grammar. Nothing is built or mapped; the text goes to
//! the generator as-is and the output comes back as string cases.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use twill_engine::{run_generator, EngineConfig, GeneratorFlags};
use twill_model::{validate_separators, Random, Separators};
use twill_wire::{decode_string_cases, Case};

use crate::error::TwillError;

/// Model or seed text, inline or on disk.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelSource {
    Text(String),
    File(PathBuf),
}

impl ModelSource {
    fn read(&self) -> Result<String, TwillError> {
        match self {
            ModelSource::Text(text) => Ok(text.clone()),
            ModelSource::File(path) => Ok(std::fs::read_to_string(path)?),
        }
    }
}

/// Options for the raw-text API. Separators here only inform the generator
/// flags and the output marker stripping; the model text is the caller's.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextOptions {
    pub order: Option<u32>,
    pub random: Option<Random>,
    pub case_sensitive: bool,
    pub separators: Option<Separators>,
}

/// Cases plus invocation metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOutcome {
    pub cases: Vec<Case<String>>,
    pub wall_time: Duration,
}

impl TextOutcome {
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

/// Runs the generator over caller-provided model text.
pub fn generate_text(
    model: &ModelSource,
    seed: Option<&ModelSource>,
    options: &TextOptions,
    config: &EngineConfig,
) -> Result<TextOutcome, TwillError> {
    if let Some(separators) = &options.separators {
        validate_separators(separators)?;
    }

    let start = Instant::now();

    let model_text = model.read()?;
    let seed_text = match seed {
        Some(source) => Some(source.read()?),
        None => None,
    };

    let flags = GeneratorFlags {
        order: options.order,
        random: options.random,
        case_sensitive: options.case_sensitive,
        separators: options.separators,
        ..Default::default()
    };

    let raw = run_generator(config, &model_text, seed_text.as_deref(), &flags)?;

    let negative = options
        .separators
        .unwrap_or_default()
        .negative;
    let cases = decode_string_cases(&raw, negative);

    Ok(TextOutcome {
        cases,
        wall_time: start.elapsed(),
    })
}
