//! Parsing of the generator's statistics output.
//!
//! With the statistics flag the generator prints a short key/value report
//! instead of a case table:
//!
//! ```text
//! Combinations:    N
//! Generated tests: N
//! Generation time: h:mm:ss
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("malformed statistics line '{0}'")]
    MalformedLine(String),

    #[error("unexpected statistics key '{0}'")]
    UnknownKey(String),

    #[error("invalid count in statistics line '{0}'")]
    InvalidCount(String),

    #[error("statistics output missing '{0}'")]
    MissingField(&'static str),
}

/// Normalized generation statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Value combinations the model required covering.
    pub combinations: u64,
    /// Cases the generator produced.
    pub generated_tests: u64,
    /// The generator's own timing string, reported as-is.
    pub generation_time: String,
    /// Wall time of the whole invocation, measured around the subprocess.
    pub wall_time: Duration,
}

/// Parses the raw statistics report. Fails on lines without a `key: value`
/// shape and on keys outside the report's fixed vocabulary.
pub fn parse_statistics(raw: &str, wall_time: Duration) -> Result<Statistics, StatsError> {
    let mut combinations = None;
    let mut generated_tests = None;
    let mut generation_time = None;

    for line in raw.lines().filter(|line| !line.trim().is_empty()) {
        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| StatsError::MalformedLine(line.to_string()))?;
        let value = value.trim();
        match key.trim() {
            "Combinations" => combinations = Some(parse_count(line, value)?),
            "Generated tests" => generated_tests = Some(parse_count(line, value)?),
            "Generation time" => generation_time = Some(value.to_string()),
            other => return Err(StatsError::UnknownKey(other.to_string())),
        }
    }

    Ok(Statistics {
        combinations: combinations.ok_or(StatsError::MissingField("Combinations"))?,
        generated_tests: generated_tests.ok_or(StatsError::MissingField("Generated tests"))?,
        generation_time: generation_time
            .ok_or(StatsError::MissingField("Generation time"))?,
        wall_time,
    })
}

fn parse_count(line: &str, value: &str) -> Result<u64, StatsError> {
    value
        .parse()
        .map_err(|_| StatsError::InvalidCount(line.to_string()))
}
