use serde::{Deserialize, Serialize};

use crate::value::ParamValue;

/// A named parameter and its ordered value list.
///
/// Keys are plain strings; a model-build pass admits exactly one parameter
/// per key.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter<V> {
    pub key: String,
    pub values: Vec<ParamValue<V>>,
}

impl<V> Parameter<V> {
    pub fn new(key: impl Into<String>, values: Vec<ParamValue<V>>) -> Self {
        Self {
            key: key.into(),
            values,
        }
    }
}

/// A subset of parameters generated at its own coverage order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubModel {
    pub keys: Vec<String>,
    /// Coverage order for this subset; the model-wide order applies if absent.
    pub order: Option<u32>,
}

impl SubModel {
    pub fn new(keys: impl IntoIterator<Item = impl Into<String>>, order: Option<u32>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            order,
        }
    }
}

/// A partial test case used to seed generation: an ordered mapping from
/// parameter key to one of that parameter's declared values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeedRow<V> {
    entries: Vec<(String, V)>,
}

impl<V> SeedRow<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends one key/value pair to the row.
    pub fn set(mut self, key: impl Into<String>, value: V) -> Self {
        self.entries.push((key.into(), value));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

/// Everything a single generation run needs from the caller: parameters,
/// optional sub-models and seeds, and opaque constraint lines.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSpec<V> {
    pub parameters: Vec<Parameter<V>>,
    pub sub_models: Vec<SubModel>,
    pub seeds: Vec<SeedRow<V>>,
    /// Constraint expressions in the generator's grammar, passed through verbatim.
    pub constraints: Vec<String>,
}

impl<V> ModelSpec<V> {
    pub fn new(parameters: Vec<Parameter<V>>) -> Self {
        Self {
            parameters,
            sub_models: Vec::new(),
            seeds: Vec::new(),
            constraints: Vec::new(),
        }
    }

    pub fn with_sub_models(mut self, sub_models: Vec<SubModel>) -> Self {
        self.sub_models = sub_models;
        self
    }

    pub fn with_seeds(mut self, seeds: Vec<SeedRow<V>>) -> Self {
        self.seeds = seeds;
        self
    }

    pub fn with_constraints(mut self, constraints: Vec<String>) -> Self {
        self.constraints = constraints;
        self
    }
}

/// Randomization handed to the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Random {
    /// Let the generator pick its own seed.
    Auto,
    /// Fixed seed for reproducible shuffling.
    Seed(u32),
}

/// Generation options for the typed API.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GenOptions {
    /// Coverage order; defaults to pairwise, clamped to the parameter count.
    pub order: Option<u32>,
    pub random: Option<Random>,
    pub case_sensitive: bool,
}

/// The three single-character separators of the model grammar.
///
/// `char` fields make the single-character rule structural; the remaining
/// grammar hazard (two separators configured equal) is caught by
/// `validate_separators`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Separators {
    /// Joins the members of an alias group inside one value slot.
    pub alias: char,
    /// Joins the value slots of one parameter line.
    pub value: char,
    /// Prefixes a negative value.
    pub negative: char,
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            alias: '|',
            value: ',',
            negative: '~',
        }
    }
}

impl Separators {
    /// Whether `c` is one of the three reserved characters.
    pub fn is_reserved(&self, c: char) -> bool {
        c == self.alias || c == self.value || c == self.negative
    }
}
