//! Model text rendering for the generator's line-oriented grammar.
//!
//! The grammar the builder emits:
//! - one line per parameter: `key:token,token,...`
//! - alias group inside one slot: `t1|t2`
//! - negative value: `~t`
//! - weighted value: `t(w)`
//! - sub-model line: `{key,key}` with optional `@order` suffix
//! - constraint lines, passed through verbatim
//!
//! Parameter, sub-model and constraint blocks are separated by a blank line;
//! empty blocks are omitted. The alias, value and negative characters are
//! configurable because callers may need them inside value tokens; the
//! builder exposes the effective set so the caller can pass matching flags
//! to the generator.

use std::fmt::Write as _;

use twill_model::Separators;

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("parameter '{0}' is not defined")]
    ParameterNotDefined(String),

    #[error("token '{token}' contains reserved character '{separator}'")]
    ReservedCharacter { token: String, separator: char },

    #[error("seed row must not be empty")]
    EmptySeedRow,

    #[error("seed references undefined parameter '{0}'")]
    UnknownSeedParameter(String),

    #[error("seed value '{value}' is not declared for parameter '{parameter}'")]
    UnknownSeedValue { parameter: String, value: String },
}

#[derive(Debug)]
struct SubModelLine {
    keys: Vec<String>,
    order: Option<u32>,
}

/// Accumulates serialized value tokens per parameter and renders the model
/// text. Keys keep their insertion order.
#[derive(Debug)]
pub struct ModelBuilder {
    separators: Separators,
    parameters: Vec<(String, Vec<String>)>,
    sub_models: Vec<SubModelLine>,
    constraints: Vec<String>,
}

impl Default for ModelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::with_separators(Separators::default())
    }

    pub fn with_separators(separators: Separators) -> Self {
        Self {
            separators,
            parameters: Vec::new(),
            sub_models: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// The separator set this builder renders with, for matching generator flags.
    pub fn separators(&self) -> &Separators {
        &self.separators
    }

    /// Appends a bare token to a parameter.
    pub fn add_parameter(&mut self, key: &str, token: &str) {
        self.tokens_for(key).push(token.to_string());
    }

    /// Appends an alias group, joined with the alias separator.
    pub fn add_alias_parameter(&mut self, key: &str, tokens: &[String]) {
        let joined = tokens.join(&self.separators.alias.to_string());
        self.tokens_for(key).push(joined);
    }

    /// Appends a negative token, prefixed with the negative character.
    pub fn add_negative_parameter(&mut self, key: &str, token: &str) {
        let prefixed = format!("{}{token}", self.separators.negative);
        self.tokens_for(key).push(prefixed);
    }

    /// Appends a weighted token as `token(weight)`.
    pub fn add_weighted_parameter(&mut self, key: &str, token: &str, weight: u32) {
        let weighted = format!("{token}({weight})");
        self.tokens_for(key).push(weighted);
    }

    /// Records a sub-model over already-defined parameter keys.
    pub fn add_sub_model(&mut self, keys: &[String], order: Option<u32>) -> Result<(), BuildError> {
        for key in keys {
            if !self.parameters.iter().any(|(existing, _)| existing == key) {
                return Err(BuildError::ParameterNotDefined(key.clone()));
            }
        }
        self.sub_models.push(SubModelLine {
            keys: keys.to_vec(),
            order,
        });
        Ok(())
    }

    /// Appends a constraint expression verbatim.
    pub fn add_constraint(&mut self, constraint: &str) {
        self.constraints.push(constraint.to_string());
    }

    /// Cleans a caller-supplied string token: embedded newlines and tabs are
    /// dropped, surrounding whitespace trimmed, and any remaining reserved
    /// separator character is rejected since it would corrupt the grammar.
    pub fn sanitize_token(&self, raw: &str) -> Result<String, BuildError> {
        let cleaned: String = raw.chars().filter(|c| *c != '\n' && *c != '\t').collect();
        let cleaned = cleaned.trim().to_string();
        if let Some(separator) = cleaned.chars().find(|c| self.separators.is_reserved(*c)) {
            return Err(BuildError::ReservedCharacter {
                token: cleaned,
                separator,
            });
        }
        Ok(cleaned)
    }

    /// Renders the accumulated model into the generator's grammar.
    pub fn model_text(&self) -> String {
        let mut text = String::new();

        let value_separator = self.separators.value.to_string();
        for (index, (key, tokens)) in self.parameters.iter().enumerate() {
            if index > 0 {
                text.push('\n');
            }
            let _ = write!(text, "{key}:{}", tokens.join(&value_separator));
        }

        if !self.sub_models.is_empty() {
            text.push_str("\n\n");
            for (index, sub) in self.sub_models.iter().enumerate() {
                if index > 0 {
                    text.push('\n');
                }
                let _ = write!(text, "{{{}}}", sub.keys.join(","));
                if let Some(order) = sub.order {
                    let _ = write!(text, "@{order}");
                }
            }
        }

        if !self.constraints.is_empty() {
            text.push_str("\n\n");
            text.push_str(&self.constraints.join("\n"));
        }

        text
    }

    fn tokens_for(&mut self, key: &str) -> &mut Vec<String> {
        if let Some(index) = self.parameters.iter().position(|(existing, _)| existing == key) {
            &mut self.parameters[index].1
        } else {
            self.parameters.push((key.to_string(), Vec::new()));
            let last = self.parameters.len() - 1;
            &mut self.parameters[last].1
        }
    }
}
