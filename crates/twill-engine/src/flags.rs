//! Command-line flags understood by the generator.
//!
//! Flag vocabulary: `/o:<n>` coverage order, `/r` or `/r:<n>` randomization,
//! `/e:<path>` seed file, `/a:` `/d:` `/n:` alias/value/negative separators,
//! `/c` case-sensitive matching, `/s` statistics report instead of cases.

use std::path::PathBuf;

use twill_model::{Random, Separators};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratorFlags {
    pub order: Option<u32>,
    pub random: Option<Random>,
    /// Set by the runner once the seed text has a scratch path.
    pub seed_file: Option<PathBuf>,
    /// Only passed when the model was rendered with non-default separators.
    pub separators: Option<Separators>,
    pub case_sensitive: bool,
    pub statistics: bool,
}

impl GeneratorFlags {
    /// Renders the flag set as individual argv entries.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(order) = self.order {
            args.push(format!("/o:{order}"));
        }
        if let Some(seed_file) = &self.seed_file {
            args.push(format!("/e:{}", seed_file.display()));
        }
        if let Some(separators) = &self.separators {
            args.push(format!("/a:{}", separators.alias));
            args.push(format!("/d:{}", separators.value));
            args.push(format!("/n:{}", separators.negative));
        }
        match self.random {
            Some(Random::Auto) => args.push("/r".to_string()),
            Some(Random::Seed(seed)) => args.push(format!("/r:{seed}")),
            None => {}
        }
        if self.case_sensitive {
            args.push("/c".to_string());
        }
        if self.statistics {
            args.push("/s".to_string());
        }
        args
    }
}
