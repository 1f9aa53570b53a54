pub mod error;
pub mod plan;
pub mod strings;
pub mod text;
pub mod typed;

pub use error::TwillError;
pub use plan::{build_plan, Plan};
pub use strings::{generate_strings, StringOptions};
pub use text::{generate_text, ModelSource, TextOptions, TextOutcome};
pub use typed::{generate, generate_stats};

pub use twill_engine::EngineConfig;
pub use twill_model::{
    alias, negative, plain, weight, GenOptions, ModelSpec, ParamValue, Parameter, Random, SeedRow,
    Separators, SubModel,
};
pub use twill_wire::{Case, Statistics, ValuesIdMap};
