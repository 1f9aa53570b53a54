pub mod types;
pub mod validate;
pub mod value;

pub use types::{GenOptions, ModelSpec, Parameter, Random, SeedRow, Separators, SubModel};
pub use validate::{validate_order, validate_separators, validate_spec, ShapeError};
pub use value::{alias, negative, plain, weight, ParamValue};
