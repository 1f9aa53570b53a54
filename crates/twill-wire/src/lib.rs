pub mod decode;
pub mod ident;
pub mod idmap;
pub mod model;
pub mod seed;
pub mod stats;

pub use decode::{decode_cases, decode_string_cases, Case, DecodeError};
pub use ident::IdAllocator;
pub use idmap::{IdMapError, ResolvedValue, ValuesIdMap};
pub use model::{BuildError, ModelBuilder};
pub use seed::SeedBuilder;
pub use stats::{parse_statistics, Statistics, StatsError};
