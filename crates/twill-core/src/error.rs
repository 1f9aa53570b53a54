use twill_engine::EngineError;
use twill_model::ShapeError;
use twill_wire::{BuildError, DecodeError, IdMapError, StatsError};

/// Unified error for the generation pipelines. One variant per failure
/// family; every operation is all-or-nothing and nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum TwillError {
    #[error("model shape error: {0}")]
    Shape(#[from] ShapeError),

    #[error("model build error: {0}")]
    Build(#[from] BuildError),

    #[error("identity map error: {0}")]
    IdMap(#[from] IdMapError),

    #[error("generator error: {0}")]
    Engine(#[from] EngineError),

    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("statistics error: {0}")]
    Stats(#[from] StatsError),

    #[error("failed to read model source: {0}")]
    Io(#[from] std::io::Error),
}
