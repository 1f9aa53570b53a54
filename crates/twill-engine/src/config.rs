use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Location of the external PICT-compatible generator binary.
///
/// The binary is the only shared resource between concurrent generation
/// calls; everything else is scoped per invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Path to the generator executable.
    pub binary: PathBuf,
}

impl Default for EngineConfig {
    /// Resolves `TWILL_PICT_BIN`, falling back to `pict` on `PATH`.
    fn default() -> Self {
        let binary = std::env::var_os("TWILL_PICT_BIN")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("pict"));
        Self { binary }
    }
}

impl EngineConfig {
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}
