//! Subprocess invocation of the generator.
//!
//! Model and seed text travel to the generator through scratch files. Each
//! file is a scoped resource owned by this call frame, so it is removed on
//! every exit path: success, spawn failure, or a nonzero generator exit.

use std::io::Write;
use std::process::{Command, ExitStatus};

use log::debug;
use tempfile::NamedTempFile;

use crate::config::EngineConfig;
use crate::flags::GeneratorFlags;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to write scratch file: {0}")]
    Scratch(#[source] std::io::Error),

    #[error("failed to spawn generator '{binary}': {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("generator exited with {status}: {stderr}")]
    GeneratorFailed { status: ExitStatus, stderr: String },

    #[error("generator produced non-UTF-8 output")]
    BadEncoding(#[from] std::string::FromUtf8Error),
}

/// Runs the generator over the rendered model (and optional seed) text and
/// returns its captured standard output.
pub fn run_generator(
    config: &EngineConfig,
    model_text: &str,
    seed_text: Option<&str>,
    flags: &GeneratorFlags,
) -> Result<String, EngineError> {
    let model_file = write_scratch(model_text)?;

    let mut flags = flags.clone();
    let _seed_file = match seed_text {
        Some(text) => {
            let file = write_scratch(text)?;
            flags.seed_file = Some(file.path().to_path_buf());
            Some(file)
        }
        None => None,
    };

    let args = flags.to_args();
    debug!(
        "invoking generator {:?} on {} with {:?}",
        config.binary,
        model_file.path().display(),
        args
    );

    let output = Command::new(&config.binary)
        .arg(model_file.path())
        .args(&args)
        .output()
        .map_err(|source| EngineError::Spawn {
            binary: config.binary.display().to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(EngineError::GeneratorFailed {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    let stdout = String::from_utf8(output.stdout)?;
    debug!("generator produced {} bytes", stdout.len());
    Ok(stdout)
}

fn write_scratch(text: &str) -> Result<NamedTempFile, EngineError> {
    let mut file = NamedTempFile::new().map_err(EngineError::Scratch)?;
    file.write_all(text.as_bytes())
        .map_err(EngineError::Scratch)?;
    file.flush().map_err(EngineError::Scratch)?;
    Ok(file)
}
