use std::io;
use std::path::PathBuf;

use husk_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid job configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("no husk executable found for {key} (candidates: {candidates:?})")]
    ExecutableNotFound { key: String, candidates: Vec<String> },
    #[error("failed to launch {}: {source}", .executable.display())]
    Spawn {
        executable: PathBuf,
        source: io::Error,
    },
    #[error("settings file {}: {message}", .path.display())]
    Settings { path: PathBuf, message: String },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
