use std::path::{Path, PathBuf};

use engine_logging::engine_debug;

use crate::{EngineError, RunnerSettings};

/// Candidate paths configured for `key`, in order.
pub fn candidates<'a>(settings: &'a RunnerSettings, key: &str) -> Vec<&'a str> {
    settings
        .executables
        .get(key)
        .map(|list| {
            list.split(';')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// First configured candidate for `key` that exists as a file.
pub fn resolve_executable(settings: &RunnerSettings, key: &str) -> Result<PathBuf, EngineError> {
    let candidates = candidates(settings, key);
    for candidate in &candidates {
        let path = Path::new(candidate);
        if path.is_file() {
            engine_debug!("Resolved {} to {}", key, path.display());
            return Ok(path.to_path_buf());
        }
        engine_debug!("Skipping missing executable candidate {}", candidate);
    }
    Err(EngineError::ExecutableNotFound {
        key: key.to_string(),
        candidates: candidates.into_iter().map(str::to_string).collect(),
    })
}
