use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Replace a leading `from` with `to` in scene paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathMappingRule {
    pub from: String,
    pub to: String,
}

/// Worker-side configuration, stored as RON.
///
/// ```ron
/// (
///     executables: {
///         "USD_RenderExecutable": "/opt/hfs/bin/husk;C:/Program Files/Side Effects Software/Houdini/bin/husk.exe",
///         "USD_RenderExecutable_20_5": "/opt/hfs20.5/bin/husk",
///     },
///     path_mappings: [(from: "P:/", to: "/mnt/projects/")],
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerSettings {
    /// Lookup key to `;`-separated executable candidates.
    pub executables: BTreeMap<String, String>,
    pub path_mappings: Vec<PathMappingRule>,
}

impl RunnerSettings {
    pub fn from_ron_str(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let text = fs::read_to_string(path).map_err(|err| EngineError::Settings {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Self::from_ron_str(&text).map_err(|err| EngineError::Settings {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    pub fn with_executable(
        mut self,
        key: impl Into<String>,
        candidates: impl Into<String>,
    ) -> Self {
        self.executables.insert(key.into(), candidates.into());
        self
    }

    pub fn with_path_mapping(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.path_mappings.push(PathMappingRule {
            from: from.into(),
            to: to.into(),
        });
        self
    }
}
