use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Plugin info keys understood by the husk adapter.
pub mod keys {
    pub const SCENE_FILE: &str = "SceneFile";
    pub const VERSION: &str = "Version";
    pub const LOG_LEVEL: &str = "LogLevel";
    pub const RENDERER: &str = "Renderer";
    pub const RENDER_SETTINGS: &str = "RenderSettings";
    pub const PURPOSE: &str = "Purpose";
    pub const COMPLEXITY: &str = "Complexity";
    pub const SNAPSHOT: &str = "Snapshot";
    pub const PRE_RENDER: &str = "PreRender";
    pub const PRE_FRAME: &str = "PreFrame";
    pub const POST_FRAME: &str = "PostFrame";
    pub const POST_RENDER: &str = "PostRender";
    pub const LIST_LICENSE_CHECKS: &str = "ListLicenseChecks";
}

/// String-keyed job configuration as submitted to the farm.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PluginInfo {
    entries: BTreeMap<String, String>,
}

impl PluginInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `Key=Value` lines. Blank lines and `#`/`;` comments are skipped,
    /// later duplicates replace earlier ones.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut info = Self::new();
        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(ConfigError::MalformedEntry {
                    line_number: index + 1,
                    line: raw.to_string(),
                });
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(ConfigError::MalformedEntry {
                    line_number: index + 1,
                    line: raw.to_string(),
                });
            }
            info.insert(key, value.trim());
        }
        Ok(info)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Value for `key`, treating an empty string as unset.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    pub fn require(&self, key: &str) -> Result<&str, ConfigError> {
        self.non_empty(key)
            .ok_or_else(|| ConfigError::MissingEntry(key.to_string()))
    }

    pub fn bool_or(&self, key: &str, default: bool) -> Result<bool, ConfigError> {
        let Some(value) = self.non_empty(key) else {
            return Ok(default);
        };
        match value.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(ConfigError::InvalidBoolean {
                key: key.to_string(),
                value: value.to_string(),
            }),
        }
    }
}
