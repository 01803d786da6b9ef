use crate::{build_command, classify, single_frame_only, CommandLine, JobConfig, LogEvent};

/// Settings key holding the husk executable candidates.
pub const EXECUTABLE_BASE_KEY: &str = "USD_RenderExecutable";

/// Lookup key for the husk executable, suffixed with the version when set.
///
/// `20.5` resolves through `USD_RenderExecutable_20_5`.
pub fn executable_key(version: Option<&str>) -> String {
    match version.filter(|v| !v.is_empty()) {
        Some(version) => format!("{EXECUTABLE_BASE_KEY}_{}", version.replace('.', "_")),
        None => EXECUTABLE_BASE_KEY.to_string(),
    }
}

/// What a host needs from a renderer plugin for one job.
pub trait RenderAdapter: Send + Sync {
    fn executable_key(&self) -> String;
    fn build_command(&self) -> CommandLine;
    fn classify_line(&self, line: &str) -> LogEvent;
    fn is_single_frame_only(&self) -> bool;
}

/// The husk adapter over one validated job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuskAdapter {
    config: JobConfig,
}

impl HuskAdapter {
    pub fn new(config: JobConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &JobConfig {
        &self.config
    }
}

impl RenderAdapter for HuskAdapter {
    fn executable_key(&self) -> String {
        executable_key(self.config.version().map(|v| v.raw()))
    }

    fn build_command(&self) -> CommandLine {
        build_command(&self.config)
    }

    fn classify_line(&self, line: &str) -> LogEvent {
        classify(line)
    }

    fn is_single_frame_only(&self) -> bool {
        single_frame_only(&self.config)
    }
}
