//! Husk engine: executable lookup, path mapping and renderer process execution.
mod engine;
mod error;
mod executable;
mod path_mapping;
mod runner;
mod settings;
mod types;

pub use engine::{Engine, JobReport, TaskReport};
pub use error::EngineError;
pub use executable::{candidates, resolve_executable};
pub use path_mapping::map_path;
pub use runner::{run_task, ChannelProgressSink, ProgressSink};
pub use settings::{PathMappingRule, RunnerSettings};
pub use types::{EngineEvent, TaskOutcome};
