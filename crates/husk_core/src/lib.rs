//! Husk core: pure command construction, stdout classification and task state.
mod adapter;
mod classify;
mod command;
mod config;
mod effect;
mod error;
mod frame_token;
mod msg;
mod plan;
mod plugin_info;
mod state;
mod update;

pub use adapter::{executable_key, HuskAdapter, RenderAdapter, EXECUTABLE_BASE_KEY};
pub use classify::{classify, classify_line, Classified, LogEvent};
pub use command::{build_command, Argument, CommandLine};
pub use config::{HoudiniVersion, JobConfig, RenderOverride, DUMMY_RASTER_PRODUCT_MIN_MAJOR};
pub use effect::Effect;
pub use error::ConfigError;
pub use frame_token::{contains_frame_token, expand_frame_token, MAX_FRAME_PADDING};
pub use msg::Msg;
pub use plan::{plan_tasks, single_frame_only, FrameRange};
pub use plugin_info::{keys, PluginInfo};
pub use state::{TaskPhase, TaskState, TaskView};
pub use update::update;
