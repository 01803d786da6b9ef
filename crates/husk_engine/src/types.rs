use husk_core::{TaskPhase, TaskView};
use serde::Serialize;

/// What the engine reports to a sink while a task runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EngineEvent {
    Started { executable: String, command_line: String },
    Stdout { line: String },
    Status { message: String },
    Progress { percent: f64 },
    Failed { message: String },
    Finished { phase: TaskPhase, exit_code: Option<i32> },
}

/// Final state of one renderer invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskOutcome {
    pub view: TaskView,
    pub exit_code: Option<i32>,
}

impl TaskOutcome {
    pub fn succeeded(&self) -> bool {
        self.view.phase == TaskPhase::Completed
    }

    pub fn failure(&self) -> Option<&str> {
        self.view.failure.as_deref()
    }
}
