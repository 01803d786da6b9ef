use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPhase {
    #[default]
    Pending,
    Rendering,
    Completed,
    Failed,
}

impl TaskPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskPhase::Completed | TaskPhase::Failed)
    }
}

/// Host-side status of one render task.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskState {
    phase: TaskPhase,
    progress: f64,
    status_message: Option<String>,
    failure: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TaskView {
    pub phase: TaskPhase,
    pub progress: f64,
    pub status_message: Option<String>,
    pub failure: Option<String>,
}

impl TaskState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> TaskView {
        TaskView {
            phase: self.phase,
            progress: self.progress,
            status_message: self.status_message.clone(),
            failure: self.failure.clone(),
        }
    }

    pub fn phase(&self) -> TaskPhase {
        self.phase
    }

    pub(crate) fn start(&mut self) {
        self.phase = TaskPhase::Rendering;
        self.progress = 0.0;
        self.failure = None;
    }

    pub(crate) fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
    }

    pub(crate) fn set_progress(&mut self, percent: f64) {
        self.progress = percent;
    }

    pub(crate) fn complete(&mut self) {
        self.phase = TaskPhase::Completed;
        self.progress = 100.0;
    }

    pub(crate) fn fail(&mut self, message: &str) {
        self.phase = TaskPhase::Failed;
        self.failure = Some(message.to_string());
    }
}
