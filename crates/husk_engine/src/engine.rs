use std::path::PathBuf;

use engine_logging::{clear_task_label, engine_info, engine_warn, set_task_label};
use husk_core::{plan_tasks, FrameRange, HuskAdapter, JobConfig, PluginInfo, RenderAdapter};

use crate::{
    map_path, resolve_executable, run_task, EngineError, ProgressSink, RunnerSettings,
    TaskOutcome,
};

#[derive(Debug, Clone, PartialEq)]
pub struct TaskReport {
    pub frames: FrameRange,
    pub outcome: TaskOutcome,
}

/// Outcomes of the tasks that ran, in order. Stops at the first failure.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JobReport {
    pub planned: Vec<FrameRange>,
    pub tasks: Vec<TaskReport>,
}

impl JobReport {
    pub fn succeeded(&self) -> bool {
        self.tasks.len() == self.planned.len() && self.tasks.iter().all(|t| t.outcome.succeeded())
    }

    pub fn first_failure(&self) -> Option<&TaskReport> {
        self.tasks.iter().find(|t| !t.outcome.succeeded())
    }
}

/// Stands in for the farm manager on a single worker.
pub struct Engine {
    settings: RunnerSettings,
    executable_override: Option<PathBuf>,
}

impl Engine {
    pub fn new(settings: RunnerSettings) -> Self {
        Self {
            settings,
            executable_override: None,
        }
    }

    /// Use this executable instead of the configured candidates.
    pub fn with_executable(mut self, executable: impl Into<PathBuf>) -> Self {
        self.executable_override = Some(executable.into());
        self
    }

    pub fn settings(&self) -> &RunnerSettings {
        &self.settings
    }

    pub fn executable_for(&self, adapter: &dyn RenderAdapter) -> Result<PathBuf, EngineError> {
        match &self.executable_override {
            Some(path) => Ok(path.clone()),
            None => resolve_executable(&self.settings, &adapter.executable_key()),
        }
    }

    /// Adapter for one task, with the scene path mapped for this worker.
    pub fn prepare(&self, config: JobConfig) -> Result<HuskAdapter, EngineError> {
        let mapped = map_path(&self.settings.path_mappings, config.scene_file());
        if mapped != config.scene_file() {
            engine_info!("Mapped scene path {} -> {}", config.scene_file(), mapped);
        }
        Ok(HuskAdapter::new(config.with_scene_file(mapped)?))
    }

    /// Plan the job's tasks and render them in order.
    pub fn render_job(
        &self,
        info: &PluginInfo,
        start_frame: i64,
        end_frame: i64,
        chunk_size: u32,
        sink: &dyn ProgressSink,
    ) -> Result<JobReport, EngineError> {
        let job = JobConfig::from_plugin_info(info, start_frame, end_frame)?;
        let single_frame = HuskAdapter::new(job.clone()).is_single_frame_only();
        if single_frame {
            engine_info!("Scene path contains $F; rendering one frame per task");
        }
        let planned = plan_tasks(start_frame, end_frame, chunk_size, single_frame)?;

        let mut report = JobReport {
            planned: planned.clone(),
            tasks: Vec::with_capacity(planned.len()),
        };
        for frames in planned {
            set_task_label(format!("frames {}-{}", frames.start, frames.end));
            let result = self.render_task(&job, frames, sink);
            clear_task_label();

            let outcome = result?;
            let failed = !outcome.succeeded();
            report.tasks.push(TaskReport { frames, outcome });
            if failed {
                engine_warn!(
                    "Stopping job after failed task {}-{}",
                    frames.start,
                    frames.end
                );
                break;
            }
        }
        Ok(report)
    }

    fn render_task(
        &self,
        job: &JobConfig,
        frames: FrameRange,
        sink: &dyn ProgressSink,
    ) -> Result<TaskOutcome, EngineError> {
        let config = job.clone().with_frame_range(frames.start, frames.end)?;
        let adapter = self.prepare(config)?;
        let executable = self.executable_for(&adapter)?;
        run_task(&adapter, &executable, sink)
    }
}
