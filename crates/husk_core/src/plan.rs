use serde::Serialize;

use crate::{contains_frame_token, ConfigError, JobConfig};

/// Inclusive frame range handled by one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameRange {
    pub start: i64,
    pub end: i64,
}

impl FrameRange {
    pub fn len(&self) -> i64 {
        self.end - self.start + 1
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

/// A per-frame input file cannot be rendered as a range in one husk call.
pub fn single_frame_only(config: &JobConfig) -> bool {
    contains_frame_token(config.scene_file())
}

/// Split `[start, end]` into tasks of at most `chunk_size` frames.
pub fn plan_tasks(
    start: i64,
    end: i64,
    chunk_size: u32,
    single_frame_only: bool,
) -> Result<Vec<FrameRange>, ConfigError> {
    if start > end {
        return Err(ConfigError::InvertedFrameRange { start, end });
    }
    if chunk_size == 0 {
        return Err(ConfigError::ZeroChunkSize);
    }
    let step = if single_frame_only { 1 } else { i64::from(chunk_size) };

    let mut tasks = Vec::new();
    let mut task_start = start;
    loop {
        let task_end = task_start.saturating_add(step - 1).min(end);
        tasks.push(FrameRange {
            start: task_start,
            end: task_end,
        });
        if task_end >= end {
            break;
        }
        task_start = task_end + 1;
    }
    Ok(tasks)
}
