use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};

use engine_logging::{engine_debug, engine_error, engine_info, engine_warn};
use husk_core::{update, Effect, Msg, RenderAdapter, TaskPhase, TaskState};

use crate::{EngineError, EngineEvent, TaskOutcome};

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelProgressSink {
    tx: std::sync::mpsc::Sender<EngineEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: std::sync::mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

/// Launch the renderer for one task and track it until it exits.
///
/// Stdout is consumed on the calling thread and fed line by line through
/// the task state machine. After a fatal line the process is killed.
pub fn run_task(
    adapter: &dyn RenderAdapter,
    executable: &Path,
    sink: &dyn ProgressSink,
) -> Result<TaskOutcome, EngineError> {
    let command_line = adapter.build_command();
    engine_info!("Rendering USD file: {}", command_line.scene_path());
    engine_debug!("{} {}", executable.display(), command_line);

    let mut child = Command::new(executable)
        .args(command_line.to_argv())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| EngineError::Spawn {
            executable: executable.to_path_buf(),
            source,
        })?;

    sink.emit(EngineEvent::Started {
        executable: executable.display().to_string(),
        command_line: command_line.to_string(),
    });

    let stderr_handle = child.stderr.take().map(forward_stderr);

    let (mut state, effects) = update(TaskState::new(), Msg::Started { command_line });
    apply_effects(effects, sink);

    let streamed = stream_stdout(&mut child, state, sink);
    state = match streamed {
        Ok(state) => state,
        Err(err) => {
            kill(&mut child);
            let _ = child.wait();
            return Err(err);
        }
    };

    let killed = state.phase() == TaskPhase::Failed;
    if killed {
        kill(&mut child);
    }

    let status = child.wait()?;
    // Processes started by the renderer may still hold stderr open after a
    // kill; the forwarder is left to finish on its own then.
    if let Some(handle) = stderr_handle.filter(|_| !killed) {
        let _ = handle.join();
    }

    let exit_code = status.code();
    let (state, effects) = update(state, Msg::ProcessExited { code: exit_code });
    apply_effects(effects, sink);

    let view = state.view();
    match view.phase {
        TaskPhase::Completed => engine_info!("Render finished (exit code {:?})", exit_code),
        _ => engine_warn!(
            "Render failed: {}",
            view.failure.as_deref().unwrap_or("unknown failure")
        ),
    }
    sink.emit(EngineEvent::Finished {
        phase: view.phase,
        exit_code,
    });

    Ok(TaskOutcome { view, exit_code })
}

fn stream_stdout(
    child: &mut Child,
    mut state: TaskState,
    sink: &dyn ProgressSink,
) -> Result<TaskState, EngineError> {
    let Some(stdout) = child.stdout.take() else {
        return Ok(state);
    };
    let mut reader = BufReader::new(stdout);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = decode_line(&buf);
        sink.emit(EngineEvent::Stdout { line: line.clone() });

        let (next, effects) = update(state, Msg::StdoutLine(line));
        state = next;
        apply_effects(effects, sink);
        if state.phase() == TaskPhase::Failed {
            break;
        }
    }
    Ok(state)
}

fn apply_effects(effects: Vec<Effect>, sink: &dyn ProgressSink) {
    for effect in effects {
        match effect {
            Effect::SetStatusMessage(message) => sink.emit(EngineEvent::Status { message }),
            Effect::SetProgress(percent) => {
                engine_debug!("Progress {:.0}%", percent);
                sink.emit(EngineEvent::Progress { percent });
            }
            Effect::FailRender { message } => {
                engine_error!("Render error: {}", message);
                sink.emit(EngineEvent::Failed { message });
            }
        }
    }
}

fn forward_stderr<R: Read + Send + 'static>(stderr: R) -> JoinHandle<()> {
    let label = engine_logging::task_label();
    thread::spawn(move || {
        if let Some(label) = label {
            engine_logging::set_task_label(label);
        }
        let mut reader = BufReader::new(stderr);
        let mut buf = Vec::new();
        while matches!(reader.read_until(b'\n', &mut buf), Ok(n) if n > 0) {
            engine_warn!("husk stderr: {}", decode_line(&buf));
            buf.clear();
        }
    })
}

fn kill(child: &mut Child) {
    if let Err(err) = child.kill() {
        engine_debug!("Renderer already exited: {}", err);
    }
}

fn decode_line(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .trim_end_matches(['\n', '\r'])
        .to_string()
}
