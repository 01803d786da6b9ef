use crate::{classify_line, Effect, LogEvent, Msg, TaskPhase, TaskState};

/// Pure update function: applies a message to task state and returns host effects.
pub fn update(mut state: TaskState, msg: Msg) -> (TaskState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started { command_line } => {
            if state.phase().is_terminal() {
                return (state, Vec::new());
            }
            let status = format!("Rendering {}", command_line.scene_path());
            state.start();
            state.set_status(&status);
            vec![Effect::SetStatusMessage(status)]
        }
        Msg::StdoutLine(line) => {
            // A failed task stays failed; later output is ignored.
            if state.phase() != TaskPhase::Rendering {
                return (state, Vec::new());
            }
            let classified = classify_line(&line);
            match classified.event {
                LogEvent::Progress { percent } => {
                    state.set_status(classified.matched);
                    state.set_progress(percent);
                    vec![
                        Effect::SetStatusMessage(classified.matched.to_string()),
                        Effect::SetProgress(percent),
                    ]
                }
                LogEvent::Error { message } => {
                    state.fail(&message);
                    vec![Effect::FailRender { message }]
                }
                LogEvent::NoMatch => Vec::new(),
            }
        }
        Msg::ProcessExited { code } => {
            if state.phase() != TaskPhase::Rendering {
                return (state, Vec::new());
            }
            match code {
                Some(0) => {
                    state.complete();
                    vec![Effect::SetProgress(100.0)]
                }
                other => {
                    let message = match other {
                        Some(code) => format!("renderer exited with code {code}"),
                        None => "renderer terminated by signal".to_string(),
                    };
                    state.fail(&message);
                    vec![Effect::FailRender { message }]
                }
            }
        }
    };

    (state, effects)
}
