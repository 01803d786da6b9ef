use std::sync::Once;

use husk_core::{build_command, update, Effect, JobConfig, Msg, TaskPhase, TaskState};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn started() -> TaskState {
    let config = JobConfig::new("/shots/a.usd", 1, 1).unwrap();
    let (state, _) = update(
        TaskState::new(),
        Msg::Started {
            command_line: build_command(&config),
        },
    );
    state
}

fn line(state: TaskState, text: &str) -> (TaskState, Vec<Effect>) {
    update(state, Msg::StdoutLine(text.to_string()))
}

#[test]
fn start_sets_rendering_status() {
    init_logging();
    let config = JobConfig::new("/shots/a.usd", 1, 1).unwrap();
    let (state, effects) = update(
        TaskState::new(),
        Msg::Started {
            command_line: build_command(&config),
        },
    );
    assert_eq!(state.phase(), TaskPhase::Rendering);
    assert_eq!(
        effects,
        vec![Effect::SetStatusMessage("Rendering /shots/a.usd".to_string())]
    );
}

#[test]
fn progress_line_reports_status_and_percent() {
    init_logging();
    let (state, effects) = line(started(), "ALF_PROGRESS 42%");
    assert_eq!(
        effects,
        vec![
            Effect::SetStatusMessage("ALF_PROGRESS 42".to_string()),
            Effect::SetProgress(42.0),
        ]
    );
    let view = state.view();
    assert_eq!(view.progress, 42.0);
    assert_eq!(view.status_message.as_deref(), Some("ALF_PROGRESS 42"));
}

#[test]
fn chatter_is_ignored() {
    let state = started();
    let (next, effects) = line(state.clone(), "Loading delegate BRAY_HdKarma");
    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn error_is_terminal_and_later_progress_is_dropped() {
    init_logging();
    let (state, effects) = line(started(), "USD ERROR Could not load layer");
    assert_eq!(
        effects,
        vec![Effect::FailRender {
            message: " Could not load layer".to_string()
        }]
    );
    assert_eq!(state.phase(), TaskPhase::Failed);

    let (state, effects) = line(state, "ALF_PROGRESS 90%");
    assert!(effects.is_empty());
    assert_eq!(state.view().progress, 0.0);

    let (state, effects) = update(state, Msg::ProcessExited { code: Some(0) });
    assert!(effects.is_empty());
    assert_eq!(state.phase(), TaskPhase::Failed);
    assert_eq!(
        state.view().failure.as_deref(),
        Some(" Could not load layer")
    );
}

#[test]
fn clean_exit_completes_task() {
    let (state, _) = line(started(), "ALF_PROGRESS 99%");
    let (state, effects) = update(state, Msg::ProcessExited { code: Some(0) });
    assert_eq!(effects, vec![Effect::SetProgress(100.0)]);
    assert_eq!(state.phase(), TaskPhase::Completed);
    assert_eq!(state.view().progress, 100.0);
}

#[test]
fn non_zero_exit_fails_task() {
    let (state, effects) = update(started(), Msg::ProcessExited { code: Some(3) });
    assert_eq!(
        effects,
        vec![Effect::FailRender {
            message: "renderer exited with code 3".to_string()
        }]
    );
    assert_eq!(state.phase(), TaskPhase::Failed);

    let (state, effects) = update(started(), Msg::ProcessExited { code: None });
    assert_eq!(state.phase(), TaskPhase::Failed);
    assert_eq!(effects.len(), 1);
}

#[test]
fn lines_before_start_are_ignored() {
    let (state, effects) = line(TaskState::new(), "USD ERROR early");
    assert!(effects.is_empty());
    assert_eq!(state.phase(), TaskPhase::Pending);
}
