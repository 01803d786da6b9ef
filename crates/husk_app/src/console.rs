use husk_engine::{EngineEvent, ProgressSink};

/// Prints engine events for the operator, or as JSON lines for a wrapper.
pub struct ConsoleSink {
    json: bool,
}

impl ConsoleSink {
    pub fn new(json: bool) -> Self {
        Self { json }
    }
}

impl ProgressSink for ConsoleSink {
    fn emit(&self, event: EngineEvent) {
        if self.json {
            match serde_json::to_string(&event) {
                Ok(text) => println!("{text}"),
                Err(err) => eprintln!("Warning: could not serialize event: {err}"),
            }
            return;
        }
        match event {
            EngineEvent::Started {
                executable,
                command_line,
            } => println!("Running: {executable} {command_line}"),
            EngineEvent::Stdout { line } => println!("{line}"),
            EngineEvent::Status { message } => println!("STATUS: {message}"),
            EngineEvent::Progress { percent } => println!("PROGRESS: {percent:.0}%"),
            EngineEvent::Failed { message } => println!("FAILED: {message}"),
            EngineEvent::Finished { phase, exit_code } => {
                println!("FINISHED: {phase:?} (exit code {exit_code:?})")
            }
        }
    }
}
