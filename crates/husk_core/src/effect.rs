#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SetStatusMessage(String),
    SetProgress(f64),
    /// Terminal for the task; nothing after this is acted upon.
    FailRender { message: String },
}
