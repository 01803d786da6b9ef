#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Renderer process was launched with this command line.
    Started { command_line: crate::CommandLine },
    /// One line of renderer stdout, without its line terminator.
    StdoutLine(String),
    /// Renderer process exited; `None` when killed by a signal.
    ProcessExited { code: Option<i32> },
}
