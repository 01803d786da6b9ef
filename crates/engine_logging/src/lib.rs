#![deny(missing_docs)]
//! Shared logging utilities for the husk workspace.
//!
//! This crate provides the `engine_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Messages logged
//! while a task is active carry that task's label as a prefix.

use std::cell::RefCell;

thread_local! {
    /// Label of the render task being processed on this thread.
    static TASK_LABEL: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Sets the task label for the current thread.
/// The runner calls this before it launches a task.
pub fn set_task_label(label: impl Into<String>) {
    let label = label.into();
    TASK_LABEL.with(|v| *v.borrow_mut() = Some(label));
}

/// Clears the task label for the current thread.
pub fn clear_task_label() {
    TASK_LABEL.with(|v| *v.borrow_mut() = None);
}

/// Retrieves the task label for the current thread, if one is set.
pub fn task_label() -> Option<String> {
    TASK_LABEL.with(|v| v.borrow().clone())
}

/// Prefix prepended to log messages: `[label] ` or nothing.
#[doc(hidden)]
pub fn task_prefix() -> String {
    task_label()
        .map(|label| format!("[{label}] "))
        .unwrap_or_default()
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! engine_trace {
    ($($arg:tt)*) => {{
        log::trace!("{}{}", $crate::task_prefix(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! engine_info {
    ($($arg:tt)*) => {{
        log::info!("{}{}", $crate::task_prefix(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! engine_debug {
    ($($arg:tt)*) => {{
        log::debug!("{}{}", $crate::task_prefix(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        log::warn!("{}{}", $crate::task_prefix(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! engine_error {
    ($($arg:tt)*) => {{
        log::error!("{}{}", $crate::task_prefix(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_follows_task_label() {
        clear_task_label();
        assert_eq!(task_prefix(), "");
        set_task_label("frames 1-4");
        assert_eq!(task_label().as_deref(), Some("frames 1-4"));
        assert_eq!(task_prefix(), "[frames 1-4] ");
        clear_task_label();
        assert!(task_label().is_none());
    }
}
