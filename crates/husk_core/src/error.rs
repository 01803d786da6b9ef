use thiserror::Error;

/// Malformed job configuration. Detected before any command is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("scene file path is empty")]
    EmptySceneFile,
    #[error("start frame {start} is after end frame {end}")]
    InvertedFrameRange { start: i64, end: i64 },
    #[error("invalid version {0:?}: expected \"major.minor\" with a numeric major")]
    InvalidVersion(String),
    #[error("invalid boolean for {key}: {value:?}")]
    InvalidBoolean { key: String, value: String },
    #[error("missing required plugin info entry {0}")]
    MissingEntry(String),
    #[error("malformed plugin info line {line_number}: {line:?}")]
    MalformedEntry { line_number: usize, line: String },
    #[error("frame token {token} pads wider than {max} digits")]
    FramePaddingTooWide { token: String, max: usize },
    #[error("chunk size must be at least 1")]
    ZeroChunkSize,
}
