use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Output file could not be created by the render driver.
static DRIVER_CREATE_FILE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r".*(\[driver.*\] .*can't create file .*\(No such file or directory\))")
        .expect("valid regex")
});

/// Texture could not be loaded.
static TEXTURE_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r".*ERROR.*\[texturesys\] .* (Could not open file .*)").expect("valid regex")
});

static USD_ERROR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"USD ERROR(.*)").expect("valid regex"));

/// The `%` stands in for a look-ahead; the status text stops before it.
static ALF_PROGRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ALF_PROGRESS ([0-9]+)%").expect("valid regex"));

/// Classification of one renderer stdout line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LogEvent {
    Progress { percent: f64 },
    Error { message: String },
    NoMatch,
}

/// A classified line together with the text the pattern matched.
#[derive(Debug, Clone, PartialEq)]
pub struct Classified<'a> {
    pub event: LogEvent,
    pub matched: &'a str,
}

/// Classify a line. Error patterns win over progress.
pub fn classify(line: &str) -> LogEvent {
    classify_line(line).event
}

pub fn classify_line(line: &str) -> Classified<'_> {
    for re in [&*DRIVER_CREATE_FILE_RE, &*TEXTURE_OPEN_RE, &*USD_ERROR_RE] {
        if let Some(caps) = re.captures(line) {
            let message = caps.get(1).map_or("", |m| m.as_str());
            return Classified {
                event: LogEvent::Error {
                    message: message.to_string(),
                },
                matched: caps.get(0).map_or("", |m| m.as_str()),
            };
        }
    }

    if let Some(caps) = ALF_PROGRESS_RE.captures(line) {
        if let (Some(whole), Some(digits)) = (caps.get(0), caps.get(1)) {
            let percent = digits.as_str().parse::<f64>().unwrap_or(0.0).clamp(0.0, 100.0);
            return Classified {
                event: LogEvent::Progress { percent },
                matched: &line[whole.start()..digits.end()],
            };
        }
    }

    Classified {
        event: LogEvent::NoMatch,
        matched: "",
    }
}
