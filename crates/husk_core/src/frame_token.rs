use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::ConfigError;

/// `$F` followed by an optional pad width.
static FRAME_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$F([0-9]*)").expect("valid regex"));

/// Widest `$F<n>` pad a job may request.
pub const MAX_FRAME_PADDING: usize = 4096;

/// Expand every `$F` (or padded `$F4`) in `text` to `frame`.
///
/// Only `$F` and the digits directly after it are consumed, so `$FF` expands
/// to `<frame>F` and `$FEND` to `<frame>END`. The renderer's own output
/// tokens are not interpreted here. Pad widths are not limited; a
/// [`crate::JobConfig`] rejects widths above [`MAX_FRAME_PADDING`].
pub fn expand_frame_token(text: &str, frame: i64) -> String {
    FRAME_TOKEN_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let width = pad_width(&caps[1]);
            format!("{frame:0width$}")
        })
        .into_owned()
}

/// Reject pad widths no task should ask for.
pub(crate) fn check_frame_padding(text: &str) -> Result<(), ConfigError> {
    for caps in FRAME_TOKEN_RE.captures_iter(text) {
        if pad_width(&caps[1]) > MAX_FRAME_PADDING {
            return Err(ConfigError::FramePaddingTooWide {
                token: caps[0].to_string(),
                max: MAX_FRAME_PADDING,
            });
        }
    }
    Ok(())
}

/// Width digits that overflow `usize` saturate.
fn pad_width(digits: &str) -> usize {
    if digits.is_empty() {
        return 1;
    }
    digits.parse::<usize>().unwrap_or(usize::MAX)
}

/// Whether `text` holds a literal `$F`.
pub fn contains_frame_token(text: &str) -> bool {
    text.contains("$F")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_defaults_to_one() {
        assert_eq!(expand_frame_token("shot.$F.usd", 7), "shot.7.usd");
        assert_eq!(expand_frame_token("shot.$F.usd", 1234), "shot.1234.usd");
    }

    #[test]
    fn zero_width_keeps_plain_number() {
        assert_eq!(expand_frame_token("a.$F0.usd", 5), "a.5.usd");
    }

    #[test]
    fn wide_padding_is_expanded() {
        let expanded = expand_frame_token("a.$F65.usd", 5);
        assert_eq!(expanded.len(), "a.".len() + 65 + ".usd".len());
        assert_eq!(expanded, format!("a.{}5.usd", "0".repeat(64)));
    }

    #[test]
    fn padding_check_limits_width() {
        assert!(check_frame_padding("a.$F65.usd").is_ok());
        assert!(check_frame_padding(&format!("a.$F{MAX_FRAME_PADDING}.usd")).is_ok());
        assert_eq!(
            check_frame_padding("a.$F99999999999999999999999.usd"),
            Err(ConfigError::FramePaddingTooWide {
                token: "$F99999999999999999999999".to_string(),
                max: MAX_FRAME_PADDING,
            })
        );
    }
}
