//! Builds the text handed to the backend and to the diagnostic channel.
//!
//! Every entry has the same shape regardless of which parts the caller supplied:
//! `[<correlation id>] [<channel>] [<text>]`.

use crate::correlation::CorrelationId;
use crate::level::Level;
use chrono::Local;
use std::borrow::Cow;
use std::fmt::Write;

/// Used when neither a message nor an error summary is available.
pub const PLACEHOLDER: &str =
    "Unknown Error Occurred - no message or exception was passed to Logger";

/// Joins a message and an error summary when both are present.
pub const MESSAGE_SEPARATOR: &str = " | ";

/// Prefix of every diagnostic-channel line.
pub const DIAGNOSTIC_TAG: &str = "corrlog:";

/// Millisecond precision keeps bursts of diagnostic lines distinguishable.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Picks the entry text from an optional message and an optional error summary.
///
/// Blank messages and empty summaries count as absent.
#[must_use]
pub fn resolve_text<'a>(message: Option<&'a str>, summary: Option<&'a str>) -> Cow<'a, str> {
    let message = message.filter(|m| !m.trim().is_empty());
    let summary = summary.filter(|s| !s.is_empty());

    match (message, summary) {
        (Some(msg), None) => Cow::Borrowed(msg),
        (None, Some(summary)) => Cow::Borrowed(summary),
        (Some(msg), Some(summary)) => Cow::Owned(format!("{msg}{MESSAGE_SEPARATOR}{summary}")),
        (None, None) => Cow::Borrowed(PLACEHOLDER),
    }
}

/// The line written to the backend.
#[must_use]
pub fn primary_line(correlation: &CorrelationId, channel: &str, text: &str) -> String {
    format!("[{correlation}] [{channel}] [{text}]")
}

/// The line written to the diagnostic channel, tagged with level and timestamp.
#[must_use]
pub fn diagnostic_line(
    level: Level,
    timestamp: &str,
    correlation: &CorrelationId,
    channel: &str,
    text: &str,
) -> String {
    format!(
        "{DIAGNOSTIC_TAG} ({}) {timestamp} {}",
        level.label(),
        primary_line(correlation, channel, text)
    )
}

/// Current local time rendered with a strftime `format`.
///
/// An invalid format falls back to [`DEFAULT_TIMESTAMP_FORMAT`] instead of panicking.
#[must_use]
pub fn timestamp(format: &str) -> String {
    let now = Local::now();
    let mut out = String::new();
    if write!(out, "{}", now.format(format)).is_err() {
        out.clear();
        let _ = write!(out, "{}", now.format(DEFAULT_TIMESTAMP_FORMAT));
    }
    out
}

/// True when chrono can render `format` without errors.
#[must_use]
pub fn is_valid_timestamp_format(format: &str) -> bool {
    use chrono::format::{Item, StrftimeItems};
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}
