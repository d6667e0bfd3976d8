//! Bounded, single-line summaries of error values.

use std::error::Error as StdError;

/// Placed between an error's own text and its direct source.
pub const CAUSE_SEPARATOR: &str = " --- ";

/// Upper bound on summary length, in characters.
pub const MAX_SUMMARY_CHARS: usize = 500;

/// Summarizes `error` as `"<error>"` or `"<error> --- <source>"`.
///
/// Only the direct source is included; deeper causes are ignored. Carriage
/// returns, line feeds and tabs are removed, and the result is cut to
/// [`MAX_SUMMARY_CHARS`] characters on a code-point boundary.
#[must_use]
pub fn summarize(error: &(dyn StdError + 'static)) -> String {
    let mut text = error.to_string();

    if let Some(cause) = error.source() {
        text.push_str(CAUSE_SEPARATOR);
        text.push_str(&cause.to_string());
    }

    text.retain(|c| !matches!(c, '\r' | '\n' | '\t'));
    truncate_chars(&mut text, MAX_SUMMARY_CHARS);
    text
}

/// Cuts `text` to at most `max` characters without splitting a code point.
pub fn truncate_chars(text: &mut String, max: usize) {
    if let Some((idx, _)) = text.char_indices().nth(max) {
        text.truncate(idx);
    }
}
