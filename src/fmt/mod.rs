//! Text shaping for log entries: error summaries and the composed lines.
//!
//! Both are pure functions so they can run only after the severity gate has
//! admitted an entry.

mod compose;
mod exception;

pub use compose::{
    DEFAULT_TIMESTAMP_FORMAT, DIAGNOSTIC_TAG, MESSAGE_SEPARATOR, PLACEHOLDER, diagnostic_line,
    is_valid_timestamp_format, primary_line, resolve_text, timestamp,
};
pub use exception::{CAUSE_SEPARATOR, MAX_SUMMARY_CHARS, summarize, truncate_chars};
