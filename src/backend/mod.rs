//! The contract between the facade and whatever actually stores log entries.
//!
//! The facade never formats, filters or persists anything on its own: it asks a
//! [`Backend`] for a named [`Channel`], checks whether the level is enabled there,
//! and hands over the composed line. A few reference backends live here so the
//! crate is usable without writing one.

mod levels;
#[cfg(feature = "log")]
mod log_crate;
mod json;
mod memory;
mod terminal;

pub use json::JsonBackend;
pub(crate) use json::default_path as default_json_path;
pub use levels::ChannelLevels;
#[cfg(feature = "log")]
pub use log_crate::LogBackend;
pub use memory::{MemoryBackend, RecordedEntry};
pub use terminal::TerminalBackend;

use crate::level::Level;
use std::error::Error as StdError;
use std::fmt::Write as _;
use std::sync::Arc;

/// Resolves channel names to writable channels.
///
/// `None` means the backend cannot serve the channel right now (torn down,
/// shutting down, not configured). The facade reports that as
/// [`LogOutcome::SkippedBackendUnavailable`](crate::LogOutcome::SkippedBackendUnavailable).
pub trait Backend: Send + Sync {
    fn channel<'a>(&'a self, name: &'a str) -> Option<Box<dyn Channel + 'a>>;
}

/// One named logging destination.
pub trait Channel {
    /// Cheap check consulted before any formatting happens.
    fn is_enabled(&self, level: Level) -> bool;

    /// Writes one composed line. `error` is the raw error so backends can record
    /// its full source chain.
    ///
    /// # Errors
    /// I/O or serialization errors from the underlying sink. The facade discards them.
    fn write(
        &self,
        level: Level,
        text: &str,
        error: Option<&(dyn StdError + 'static)>,
    ) -> Result<(), crate::Error>;
}

impl<B: Backend + ?Sized> Backend for Arc<B> {
    fn channel<'a>(&'a self, name: &'a str) -> Option<Box<dyn Channel + 'a>> {
        (**self).channel(name)
    }
}

impl<B: Backend + ?Sized> Backend for Box<B> {
    fn channel<'a>(&'a self, name: &'a str) -> Option<Box<dyn Channel + 'a>> {
        (**self).channel(name)
    }
}

/// Full `Display` chain of an error, outermost first.
pub(crate) fn error_chain(error: &(dyn StdError + 'static)) -> Vec<String> {
    let mut chain = vec![error.to_string()];
    let mut current = error.source();
    while let Some(cause) = current {
        chain.push(cause.to_string());
        current = cause.source();
    }
    chain
}

/// Appends every cause below the first source, each preceded by `separator`.
///
/// The composed text already carries the error and its first source.
pub(crate) fn push_deeper_causes(
    out: &mut String,
    error: Option<&(dyn StdError + 'static)>,
    separator: &str,
) {
    let mut current = error
        .and_then(|error| error.source())
        .and_then(|cause| cause.source());
    while let Some(cause) = current {
        out.push_str(separator);
        let _ = write!(out, "{cause}");
        current = cause.source();
    }
}
