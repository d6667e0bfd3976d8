//! Adapter onto the `log` crate facade.
//!
//! The channel name becomes the record target, so `RUST_LOG`-style target filters
//! of the installed logger decide what is enabled.

use super::{Backend, Channel, push_deeper_causes};
use crate::level::Level;
use std::error::Error as StdError;

impl Level {
    /// `log` has no fatal level; fatal entries are logged as errors.
    #[must_use]
    pub const fn to_log_level(self) -> log::Level {
        match self {
            Self::Trace => log::Level::Trace,
            Self::Debug => log::Level::Debug,
            Self::Info => log::Level::Info,
            Self::Warn => log::Level::Warn,
            Self::Error | Self::Fatal => log::Level::Error,
        }
    }
}

/// Forwards to whatever logger is installed with `log::set_logger`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogBackend;

impl LogBackend {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

struct LogChannel<'a> {
    target: &'a str,
}

impl Backend for LogBackend {
    fn channel<'a>(&'a self, name: &'a str) -> Option<Box<dyn Channel + 'a>> {
        Some(Box::new(LogChannel { target: name }))
    }
}

impl Channel for LogChannel<'_> {
    fn is_enabled(&self, level: Level) -> bool {
        let level = level.to_log_level();
        level <= log::max_level()
            && log::logger().enabled(
                &log::Metadata::builder()
                    .level(level)
                    .target(self.target)
                    .build(),
            )
    }

    fn write(
        &self,
        level: Level,
        text: &str,
        error: Option<&(dyn StdError + 'static)>,
    ) -> Result<(), crate::Error> {
        let mut message = text.to_string();
        push_deeper_causes(&mut message, error, "; caused by: ");
        log::logger().log(
            &log::Record::builder()
                .args(format_args!("{message}"))
                .level(level.to_log_level())
                .target(self.target)
                .build(),
        );
        Ok(())
    }
}
