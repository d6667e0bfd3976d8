//! Terminal backend: immediate feedback on stdout/stderr without any file setup.

use super::{Backend, Channel, ChannelLevels, push_deeper_causes};
use crate::level::Level;
use std::error::Error as StdError;
use std::io::{self, Write};

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";
const CAUSE_PREFIX: &str = "\n      caused by: ";

/// Writes `<LEVEL> <line>`; warn and above go to stderr, the rest to stdout.
#[derive(Debug, Clone)]
pub struct TerminalBackend {
    levels: ChannelLevels,
    /// Piped output and CI environments can't render ANSI escape codes.
    colors_enabled: bool,
}

impl Default for TerminalBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalBackend {
    #[must_use]
    pub fn new() -> Self {
        Self {
            levels: ChannelLevels::default(),
            colors_enabled: true,
        }
    }

    #[must_use]
    pub fn levels(mut self, levels: ChannelLevels) -> Self {
        self.levels = levels;
        self
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    /// Renders one terminal line; the level tag is padded so messages line up.
    #[must_use]
    pub fn format_line(&self, level: Level, text: &str) -> String {
        let tag = format!("{:<5}", level.label());
        if self.colors_enabled {
            format!("{}{tag}{RESET} {DIM}{text}{RESET}", level_color(level))
        } else {
            format!("{tag} {text}")
        }
    }

    /// [`format_line`](Self::format_line) plus one indented line per cause that the
    /// composed text does not already show.
    #[must_use]
    pub fn format_entry(
        &self,
        level: Level,
        text: &str,
        error: Option<&(dyn StdError + 'static)>,
    ) -> String {
        let mut out = self.format_line(level, text);
        push_deeper_causes(&mut out, error, CAUSE_PREFIX);
        out
    }
}

const fn level_color(level: Level) -> &'static str {
    match level {
        Level::Trace | Level::Debug => "\x1b[35m",
        Level::Info => "\x1b[36m",
        Level::Warn => "\x1b[33m",
        Level::Error => "\x1b[31m",
        Level::Fatal => "\x1b[1;31m",
    }
}

struct TerminalChannel<'a> {
    backend: &'a TerminalBackend,
    name: &'a str,
}

impl Backend for TerminalBackend {
    fn channel<'a>(&'a self, name: &'a str) -> Option<Box<dyn Channel + 'a>> {
        Some(Box::new(TerminalChannel {
            backend: self,
            name,
        }))
    }
}

impl Channel for TerminalChannel<'_> {
    fn is_enabled(&self, level: Level) -> bool {
        self.backend.levels.is_enabled(self.name, level)
    }

    fn write(
        &self,
        level: Level,
        text: &str,
        error: Option<&(dyn StdError + 'static)>,
    ) -> Result<(), crate::Error> {
        let line = self.backend.format_entry(level, text, error);
        if level >= Level::Warn {
            writeln!(io::stderr(), "{line}")?;
        } else {
            writeln!(io::stdout(), "{line}")?;
        }
        Ok(())
    }
}
