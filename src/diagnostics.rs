//! The secondary, human-facing diagnostic channel.
//!
//! Needs no configuration and is always available: trace entries go here
//! exclusively, and other levels are mirrored here when enabled. Writes are
//! fire-and-forget; a failing sink never changes a log call's outcome.

use std::io::{self, Write};
use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError};

/// Accepts one fully formatted diagnostic line at a time.
pub trait DiagnosticSink: Send + Sync {
    fn write_line(&self, line: &str);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Arc<S> {
    fn write_line(&self, line: &str) {
        (**self).write_line(line);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Box<S> {
    fn write_line(&self, line: &str) {
        (**self).write_line(line);
    }
}

/// Process stderr; the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn write_line(&self, line: &str) {
        let _ = writeln!(io::stderr(), "{line}");
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl DiagnosticSink for StdoutSink {
    fn write_line(&self, line: &str) {
        let _ = writeln!(io::stdout(), "{line}");
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn write_line(&self, _line: &str) {}
}

/// Keeps lines in memory for inspection.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}

/// Config-selectable diagnostic destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagnosticTarget {
    #[default]
    Stderr,
    Stdout,
    None,
}

impl DiagnosticTarget {
    #[must_use]
    pub fn into_sink(self) -> Box<dyn DiagnosticSink> {
        match self {
            Self::Stderr => Box::new(StderrSink),
            Self::Stdout => Box::new(StdoutSink),
            Self::None => Box::new(NullSink),
        }
    }
}

impl FromStr for DiagnosticTarget {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stderr" => Ok(Self::Stderr),
            "stdout" => Ok(Self::Stdout),
            "none" | "off" => Ok(Self::None),
            _ => Err(crate::Error::InvalidConfigValue {
                key: "diagnostics.target",
                value: s.to_string(),
            }),
        }
    }
}
