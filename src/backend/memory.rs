//! In-memory backend that records everything the facade asks of it.
//!
//! Meant for tests: every gate query and every write is retained until
//! [`MemoryBackend::clear`] or one of the `take_*` methods drains it. It can be
//! closed to behave like a backend that has been torn down.

use super::{Backend, Channel, ChannelLevels, error_chain};
use crate::level::Level;
use std::error::Error as StdError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// One written entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedEntry {
    pub level: Level,
    pub channel: String,
    pub text: String,
    /// Source chain of the raw error, outermost first.
    pub error: Option<Vec<String>>,
}

#[derive(Debug, Default)]
struct Recorded {
    entries: Vec<RecordedEntry>,
    gate_queries: Vec<(String, Level)>,
}

#[derive(Debug, Default)]
pub struct MemoryBackend {
    levels: ChannelLevels,
    closed: AtomicBool,
    recorded: Mutex<Recorded>,
}

impl MemoryBackend {
    /// Info and above enabled on every channel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_levels(levels: ChannelLevels) -> Self {
        Self {
            levels,
            ..Self::default()
        }
    }

    /// After this, every channel lookup fails.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub fn reopen(&self) {
        self.closed.store(false, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn entries(&self) -> Vec<RecordedEntry> {
        self.lock().entries.clone()
    }

    #[must_use]
    pub fn write_count(&self) -> usize {
        self.lock().entries.len()
    }

    /// Every `(channel, level)` the gate was asked about, in order.
    #[must_use]
    pub fn gate_queries(&self) -> Vec<(String, Level)> {
        self.lock().gate_queries.clone()
    }

    /// Drains the recorded entries.
    pub fn take_entries(&self) -> Vec<RecordedEntry> {
        std::mem::take(&mut self.lock().entries)
    }

    /// Drains the recorded gate queries.
    pub fn take_gate_queries(&self) -> Vec<(String, Level)> {
        std::mem::take(&mut self.lock().gate_queries)
    }

    pub fn clear(&self) {
        let mut recorded = self.lock();
        recorded.entries.clear();
        recorded.gate_queries.clear();
    }

    // A panicking test thread must not hide what was recorded before it.
    fn lock(&self) -> MutexGuard<'_, Recorded> {
        self.recorded.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

struct MemoryChannel<'a> {
    backend: &'a MemoryBackend,
    name: &'a str,
}

impl Backend for MemoryBackend {
    fn channel<'a>(&'a self, name: &'a str) -> Option<Box<dyn Channel + 'a>> {
        if self.is_closed() {
            return None;
        }
        Some(Box::new(MemoryChannel {
            backend: self,
            name,
        }))
    }
}

impl Channel for MemoryChannel<'_> {
    fn is_enabled(&self, level: Level) -> bool {
        self.backend
            .lock()
            .gate_queries
            .push((self.name.to_string(), level));
        self.backend.levels.is_enabled(self.name, level)
    }

    fn write(
        &self,
        level: Level,
        text: &str,
        error: Option<&(dyn StdError + 'static)>,
    ) -> Result<(), crate::Error> {
        self.backend.lock().entries.push(RecordedEntry {
            level,
            channel: self.name.to_string(),
            text: text.to_string(),
            error: error.map(error_chain),
        });
        Ok(())
    }
}
