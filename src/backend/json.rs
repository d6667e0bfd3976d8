//! JSON-lines backend: one object per entry, appended to a single file so the log
//! can be queried with `grep` or `jq`.

use super::{Backend, Channel, ChannelLevels, error_chain};
use crate::level::Level;

use chrono::Local;
use serde::Serialize;
use std::error::Error as StdError;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use ulid::Ulid;

#[derive(Debug, Serialize)]
struct JsonEntry<'a> {
    /// Time-sortable and unique even with concurrent writers.
    id: String,
    /// RFC 3339.
    ts: String,
    level: &'static str,
    channel: &'a str,
    msg: &'a str,
    /// Full source chain of the raw error, outermost first.
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<Vec<String>>,
}

/// Append-only JSONL file.
#[derive(Debug, Clone)]
pub struct JsonBackend {
    file_path: PathBuf,
    levels: ChannelLevels,
}

impl Default for JsonBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonBackend {
    /// Defaults to `<state dir>/corrlog/corrlog.jsonl`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            file_path: default_path(),
            levels: ChannelLevels::default(),
        }
    }

    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = path.into();
        self
    }

    #[must_use]
    pub fn levels(mut self, levels: ChannelLevels) -> Self {
        self.levels = levels;
        self
    }

    /// Config values use `~` for portability; the OS needs an absolute path.
    #[must_use]
    pub fn resolved_path(&self) -> PathBuf {
        let path_str = self.file_path.to_string_lossy();
        let expanded = shellexpand::tilde(&path_str);
        PathBuf::from(expanded.as_ref())
    }

    fn append(
        &self,
        level: Level,
        channel: &str,
        text: &str,
        error: Option<&(dyn StdError + 'static)>,
    ) -> Result<(), crate::Error> {
        let path = self.resolved_path();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let entry = JsonEntry {
            id: Ulid::new().to_string(),
            ts: Local::now().to_rfc3339(),
            level: level.as_str(),
            channel,
            msg: text,
            error: error.map(error_chain),
        };
        let json = serde_json::to_string(&entry)
            .map_err(|e| crate::Error::Format(format!("JSON serialization failed: {e}")))?;

        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(file, "{json}")?;
        Ok(())
    }
}

pub(crate) fn default_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "corrlog").map_or_else(
        || PathBuf::from("corrlog.jsonl"),
        |dirs| {
            dirs.state_dir()
                .unwrap_or_else(|| dirs.data_dir())
                .join("corrlog.jsonl")
        },
    )
}

struct JsonChannel<'a> {
    backend: &'a JsonBackend,
    name: &'a str,
}

impl Backend for JsonBackend {
    fn channel<'a>(&'a self, name: &'a str) -> Option<Box<dyn Channel + 'a>> {
        Some(Box::new(JsonChannel {
            backend: self,
            name,
        }))
    }
}

impl Channel for JsonChannel<'_> {
    fn is_enabled(&self, level: Level) -> bool {
        self.backend.levels.is_enabled(self.name, level)
    }

    fn write(
        &self,
        level: Level,
        text: &str,
        error: Option<&(dyn StdError + 'static)>,
    ) -> Result<(), crate::Error> {
        self.backend.append(level, self.name, text, error)
    }
}
