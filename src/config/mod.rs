//! TOML configuration for building a facade and its reference backend.
//!
//! ```toml
//! [general]
//! level = "info"
//! mirror = false
//!
//! [diagnostics]
//! target = "stderr"
//!
//! [backend]
//! kind = "json"
//! path = "~/.local/state/corrlog/app.jsonl"
//!
//! [channels]
//! "app::net" = "debug"
//! "app::noisy" = "off"
//! ```

mod structs;

pub use structs::{BackendConfig, DiagnosticsConfig, GeneralConfig};

use crate::backend::ChannelLevels;
use crate::diagnostics::DiagnosticTarget;
use crate::level::Level;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILE: &str = "config.toml";

/// An empty file is a valid config: every field has a default.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub diagnostics: DiagnosticsConfig,
    pub backend: BackendConfig,
    /// Channel prefix to level (or `off`).
    pub channels: BTreeMap<String, String>,
}

/// Which reference backend a config selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Terminal,
    Json,
    /// Forward to the `log` crate; needs the `log` feature.
    Log,
    /// No backend: every non-trace call is skipped as unavailable.
    None,
}

impl FromStr for BackendKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "terminal" => Ok(Self::Terminal),
            "json" | "jsonl" => Ok(Self::Json),
            "log" => Ok(Self::Log),
            "none" | "off" => Ok(Self::None),
            _ => Err(crate::Error::InvalidConfigValue {
                key: "backend.kind",
                value: s.to_string(),
            }),
        }
    }
}

impl Config {
    /// Loads `<config dir>/corrlog/config.toml`; a missing file yields defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be read,
    /// or the TOML is malformed.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Loads from an explicit path; a missing file yields defaults.
    ///
    /// # Errors
    /// Fails if the file exists but can't be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses TOML text.
    ///
    /// # Errors
    /// Returns [`crate::Error::ConfigParse`] on malformed TOML.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// Default config file location.
    ///
    /// # Errors
    /// Returns [`crate::Error::ConfigDirNotFound`] when the platform has no config dir.
    pub fn config_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "corrlog")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// # Errors
    /// Returns [`crate::Error::InvalidLevel`] for an unknown `general.level`.
    pub fn parse_level(&self) -> Result<Level, crate::Error> {
        Ok(self.general.level.parse::<Level>()?)
    }

    /// Thresholds from `general.level` plus the `[channels]` table.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidLevel`] for any unknown level string.
    pub fn channel_levels(&self) -> Result<ChannelLevels, crate::Error> {
        let mut levels = ChannelLevels::new(self.parse_level()?);
        for (prefix, value) in &self.channels {
            levels = if is_off(value) {
                levels.silence(prefix.clone())
            } else {
                levels.with(prefix.clone(), value.parse::<Level>()?)
            };
        }
        Ok(levels)
    }

    /// # Errors
    /// Returns [`crate::Error::InvalidConfigValue`] for an unknown `diagnostics.target`.
    pub fn diagnostic_target(&self) -> Result<DiagnosticTarget, crate::Error> {
        self.diagnostics.target.parse()
    }

    /// # Errors
    /// Returns [`crate::Error::InvalidConfigValue`] for an unknown `backend.kind`.
    pub fn backend_kind(&self) -> Result<BackendKind, crate::Error> {
        self.backend.kind.parse()
    }

    /// `backend.path` with `~` expanded, or the platform default.
    #[must_use]
    pub fn json_path(&self) -> PathBuf {
        self.backend.path.as_deref().map_or_else(
            crate::backend::default_json_path,
            |path| PathBuf::from(shellexpand::tilde(path).as_ref()),
        )
    }
}

fn is_off(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "off" | "none")
}
