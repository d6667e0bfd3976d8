//! Configuration struct definitions.

use crate::fmt::DEFAULT_TIMESTAMP_FORMAT;
use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default minimum level for the reference backends.
    pub level: String,
    /// Mirror emitted non-trace entries to the diagnostic channel.
    pub mirror: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            mirror: false,
        }
    }
}

/// Diagnostic channel configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// `stderr`, `stdout` or `none`.
    pub target: String,
    /// strftime pattern for the diagnostic timestamp.
    pub timestamp_format: String,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            target: "stderr".to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

/// Reference backend configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// `terminal`, `json`, `log` or `none`.
    pub kind: String,
    /// Terminal only: ANSI colors.
    pub colors: bool,
    /// JSON only: output file, `~` allowed.
    pub path: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            kind: "terminal".to_string(),
            colors: true,
            path: None,
        }
    }
}
