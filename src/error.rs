//! Unified error type for the fallible parts of corrlog.
//!
//! Log calls themselves never fail: their result is a [`crate::LogOutcome`].
//! This type covers configuration loading, parsing and reference-backend I/O.

/// Error type for corrlog operations outside the log path.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Serialization error in a reference backend.
    Format(String),
    /// Invalid log level string.
    InvalidLevel(String),
    /// Invalid correlation id string.
    InvalidCorrelationId(String),
    /// Unknown value for an enumerated config key.
    InvalidConfigValue {
        /// Dotted config key, e.g. `backend.kind`.
        key: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::Format(s) => write!(f, "format error: {s}"),
            Self::InvalidLevel(level) => write!(f, "invalid log level: {level}"),
            Self::InvalidCorrelationId(id) => write!(f, "invalid correlation id: {id}"),
            Self::InvalidConfigValue { key, value } => {
                write!(f, "invalid value for {key}: {value}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
