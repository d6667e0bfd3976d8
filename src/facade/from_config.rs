//! Facade construction from a corrlog config file.

use super::{Facade, FacadeBuilder};
use crate::backend::{JsonBackend, TerminalBackend};
use crate::config::{BackendKind, Config};
use crate::diagnostics::DiagnosticSink;

impl Facade {
    /// Builds a facade from the default config file.
    ///
    /// Any problem loading or validating the config falls back to defaults and is
    /// reported once on the diagnostic channel, so logging setup never aborts a
    /// program.
    #[must_use]
    pub fn from_default_config() -> Self {
        let loaded = Config::load().and_then(|config| Self::from_config(&config));
        match loaded {
            Ok(facade) => facade,
            Err(e) => {
                let facade = Self::from_config(&Config::default()).unwrap_or_default();
                facade
                    .diagnostics
                    .write_line(&format!("corrlog: config rejected, using defaults: {e}"));
                facade
            }
        }
    }

    /// Builds a facade and its reference backend from `config`.
    ///
    /// # Errors
    /// Unknown level, backend kind or diagnostic target values, or a `log`
    /// backend requested without the `log` feature.
    pub fn from_config(config: &Config) -> Result<Self, crate::Error> {
        let levels = config.channel_levels()?;
        let target = config.diagnostic_target()?;

        let builder = FacadeBuilder::new()
            .diagnostics(target.into_sink())
            .mirror(config.general.mirror)
            .timestamp_format(&config.diagnostics.timestamp_format);

        let builder = match config.backend_kind()? {
            BackendKind::Terminal => builder.backend(
                TerminalBackend::new()
                    .levels(levels)
                    .colors(config.backend.colors),
            ),
            BackendKind::Json => {
                builder.backend(JsonBackend::new().path(config.json_path()).levels(levels))
            }
            BackendKind::Log => with_log_backend(builder)?,
            BackendKind::None => builder,
        };

        Ok(builder.build())
    }
}

#[cfg(feature = "log")]
#[allow(clippy::unnecessary_wraps)]
fn with_log_backend(builder: FacadeBuilder) -> Result<FacadeBuilder, crate::Error> {
    Ok(builder.backend(crate::backend::LogBackend::new()))
}

#[cfg(not(feature = "log"))]
fn with_log_backend(_builder: FacadeBuilder) -> Result<FacadeBuilder, crate::Error> {
    Err(crate::Error::InvalidConfigValue {
        key: "backend.kind",
        value: "log (crate built without the `log` feature)".to_string(),
    })
}
