//! Stepwise construction of a [`Facade`].

use super::Facade;
use crate::backend::Backend;
use crate::caller::{CallerResolver, FunctionPathResolver};
use crate::diagnostics::{DiagnosticSink, StderrSink};
use crate::fmt::{DEFAULT_TIMESTAMP_FORMAT, is_valid_timestamp_format};
use std::sync::Arc;

/// Builds a [`Facade`]. Without a backend every non-trace call reports
/// [`LogOutcome::SkippedBackendUnavailable`](crate::LogOutcome::SkippedBackendUnavailable).
pub struct FacadeBuilder {
    backend: Option<Arc<dyn Backend>>,
    resolver: Box<dyn CallerResolver>,
    diagnostics: Box<dyn DiagnosticSink>,
    mirror: bool,
    timestamp_format: String,
}

impl Default for FacadeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FacadeBuilder {
    /// Function-path caller inference, stderr diagnostics, no mirroring.
    #[must_use]
    pub fn new() -> Self {
        Self {
            backend: None,
            resolver: Box::new(FunctionPathResolver),
            diagnostics: Box::new(StderrSink),
            mirror: false,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    #[must_use]
    pub fn backend(mut self, backend: impl Backend + 'static) -> Self {
        self.backend = Some(Arc::new(backend));
        self
    }

    /// Shares an existing backend, e.g. one the caller also inspects.
    #[must_use]
    pub fn shared_backend(mut self, backend: Arc<dyn Backend>) -> Self {
        self.backend = Some(backend);
        self
    }

    #[must_use]
    pub fn resolver(mut self, resolver: impl CallerResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    #[must_use]
    pub fn diagnostics(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.diagnostics = Box::new(sink);
        self
    }

    /// Also write every emitted non-trace entry to the diagnostic channel.
    #[must_use]
    pub const fn mirror(mut self, enabled: bool) -> Self {
        self.mirror = enabled;
        self
    }

    /// strftime pattern for diagnostic timestamps; invalid patterns keep the default.
    #[must_use]
    pub fn timestamp_format(mut self, format: &str) -> Self {
        if is_valid_timestamp_format(format) {
            self.timestamp_format = format.to_string();
        }
        self
    }

    #[must_use]
    pub fn build(self) -> Facade {
        Facade {
            backend: self.backend,
            resolver: self.resolver,
            diagnostics: self.diagnostics,
            mirror: self.mirror,
            timestamp_format: self.timestamp_format,
        }
    }
}
