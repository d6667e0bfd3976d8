//! The facade: one entry point per severity, each returning a [`LogOutcome`].
//!
//! A call runs through the same steps every time: resolve the channel (explicit
//! caller, inferred caller, or the fallback), settle the correlation id, ask the
//! backend's gate, and only then summarize the error and compose the line. Trace
//! skips the gate and goes to the diagnostic channel only.

mod builder;
mod from_config;
mod request;

pub use builder::FacadeBuilder;
pub use request::LogRequest;

use crate::backend::Backend;
use crate::caller::{CallSite, CallerResolver};
use crate::correlation::CorrelationId;
use crate::diagnostics::DiagnosticSink;
use crate::fmt;
use crate::level::Level;
use crate::outcome::LogOutcome;
use std::borrow::Cow;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

/// Channel used when no caller was given and none could be inferred.
pub const FALLBACK_CHANNEL: &str = "UnknownCaller";

/// Immutable after build, so one instance can be shared across threads freely.
pub struct Facade {
    backend: Option<Arc<dyn Backend>>,
    resolver: Box<dyn CallerResolver>,
    diagnostics: Box<dyn DiagnosticSink>,
    mirror: bool,
    timestamp_format: String,
}

impl Default for Facade {
    fn default() -> Self {
        FacadeBuilder::new().build()
    }
}

impl std::fmt::Debug for Facade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Facade")
            .field("has_backend", &self.backend.is_some())
            .field("mirror", &self.mirror)
            .field("timestamp_format", &self.timestamp_format)
            .finish_non_exhaustive()
    }
}

impl Facade {
    #[must_use]
    pub fn builder() -> FacadeBuilder {
        FacadeBuilder::new()
    }

    /// Diagnostic channel only; never consults the backend.
    ///
    /// Like every level method, a direct call has no function path to infer a
    /// channel from: it logs under [`FALLBACK_CHANNEL`] unless the request names a
    /// `caller` or the facade was built with a [`LocationResolver`](crate::LocationResolver).
    /// The level macros ([`trace!`](macro@crate::trace) and friends) record the function.
    #[track_caller]
    pub fn trace<'a>(&self, request: impl Into<LogRequest<'a>>) -> LogOutcome {
        self.log(Level::Trace, request)
    }

    /// Direct calls log under [`FALLBACK_CHANNEL`] unless a `caller` is given;
    /// [`debug!`](macro@crate::debug) infers the channel from the enclosing function.
    #[track_caller]
    pub fn debug<'a>(&self, request: impl Into<LogRequest<'a>>) -> LogOutcome {
        self.log(Level::Debug, request)
    }

    /// Direct calls log under [`FALLBACK_CHANNEL`] unless a `caller` is given;
    /// [`info!`](macro@crate::info) infers the channel from the enclosing function.
    #[track_caller]
    pub fn info<'a>(&self, request: impl Into<LogRequest<'a>>) -> LogOutcome {
        self.log(Level::Info, request)
    }

    /// Direct calls log under [`FALLBACK_CHANNEL`] unless a `caller` is given;
    /// [`warn!`](macro@crate::warn) infers the channel from the enclosing function.
    #[track_caller]
    pub fn warn<'a>(&self, request: impl Into<LogRequest<'a>>) -> LogOutcome {
        self.log(Level::Warn, request)
    }

    /// Direct calls log under [`FALLBACK_CHANNEL`] unless a `caller` is given;
    /// [`error!`](macro@crate::error) infers the channel from the enclosing function.
    #[track_caller]
    pub fn error<'a>(&self, request: impl Into<LogRequest<'a>>) -> LogOutcome {
        self.log(Level::Error, request)
    }

    /// Direct calls log under [`FALLBACK_CHANNEL`] unless a `caller` is given;
    /// [`fatal!`](macro@crate::fatal) infers the channel from the enclosing function.
    #[track_caller]
    pub fn fatal<'a>(&self, request: impl Into<LogRequest<'a>>) -> LogOutcome {
        self.log(Level::Fatal, request)
    }

    /// Logs at `level`. Never panics and never fails; see [`LogOutcome`].
    ///
    /// The channel comes from the request's `caller`, then from the configured
    /// resolver, then [`FALLBACK_CHANNEL`]. The default resolver only knows the
    /// function path that the level macros attach.
    #[track_caller]
    pub fn log<'a>(&self, level: Level, request: impl Into<LogRequest<'a>>) -> LogOutcome {
        let request = request.into();
        // `unwrap_or_else` would hide the caller's location behind a closure.
        let site = match request.site() {
            Some(site) => site,
            None => CallSite::here(),
        };
        self.dispatch(level, &request, &site)
    }

    fn dispatch(&self, level: Level, request: &LogRequest<'_>, site: &CallSite) -> LogOutcome {
        let channel = self.channel_for(request, site);
        let correlation = request.pinned_correlation().unwrap_or_default();

        if level == Level::Trace {
            let text = Self::compose_text(request);
            self.emit_diagnostic(level, &correlation, &channel, &text);
            return LogOutcome::Emitted(correlation);
        }

        let Some(backend) = self.backend.as_deref() else {
            return LogOutcome::SkippedBackendUnavailable;
        };
        let Some(handle) = backend.channel(&channel) else {
            return LogOutcome::SkippedBackendUnavailable;
        };
        if !handle.is_enabled(level) {
            return LogOutcome::SkippedBelowThreshold;
        }

        let text = Self::compose_text(request);
        let line = fmt::primary_line(&correlation, &channel, &text);
        let _ = handle.write(level, &line, request.error_value());

        if self.mirror {
            self.emit_diagnostic(level, &correlation, &channel, &text);
        }

        LogOutcome::Emitted(correlation)
    }

    /// Explicit caller, then inference, then [`FALLBACK_CHANNEL`]. Never empty.
    fn channel_for<'r>(&self, request: &'r LogRequest<'_>, site: &CallSite) -> Cow<'r, str> {
        if let Some(caller) = request.explicit_caller() {
            return Cow::Borrowed(caller);
        }
        self.infer_caller(site)
            .map_or(Cow::Borrowed(FALLBACK_CHANNEL), Cow::Owned)
    }

    /// A panicking resolver degrades to "no identity" instead of taking the caller down.
    fn infer_caller(&self, site: &CallSite) -> Option<String> {
        catch_unwind(AssertUnwindSafe(|| self.resolver.resolve(site)))
            .ok()
            .flatten()
            .filter(|name| !name.trim().is_empty())
    }

    fn compose_text(request: &LogRequest<'_>) -> String {
        let summary = request.error_value().map(fmt::summarize);
        fmt::resolve_text(request.message_text(), summary.as_deref()).into_owned()
    }

    fn emit_diagnostic(&self, level: Level, correlation: &CorrelationId, channel: &str, text: &str) {
        let stamp = fmt::timestamp(&self.timestamp_format);
        let line = fmt::diagnostic_line(level, &stamp, correlation, channel, text);
        self.diagnostics.write_line(&line);
    }

    /// Whether non-trace entries are mirrored to the diagnostic channel.
    #[must_use]
    pub const fn mirrors_diagnostics(&self) -> bool {
        self.mirror
    }

    #[must_use]
    pub const fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    #[must_use]
    pub fn timestamp_format(&self) -> &str {
        &self.timestamp_format
    }
}
