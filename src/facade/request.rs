//! The per-call input of the facade.

use crate::caller::CallSite;
use crate::correlation::CorrelationId;
use std::borrow::Cow;
use std::error::Error as StdError;

/// Everything one log call may carry. Every part is optional.
///
/// ```
/// use corrlog::{CorrelationId, LogRequest};
///
/// let err = std::io::Error::other("disk full");
/// let request = LogRequest::new()
///     .message("saving snapshot")
///     .error(&err)
///     .caller("storage::Snapshot.save")
///     .correlation(CorrelationId::new());
/// assert_eq!(request.message_text(), Some("saving snapshot"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LogRequest<'a> {
    message: Option<Cow<'a, str>>,
    error: Option<&'a (dyn StdError + 'static)>,
    caller: Option<Cow<'a, str>>,
    correlation: Option<CorrelationId>,
    call_site: Option<CallSite>,
}

impl<'a> LogRequest<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<Cow<'a, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// The raw error is passed to the backend as well as summarized into the text.
    #[must_use]
    pub fn error(mut self, error: &'a (dyn StdError + 'static)) -> Self {
        self.error = Some(error);
        self
    }

    /// Explicit channel identity; overrides inference. Blank values are ignored.
    #[must_use]
    pub fn caller(mut self, caller: impl Into<Cow<'a, str>>) -> Self {
        self.caller = Some(caller.into());
        self
    }

    /// Pins the correlation id instead of generating one.
    #[must_use]
    pub const fn correlation(mut self, correlation: CorrelationId) -> Self {
        self.correlation = Some(correlation);
        self
    }

    /// Call site used for caller inference; the macros set this.
    #[must_use]
    pub const fn call_site(mut self, site: CallSite) -> Self {
        self.call_site = Some(site);
        self
    }

    #[must_use]
    pub fn message_text(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn error_value(&self) -> Option<&'a (dyn StdError + 'static)> {
        self.error
    }

    /// The explicit caller, if it is not blank.
    #[must_use]
    pub fn explicit_caller(&self) -> Option<&str> {
        self.caller.as_deref().filter(|c| !c.trim().is_empty())
    }

    #[must_use]
    pub const fn pinned_correlation(&self) -> Option<CorrelationId> {
        self.correlation
    }

    #[must_use]
    pub const fn site(&self) -> Option<CallSite> {
        self.call_site
    }
}

impl<'a> From<&'a str> for LogRequest<'a> {
    fn from(message: &'a str) -> Self {
        Self::new().message(message)
    }
}

impl From<String> for LogRequest<'_> {
    fn from(message: String) -> Self {
        Self::new().message(message)
    }
}

impl<'a> From<&'a (dyn StdError + 'static)> for LogRequest<'a> {
    fn from(error: &'a (dyn StdError + 'static)) -> Self {
        Self::new().error(error)
    }
}

impl<'a> From<(&'a str, &'a (dyn StdError + 'static))> for LogRequest<'a> {
    fn from((message, error): (&'a str, &'a (dyn StdError + 'static))) -> Self {
        Self::new().message(message).error(error)
    }
}
