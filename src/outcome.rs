//! Structured result of one log call.

use crate::correlation::CorrelationId;
use std::fmt;

/// What happened to one log call.
///
/// The correlation id is only carried when the entry was actually written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogOutcome {
    /// Written to the backend (or, for trace, to the diagnostic channel).
    Emitted(CorrelationId),
    /// The backend could not resolve the channel.
    SkippedBackendUnavailable,
    /// The level is disabled for the channel.
    SkippedBelowThreshold,
}

/// Tag-only view of [`LogOutcome`], handy for matching and counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    Emitted,
    SkippedBackendUnavailable,
    SkippedBelowThreshold,
}

impl LogOutcome {
    #[must_use]
    pub const fn kind(&self) -> OutcomeKind {
        match self {
            Self::Emitted(_) => OutcomeKind::Emitted,
            Self::SkippedBackendUnavailable => OutcomeKind::SkippedBackendUnavailable,
            Self::SkippedBelowThreshold => OutcomeKind::SkippedBelowThreshold,
        }
    }

    #[must_use]
    pub const fn is_emitted(&self) -> bool {
        matches!(self, Self::Emitted(_))
    }

    #[must_use]
    pub const fn correlation_id(&self) -> Option<CorrelationId> {
        match self {
            Self::Emitted(id) => Some(*id),
            _ => None,
        }
    }
}

impl OutcomeKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emitted => "emitted",
            Self::SkippedBackendUnavailable => "skipped_backend_unavailable",
            Self::SkippedBelowThreshold => "skipped_below_threshold",
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for LogOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Emitted(id) => write!(f, "emitted ({id})"),
            other => f.write_str(other.kind().as_str()),
        }
    }
}
