//! Per-channel thresholds shared by the reference backends.

use crate::level::Level;

/// Minimum level per channel, matched by the longest prefix.
///
/// A prefix matches a channel when it equals it or is followed by a `::` or `.`
/// separator, so `app::net` covers `app::net::Client.connect` but not `app::network`.
/// A `None` threshold silences the channel entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelLevels {
    default: Option<Level>,
    overrides: Vec<(String, Option<Level>)>,
}

impl Default for ChannelLevels {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

impl ChannelLevels {
    #[must_use]
    pub const fn new(default: Level) -> Self {
        Self {
            default: Some(default),
            overrides: Vec::new(),
        }
    }

    /// Every channel is silenced unless an override says otherwise.
    #[must_use]
    pub const fn off() -> Self {
        Self {
            default: None,
            overrides: Vec::new(),
        }
    }

    #[must_use]
    pub fn with(self, prefix: impl Into<String>, level: Level) -> Self {
        self.insert(prefix.into(), Some(level))
    }

    #[must_use]
    pub fn silence(self, prefix: impl Into<String>) -> Self {
        self.insert(prefix.into(), None)
    }

    fn insert(mut self, prefix: String, threshold: Option<Level>) -> Self {
        self.overrides.retain(|(p, _)| *p != prefix);
        self.overrides.push((prefix, threshold));
        // Longest prefix first so the first match is the most specific one.
        self.overrides.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        self
    }

    /// Threshold for `channel`, `None` when silenced.
    #[must_use]
    pub fn threshold(&self, channel: &str) -> Option<Level> {
        self.overrides
            .iter()
            .find(|(prefix, _)| prefix_matches(prefix, channel))
            .map_or(self.default, |(_, threshold)| *threshold)
    }

    #[must_use]
    pub fn is_enabled(&self, channel: &str, level: Level) -> bool {
        self.threshold(channel).is_some_and(|min| level >= min)
    }

    #[must_use]
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}

fn prefix_matches(prefix: &str, channel: &str) -> bool {
    channel.strip_prefix(prefix).is_some_and(|rest| {
        rest.is_empty() || rest.starts_with("::") || rest.starts_with('.')
    })
}
