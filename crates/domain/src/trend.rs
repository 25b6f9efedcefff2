//! Trend: presentation-only direction hint for a metric card subtitle.

use serde::{Deserialize, Serialize};

/// Direction hint shown on a card. Not derived from comparing snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => f.write_str("up"),
            Self::Down => f.write_str("down"),
            Self::Neutral => f.write_str("neutral"),
        }
    }
}

/// Visual treatment of a card subtitle.
///
/// Every `Option<Trend>` maps to exactly one tone: the three trends plus a
/// fourth default for cards without a trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubtitleTone {
    Positive,
    Destructive,
    Neutral,
    Muted,
}

impl SubtitleTone {
    /// CSS class applied to the subtitle element.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Positive => "text-primary",
            Self::Destructive => "text-destructive",
            Self::Neutral => "text-neutral",
            Self::Muted => "text-muted-foreground",
        }
    }
}

impl From<Option<Trend>> for SubtitleTone {
    fn from(trend: Option<Trend>) -> Self {
        match trend {
            Some(Trend::Up) => Self::Positive,
            Some(Trend::Down) => Self::Destructive,
            Some(Trend::Neutral) => Self::Neutral,
            None => Self::Muted,
        }
    }
}
