//! Props for a single metric card.

use crate::metric::Metric;
use crate::stats::StatsSnapshot;
use crate::trend::{SubtitleTone, Trend};

/// Everything a card needs to render; derived fresh on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCardProps {
    pub label: String,
    pub value: String,
    pub subtitle: Option<String>,
    pub trend: Option<Trend>,
    pub icon: Option<String>,
}

impl MetricCardProps {
    /// Card with only a label and value; optional parts are absent.
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            subtitle: None,
            trend: None,
            icon: None,
        }
    }

    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn trend(mut self, trend: Trend) -> Self {
        self.trend = Some(trend);
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Props for `metric`, using the static metric table and `snapshot`'s value.
    #[must_use]
    pub fn for_metric(metric: Metric, snapshot: &StatsSnapshot) -> Self {
        Self::new(metric.label(), metric.display_value(snapshot))
            .subtitle(metric.subtitle())
            .trend(metric.trend())
            .icon(metric.icon())
    }

    #[must_use]
    pub fn subtitle_tone(&self) -> SubtitleTone {
        SubtitleTone::from(self.trend)
    }
}
