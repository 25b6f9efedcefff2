//! Dashboard render contract expressed as data.
//!
//! Front-ends render a [`DashboardView`] verbatim: a single loading indicator
//! while no snapshot exists, otherwise one card per tracked metric.

use crate::card::MetricCardProps;
use crate::format;
use crate::metric::TRACKED_METRICS;
use crate::stats::StatsSnapshot;
use crate::time::Timestamp;

/// Text of the loading indicator.
pub const LOADING_MESSAGE: &str = "Loading analytics...";

/// What the dashboard shows for a given refresh state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardView {
    Loading {
        message: &'static str,
    },
    Ready {
        cards: Vec<MetricCardProps>,
        last_updated: String,
    },
}

impl DashboardView {
    /// Build the view for the current snapshot (if any) and its update time.
    #[must_use]
    pub fn new(current: Option<&StatsSnapshot>, last_updated_at: Timestamp) -> Self {
        match current {
            None => Self::Loading {
                message: LOADING_MESSAGE,
            },
            Some(snapshot) => Self::Ready {
                cards: TRACKED_METRICS
                    .iter()
                    .map(|metric| MetricCardProps::for_metric(*metric, snapshot))
                    .collect(),
                last_updated: format::local_time_of_day(last_updated_at),
            },
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Cards to render; empty while loading.
    #[must_use]
    pub fn cards(&self) -> &[MetricCardProps] {
        match self {
            Self::Loading { .. } => &[],
            Self::Ready { cards, .. } => cards,
        }
    }
}
