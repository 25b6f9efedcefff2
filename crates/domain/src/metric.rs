//! Metric table: the statistics tracked by the dashboard.
//!
//! Labels, subtitles, trend classification and value formatting are static
//! per metric. The trend is a presentation hint and is never computed from
//! snapshot deltas.

use crate::format;
use crate::stats::StatsSnapshot;
use crate::trend::Trend;

/// A statistic rendered as one card on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    TotalVolume,
    TradeCount,
    AveragePrice,
    AverageLatency,
}

/// Every tracked metric in display order.
pub const TRACKED_METRICS: [Metric; 4] = [
    Metric::TotalVolume,
    Metric::TradeCount,
    Metric::AveragePrice,
    Metric::AverageLatency,
];

impl Metric {
    /// Card heading.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::TotalVolume => "Total Volume",
            Self::TradeCount => "Trade Count",
            Self::AveragePrice => "Average Price",
            Self::AverageLatency => "Average Latency",
        }
    }

    /// Short description shown under the value.
    #[must_use]
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::TotalVolume => "Aggregate trading volume",
            Self::TradeCount => "Number of executed trades",
            Self::AveragePrice => "Mean execution price",
            Self::AverageLatency => "Mean processing time",
        }
    }

    #[must_use]
    pub fn trend(self) -> Trend {
        match self {
            Self::TotalVolume | Self::AveragePrice => Trend::Up,
            Self::TradeCount | Self::AverageLatency => Trend::Neutral,
        }
    }

    /// Decorative glyph for the card header.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::TotalVolume => "\u{2197}",
            Self::TradeCount => "\u{223F}",
            Self::AveragePrice => "$",
            Self::AverageLatency => "\u{26A1}",
        }
    }

    /// Format this metric's value from a snapshot.
    #[must_use]
    pub fn display_value(self, snapshot: &StatsSnapshot) -> String {
        match self {
            Self::TotalVolume => format::grouped_thousands(snapshot.total_volume()),
            Self::TradeCount => snapshot.trade_count().to_string(),
            Self::AveragePrice => format::fixed(snapshot.avg_price(), 4),
            Self::AverageLatency => format::milliseconds(snapshot.avg_latency_ms()),
        }
    }
}
