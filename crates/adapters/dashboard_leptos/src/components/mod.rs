mod live_indicator;
mod metric_card;

pub use live_indicator::LiveIndicator;
pub use metric_card::MetricCard;
