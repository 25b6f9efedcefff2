//! Metric card component for displaying one labelled statistic.

use darkpool_domain::card::MetricCardProps as CardProps;
use leptos::prelude::*;

/// A read-only card showing a label, a formatted value and, when present,
/// an icon and a trend-coloured subtitle.
#[component]
pub fn MetricCard(
    /// Everything the card displays.
    card: CardProps,
) -> impl IntoView {
    let tone = card.subtitle_tone();
    let CardProps {
        label,
        value,
        subtitle,
        icon,
        ..
    } = card;

    view! {
        <div class="dashboard-card metric-card">
            <div class="metric-header">
                <span class="metric-label">{label}</span>
                {icon.map(|icon| view! { <span class="metric-icon">{icon}</span> })}
            </div>
            <div class="metric-body">
                <span class="metric-value">{value}</span>
                {subtitle.map(|subtitle| {
                    view! {
                        <span class=format!("metric-subtitle {}", tone.css_class())>{subtitle}</span>
                    }
                })}
            </div>
        </div>
    }
}
