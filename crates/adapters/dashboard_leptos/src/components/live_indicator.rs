use leptos::prelude::*;

/// Pulsing "Live" badge followed by the time of the last refresh.
#[component]
pub fn LiveIndicator(#[prop(into)] last_updated: String) -> impl IntoView {
    view! {
        <div class="live-indicator">
            <span class="live-dot"></span>
            <span>"Live"</span>
            <span class="separator">"\u{2022}"</span>
            <span class="timestamp">{last_updated}</span>
        </div>
    }
}
