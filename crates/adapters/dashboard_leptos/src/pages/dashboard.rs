//! Live analytics dashboard: the only stateful page.
//!
//! The page mounts in the loading state, then hands a fresh controller to a
//! [`RefreshDriver`] on the browser interval. The driver lives in the page's
//! reactive owner and is stopped on cleanup, so no tick ever touches a
//! disposed signal.

use darkpool_adapter_mock_stats::MockStatsSource;
use darkpool_app::refresh::{REFRESH_PERIOD, RefreshController, RefreshState};
use darkpool_app::refresh_driver::RefreshDriver;
use darkpool_domain::time::now;
use darkpool_domain::view::DashboardView;
use leptos::prelude::*;

use crate::components::{LiveIndicator, MetricCard};
use crate::timer::BrowserInterval;

#[component]
pub fn Dashboard() -> impl IntoView {
    let state = RwSignal::new(RefreshState::new(now()));
    let driver = StoredValue::new_local(RefreshDriver::new(BrowserInterval));

    Effect::new(move |_| {
        let controller = RefreshController::new(MockStatsSource::new(), now());
        let publish = move |latest: &RefreshState| state.set(latest.clone());
        let started =
            driver.try_update_value(|driver| driver.start(controller, REFRESH_PERIOD, publish));
        if let Some(Err(err)) = started {
            leptos::logging::warn!("failed to start refresh interval: {err}");
        }
    });

    on_cleanup(move || {
        driver.try_update_value(RefreshDriver::stop);
    });

    view! {
        {move || match state.with(RefreshState::view) {
            DashboardView::Loading { message } => view! {
                <div class="loading-screen">
                    <div class="loading-message">{message}</div>
                </div>
            }.into_any(),
            DashboardView::Ready { cards, last_updated } => view! {
                <div class="dashboard">
                    <header class="dashboard-header">
                        <div>
                            <h1>"Arcium Dark Pool"</h1>
                            <p class="tagline">"Privacy-Preserving Market Analytics"</p>
                        </div>
                        <LiveIndicator last_updated=last_updated/>
                    </header>
                    <main class="metrics-grid">
                        {cards
                            .into_iter()
                            .map(|card| view! { <MetricCard card=card/> })
                            .collect_view()}
                    </main>
                </div>
            }.into_any(),
        }}
    }
}
