//! Console mirror: runs the refresh cycle headless and logs every card.

use std::time::Duration;

use darkpool_adapter_mock_stats::MockStatsSource;
use darkpool_app::refresh::RefreshController;
use darkpool_app::refresh_task::{RefreshHandle, RefreshTask};
use darkpool_domain::time::now;
use darkpool_domain::view::DashboardView;

/// Start a refresh cycle over the placeholder source and log each view.
///
/// The returned handle owns the timer; the logging task ends on its own
/// once the handle is cancelled.
pub fn start(period: Duration) -> RefreshHandle {
    let controller = RefreshController::new(MockStatsSource::new(), now());
    let (handle, mut rx) = RefreshTask::start(controller, period);

    tokio::spawn(async move {
        let first = rx.borrow_and_update().view();
        log_view(&first);
        while rx.changed().await.is_ok() {
            let view = rx.borrow_and_update().view();
            log_view(&view);
        }
        tracing::debug!("console mirror stopped");
    });

    handle
}

fn log_view(view: &DashboardView) {
    for line in lines(view) {
        tracing::info!(target: "darkpoold::mirror", "{line}");
    }
}

/// One line per rendered element of `view`.
fn lines(view: &DashboardView) -> Vec<String> {
    match view {
        DashboardView::Loading { message } => vec![(*message).to_string()],
        DashboardView::Ready {
            cards,
            last_updated,
        } => {
            let mut out = Vec::with_capacity(cards.len() + 1);
            out.push(format!("Live \u{2022} {last_updated}"));
            out.extend(cards.iter().map(|card| match card.trend {
                Some(trend) => format!("{}: {} ({trend})", card.label, card.value),
                None => format!("{}: {}", card.label, card.value),
            }));
            out
        }
    }
}
