//! Timer-driven refresh loop on the tokio runtime.
//!
//! [`RefreshTask::start`] activates a controller, spawns a task that ticks it
//! once per period, and publishes every new [`RefreshState`] through a
//! [`watch`] channel. Observers always see a whole state, never a mix of two
//! snapshots.
//!
//! The returned [`RefreshHandle`] owns the timer. Dropping or cancelling it
//! drops the channel sender, aborts the task and freezes every observer on
//! the last published state. The task only publishes while holding the
//! sender lock, so a tick still running on another worker when the handle is
//! released cannot reach observers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use darkpool_domain::time::now;

use crate::ports::StatsSource;
use crate::refresh::{RefreshController, RefreshState, TickOutcome};

/// Smallest period accepted by the loop; `tokio::time::interval` rejects zero.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Sender slot shared by the task and its handle; `None` once cancelled.
type Publisher = Arc<Mutex<Option<watch::Sender<RefreshState>>>>;

fn lock(publisher: &Publisher) -> MutexGuard<'_, Option<watch::Sender<RefreshState>>> {
    publisher.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Background refresh loop owning a [`RefreshController`].
pub struct RefreshTask<S> {
    controller: RefreshController<S>,
    first_tick: Instant,
    period: Duration,
    publisher: Publisher,
}

impl<S: StatsSource + Send + 'static> RefreshTask<S> {
    /// Activate `controller` and start ticking it every `period`.
    ///
    /// The first snapshot is produced before this returns, so the receiver
    /// never starts in the loading state unless the source failed. The
    /// first refresh happens one full period later.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(
        mut controller: RefreshController<S>,
        period: Duration,
    ) -> (RefreshHandle, watch::Receiver<RefreshState>) {
        controller.activate(now());

        let period = period.max(MIN_PERIOD);
        let (sender, receiver) = watch::channel(controller.state().clone());
        let publisher = Arc::new(Mutex::new(Some(sender)));
        let task = Self {
            controller,
            first_tick: Instant::now() + period,
            period,
            publisher: Arc::clone(&publisher),
        };

        tracing::info!(
            period_ms = u64::try_from(task.period.as_millis()).unwrap_or(u64::MAX),
            "refresh task started"
        );

        let handle = tokio::spawn(task.run());
        (
            RefreshHandle {
                task: handle,
                publisher,
            },
            receiver,
        )
    }

    /// Tick loop: waits one period, refreshes, publishes, repeats.
    async fn run(mut self) {
        let mut interval = tokio::time::interval_at(self.first_tick, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;

            if lock(&self.publisher).as_ref().is_none_or(watch::Sender::is_closed) {
                tracing::debug!("no observers left, stopping refresh task");
                self.controller.deactivate();
                break;
            }

            match self.controller.tick(now()) {
                TickOutcome::Refreshed => {
                    if !self.publish() {
                        self.controller.deactivate();
                        break;
                    }
                }
                TickOutcome::Retained => {}
                TickOutcome::Inactive => break,
            }
        }
    }

    /// Send the current state unless the handle was released meanwhile.
    fn publish(&self) -> bool {
        let slot = lock(&self.publisher);
        let Some(sender) = slot.as_ref() else {
            tracing::debug!("refresh cancelled during tick, dropping snapshot");
            return false;
        };
        sender.send_replace(self.controller.state().clone());
        tracing::debug!("snapshot refreshed");
        true
    }
}

/// Scoped ownership of a running [`RefreshTask`].
///
/// The timer lives exactly as long as this handle.
#[derive(Debug)]
pub struct RefreshHandle {
    task: JoinHandle<()>,
    publisher: Publisher,
}

impl RefreshHandle {
    /// Cancel the refresh cycle. No tick is applied after this returns.
    pub fn cancel(self) {
        drop(self);
    }

    /// Whether the loop has exited (cancelled or out of observers).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        let sender = lock(&self.publisher).take();
        if sender.is_some() && !self.task.is_finished() {
            tracing::info!("refresh task cancelled");
        }
        drop(sender);
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    use darkpool_domain::error::SourceError;
    use darkpool_domain::stats::StatsSnapshot;
    use tokio::time::advance;

    use crate::refresh::REFRESH_PERIOD;

    /// Source whose n-th snapshot has every field derived from `n`.
    fn counting_source(calls: Arc<AtomicU32>) -> impl StatsSource + Send + 'static {
        move || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            StatsSnapshot::new(
                f64::from(n) * 1_000.0,
                n,
                1.0 + f64::from(n) / 100.0,
                f64::from(n),
            )
            .map_err(SourceError::from)
        }
    }

    fn start_counting(
        calls: &Arc<AtomicU32>,
    ) -> (RefreshHandle, watch::Receiver<RefreshState>) {
        let controller = RefreshController::new(counting_source(Arc::clone(calls)), now());
        RefreshTask::start(controller, REFRESH_PERIOD)
    }

    async fn settle() {
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn should_publish_snapshot_before_first_tick() {
        let calls = Arc::new(AtomicU32::new(0));
        let (_handle, rx) = start_counting(&calls);

        assert!(rx.borrow().current().is_some());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn should_not_refresh_before_period_elapses() {
        let calls = Arc::new(AtomicU32::new(0));
        let (_handle, rx) = start_counting(&calls);

        advance(REFRESH_PERIOD - Duration::from_millis(1)).await;
        settle().await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn should_render_loading_then_four_cards_after_one_period() {
        let calls = Arc::new(AtomicU32::new(0));
        let controller = RefreshController::new(counting_source(Arc::clone(&calls)), now());

        let mounted = controller.view();
        assert!(mounted.is_loading());
        assert!(mounted.cards().is_empty());

        let (_handle, mut rx) = RefreshTask::start(controller, REFRESH_PERIOD);
        rx.borrow_and_update();

        advance(REFRESH_PERIOD).await;
        rx.changed().await.unwrap();

        let view = rx.borrow_and_update().view();
        assert!(!view.is_loading());
        let labels: Vec<_> = view.cards().iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Total Volume",
                "Trade Count",
                "Average Price",
                "Average Latency"
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn should_publish_whole_snapshots_on_every_tick() {
        let calls = Arc::new(AtomicU32::new(0));
        let (_handle, mut rx) = start_counting(&calls);
        rx.borrow_and_update();

        for expected in 2..=5_u32 {
            advance(REFRESH_PERIOD).await;
            rx.changed().await.unwrap();

            let state = rx.borrow_and_update().clone();
            let snapshot = state.current().copied().unwrap();
            let n = snapshot.trade_count();
            assert_eq!(n, expected);
            assert!((snapshot.total_volume() - f64::from(n) * 1_000.0).abs() < f64::EPSILON);
            assert!((snapshot.avg_price() - (1.0 + f64::from(n) / 100.0)).abs() < 1e-12);
            assert!((snapshot.avg_latency_ms() - f64::from(n)).abs() < f64::EPSILON);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn should_freeze_state_after_cancellation() {
        let calls = Arc::new(AtomicU32::new(0));
        let (handle, mut rx) = start_counting(&calls);

        advance(REFRESH_PERIOD).await;
        rx.changed().await.unwrap();
        let frozen = rx.borrow_and_update().clone();
        let calls_before = calls.load(Ordering::SeqCst);

        handle.cancel();
        advance(REFRESH_PERIOD * 4).await;
        settle().await;

        assert_eq!(calls.load(Ordering::SeqCst), calls_before);
        assert_eq!(*rx.borrow(), frozen);
        assert!(rx.changed().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn should_cancel_when_handle_is_dropped() {
        let calls = Arc::new(AtomicU32::new(0));
        {
            let (_handle, _rx) = start_counting(&calls);
        }

        advance(REFRESH_PERIOD * 3).await;
        settle().await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn should_stop_when_every_receiver_is_dropped() {
        let calls = Arc::new(AtomicU32::new(0));
        let (handle, rx) = start_counting(&calls);
        drop(rx);

        advance(REFRESH_PERIOD).await;
        settle().await;

        assert!(handle.is_finished());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn should_not_publish_tick_in_flight_when_cancelled() {
        let calls = Arc::new(AtomicU32::new(0));
        let source = {
            let calls = Arc::clone(&calls);
            move || {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                if n == 2 {
                    std::thread::sleep(Duration::from_millis(200));
                }
                StatsSnapshot::new(f64::from(n) * 1_000.0, n, 1.0, 1.0).map_err(SourceError::from)
            }
        };
        let controller = RefreshController::new(source, now());
        let (handle, rx) = RefreshTask::start(controller, Duration::from_millis(50));

        while calls.load(Ordering::SeqCst) < 2 {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        handle.cancel();
        let at_cancel = rx.borrow().current().map(StatsSnapshot::trade_count);

        tokio::time::sleep(Duration::from_millis(400)).await;

        assert_eq!(at_cancel, Some(1));
        assert_eq!(rx.borrow().current().map(StatsSnapshot::trade_count), Some(1));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(rx.has_changed().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn should_keep_publishing_last_good_state_when_source_fails() {
        let mut calls = 0_u32;
        let source = move || {
            calls += 1;
            if calls == 1 {
                StatsSnapshot::new(260_000.0, 120, 1.07, 180.0).map_err(SourceError::from)
            } else {
                Err(SourceError::Unavailable("aggregator offline".to_string()))
            }
        };
        let controller = RefreshController::new(source, now());
        let (_handle, mut rx) = RefreshTask::start(controller, REFRESH_PERIOD);
        let initial = rx.borrow_and_update().clone();

        advance(REFRESH_PERIOD * 2).await;
        settle().await;

        assert!(!rx.has_changed().unwrap());
        assert_eq!(*rx.borrow(), initial);
    }
}
