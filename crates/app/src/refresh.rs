//! Refresh controller: owns the current snapshot and its update time.
//!
//! The controller is a plain state machine with no timer of its own:
//!
//! 1. [`new`](RefreshController::new): mounted, no snapshot (renders as loading)
//! 2. [`activate`](RefreshController::activate): produce the first snapshot synchronously
//! 3. [`tick`](RefreshController::tick): replace the snapshot wholesale, once per period
//! 4. [`deactivate`](RefreshController::deactivate): freeze the state; later ticks are ignored
//!
//! Whatever drives the ticks (a tokio interval, a browser interval) owns the
//! timer and must cancel it on teardown.

use std::time::Duration;

use darkpool_domain::stats::StatsSnapshot;
use darkpool_domain::time::Timestamp;
use darkpool_domain::view::DashboardView;

use crate::ports::StatsSource;

/// Period between two refreshes.
pub const REFRESH_PERIOD: Duration = Duration::from_secs(5);

/// Current snapshot and the time it was produced.
///
/// `current` and `last_updated_at` always change together.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshState {
    current: Option<StatsSnapshot>,
    last_updated_at: Timestamp,
}

impl RefreshState {
    /// Empty state created at mount time.
    #[must_use]
    pub fn new(mounted_at: Timestamp) -> Self {
        Self {
            current: None,
            last_updated_at: mounted_at,
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&StatsSnapshot> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn last_updated_at(&self) -> Timestamp {
        self.last_updated_at
    }

    /// Render contract for this state.
    #[must_use]
    pub fn view(&self) -> DashboardView {
        DashboardView::new(self.current.as_ref(), self.last_updated_at)
    }

    fn replace(&mut self, snapshot: StatsSnapshot, at: Timestamp) {
        self.current = Some(snapshot);
        self.last_updated_at = at;
    }
}

/// Result of an activation or tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A new snapshot replaced the previous one.
    Refreshed,
    /// The source failed; the previous state was kept.
    Retained,
    /// The controller is not accepting refreshes (not yet active, already
    /// active for `activate`, or torn down).
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Mounted,
    Active,
    TornDown,
}

/// Stateful owner of the refresh cycle.
pub struct RefreshController<S> {
    source: S,
    state: RefreshState,
    phase: Phase,
}

impl<S: StatsSource> RefreshController<S> {
    /// Mount a controller with no snapshot yet.
    pub fn new(source: S, mounted_at: Timestamp) -> Self {
        Self {
            source,
            state: RefreshState::new(mounted_at),
            phase: Phase::Mounted,
        }
    }

    /// Produce the first snapshot synchronously and start accepting ticks.
    ///
    /// Only the first call on a mounted controller has an effect.
    pub fn activate(&mut self, now: Timestamp) -> TickOutcome {
        if self.phase != Phase::Mounted {
            return TickOutcome::Inactive;
        }
        self.phase = Phase::Active;
        tracing::debug!("refresh controller activated");
        self.refresh(now)
    }

    /// Replace the snapshot with a freshly generated one.
    pub fn tick(&mut self, now: Timestamp) -> TickOutcome {
        if self.phase != Phase::Active {
            return TickOutcome::Inactive;
        }
        self.refresh(now)
    }

    /// Stop accepting refreshes. The state stays frozen from here on.
    pub fn deactivate(&mut self) {
        if self.phase != Phase::TornDown {
            tracing::debug!("refresh controller deactivated");
        }
        self.phase = Phase::TornDown;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    #[must_use]
    pub fn state(&self) -> &RefreshState {
        &self.state
    }

    #[must_use]
    pub fn view(&self) -> DashboardView {
        self.state.view()
    }

    fn refresh(&mut self, now: Timestamp) -> TickOutcome {
        match self.source.next_snapshot() {
            Ok(snapshot) => {
                self.state.replace(snapshot, now);
                TickOutcome::Refreshed
            }
            Err(err) => {
                tracing::warn!(%err, "statistics source failed, keeping last snapshot");
                TickOutcome::Retained
            }
        }
    }
}
