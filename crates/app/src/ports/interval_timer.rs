//! Interval timer port: repeating callbacks supplied by the host.

use std::time::Duration;

/// A repeating timer owned by the host environment, such as the browser's
/// `setInterval`.
///
/// Used by drivers that cannot run on tokio. A started interval keeps firing
/// until its handle is passed back to [`clear`](IntervalTimer::clear).
pub trait IntervalTimer {
    /// Identifies one running interval.
    type Handle;
    /// Reason the host refused to schedule an interval.
    type Error: std::fmt::Debug;

    /// Call `tick` every `period` until the returned handle is cleared.
    ///
    /// # Errors
    ///
    /// Returns the host's error when the interval cannot be scheduled.
    fn start(
        &mut self,
        period: Duration,
        tick: impl Fn() + 'static,
    ) -> Result<Self::Handle, Self::Error>;

    /// Stop the interval identified by `handle`.
    fn clear(&mut self, handle: Self::Handle);
}
