//! Refresh loop on a host-provided timer.
//!
//! [`RefreshDriver`] is the single-threaded counterpart of
//! [`RefreshTask`](crate::refresh_task::RefreshTask): it activates a
//! controller, asks an [`IntervalTimer`] to tick it once per period, and hands
//! every new [`RefreshState`] to a callback. [`stop`](RefreshDriver::stop)
//! and `Drop` clear the interval and deactivate the controller, so a callback
//! the host fires late still changes nothing.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use darkpool_domain::time::now;

use crate::ports::{IntervalTimer, StatsSource};
use crate::refresh::{RefreshController, RefreshState, TickOutcome};

/// Owner of a refresh interval scheduled on `T`.
pub struct RefreshDriver<T: IntervalTimer, S: StatsSource> {
    timer: T,
    interval: Option<T::Handle>,
    controller: Option<Rc<RefCell<RefreshController<S>>>>,
}

impl<T: IntervalTimer, S: StatsSource + 'static> RefreshDriver<T, S> {
    #[must_use]
    pub fn new(timer: T) -> Self {
        Self {
            timer,
            interval: None,
            controller: None,
        }
    }

    /// Activate `controller`, publish its first state, then refresh it every
    /// `period`.
    ///
    /// Does nothing if the driver is already running.
    ///
    /// # Errors
    ///
    /// Returns the timer's error when the interval cannot be scheduled. The
    /// controller is deactivated in that case.
    pub fn start(
        &mut self,
        mut controller: RefreshController<S>,
        period: Duration,
        on_refresh: impl Fn(&RefreshState) + 'static,
    ) -> Result<(), T::Error> {
        if self.is_running() {
            return Ok(());
        }

        if controller.activate(now()) == TickOutcome::Refreshed {
            on_refresh(controller.state());
        }

        let controller = Rc::new(RefCell::new(controller));
        let ticking = Rc::clone(&controller);
        let tick = move || {
            let Ok(mut controller) = ticking.try_borrow_mut() else {
                return;
            };
            if controller.tick(now()) == TickOutcome::Refreshed {
                on_refresh(controller.state());
            }
        };

        match self.timer.start(period, tick) {
            Ok(handle) => {
                self.interval = Some(handle);
                self.controller = Some(controller);
                Ok(())
            }
            Err(err) => {
                controller.borrow_mut().deactivate();
                Err(err)
            }
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }
}

impl<T: IntervalTimer, S: StatsSource> RefreshDriver<T, S> {
    /// Clear the interval and freeze the controller.
    pub fn stop(&mut self) {
        if let Some(handle) = self.interval.take() {
            self.timer.clear(handle);
        }
        if let Some(controller) = self.controller.take()
            && let Ok(mut controller) = controller.try_borrow_mut()
        {
            controller.deactivate();
        }
    }
}

impl<T: IntervalTimer, S: StatsSource> Drop for RefreshDriver<T, S> {
    fn drop(&mut self) {
        self.stop();
    }
}
