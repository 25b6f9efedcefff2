//! Browser `setInterval` behind the [`IntervalTimer`] port.

use std::time::Duration;

use darkpool_app::ports::IntervalTimer;
use leptos::prelude::{IntervalHandle, set_interval_with_handle};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserInterval;

impl IntervalTimer for BrowserInterval {
    type Handle = IntervalHandle;
    type Error = String;

    fn start(
        &mut self,
        period: Duration,
        tick: impl Fn() + 'static,
    ) -> Result<IntervalHandle, String> {
        set_interval_with_handle(tick, period).map_err(|err| format!("{err:?}"))
    }

    fn clear(&mut self, handle: IntervalHandle) {
        handle.clear();
    }
}
