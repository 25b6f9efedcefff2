//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the refresh pipeline and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod interval_timer;
pub mod stats_source;

pub use interval_timer::IntervalTimer;
pub use stats_source::StatsSource;
