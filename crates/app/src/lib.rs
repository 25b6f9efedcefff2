//! # darkpool-app
//!
//! Application layer: the live metric refresh pipeline and its **ports**.
//!
//! ## Responsibilities
//! - Define the driven ports adapters must implement:
//!   - `StatsSource`: produces one complete statistics snapshot per call
//!   - `IntervalTimer`: repeating host timer for non-tokio drivers
//! - Own the refresh state machine (`RefreshController`): mount, activate,
//!   tick, deactivate
//! - Drive the controller on a periodic tokio timer (`RefreshTask`) and hand
//!   out a scoped `RefreshHandle` that cancels the timer when released
//! - Drive the controller on a host timer (`RefreshDriver`), clearing the
//!   interval on stop or drop
//!
//! ## Dependency rule
//! Depends on `darkpool-domain` only (plus `tokio` for timers and channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod refresh;
pub mod refresh_driver;
pub mod refresh_task;
