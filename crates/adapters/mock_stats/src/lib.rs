//! # darkpool-adapter-mock-stats
//!
//! Placeholder statistics source standing in for an external aggregation
//! service. Every call draws a fresh, fully-populated snapshot from fixed
//! bounded distributions.
//!
//! ## Distributions
//!
//! | Field | Range | Notes |
//! |-------|-------|-------|
//! | `total_volume` | `[250000, 300000)` | floored to whole units |
//! | `trade_count` | `[100, 150)` | integral |
//! | `avg_price` | `[1.05, 1.10)` | |
//! | `avg_latency_ms` | `[150, 230)` | |
//!
//! ## Dependency rule
//!
//! Depends on `darkpool-app` (port traits) and `darkpool-domain` only.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use darkpool_app::ports::StatsSource;
use darkpool_domain::error::{SnapshotError, SourceError};
use darkpool_domain::stats::StatsSnapshot;

pub const TOTAL_VOLUME_RANGE: Range<f64> = 250_000.0..300_000.0;
pub const TRADE_COUNT_RANGE: Range<u32> = 100..150;
pub const AVG_PRICE_RANGE: Range<f64> = 1.05..1.10;
pub const AVG_LATENCY_MS_RANGE: Range<f64> = 150.0..230.0;

/// Draw one snapshot from the placeholder distributions.
///
/// # Errors
///
/// Never fails in practice: every range satisfies the snapshot invariants.
/// The `Result` only mirrors [`StatsSnapshot::new`].
pub fn generate_snapshot<R: Rng>(rng: &mut R) -> Result<StatsSnapshot, SnapshotError> {
    StatsSnapshot::new(
        rng.gen_range(TOTAL_VOLUME_RANGE).floor(),
        rng.gen_range(TRADE_COUNT_RANGE),
        rng.gen_range(AVG_PRICE_RANGE),
        rng.gen_range(AVG_LATENCY_MS_RANGE),
    )
}

/// [`StatsSource`] backed by [`generate_snapshot`].
pub struct MockStatsSource {
    rng: StdRng,
}

impl Default for MockStatsSource {
    fn default() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl MockStatsSource {
    /// Entropy-seeded source; values differ on every run.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deterministic source for reproducible runs.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl StatsSource for MockStatsSource {
    fn next_snapshot(&mut self) -> Result<StatsSnapshot, SourceError> {
        generate_snapshot(&mut self.rng).map_err(SourceError::from)
    }
}
