//! Statistics snapshot: one complete set of aggregate market figures.
//!
//! A snapshot is immutable once produced and is either fully present or
//! absent; there is no partially-populated form. Individual trades never
//! appear here, only aggregates.

use serde::{Deserialize, Serialize};

use crate::error::{SnapshotError, SnapshotField};

/// Aggregate market statistics at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSnapshot")]
pub struct StatsSnapshot {
    total_volume: f64,
    trade_count: u32,
    avg_price: f64,
    avg_latency_ms: f64,
}

impl StatsSnapshot {
    /// Build a snapshot, enforcing the field invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] when a field is not finite, when
    /// `total_volume` or `avg_latency_ms` is negative, or when `avg_price`
    /// is not strictly positive.
    pub fn new(
        total_volume: f64,
        trade_count: u32,
        avg_price: f64,
        avg_latency_ms: f64,
    ) -> Result<Self, SnapshotError> {
        non_negative(SnapshotField::TotalVolume, total_volume)?;
        positive(SnapshotField::AvgPrice, avg_price)?;
        non_negative(SnapshotField::AvgLatencyMs, avg_latency_ms)?;

        Ok(Self {
            total_volume,
            trade_count,
            avg_price,
            avg_latency_ms,
        })
    }

    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.total_volume
    }

    #[must_use]
    pub fn trade_count(&self) -> u32 {
        self.trade_count
    }

    #[must_use]
    pub fn avg_price(&self) -> f64 {
        self.avg_price
    }

    #[must_use]
    pub fn avg_latency_ms(&self) -> f64 {
        self.avg_latency_ms
    }
}

fn finite(field: SnapshotField, value: f64) -> Result<f64, SnapshotError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SnapshotError::NotFinite { field })
    }
}

fn non_negative(field: SnapshotField, value: f64) -> Result<(), SnapshotError> {
    if finite(field, value)? < 0.0 {
        return Err(SnapshotError::Negative { field });
    }
    Ok(())
}

fn positive(field: SnapshotField, value: f64) -> Result<(), SnapshotError> {
    if finite(field, value)? <= 0.0 {
        return Err(SnapshotError::NonPositive { field });
    }
    Ok(())
}

/// Unvalidated wire shape; deserialization goes through [`StatsSnapshot::new`].
#[derive(Deserialize)]
struct RawSnapshot {
    total_volume: f64,
    trade_count: u32,
    avg_price: f64,
    avg_latency_ms: f64,
}

impl TryFrom<RawSnapshot> for StatsSnapshot {
    type Error = SnapshotError;

    fn try_from(raw: RawSnapshot) -> Result<Self, Self::Error> {
        Self::new(
            raw.total_volume,
            raw.trade_count,
            raw.avg_price,
            raw.avg_latency_ms,
        )
    }
}
