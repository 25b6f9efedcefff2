//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.

/// A snapshot field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotField {
    TotalVolume,
    AvgPrice,
    AvgLatencyMs,
}

impl std::fmt::Display for SnapshotField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TotalVolume => f.write_str("total_volume"),
            Self::AvgPrice => f.write_str("avg_price"),
            Self::AvgLatencyMs => f.write_str("avg_latency_ms"),
        }
    }
}

/// Invariant violations when building a [`StatsSnapshot`](crate::stats::StatsSnapshot).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("{field} must not be negative")]
    Negative { field: SnapshotField },
    #[error("{field} must be strictly positive")]
    NonPositive { field: SnapshotField },
    #[error("{field} must be a finite number")]
    NotFinite { field: SnapshotField },
}

/// Failures reported by a statistics source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The upstream aggregation service could not produce figures.
    #[error("statistics source unavailable: {0}")]
    Unavailable(String),
    /// The source produced figures that break snapshot invariants.
    #[error("statistics source produced an invalid snapshot")]
    Invalid(#[from] SnapshotError),
}
