//! Statistics source port: where snapshots come from.

use darkpool_domain::error::SourceError;
use darkpool_domain::stats::StatsSnapshot;

/// Produces a fresh, fully-populated [`StatsSnapshot`] on every call.
///
/// The placeholder generator never fails. A real aggregation service may,
/// and its failures must surface here rather than as partial snapshots.
pub trait StatsSource {
    /// Produce the next snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the source cannot produce figures.
    fn next_snapshot(&mut self) -> Result<StatsSnapshot, SourceError>;
}

impl<F> StatsSource for F
where
    F: FnMut() -> Result<StatsSnapshot, SourceError>,
{
    fn next_snapshot(&mut self) -> Result<StatsSnapshot, SourceError> {
        self()
    }
}
