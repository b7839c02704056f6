//! Pipeline observer trait for progress reporting and data collection.

use tn_core::{EdgeRecord, LocationId};
use tn_graph::DistanceMatrix;
use tn_toll::{TimedTollRow, TollRow};

/// Callbacks invoked by [`Pipeline::run`][crate::Pipeline::run] after each
/// stage completes.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: row counter
///
/// ```rust,ignore
/// struct RowCounter { timed: usize }
///
/// impl PipelineObserver for RowCounter {
///     fn on_timed_rates(&mut self, rows: &[TimedTollRow]) {
///         self.timed += rows.len();
///     }
/// }
/// ```
pub trait PipelineObserver {
    /// Called once the matrix has been built and closed.
    fn on_matrix(&mut self, _matrix: &DistanceMatrix) {}

    /// Called with the unrolled directed edges.
    fn on_edges(&mut self, _edges: &[EdgeRecord]) {}

    /// Called with the proximity result.  Skipped when no reference is
    /// configured.
    fn on_within_threshold(&mut self, _reference: &LocationId, _ids: &[LocationId]) {}

    /// Called with the base toll rows.
    fn on_toll_rates(&mut self, _rows: &[TollRow]) {}

    /// Called with the time-expanded toll rows.
    fn on_timed_rates(&mut self, _rows: &[TimedTollRow]) {}

    /// Called once after the last stage.  Not called if a stage fails.
    fn on_pipeline_end(&mut self) {}
}

/// A [`PipelineObserver`] that does nothing.
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}
