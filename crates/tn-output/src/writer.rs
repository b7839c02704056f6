//! The `OutputWriter` trait implemented by output backends.

use tn_core::{EdgeRecord, LocationId};
use tn_graph::DistanceMatrix;
use tn_toll::{TimedTollRow, TollRow};

use crate::OutputResult;

/// One method per pipeline stage result.
///
/// Errors are returned to the caller; [`OutputObserver`](crate::OutputObserver)
/// stores the first one for [`take_error`](crate::OutputObserver::take_error).
pub trait OutputWriter {
    /// Write the closed distance matrix as a square table.
    fn write_matrix(&mut self, matrix: &DistanceMatrix) -> OutputResult<()>;

    /// Write a batch of unrolled edges.
    fn write_edges(&mut self, edges: &[EdgeRecord]) -> OutputResult<()>;

    /// Write the proximity result for `reference`.
    fn write_within_threshold(&mut self, reference: &LocationId, ids: &[LocationId]) -> OutputResult<()>;

    /// Write a batch of base toll rows.
    fn write_toll_rates(&mut self, rows: &[TollRow]) -> OutputResult<()>;

    /// Write a batch of time-expanded toll rows.
    fn write_timed_rates(&mut self, rows: &[TimedTollRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
