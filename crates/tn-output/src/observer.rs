//! `OutputObserver<W>`: bridges `PipelineObserver` to an `OutputWriter`.

use tn_core::{EdgeRecord, LocationId};
use tn_graph::DistanceMatrix;
use tn_pipeline::PipelineObserver;
use tn_toll::{TimedTollRow, TollRow};

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`PipelineObserver`] that writes every stage result to an
/// [`OutputWriter`].
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `pipeline.run()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct OutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> OutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `pipeline.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> PipelineObserver for OutputObserver<W> {
    fn on_matrix(&mut self, matrix: &DistanceMatrix) {
        let result = self.writer.write_matrix(matrix);
        self.store_err(result);
    }

    fn on_edges(&mut self, edges: &[EdgeRecord]) {
        let result = self.writer.write_edges(edges);
        self.store_err(result);
    }

    fn on_within_threshold(&mut self, reference: &LocationId, ids: &[LocationId]) {
        let result = self.writer.write_within_threshold(reference, ids);
        self.store_err(result);
    }

    fn on_toll_rates(&mut self, rows: &[TollRow]) {
        let result = self.writer.write_toll_rates(rows);
        self.store_err(result);
    }

    fn on_timed_rates(&mut self, rows: &[TimedTollRow]) {
        let result = self.writer.write_timed_rates(rows);
        self.store_err(result);
    }

    fn on_pipeline_end(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
