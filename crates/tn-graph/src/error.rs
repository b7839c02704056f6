//! Graph-subsystem error type.

use thiserror::Error;

use tn_core::{IdKind, LocationId};

/// Errors produced by `tn-graph`.
///
/// Every variant is fatal to the stage that raises it; no stage drops a bad
/// row and carries on.
#[derive(Debug, Error)]
pub enum GraphError {
    /// `row` is the 0-based index of the offending input edge (data rows
    /// only, the CSV header is not counted).
    #[error("malformed input at row {row}: {reason}")]
    MalformedInput { row: usize, reason: String },

    #[error("reference location {0} has no outbound edges")]
    ReferenceNotFound(LocationId),

    /// The reference is an integer and the dataset uses names, or the
    /// reverse.
    #[error("reference location {reference} does not match the dataset's {expected} identifiers")]
    ReferenceKindMismatch { reference: LocationId, expected: IdKind },

    #[error("no edges supplied")]
    EmptyGraph,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub(crate) fn malformed(row: usize, reason: impl Into<String>) -> Self {
        GraphError::MalformedInput { row, reason: reason.into() }
    }
}

pub type GraphResult<T> = Result<T, GraphError>;
