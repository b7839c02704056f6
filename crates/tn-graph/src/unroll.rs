//! Flatten a square matrix back into directed `(origin, destination, distance)`
//! rows.

use tn_core::EdgeRecord;

use crate::DistanceMatrix;

/// One [`EdgeRecord`] per off-diagonal cell, rows outer and columns inner, in
/// sorted identifier order.
///
/// Both `(a, b)` and `(b, a)` are emitted; `n` identifiers give `n × (n − 1)`
/// records.
pub fn unroll(matrix: &DistanceMatrix) -> Vec<EdgeRecord> {
    let n = matrix.len();
    let mut edges = Vec::with_capacity(n * n.saturating_sub(1));

    for (origin, row) in matrix.rows() {
        for (destination, &distance) in row {
            if origin == destination {
                continue;
            }
            edges.push(EdgeRecord {
                origin:      origin.clone(),
                destination: destination.clone(),
                distance,
            });
        }
    }

    edges
}
