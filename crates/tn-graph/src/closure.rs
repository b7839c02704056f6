//! All-pairs shortest-path closure over a [`DistanceMatrix`].
//!
//! # Algorithm
//!
//! One relaxation pass in the classic Floyd–Warshall loop order:
//!
//! ```text
//! for via in ids:                      // outermost
//!   for row in ids, row != via:
//!     for col in ids, col != row, col != via:
//!       if m[row][via] != 0 && m[via][col] != 0:
//!         cand = m[row][via] + m[via][col]
//!         if m[row][col] == 0 || m[row][col] > cand:
//!           m[row][col] = cand
//! ```
//!
//! `0.0` doubles as "no known path", so a cell is only ever relaxed through
//! two non-zero legs.  The comparison is strictly greater: an equal-cost
//! alternative never replaces the first path found.
//!
//! # Known limitation
//!
//! The pass is run exactly once and never iterated to a fixed point.  With
//! `via` outermost this is sufficient for strictly positive weights.  A
//! zero-length input edge cannot be told apart from a missing edge and is
//! never used as a path segment, so distances that depend on one stay
//! overestimated (or 0 if that was the only connection).
//!
//! The pass mutates the matrix in place and reads cells written earlier in
//! the same pass.  It must not be split across threads without serialising
//! writes to the same cell.

use tn_core::LocationId;

use crate::DistanceMatrix;

/// Counters gathered during one closure pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClosureStats {
    /// Number of cell assignments performed.
    pub relaxations: usize,
    /// Ordered off-diagonal pairs still at `0.0` after the pass.
    pub unreachable_pairs: usize,
}

/// Run the relaxation pass over `matrix` in place.
pub fn close(matrix: &mut DistanceMatrix) -> ClosureStats {
    let ids: Vec<LocationId> = matrix.ids().cloned().collect();
    let mut stats = ClosureStats::default();

    for via in &ids {
        for row in &ids {
            if row == via {
                continue;
            }
            // m[row][via] cannot change inside this loop: it would need col == via.
            let row_via = matrix.cell(row, via);
            if row_via == 0.0 {
                continue;
            }

            for col in &ids {
                if col == row || col == via {
                    continue;
                }
                let via_col = matrix.cell(via, col);
                if via_col == 0.0 {
                    continue;
                }

                let candidate = row_via + via_col;
                if let Some(cell) = matrix.cell_mut(row, col) {
                    if *cell == 0.0 || *cell > candidate {
                        *cell = candidate;
                        stats.relaxations += 1;
                    }
                }
            }
        }
    }

    stats.unreachable_pairs = matrix
        .rows()
        .map(|(a, row)| row.iter().filter(|&(b, &d)| a != b && d == 0.0).count())
        .sum();

    stats
}
