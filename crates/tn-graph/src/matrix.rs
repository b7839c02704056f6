//! Distance matrix representation and builder.
//!
//! # Data layout
//!
//! The matrix is an explicit ordered map of rows:
//!
//! ```text
//! BTreeMap<LocationId, BTreeMap<LocationId, f64>>
//! ```
//!
//! Every row holds a cell for every identifier (the matrix is complete), and
//! both the row keys and the column keys iterate in sorted identifier order.
//! Identifiers are looked up by key, never by position, so sparse or
//! non-contiguous ids (`1001400`, `1001402`, …) and string ids need no
//! remapping.
//!
//! # Cell semantics
//!
//! - The diagonal is always `0.0`.
//! - Before closure, `0.0` off the diagonal means "no direct edge".
//! - After [`close`](crate::close), an off-diagonal cell holds the shortest
//!   known path cost, and `0.0` means no path was found.

use std::collections::{BTreeMap, BTreeSet};

use tn_core::{EdgeRecord, IdKind, LocationId};

use crate::{GraphError, GraphResult};

// ── DistanceMatrix ────────────────────────────────────────────────────────────

/// Square, symmetric, identifier-keyed distance table.
///
/// Do not construct directly; use [`DistanceMatrixBuilder`] or
/// [`DistanceMatrix::from_edges`].
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    rows: BTreeMap<LocationId, BTreeMap<LocationId, f64>>,
}

impl DistanceMatrix {
    /// Build a matrix from a complete edge list in one call.
    ///
    /// Equivalent to feeding every edge to [`DistanceMatrixBuilder::add_edge`]
    /// and calling [`build`](DistanceMatrixBuilder::build).
    pub fn from_edges<I>(edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = EdgeRecord>,
    {
        let mut b = DistanceMatrixBuilder::new();
        for edge in edges {
            b.add_edge(edge)?;
        }
        b.build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    /// Number of distinct identifiers (rows == columns).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Identifier kind shared by every key.
    pub fn kind(&self) -> Option<IdKind> {
        self.rows.keys().next().map(LocationId::kind)
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Identifiers in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &LocationId> + '_ {
        self.rows.keys()
    }

    pub fn contains(&self, id: &LocationId) -> bool {
        self.rows.contains_key(id)
    }

    /// Distance from `a` to `b`, or `None` if either is unknown.
    pub fn get(&self, a: &LocationId, b: &LocationId) -> Option<f64> {
        self.rows.get(a).and_then(|row| row.get(b)).copied()
    }

    /// All rows in sorted order.
    pub fn rows(&self) -> impl Iterator<Item = (&LocationId, &BTreeMap<LocationId, f64>)> + '_ {
        self.rows.iter()
    }

    /// `true` if `m[a][b] == m[b][a]` for every pair.
    pub fn is_symmetric(&self) -> bool {
        self.rows.iter().all(|(a, row)| {
            row.iter().all(|(b, &d)| self.get(b, a) == Some(d))
        })
    }

    // ── Crate-internal cell access (closure solver) ───────────────────────

    /// Cell value; `0.0` for unknown identifiers.
    #[inline]
    pub(crate) fn cell(&self, a: &LocationId, b: &LocationId) -> f64 {
        self.get(a, b).unwrap_or(0.0)
    }

    #[inline]
    pub(crate) fn cell_mut(&mut self, a: &LocationId, b: &LocationId) -> Option<&mut f64> {
        self.rows.get_mut(a).and_then(|row| row.get_mut(b))
    }
}

// ── DistanceMatrixBuilder ─────────────────────────────────────────────────────

/// Accumulate undirected edges, then call [`build`](Self::build).
///
/// Edges are validated as they are added.  The first edge fixes the
/// identifier kind for the whole dataset.
///
/// # Example
///
/// ```
/// use tn_core::{EdgeRecord, LocationId};
/// use tn_graph::DistanceMatrixBuilder;
///
/// let mut b = DistanceMatrixBuilder::new();
/// b.add_edge(EdgeRecord::new(1, 2, 9.7)).unwrap();
/// b.add_edge(EdgeRecord::new(2, 3, 20.2)).unwrap();
/// let m = b.build().unwrap();
/// assert_eq!(m.len(), 3);
/// assert_eq!(m.get(&LocationId::Int(2), &LocationId::Int(1)), Some(9.7));
/// assert_eq!(m.get(&LocationId::Int(1), &LocationId::Int(3)), Some(0.0)); // no direct edge
/// ```
#[derive(Debug, Default)]
pub struct DistanceMatrixBuilder {
    ids:        BTreeSet<LocationId>,
    /// Sparse `origin → destination → distance`, written in both directions.
    direct:     BTreeMap<LocationId, BTreeMap<LocationId, f64>>,
    kind:       Option<IdKind>,
    edge_count: usize,
}

impl DistanceMatrixBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of edges accepted so far.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of distinct identifiers seen so far.
    pub fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Validate and record one edge.
    ///
    /// - Negative or non-finite distances are rejected.
    /// - Both identifiers must have the same kind as every earlier one.
    /// - A repeated unordered pair overwrites the earlier distance.
    /// - A self-edge registers the identifier but never touches the diagonal.
    pub fn add_edge(&mut self, edge: EdgeRecord) -> GraphResult<()> {
        let row = self.edge_count;

        if !edge.distance.is_finite() {
            return Err(GraphError::malformed(
                row,
                format!("distance {} is not a finite number", edge.distance),
            ));
        }
        if edge.distance < 0.0 {
            return Err(GraphError::malformed(
                row,
                format!("negative distance {}", edge.distance),
            ));
        }

        for id in [&edge.origin, &edge.destination] {
            let kind = id.kind();
            match self.kind {
                None => self.kind = Some(kind),
                Some(expected) if expected != kind => {
                    return Err(GraphError::malformed(
                        row,
                        format!("identifier {id} is a {kind}, dataset uses {expected} identifiers"),
                    ));
                }
                Some(_) => {}
            }
        }

        self.ids.insert(edge.origin.clone());
        self.ids.insert(edge.destination.clone());

        if !edge.is_self_pair() {
            self.direct
                .entry(edge.origin.clone())
                .or_default()
                .insert(edge.destination.clone(), edge.distance);
            self.direct
                .entry(edge.destination)
                .or_default()
                .insert(edge.origin, edge.distance);
        }

        self.edge_count += 1;
        Ok(())
    }

    /// Consume the builder and produce the complete matrix.
    ///
    /// Fails with [`GraphError::EmptyGraph`] if no edge was added.
    pub fn build(self) -> GraphResult<DistanceMatrix> {
        if self.edge_count == 0 {
            return Err(GraphError::EmptyGraph);
        }

        let rows = self
            .ids
            .iter()
            .map(|row_id| {
                let direct = self.direct.get(row_id);
                let row = self
                    .ids
                    .iter()
                    .map(|col_id| {
                        let d = if col_id == row_id {
                            0.0
                        } else {
                            direct.and_then(|r| r.get(col_id)).copied().unwrap_or(0.0)
                        };
                        (col_id.clone(), d)
                    })
                    .collect();
                (row_id.clone(), row)
            })
            .collect();

        Ok(DistanceMatrix { rows })
    }
}
