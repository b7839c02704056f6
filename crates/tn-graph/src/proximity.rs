//! Locations "about as far away" as a reference location.
//!
//! The band is centred on the mean distance of the reference's outbound
//! edges.  Candidates are then selected edge by edge: an origin qualifies if
//! *any one* of its edges has a distance inside the band.  The candidate's
//! own mean outbound distance is never computed.

use std::collections::BTreeSet;

use tn_core::{EdgeRecord, LocationId};

use crate::{GraphError, GraphResult};

/// Half-width of the band as a fraction of the reference mean.
pub const THRESHOLD_FRACTION: f64 = 0.1;

/// The inclusive distance band derived from a reference location.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProximityBand {
    /// Mean distance of the reference's outbound edges.
    pub mean:  f64,
    pub lower: f64,
    pub upper: f64,
}

impl ProximityBand {
    #[inline]
    pub fn contains(&self, distance: f64) -> bool {
        distance >= self.lower && distance <= self.upper
    }

    /// Sorted, de-duplicated origins (other than `reference`) of every edge
    /// whose distance lies inside this band.
    pub fn select(&self, edges: &[EdgeRecord], reference: &LocationId) -> Vec<LocationId> {
        let ids: BTreeSet<&LocationId> = edges
            .iter()
            .filter(|e| &e.origin != reference && self.contains(e.distance))
            .map(|e| &e.origin)
            .collect();

        ids.into_iter().cloned().collect()
    }
}

/// Compute the band for `reference` from its outbound edges.
///
/// Fails with [`GraphError::ReferenceKindMismatch`] if `reference` is not the
/// same identifier kind as the edges, and with
/// [`GraphError::ReferenceNotFound`] if no edge starts at `reference`.
pub fn proximity_band(edges: &[EdgeRecord], reference: &LocationId) -> GraphResult<ProximityBand> {
    check_reference_kind(edges, reference)?;

    let (sum, count) = edges
        .iter()
        .filter(|e| &e.origin == reference)
        .fold((0.0_f64, 0_usize), |(sum, count), e| (sum + e.distance, count + 1));

    if count == 0 {
        return Err(GraphError::ReferenceNotFound(reference.clone()));
    }

    let mean = sum / count as f64;
    Ok(ProximityBand {
        mean,
        lower: mean * (1.0 - THRESHOLD_FRACTION),
        upper: mean * (1.0 + THRESHOLD_FRACTION),
    })
}

/// Sorted, de-duplicated origins (other than `reference`) of every edge whose
/// distance lies within the reference's [`ProximityBand`].
pub fn ids_within_threshold(edges: &[EdgeRecord], reference: &LocationId) -> GraphResult<Vec<LocationId>> {
    Ok(proximity_band(edges, reference)?.select(edges, reference))
}

/// Reject a reference whose kind differs from the dataset's.  An empty edge
/// list has no kind and passes.
pub fn check_reference_kind(edges: &[EdgeRecord], reference: &LocationId) -> GraphResult<()> {
    match edges.first().map(|e| e.origin.kind()) {
        Some(expected) if expected != reference.kind() => Err(GraphError::ReferenceKindMismatch {
            reference: reference.clone(),
            expected,
        }),
        _ => Ok(()),
    }
}
