//! The `(origin, destination, distance)` row shared by every stage.

use crate::LocationId;

/// One directed distance between two locations.
///
/// Used both for raw input edges (where the direction is irrelevant: the
/// matrix builder treats them as undirected) and for the directed rows
/// produced by unrolling a distance matrix.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeRecord {
    pub origin:      LocationId,
    pub destination: LocationId,
    pub distance:    f64,
}

impl EdgeRecord {
    pub fn new(origin: impl Into<LocationId>, destination: impl Into<LocationId>, distance: f64) -> Self {
        Self {
            origin:      origin.into(),
            destination: destination.into(),
            distance,
        }
    }

    /// `true` if origin and destination are the same location.
    #[inline]
    pub fn is_self_pair(&self) -> bool {
        self.origin == self.destination
    }
}
