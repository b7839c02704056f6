//! Step A: per-vehicle base rates from distance.

use tn_core::{EdgeRecord, VehicleClass, VehicleRates};

use crate::{TollError, TollResult};

// ── TollRow ───────────────────────────────────────────────────────────────────

/// An edge plus one base rate per vehicle class.
#[derive(Clone, Debug, PartialEq)]
pub struct TollRow {
    pub edge:  EdgeRecord,
    pub rates: VehicleRates,
}

impl TollRow {
    /// `rate[class] = edge.distance × coefficients[class]`.
    #[inline]
    pub fn from_edge(edge: &EdgeRecord, coefficients: &VehicleRates) -> Self {
        Self {
            edge:  edge.clone(),
            rates: coefficients.map(|c| edge.distance * c),
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Compute base rates for every edge, preserving input order.
///
/// Use [`VehicleRates::DEFAULT_COEFFICIENTS`] for the standard
/// moto/car/rv/bus/truck table.
pub fn base_rates(edges: &[EdgeRecord], coefficients: &VehicleRates) -> Vec<TollRow> {
    #[cfg(not(feature = "parallel"))]
    {
        edges
            .iter()
            .map(|e| TollRow::from_edge(e, coefficients))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        edges
            .par_iter()
            .map(|e| TollRow::from_edge(e, coefficients))
            .collect()
    }
}

/// Reject coefficients that are negative, NaN or infinite.
pub fn validate_coefficients(coefficients: &VehicleRates) -> TollResult<()> {
    for class in VehicleClass::ALL {
        let value = coefficients.get(class);
        if !value.is_finite() || value < 0.0 {
            return Err(TollError::InvalidCoefficient { class, value });
        }
    }
    Ok(())
}
