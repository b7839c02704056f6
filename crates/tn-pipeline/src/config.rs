//! Pipeline configuration.
//!
//! Typically loaded from a JSON file by the application crate (with the
//! `serde` feature) and passed to [`PipelineBuilder`](crate::PipelineBuilder).
//! Every field has a default, so a config file only needs the keys it
//! changes:
//!
//! ```json
//! { "reference": 1001400, "toll_scope": "within_threshold" }
//! ```

use tn_core::{LocationId, VehicleRates};
use tn_toll::{DiscountSchedule, validate_coefficients};

use crate::{PipelineError, PipelineResult};

/// Which unrolled edges receive toll rates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TollScope {
    /// Every unrolled edge.
    #[default]
    AllEdges,
    /// Only edges whose origin passed the proximity filter.
    /// Requires `reference`.
    WithinThreshold,
}

/// Top-level pipeline configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct PipelineConfig {
    /// Reference location for the proximity stage.  `None` skips the stage.
    pub reference: Option<LocationId>,

    /// Rate per unit of distance for each vehicle class.
    pub coefficients: VehicleRates,

    /// Weekday/weekend discount windows.
    pub schedule: DiscountSchedule,

    pub toll_scope: TollScope,
}

impl PipelineConfig {
    /// Check coefficients, the schedule, and that `toll_scope` has what it
    /// needs.
    pub fn validate(&self) -> PipelineResult<()> {
        validate_coefficients(&self.coefficients)?;
        self.schedule.validate()?;
        if self.toll_scope == TollScope::WithinThreshold && self.reference.is_none() {
            return Err(PipelineError::Config(
                "toll_scope `within_threshold` requires a reference location".into(),
            ));
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            reference:    None,
            coefficients: VehicleRates::DEFAULT_COEFFICIENTS,
            schedule:     DiscountSchedule::default(),
            toll_scope:   TollScope::AllEdges,
        }
    }
}
