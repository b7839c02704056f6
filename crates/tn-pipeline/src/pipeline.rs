//! The `Pipeline` struct and its stage sequence.

use tracing::{debug, info, warn};

use tn_core::{EdgeRecord, LocationId};
use tn_graph::{
    ClosureStats, DistanceMatrix, GraphError, check_reference_kind, close, proximity_band, unroll,
};
use tn_toll::{TimedTollRow, TollRow, base_rates, expand_time_windows};

use crate::{PipelineConfig, PipelineObserver, PipelineResult, TollScope};

// ── PipelineReport ────────────────────────────────────────────────────────────

/// Every stage's output, owned.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// The closed distance matrix.
    pub matrix: DistanceMatrix,
    pub closure: ClosureStats,
    /// Unrolled directed edges, `n × (n − 1)` of them.
    pub edges: Vec<EdgeRecord>,
    /// Proximity result; `None` when no reference was configured.
    pub within_threshold: Option<Vec<LocationId>>,
    pub toll_rates: Vec<TollRow>,
    pub timed_rates: Vec<TimedTollRow>,
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

/// A validated configuration plus the raw edges it will run on.
///
/// Create via [`PipelineBuilder`][crate::PipelineBuilder].
pub struct Pipeline {
    config: PipelineConfig,
    edges:  Vec<EdgeRecord>,
}

impl Pipeline {
    pub(crate) fn new(config: PipelineConfig, edges: Vec<EdgeRecord>) -> Self {
        Self { config, edges }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Number of raw input edges.
    pub fn input_len(&self) -> usize {
        self.edges.len()
    }

    /// Check the raw edges and the reference without running any stage.
    ///
    /// Catches everything stage ① reports, a reference of the wrong
    /// identifier kind, and a reference that names no location in the
    /// dataset.  Callers that create output files can call this first so a
    /// bad input leaves nothing behind.
    pub fn preflight(&self) -> PipelineResult<()> {
        let matrix = DistanceMatrix::from_edges(self.edges.iter().cloned())?;
        if let Some(reference) = &self.config.reference {
            check_reference_kind(&self.edges, reference)?;
            if !matrix.contains(reference) {
                return Err(GraphError::ReferenceNotFound(reference.clone()).into());
            }
        }
        Ok(())
    }

    /// Run every stage in order.
    ///
    /// The first failing stage aborts the run; its error is returned
    /// unchanged and no partial report is produced.
    pub fn run<O: PipelineObserver>(self, observer: &mut O) -> PipelineResult<PipelineReport> {
        let Pipeline { config, edges: raw } = self;

        // ── ① Build ───────────────────────────────────────────────────────
        let input_len = raw.len();
        let mut matrix = DistanceMatrix::from_edges(raw)?;
        info!(locations = matrix.len(), input_edges = input_len, "built distance matrix");

        // ── ② Close ───────────────────────────────────────────────────────
        let closure = close(&mut matrix);
        info!(relaxations = closure.relaxations, "closed distance matrix");
        if closure.unreachable_pairs > 0 {
            warn!(
                pairs = closure.unreachable_pairs,
                "location pairs with no connecting path keep distance 0"
            );
        }
        observer.on_matrix(&matrix);

        // ── ③ Unroll ──────────────────────────────────────────────────────
        let edges = unroll(&matrix);
        debug!(rows = edges.len(), "unrolled distance matrix");
        observer.on_edges(&edges);

        // ── ④ Proximity ───────────────────────────────────────────────────
        let within_threshold = match &config.reference {
            None => None,
            Some(reference) => {
                let band = proximity_band(&edges, reference)?;
                debug!(
                    reference = %reference,
                    mean = band.mean,
                    lower = band.lower,
                    upper = band.upper,
                    "proximity band"
                );
                let ids = band.select(&edges, reference);
                info!(reference = %reference, matches = ids.len(), "proximity filter");
                observer.on_within_threshold(reference, &ids);
                Some(ids)
            }
        };

        // ── ⑤ Tolls ───────────────────────────────────────────────────────
        let toll_rates = match (config.toll_scope, &within_threshold) {
            (TollScope::WithinThreshold, Some(ids)) => {
                let scoped: Vec<EdgeRecord> = edges
                    .iter()
                    .filter(|e| ids.binary_search(&e.origin).is_ok())
                    .cloned()
                    .collect();
                base_rates(&scoped, &config.coefficients)
            }
            _ => base_rates(&edges, &config.coefficients),
        };
        info!(rows = toll_rates.len(), "computed base toll rates");
        observer.on_toll_rates(&toll_rates);

        // ── ⑥ Expand ──────────────────────────────────────────────────────
        let timed_rates = expand_time_windows(&toll_rates, &config.schedule);
        info!(
            rows = timed_rates.len(),
            per_edge = config.schedule.rows_per_edge(),
            "expanded time-based toll rates"
        );
        observer.on_timed_rates(&timed_rates);

        observer.on_pipeline_end();

        Ok(PipelineReport {
            matrix,
            closure,
            edges,
            within_threshold,
            toll_rates,
            timed_rates,
        })
    }
}
