//! Integration tests for tn-pipeline.

use tn_core::{EdgeRecord, LocationId};
use tn_graph::DistanceMatrix;
use tn_toll::{TimedTollRow, TollRow};

use crate::PipelineObserver;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Four locations on a line with a long direct 1–4 road.
///
/// ```text
///   1 ──10── 2 ──10── 3 ──10── 4
///   └───────────── 50 ─────────┘
/// ```
fn line_edges() -> Vec<EdgeRecord> {
    vec![
        EdgeRecord::new(1, 2, 10.0),
        EdgeRecord::new(2, 3, 10.0),
        EdgeRecord::new(3, 4, 10.0),
        EdgeRecord::new(1, 4, 50.0),
    ]
}

/// Records which hooks fired and how many rows each one saw.
#[derive(Default)]
struct RecordingObserver {
    calls:     Vec<&'static str>,
    locations: usize,
    edges:     usize,
    within:    Option<(LocationId, Vec<LocationId>)>,
    tolls:     usize,
    timed:     usize,
}

impl PipelineObserver for RecordingObserver {
    fn on_matrix(&mut self, matrix: &DistanceMatrix) {
        self.calls.push("matrix");
        self.locations = matrix.len();
    }

    fn on_edges(&mut self, edges: &[EdgeRecord]) {
        self.calls.push("edges");
        self.edges = edges.len();
    }

    fn on_within_threshold(&mut self, reference: &LocationId, ids: &[LocationId]) {
        self.calls.push("within");
        self.within = Some((reference.clone(), ids.to_vec()));
    }

    fn on_toll_rates(&mut self, rows: &[TollRow]) {
        self.calls.push("tolls");
        self.tolls = rows.len();
    }

    fn on_timed_rates(&mut self, rows: &[TimedTollRow]) {
        self.calls.push("timed");
        self.timed = rows.len();
    }

    fn on_pipeline_end(&mut self) {
        self.calls.push("end");
    }
}

// ── Builder / config validation ───────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use tn_core::VehicleRates;

    use super::*;
    use crate::{PipelineBuilder, PipelineConfig, PipelineError, TollScope};

    #[test]
    fn builds_with_defaults() {
        let p = PipelineBuilder::new(line_edges()).build().unwrap();
        assert_eq!(p.config(), &PipelineConfig::default());
        assert_eq!(p.input_len(), 4);
    }

    #[test]
    fn reference_overrides_config() {
        let config = PipelineConfig { reference: Some(LocationId::Int(9)), ..Default::default() };
        let p = PipelineBuilder::new(line_edges())
            .reference(2)
            .config(config)
            .build()
            .unwrap();
        assert_eq!(p.config().reference, Some(LocationId::Int(2)));
    }

    #[test]
    fn within_threshold_scope_needs_reference() {
        let config = PipelineConfig { toll_scope: TollScope::WithinThreshold, ..Default::default() };
        let err = PipelineBuilder::new(line_edges()).config(config).build().err().unwrap();
        assert!(matches!(err, PipelineError::Config(_)));
    }

    #[test]
    fn negative_coefficient_rejected() {
        let mut coefficients = VehicleRates::DEFAULT_COEFFICIENTS;
        coefficients.bus = -2.2;
        let config = PipelineConfig { coefficients, ..Default::default() };
        let err = PipelineBuilder::new(line_edges()).config(config).build().err().unwrap();
        assert!(matches!(err, PipelineError::Toll(_)));
    }
}

// ── Running ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use tn_core::IdKind;
    use tn_graph::GraphError;

    use super::*;
    use crate::{NoopObserver, PipelineBuilder, PipelineConfig, PipelineError, TollScope};

    #[test]
    fn end_to_end_without_reference() {
        let report = PipelineBuilder::new(line_edges())
            .build()
            .unwrap()
            .run(&mut NoopObserver)
            .unwrap();

        let d = |a: i64, b: i64| report.matrix.get(&LocationId::Int(a), &LocationId::Int(b)).unwrap();
        assert_eq!(d(1, 3), 20.0);
        assert_eq!(d(1, 4), 30.0); // 1→2→3→4 beats the direct 50
        assert_eq!(report.closure.unreachable_pairs, 0);

        assert_eq!(report.edges.len(), 4 * 3);
        assert!(report.within_threshold.is_none());
        assert_eq!(report.toll_rates.len(), 12);
        assert_eq!(report.timed_rates.len(), 12 * 17);
    }

    #[test]
    fn toll_rates_follow_closed_distances() {
        let report = PipelineBuilder::new(line_edges())
            .build()
            .unwrap()
            .run(&mut NoopObserver)
            .unwrap();
        let row = report
            .toll_rates
            .iter()
            .find(|r| r.edge.origin == LocationId::Int(1) && r.edge.destination == LocationId::Int(4))
            .unwrap();
        assert_eq!(row.rates.rv, 45.0); // 30 × 1.5
    }

    #[test]
    fn observer_sees_every_stage_in_order() {
        let mut obs = RecordingObserver::default();
        PipelineBuilder::new(line_edges())
            .reference(1)
            .build()
            .unwrap()
            .run(&mut obs)
            .unwrap();

        assert_eq!(obs.calls, ["matrix", "edges", "within", "tolls", "timed", "end"]);
        assert_eq!(obs.locations, 4);
        assert_eq!(obs.edges, 12);
        assert_eq!(obs.tolls, 12);
        assert_eq!(obs.timed, 12 * 17);
    }

    #[test]
    fn proximity_stage_with_reference() {
        // Closed distances from 1: 10, 20, 30 → mean 20, band [18, 22].
        // Other edges of length 20: 2→4, 3→1, 4→2.
        let mut obs = RecordingObserver::default();
        let report = PipelineBuilder::new(line_edges())
            .reference(1)
            .build()
            .unwrap()
            .run(&mut obs)
            .unwrap();

        let expected = vec![LocationId::Int(2), LocationId::Int(3), LocationId::Int(4)];
        assert_eq!(report.within_threshold.as_deref(), Some(expected.as_slice()));
        assert_eq!(obs.within, Some((LocationId::Int(1), expected)));
    }

    #[test]
    fn within_threshold_scope_limits_tolled_edges() {
        let config = PipelineConfig {
            reference:  Some(LocationId::Int(1)),
            toll_scope: TollScope::WithinThreshold,
            ..Default::default()
        };
        let report = PipelineBuilder::new(line_edges())
            .config(config)
            .build()
            .unwrap()
            .run(&mut NoopObserver)
            .unwrap();

        // Origins 2, 3 and 4 each have three outbound edges.
        assert_eq!(report.toll_rates.len(), 9);
        assert!(report.toll_rates.iter().all(|r| r.edge.origin != LocationId::Int(1)));
        assert_eq!(report.timed_rates.len(), 9 * 17);
    }

    #[test]
    fn unknown_reference_fails_the_run() {
        let mut obs = RecordingObserver::default();
        let err = PipelineBuilder::new(line_edges())
            .reference(77)
            .build()
            .unwrap()
            .run(&mut obs)
            .err()
            .unwrap();
        assert!(matches!(err, PipelineError::Graph(GraphError::ReferenceNotFound(_))));
        assert!(!obs.calls.contains(&"end"));
    }

    #[test]
    fn named_reference_against_integer_ids_fails_the_run() {
        let mut obs = RecordingObserver::default();
        let err = PipelineBuilder::new(line_edges())
            .reference("1")
            .build()
            .unwrap()
            .run(&mut obs)
            .err()
            .unwrap();
        assert!(matches!(
            err,
            PipelineError::Graph(GraphError::ReferenceKindMismatch { expected: IdKind::Int, .. })
        ));
        assert!(!obs.calls.contains(&"within"));
    }

    #[test]
    fn empty_input_fails_the_run() {
        let err = PipelineBuilder::new(vec![])
            .build()
            .unwrap()
            .run(&mut NoopObserver)
            .err()
            .unwrap();
        assert!(matches!(err, PipelineError::Graph(GraphError::EmptyGraph)));
    }

    #[test]
    fn malformed_edge_fails_the_run() {
        let mut edges = line_edges();
        edges.push(EdgeRecord::new(4, 5, -1.0));
        let err = PipelineBuilder::new(edges)
            .build()
            .unwrap()
            .run(&mut NoopObserver)
            .err()
            .unwrap();
        assert!(matches!(err, PipelineError::Graph(GraphError::MalformedInput { row: 4, .. })));
    }
}

// ── Preflight ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod preflight_tests {
    use tn_graph::GraphError;

    use super::*;
    use crate::{PipelineBuilder, PipelineError};

    #[test]
    fn valid_input_passes() {
        let p = PipelineBuilder::new(line_edges()).reference(3).build().unwrap();
        assert!(p.preflight().is_ok());
        assert!(PipelineBuilder::new(line_edges()).build().unwrap().preflight().is_ok());
    }

    #[test]
    fn catches_bad_edges() {
        let empty = PipelineBuilder::new(vec![]).build().unwrap();
        assert!(matches!(empty.preflight(), Err(PipelineError::Graph(GraphError::EmptyGraph))));

        let mut edges = line_edges();
        edges.push(EdgeRecord::new(2, 4, f64::NAN));
        let bad = PipelineBuilder::new(edges).build().unwrap();
        assert!(matches!(
            bad.preflight(),
            Err(PipelineError::Graph(GraphError::MalformedInput { row: 4, .. }))
        ));
    }

    #[test]
    fn catches_reference_problems() {
        let wrong_kind = PipelineBuilder::new(line_edges()).reference("2").build().unwrap();
        assert!(matches!(
            wrong_kind.preflight(),
            Err(PipelineError::Graph(GraphError::ReferenceKindMismatch { .. }))
        ));

        let missing = PipelineBuilder::new(line_edges()).reference(77).build().unwrap();
        assert!(matches!(
            missing.preflight(),
            Err(PipelineError::Graph(GraphError::ReferenceNotFound(LocationId::Int(77))))
        ));
    }
}

// ── Config files ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "serde"))]
mod config_serde_tests {
    use tn_core::LocationId;

    use crate::{PipelineConfig, TollScope};

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{ "reference": 1001400, "toll_scope": "within_threshold" }"#;
        let config: PipelineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.reference, Some(LocationId::Int(1001400)));
        assert_eq!(config.toll_scope, TollScope::WithinThreshold);
        assert_eq!(config.schedule, PipelineConfig::default().schedule);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn quoted_number_reference_is_a_kind_mismatch() {
        use tn_graph::GraphError;

        use crate::{NoopObserver, PipelineBuilder, PipelineError};

        let config: PipelineConfig = serde_json::from_str(r#"{ "reference": "1" }"#).unwrap();
        assert_eq!(config.reference, Some(LocationId::from("1")));
        let err = PipelineBuilder::new(super::line_edges())
            .config(config)
            .build()
            .unwrap()
            .run(&mut NoopObserver)
            .err()
            .unwrap();
        assert!(matches!(err, PipelineError::Graph(GraphError::ReferenceKindMismatch { .. })));
    }

    #[test]
    fn string_reference() {
        let config: PipelineConfig = serde_json::from_str(r#"{ "reference": "A" }"#).unwrap();
        assert_eq!(config.reference, Some(LocationId::from("A")));
    }

    #[test]
    fn custom_schedule_is_validated() {
        let json = r#"{
            "schedule": {
                "weekday": [{ "start": "09:00:00", "end": "08:00:00", "factor": 1.0 }],
                "weekend": [{ "start": "00:00:00", "end": "23:59:59", "factor": 0.5 }]
            }
        }"#;
        let config: PipelineConfig = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());
    }
}
