//! CSV output backend.
//!
//! Creates three files in the configured output directory up front:
//! - `unrolled_distances.csv`
//! - `toll_rates.csv`
//! - `time_based_toll_rates.csv`
//!
//! `distance_matrix.csv` (its header depends on the identifiers) and
//! `ids_within_threshold.csv` (only produced with a reference) are created on
//! first write.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::Writer;

use tn_core::{EdgeRecord, LocationId, VehicleClass, format_time, weekday_name};
use tn_graph::DistanceMatrix;
use tn_toll::{TimedTollRow, TollRow};

use crate::OutputResult;
use crate::writer::OutputWriter;

const MATRIX_FILE: &str = "distance_matrix.csv";
const EDGES_FILE: &str = "unrolled_distances.csv";
const WITHIN_FILE: &str = "ids_within_threshold.csv";
const TOLLS_FILE: &str = "toll_rates.csv";
const TIMED_FILE: &str = "time_based_toll_rates.csv";

/// Writes pipeline output to CSV files.
pub struct CsvWriter {
    dir:       PathBuf,
    edges:     Writer<File>,
    tolls:     Writer<File>,
    timed:     Writer<File>,
    precision: Option<usize>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the per-edge CSV files in `dir` and write their
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut edges = Writer::from_path(dir.join(EDGES_FILE))?;
        edges.write_record(["id_start", "id_end", "distance"])?;

        let mut tolls = Writer::from_path(dir.join(TOLLS_FILE))?;
        tolls.write_record(
            ["id_start", "id_end", "distance"]
                .into_iter()
                .chain(VehicleClass::ALL.map(VehicleClass::as_str)),
        )?;

        let mut timed = Writer::from_path(dir.join(TIMED_FILE))?;
        timed.write_record(
            ["id_start", "id_end", "distance", "start_day", "start_time", "end_day", "end_time"]
                .into_iter()
                .chain(VehicleClass::ALL.map(VehicleClass::as_str)),
        )?;

        Ok(Self {
            dir: dir.to_path_buf(),
            edges,
            tolls,
            timed,
            precision: None,
            finished: false,
        })
    }

    /// Round every floating-point cell to `decimals` places.
    ///
    /// Without this, values are written at full precision.
    pub fn with_precision(mut self, decimals: usize) -> Self {
        self.precision = Some(decimals);
        self
    }

    fn num(&self, v: f64) -> String {
        match self.precision {
            Some(p) => format!("{v:.p$}"),
            None => v.to_string(),
        }
    }

    fn edge_cells(&self, edge: &EdgeRecord) -> [String; 3] {
        [
            edge.origin.to_string(),
            edge.destination.to_string(),
            self.num(edge.distance),
        ]
    }
}

impl OutputWriter for CsvWriter {
    fn write_matrix(&mut self, matrix: &DistanceMatrix) -> OutputResult<()> {
        let mut w = Writer::from_path(self.dir.join(MATRIX_FILE))?;
        w.write_record(
            std::iter::once("id".to_owned()).chain(matrix.ids().map(LocationId::to_string)),
        )?;
        for (id, row) in matrix.rows() {
            let record: Vec<String> = std::iter::once(id.to_string())
                .chain(row.values().map(|&d| self.num(d)))
                .collect();
            w.write_record(&record)?;
        }
        w.flush()?;
        Ok(())
    }

    fn write_edges(&mut self, edges: &[EdgeRecord]) -> OutputResult<()> {
        for edge in edges {
            let record = self.edge_cells(edge);
            self.edges.write_record(&record)?;
        }
        Ok(())
    }

    fn write_within_threshold(&mut self, reference: &LocationId, ids: &[LocationId]) -> OutputResult<()> {
        let mut w = Writer::from_path(self.dir.join(WITHIN_FILE))?;
        w.write_record(["reference_id", "id"])?;
        let reference = reference.to_string();
        for id in ids {
            w.write_record([reference.as_str(), id.to_string().as_str()])?;
        }
        w.flush()?;
        Ok(())
    }

    fn write_toll_rates(&mut self, rows: &[TollRow]) -> OutputResult<()> {
        for row in rows {
            let record: Vec<String> = self
                .edge_cells(&row.edge)
                .into_iter()
                .chain(row.rates.iter().map(|(_, v)| self.num(v)))
                .collect();
            self.tolls.write_record(&record)?;
        }
        Ok(())
    }

    fn write_timed_rates(&mut self, rows: &[TimedTollRow]) -> OutputResult<()> {
        for row in rows {
            let day = weekday_name(row.day).to_owned();
            let record: Vec<String> = self
                .edge_cells(&row.edge)
                .into_iter()
                .chain([
                    day.clone(),
                    format_time(row.start_time),
                    day,
                    format_time(row.end_time),
                ])
                .chain(row.rates.iter().map(|(_, v)| self.num(v)))
                .collect();
            self.timed.write_record(&record)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.edges.flush()?;
        self.tolls.flush()?;
        self.timed.flush()?;
        Ok(())
    }
}
