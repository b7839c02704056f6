//! CSV edge loader.
//!
//! # CSV format
//!
//! One row per known road distance.  The header must name the three required
//! columns; any additional columns are ignored.
//!
//! ```csv
//! id_start,id_end,distance
//! 1001400,1001402,9.7
//! 1001402,1001404,20.2
//! 1001404,1001406,16.0
//! ```
//!
//! Identifiers that parse as `i64` become [`LocationId::Int`], anything else
//! becomes [`LocationId::Name`].  Whether the resulting dataset is consistent
//! (one identifier kind, non-negative distances) is checked by the matrix
//! builder, not here.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use tn_core::{EdgeRecord, LocationId};

use crate::GraphError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct EdgeCsvRecord {
    id_start: String,
    id_end:   String,
    distance: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every edge row from a CSV file.
pub fn load_edges_csv(path: &Path) -> Result<Vec<EdgeRecord>, GraphError> {
    let file = std::fs::File::open(path)?;
    load_edges_reader(file)
}

/// Like [`load_edges_csv`] but accepts any `Read` source.
///
/// A missing column, an unparsable distance or an empty identifier fails
/// with [`GraphError::MalformedInput`] naming the 0-based data row.
pub fn load_edges_reader<R: Read>(reader: R) -> Result<Vec<EdgeRecord>, GraphError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut edges = Vec::new();

    for (row, result) in csv_reader.deserialize::<EdgeCsvRecord>().enumerate() {
        let rec = result.map_err(|e| GraphError::malformed(row, e.to_string()))?;
        edges.push(EdgeRecord {
            origin:      parse_id(row, &rec.id_start)?,
            destination: parse_id(row, &rec.id_end)?,
            distance:    rec.distance,
        });
    }

    Ok(edges)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_id(row: usize, s: &str) -> Result<LocationId, GraphError> {
    s.parse::<LocationId>()
        .map_err(|e| GraphError::malformed(row, e.to_string()))
}
