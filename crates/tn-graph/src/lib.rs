//! `tn-graph`: build, close, unroll and filter a location distance graph.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`matrix`]    | `DistanceMatrix`, `DistanceMatrixBuilder`                 |
//! | [`closure`]   | `close`, `ClosureStats`                                   |
//! | [`unroll`]    | `unroll`                                                  |
//! | [`proximity`] | `ids_within_threshold`, `proximity_band`, `ProximityBand` |
//! |               | `check_reference_kind`                                    |
//! | [`loader`]    | `load_edges_csv`, `load_edges_reader`                     |
//! | [`error`]     | `GraphError`, `GraphResult<T>`                            |
//!
//! # Pipeline (summary)
//!
//! ```text
//! edges ──build──▶ DistanceMatrix ──close──▶ DistanceMatrix ──unroll──▶ Vec<EdgeRecord>
//!                                                                      │
//!                                                 ids_within_threshold ◀┘
//! ```

pub mod closure;
pub mod error;
pub mod loader;
pub mod matrix;
pub mod proximity;
pub mod unroll;


pub use closure::{ClosureStats, close};
pub use error::{GraphError, GraphResult};
pub use loader::{load_edges_csv, load_edges_reader};
pub use matrix::{DistanceMatrix, DistanceMatrixBuilder};
pub use proximity::{
    ProximityBand, THRESHOLD_FRACTION, check_reference_kind, ids_within_threshold, proximity_band,
};
pub use unroll::unroll;
