//! `tn-pipeline`: stage driver for the tollnet workspace.
//!
//! # Stages
//!
//! ```text
//! Pipeline::run:
//!   ① Build    : raw edges → DistanceMatrix           (EmptyGraph / MalformedInput)
//!   ② Close    : single relaxation pass, in place
//!   ③ Unroll   : matrix → directed EdgeRecords
//!   ④ Proximity: only if `config.reference` is set     (ReferenceKindMismatch /
//!                                                       ReferenceNotFound)
//!   ⑤ Tolls    : base rates for all edges, or only edges whose origin
//!                 passed ④ (`TollScope::WithinThreshold`)
//!   ⑥ Expand   : one row per (day, window)
//! ```
//!
//! Each stage fully consumes the previous one's output.  The observer is
//! called once after each stage; `tracing` events are emitted at the same
//! points.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Stages ⑤ and ⑥ run on Rayon's thread pool.             |
//! | `serde`    | `PipelineConfig` derives `Serialize`/`Deserialize`.    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tn_graph::load_edges_csv;
//! use tn_pipeline::{NoopObserver, PipelineBuilder};
//!
//! let edges = load_edges_csv(Path::new("dataset-3.csv"))?;
//! let report = PipelineBuilder::new(edges)
//!     .reference(1001400)
//!     .build()?
//!     .run(&mut NoopObserver)?;
//! println!("{} timed rows", report.timed_rates.len());
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod pipeline;

#[cfg(test)]
mod tests;

pub use builder::PipelineBuilder;
pub use config::{PipelineConfig, TollScope};
pub use error::{PipelineError, PipelineResult};
pub use observer::{NoopObserver, PipelineObserver};
pub use pipeline::{Pipeline, PipelineReport};
