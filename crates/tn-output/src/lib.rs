//! `tn-output`: stage output writers for the tollnet pipeline.
//!
//! | Writer call              | File                          | Header                                                   |
//! |--------------------------|-------------------------------|----------------------------------------------------------|
//! | `write_matrix`           | `distance_matrix.csv`         | `id,<id1>,<id2>,…`                                       |
//! | `write_edges`            | `unrolled_distances.csv`      | `id_start,id_end,distance`                               |
//! | `write_within_threshold` | `ids_within_threshold.csv`    | `reference_id,id`                                        |
//! | `write_toll_rates`       | `toll_rates.csv`              | `id_start,id_end,distance,moto,car,rv,bus,truck`         |
//! | `write_timed_rates`      | `time_based_toll_rates.csv`   | `id_start,id_end,distance,start_day,start_time,…,truck`  |
//!
//! [`CsvWriter`] implements [`OutputWriter`] and is driven by
//! [`OutputObserver`], which implements `tn_pipeline::PipelineObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tn_output::{CsvWriter, OutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?.with_precision(2);
//! let mut obs = OutputObserver::new(writer);
//! pipeline.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::OutputObserver;
pub use writer::OutputWriter;
