//! `tn-core`: foundational types for the `tollnet` workspace.
//!
//! This crate is a dependency of every other `tn-*` crate.  It has no `tn-*`
//! dependencies and only two external ones (`jiff` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `LocationId`, `IdKind`                                  |
//! | [`edge`]      | `EdgeRecord`                                            |
//! | [`vehicle`]   | `VehicleClass`, `VehicleRates`                          |
//! | [`time`]      | `WEEK`, weekday names, `HH:MM:SS` formatting            |
//! | [`error`]     | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod edge;
pub mod error;
pub mod ids;
pub mod time;
pub mod vehicle;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use edge::EdgeRecord;
pub use error::{CoreError, CoreResult};
pub use ids::{IdKind, LocationId};
pub use time::{WEEK, format_time, is_weekend, weekday_name};
pub use vehicle::{VehicleClass, VehicleRates};
