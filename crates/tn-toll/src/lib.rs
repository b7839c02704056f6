//! `tn-toll`: base toll rates and their time-of-week expansion.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`rates`]    | `TollRow`, `base_rates`, `validate_coefficients`           |
//! | [`discount`] | `DiscountWindow`, `DiscountSchedule`                       |
//! | [`expand`]   | `TimedTollRow`, `expand_time_windows`                      |
//! | [`error`]    | `TollError`, `TollResult<T>`                               |
//!
//! # Rate model (summary)
//!
//! ```text
//! base[class]          = distance × coefficient[class]
//! timed[class](d, w)   = base[class] × factor(d, w)
//! ```
//!
//! where `d` runs over Monday…Sunday and `w` over the windows the schedule
//! defines for that day.  With the default schedule every edge expands into
//! 5 × 3 + 2 × 1 = 17 timed rows.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Both passes run on Rayon's thread pool.                |
//! | `serde`    | Derives `Serialize`/`Deserialize` on the schedule.     |

pub mod discount;
pub mod error;
pub mod expand;
pub mod rates;


pub use discount::{DiscountSchedule, DiscountWindow, NO_DISCOUNT};
pub use error::{TollError, TollResult};
pub use expand::{TimedTollRow, expand_time_windows};
pub use rates::{TollRow, base_rates, validate_coefficients};
