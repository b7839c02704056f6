//! Time-of-week discount schedule.
//!
//! # Default schedule
//!
//! | Days      | Window                  | Factor |
//! |-----------|-------------------------|--------|
//! | Mon–Fri   | 00:00:00 – 10:00:00     | 0.8    |
//! | Mon–Fri   | 10:00:00 – 18:00:00     | 1.2    |
//! | Mon–Fri   | 18:00:00 – 23:59:59     | 0.8    |
//! | Sat–Sun   | 00:00:00 – 23:59:59     | 0.7    |
//!
//! Windows are stored with inclusive bounds.  When two windows share a
//! boundary (10:00:00, 18:00:00) a lookup by time of day resolves to the
//! *earlier* window, because windows are scanned in order and the first match
//! wins.  A time that falls in no window (e.g. 23:59:59.5) gets factor 1.0.

use jiff::civil::{DateTime, Time, Weekday, time};

use tn_core::is_weekend;

use crate::{TollError, TollResult};

const DAY_START: Time = time(0, 0, 0, 0);
const DAY_END:   Time = time(23, 59, 59, 0);

/// Factor applied when a time of day falls outside every window.
pub const NO_DISCOUNT: f64 = 1.0;

// ── DiscountWindow ────────────────────────────────────────────────────────────

/// One time-of-day range with its rate multiplier.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscountWindow {
    pub start:  Time,
    pub end:    Time,
    pub factor: f64,
}

impl DiscountWindow {
    pub const fn new(start: Time, end: Time, factor: f64) -> Self {
        Self { start, end, factor }
    }

    /// `start ≤ t ≤ end`.
    #[inline]
    pub fn contains(&self, t: Time) -> bool {
        self.start <= t && t <= self.end
    }

    fn validate(&self, which: &str) -> TollResult<()> {
        if self.start > self.end {
            return Err(TollError::InvalidWindow(format!(
                "{which} window starts at {} after it ends at {}",
                self.start, self.end
            )));
        }
        if !self.factor.is_finite() || self.factor < 0.0 {
            return Err(TollError::InvalidWindow(format!(
                "{which} window {}–{} has factor {}",
                self.start, self.end, self.factor
            )));
        }
        Ok(())
    }
}

// ── DiscountSchedule ──────────────────────────────────────────────────────────

/// Windows for Monday–Friday and for Saturday–Sunday.
///
/// Every weekday uses the same window list, and so does every weekend day.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscountSchedule {
    weekday: Vec<DiscountWindow>,
    weekend: Vec<DiscountWindow>,
}

impl DiscountSchedule {
    /// Build and validate a custom schedule.
    ///
    /// Each day class needs at least one window; every window needs
    /// `start ≤ end` and a finite, non-negative factor.
    pub fn new(weekday: Vec<DiscountWindow>, weekend: Vec<DiscountWindow>) -> TollResult<Self> {
        let schedule = Self { weekday, weekend };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Re-check the invariants of [`new`](Self::new).  Needed for schedules
    /// that were deserialized rather than constructed.
    pub fn validate(&self) -> TollResult<()> {
        for (which, windows) in [("weekday", &self.weekday), ("weekend", &self.weekend)] {
            if windows.is_empty() {
                return Err(TollError::InvalidWindow(format!("no {which} windows")));
            }
            for w in windows {
                w.validate(which)?;
            }
        }
        Ok(())
    }

    pub fn weekday_windows(&self) -> &[DiscountWindow] {
        &self.weekday
    }

    pub fn weekend_windows(&self) -> &[DiscountWindow] {
        &self.weekend
    }

    /// Windows that apply on `day`, in schedule order.
    pub fn windows_for(&self, day: Weekday) -> &[DiscountWindow] {
        if is_weekend(day) { &self.weekend } else { &self.weekday }
    }

    /// Number of timed rows one edge expands into (one per day × window).
    pub fn rows_per_edge(&self) -> usize {
        5 * self.weekday.len() + 2 * self.weekend.len()
    }

    /// Factor in effect at a single moment.
    ///
    /// Returns the factor of the first window of that day containing the
    /// time of day, or [`NO_DISCOUNT`] if none does.
    pub fn factor_at(&self, at: DateTime) -> f64 {
        let t = at.time();
        self.windows_for(at.weekday())
            .iter()
            .find(|w| w.contains(t))
            .map_or(NO_DISCOUNT, |w| w.factor)
    }
}

impl Default for DiscountSchedule {
    fn default() -> Self {
        Self {
            weekday: vec![
                DiscountWindow::new(DAY_START, time(10, 0, 0, 0), 0.8),
                DiscountWindow::new(time(10, 0, 0, 0), time(18, 0, 0, 0), 1.2),
                DiscountWindow::new(time(18, 0, 0, 0), DAY_END, 0.8),
            ],
            weekend: vec![DiscountWindow::new(DAY_START, DAY_END, 0.7)],
        }
    }
}
