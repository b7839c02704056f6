//! Step B: expand each toll row into one row per (day, window).

use jiff::civil::{Time, Weekday};

use tn_core::{EdgeRecord, VehicleRates, WEEK};

use crate::{DiscountSchedule, DiscountWindow, TollRow};

/// A toll row tagged with a day and a time-of-day window, rates scaled by the
/// window's factor.
#[derive(Clone, Debug, PartialEq)]
pub struct TimedTollRow {
    pub edge:       EdgeRecord,
    pub day:        Weekday,
    pub start_time: Time,
    pub end_time:   Time,
    pub rates:      VehicleRates,
}

impl TimedTollRow {
    #[inline]
    fn new(row: &TollRow, day: Weekday, window: &DiscountWindow) -> Self {
        Self {
            edge:       row.edge.clone(),
            day,
            start_time: window.start,
            end_time:   window.end,
            rates:      row.rates.scaled(window.factor),
        }
    }
}

/// Expand every row across the week.
///
/// Output order: input row, then day (Monday first), then window in schedule
/// order.  The output length is `rows.len() × schedule.rows_per_edge()`.
pub fn expand_time_windows(rows: &[TollRow], schedule: &DiscountSchedule) -> Vec<TimedTollRow> {
    #[cfg(not(feature = "parallel"))]
    {
        let mut out = Vec::with_capacity(rows.len() * schedule.rows_per_edge());
        for row in rows {
            out.extend(expand_row(row, schedule));
        }
        out
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        rows.par_iter()
            .flat_map_iter(|row| expand_row(row, schedule))
            .collect()
    }
}

fn expand_row<'a>(
    row:      &'a TollRow,
    schedule: &'a DiscountSchedule,
) -> impl Iterator<Item = TimedTollRow> + 'a {
    WEEK.into_iter().flat_map(move |day| {
        schedule
            .windows_for(day)
            .iter()
            .map(move |w| TimedTollRow::new(row, day, w))
    })
}
