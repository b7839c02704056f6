//! Calendar helpers on top of `jiff`'s civil types.
//!
//! The toll schedule only needs two notions of time: the day of the week
//! ([`jiff::civil::Weekday`]) and a wall-clock time of day
//! ([`jiff::civil::Time`]).  Neither carries a time zone; a toll window applies
//! to whatever local time the caller's data is expressed in.

use jiff::civil::{Time, Weekday};

/// The seven days in output order, Monday first.
pub const WEEK: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

/// `true` for Saturday and Sunday.
#[inline]
pub fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Saturday | Weekday::Sunday)
}

/// English day name, as written to the `start_day`/`end_day` columns.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Monday    => "Monday",
        Weekday::Tuesday   => "Tuesday",
        Weekday::Wednesday => "Wednesday",
        Weekday::Thursday  => "Thursday",
        Weekday::Friday    => "Friday",
        Weekday::Saturday  => "Saturday",
        Weekday::Sunday    => "Sunday",
    }
}

/// `HH:MM:SS`, sub-second precision dropped.
pub fn format_time(t: Time) -> String {
    format!("{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second())
}
