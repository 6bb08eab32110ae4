//! Calendar and season helpers.
//!
//! All pure functions of dates. Season windows compare month-day bounds
//! only; in this domain no season crosses year-end.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// True if the date falls on the designated weekly blackout day.
pub fn is_blackout_day(date: NaiveDate, blackout: Weekday) -> bool {
    date.weekday() == blackout
}

/// A stretch of the year during which one competitive level plays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonWindow {
    /// Inclusive (month, day) start bound.
    pub start: (u32, u32),
    /// Inclusive (month, day) end bound.
    pub end: (u32, u32),
    /// Weekdays on which this level typically plays at home.
    pub home_weekdays: Vec<Weekday>,
}

impl SeasonWindow {
    pub fn new(start: (u32, u32), end: (u32, u32), home_weekdays: Vec<Weekday>) -> Self {
        Self {
            start,
            end,
            home_weekdays,
        }
    }

    /// True if the date's month-day falls inside the window, bounds inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        let month_day = (date.month(), date.day());
        self.start <= month_day && month_day <= self.end
    }

    /// True if the date lands on one of the level's usual home weekdays.
    pub fn is_typical_home_day(&self, date: NaiveDate) -> bool {
        self.home_weekdays.contains(&date.weekday())
    }
}

/// Inclusive sequence of calendar dates from `start` through `end`.
///
/// Stateless; yields nothing when `start > end`.
pub fn dates_in_range(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |date| *date <= end)
}

/// Week index relative to Jan 1 of the date's year (not official ISO weeks).
///
/// Only ever combined with the year as a dedup bucket, so the exact
/// boundaries just need to be stable.
pub fn week_number(date: NaiveDate) -> u32 {
    date.ordinal0() / 7
}
