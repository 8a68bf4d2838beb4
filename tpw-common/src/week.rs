//! ISO week identification
//!
//! Week keys use ISO-8601 week numbering (weeks start Monday; week 1 is the
//! week containing the year's first Thursday), rendered as `YYYY-Wnn`. The
//! fixed-width year-major format makes lexicographic order chronological.

use crate::clock::Clock;
use crate::{Error, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cells in the fixed year grid (13 columns x 4 rows)
///
/// Years with 53 ISO weeks keep week 53 in the tracking data and the
/// statistics; only the grid omits it.
pub const GRID_WEEKS: usize = 52;

/// ISO week key of the form `YYYY-Wnn`
///
/// Construction always goes through a date or a validated parse, so every
/// `WeekKey` names a week that actually exists in its year.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekKey(String);

impl WeekKey {
    fn new(year: i32, week: u32) -> Self {
        WeekKey(format!("{year:04}-W{week:02}"))
    }

    /// Week key for a calendar date (UTC interpretation)
    pub fn for_date(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self::new(iso.year(), iso.week())
    }

    /// Week key for the current moment
    pub fn current(clock: &dyn Clock) -> Self {
        Self::for_date(clock.now_utc().date_naive())
    }

    /// Parse a `YYYY-Wnn` string, rejecting week numbers the year does not
    /// have (no clamping).
    pub fn parse(s: &str) -> Result<Self> {
        let bad = || Error::InvalidWeekKey(s.to_string());
        let (year_part, week_part) = s.split_once("-W").ok_or_else(bad)?;
        if year_part.len() != 4
            || week_part.len() != 2
            || !year_part.chars().all(|c| c.is_ascii_digit())
            || !week_part.chars().all(|c| c.is_ascii_digit())
        {
            return Err(bad());
        }
        let year: i32 = year_part.parse().map_err(|_| bad())?;
        let week: u32 = week_part.parse().map_err(|_| bad())?;
        if week == 0 || week > weeks_in_year(year) {
            return Err(bad());
        }
        Ok(Self::new(year, week))
    }

    /// ISO week-numbering year
    pub fn year(&self) -> i32 {
        self.0[..4].parse().unwrap() // format is fixed at construction
    }

    /// ISO week number in 1..=53
    pub fn week(&self) -> u32 {
        self.0[6..].parse().unwrap() // format is fixed at construction
    }

    /// The week immediately before this one, crossing year boundaries via
    /// calendar math rather than string arithmetic.
    pub fn previous(&self) -> WeekKey {
        WeekKey::for_date(self.monday() - Duration::weeks(1))
    }

    /// Monday of this ISO week
    pub fn monday(&self) -> NaiveDate {
        NaiveDate::from_isoywd_opt(self.year(), self.week(), Weekday::Mon)
            .unwrap() // week number was validated against the year
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Number of ISO weeks in a year: 52 or 53
pub fn weeks_in_year(year: i32) -> u32 {
    // December 28 always falls in the year's last ISO week.
    NaiveDate::from_ymd_opt(year, 12, 28)
        .map(|d| d.iso_week().week())
        .unwrap_or(52)
}

/// All week keys of `year`, ascending
pub fn enumerate_weeks(year: i32) -> Vec<WeekKey> {
    (1..=weeks_in_year(year))
        .map(|week| WeekKey::new(year, week))
        .collect()
}

/// The fixed 52-cell grid slice of `year`: weeks 01..=52, week 53 omitted
pub fn grid_weeks(year: i32) -> Vec<WeekKey> {
    let mut weeks = enumerate_weeks(year);
    weeks.truncate(GRID_WEEKS);
    weeks
}
