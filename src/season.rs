use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timetable season, a function of the calendar month alone.
/// November through March is winter, April through October is summer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Summer,
}

impl Season {
    pub fn on(date: NaiveDate) -> Season {
        match date.month() {
            11 | 12 | 1..=3 => Season::Winter,
            _ => Season::Summer,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Winter => write!(f, "winter"),
            Season::Summer => write!(f, "summer"),
        }
    }
}

/// Day-of-week index with Sunday as 0, Saturday as 6.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Inclusive calendar window check. A missing bound is unbounded on that side.
pub fn within_bounds(date: NaiveDate, from: Option<NaiveDate>, until: Option<NaiveDate>) -> bool {
    from.is_none_or(|d| date >= d) && until.is_none_or(|d| date <= d)
}
