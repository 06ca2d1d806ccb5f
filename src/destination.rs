use crate::airline::AirlineIata;
use crate::season::{Season, within_bounds};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;

pub type DestinationCode = Arc<str>;

/// Destination-level policy, keyed per airline: the same airport can carry
/// different business-class windows for different carriers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub destination_code: DestinationCode,
    pub airline_iata: AirlineIata,
    pub destination_name: String,
    pub has_business_class: bool,
    #[serde(default)]
    pub winter_schedule: DestinationSchedule,
    #[serde(default)]
    pub summer_schedule: DestinationSchedule,
}

impl Destination {
    pub fn schedule_for(&self, season: Season) -> &DestinationSchedule {
        match season {
            Season::Winter => &self.winter_schedule,
            Season::Summer => &self.summer_schedule,
        }
    }
}

/// No day mask or flight list at this level; a date window only.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DestinationSchedule {
    pub has_business_class: bool,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl DestinationSchedule {
    pub fn covers(&self, date: NaiveDate) -> bool {
        within_bounds(date, self.start_date, self.end_date)
    }
}

impl fmt::Display for DestinationSchedule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !self.has_business_class {
            return write!(f, "off");
        }
        match (self.start_date, self.end_date) {
            (None, None) => write!(f, "on"),
            (from, until) => write!(
                f,
                "on {}..{}",
                from.map_or("*".to_string(), |d| d.to_string()),
                until.map_or("*".to_string(), |d| d.to_string())
            ),
        }
    }
}
