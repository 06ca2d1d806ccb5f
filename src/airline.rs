use crate::flight::FlightNumber;
use crate::season::{Season, weekday_index, within_bounds};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;

pub type AirlineIata = Arc<str>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Airline {
    pub iata_code: AirlineIata,
    pub airline_name: String,
    /// Always-on flag; when set the seasonal schedules are ignored.
    pub has_business_class: bool,
    #[serde(default)]
    pub winter_schedule: SeasonalSchedule,
    #[serde(default)]
    pub summer_schedule: SeasonalSchedule,
}

impl Airline {
    pub fn schedule_for(&self, season: Season) -> &SeasonalSchedule {
        match season {
            Season::Winter => &self.winter_schedule,
            Season::Summer => &self.summer_schedule,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonalSchedule {
    pub has_business_class: bool,
    /// Flight numbers granted business class even when the date bounds or
    /// day mask would not apply.
    #[serde(default)]
    pub specific_flights: Vec<FlightNumber>,
    /// Sunday=0 .. Saturday=6. Empty means every day.
    #[serde(default)]
    pub days_of_week: Vec<u8>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl SeasonalSchedule {
    pub fn runs_on(&self, date: NaiveDate) -> bool {
        self.days_of_week.is_empty() || self.days_of_week.contains(&weekday_index(date))
    }

    pub fn covers(&self, date: NaiveDate) -> bool {
        within_bounds(date, self.start_date, self.end_date)
    }

    pub fn lists_flight(&self, flight_number: &str) -> bool {
        self.specific_flights.iter().any(|f| f.as_ref() == flight_number)
    }
}

impl fmt::Display for SeasonalSchedule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !self.has_business_class {
            return write!(f, "off");
        }
        write!(f, "on")?;
        if !self.days_of_week.is_empty() {
            write!(f, " days={:?}", self.days_of_week)?;
        }
        match (self.start_date, self.end_date) {
            (None, None) => {}
            (from, until) => write!(
                f,
                " {}..{}",
                from.map_or("*".to_string(), |d| d.to_string()),
                until.map_or("*".to_string(), |d| d.to_string())
            )?,
        }
        if !self.specific_flights.is_empty() {
            let listed: Vec<&str> = self.specific_flights.iter().map(|s| s.as_ref()).collect();
            write!(f, " flights={}", listed.join(","))?;
        }
        Ok(())
    }
}
