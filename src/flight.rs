use crate::airline::AirlineIata;
use crate::destination::DestinationCode;
use crate::season::{weekday_index, within_bounds};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub type FlightNumber = Arc<str>;

/// Per-flight business-class override. When a record exists for the queried
/// flight it decides the answer on its own; resolution never falls through
/// to destination or airline rules.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpecificFlight {
    pub flight_number: FlightNumber,
    pub airline_iata: AirlineIata,
    pub always_business_class: bool,
    #[serde(default)]
    pub winter_only: bool,
    #[serde(default)]
    pub summer_only: bool,
    /// Sunday=0 .. Saturday=6. Empty means every day.
    #[serde(default)]
    pub days_of_week: Vec<u8>,
    #[serde(default)]
    pub valid_from: Option<NaiveDate>,
    #[serde(default)]
    pub valid_until: Option<NaiveDate>,
}

impl SpecificFlight {
    pub fn runs_on(&self, date: NaiveDate) -> bool {
        self.days_of_week.is_empty() || self.days_of_week.contains(&weekday_index(date))
    }

    pub fn valid_on(&self, date: NaiveDate) -> bool {
        within_bounds(date, self.valid_from, self.valid_until)
    }
}

/// Runtime board entry as fetched from the upstream flight feed. Only the
/// identifiers and the desk list matter to the eligibility engine; the rest
/// is carried for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub flight_number: FlightNumber,
    pub airline_iata: AirlineIata,
    pub destination_code: DestinationCode,
    pub scheduled_time: String,
    pub status: String,
    /// Ordered as reported upstream; normalization and ordering for class
    /// assignment happen in the desk mapper.
    pub check_in_desks: Vec<String>,
}
