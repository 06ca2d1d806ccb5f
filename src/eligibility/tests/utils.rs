use crate::airline::{Airline, SeasonalSchedule};
use crate::destination::{Destination, DestinationSchedule};
use crate::eligibility::resolver::Resolver;
use crate::flight::SpecificFlight;
use crate::store::{ConfigSource, ConfigStore, StoreError};
use chrono::NaiveDate;
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use std::sync::Arc;

pub fn id(s: &str) -> Arc<str> {
    Arc::from(s)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn add_airline(
    store: &mut ConfigStore,
    iata: &str,
    has_business_class: bool,
    winter_schedule: SeasonalSchedule,
    summer_schedule: SeasonalSchedule,
) {
    store.insert_airline(Airline {
        iata_code: id(iata),
        airline_name: iata.to_string(),
        has_business_class,
        winter_schedule,
        summer_schedule,
    });
}

pub fn schedule_on() -> SeasonalSchedule {
    SeasonalSchedule {
        has_business_class: true,
        ..Default::default()
    }
}

pub fn schedule_off() -> SeasonalSchedule {
    SeasonalSchedule::default()
}

pub fn add_specific_flight(
    store: &mut ConfigStore,
    flight_number: &str,
    airline_iata: &str,
    always_business_class: bool,
    winter_only: bool,
    summer_only: bool,
    days_of_week: Vec<u8>,
    valid_from: Option<NaiveDate>,
    valid_until: Option<NaiveDate>,
) {
    store.insert_specific_flight(SpecificFlight {
        flight_number: id(flight_number),
        airline_iata: id(airline_iata),
        always_business_class,
        winter_only,
        summer_only,
        days_of_week,
        valid_from,
        valid_until,
    });
}

pub fn add_destination(
    store: &mut ConfigStore,
    destination_code: &str,
    airline_iata: &str,
    has_business_class: bool,
    winter_schedule: DestinationSchedule,
    summer_schedule: DestinationSchedule,
) {
    store.insert_destination(Destination {
        destination_code: id(destination_code),
        airline_iata: id(airline_iata),
        destination_name: destination_code.to_string(),
        has_business_class,
        winter_schedule,
        summer_schedule,
    });
}

pub fn dest_schedule(
    has_business_class: bool,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> DestinationSchedule {
    DestinationSchedule {
        has_business_class,
        start_date,
        end_date,
    }
}

pub fn resolve(
    store: &ConfigStore,
    airline_iata: &str,
    flight_number: Option<&str>,
    destination_code: Option<&str>,
    on: NaiveDate,
) -> bool {
    Resolver::new(store)
        .has_business_class(airline_iata, flight_number, destination_code, on)
        .unwrap()
}

/// Config source standing in for an unreachable backend.
pub struct FailingSource;

impl ConfigSource for FailingSource {
    fn airline(&self, _iata: &str) -> Result<Option<&Airline>, StoreError> {
        Err(StoreError::Unavailable("backend down".to_string()))
    }

    fn specific_flight(
        &self,
        _airline_iata: &str,
        _flight_number: &str,
    ) -> Result<Option<&SpecificFlight>, StoreError> {
        Err(StoreError::Unavailable("backend down".to_string()))
    }

    fn destination(
        &self,
        _destination_code: &str,
        _airline_iata: &str,
    ) -> Result<Option<&Destination>, StoreError> {
        Err(StoreError::Unavailable("backend down".to_string()))
    }
}

pub fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2024i32..2027, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

pub fn arb_summer_date() -> impl Strategy<Value = NaiveDate> {
    (2024i32..2027, 4u32..=10, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

pub fn arb_schedule() -> impl Strategy<Value = SeasonalSchedule> {
    (
        proptest::bool::ANY,
        proptest::collection::vec(0u8..7, 0..4),
        prop_oneof![Just(None), arb_date().prop_map(Some)],
        prop_oneof![Just(None), arb_date().prop_map(Some)],
    )
        .prop_map(|(has_business_class, days_of_week, start_date, end_date)| {
            SeasonalSchedule {
                has_business_class,
                specific_flights: vec![],
                days_of_week,
                start_date,
                end_date,
            }
        })
}
