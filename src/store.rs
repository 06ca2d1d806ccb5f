use crate::airline::{Airline, AirlineIata, SeasonalSchedule};
use crate::desk::split_desks;
use crate::destination::{Destination, DestinationCode, DestinationSchedule};
use crate::flight::{Flight, FlightNumber, SpecificFlight};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;
use std::io;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("malformed scenario file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("configuration backend unavailable: {0}")]
    Unavailable(String),
}

/// Read side of the configuration backing store. The resolver only ever
/// looks records up; a missing record is Ok(None), an unreachable backend
/// is Err so callers can tell "no" from "couldn't determine".
pub trait ConfigSource {
    fn airline(&self, iata: &str) -> Result<Option<&Airline>, StoreError>;
    fn specific_flight(
        &self,
        airline_iata: &str,
        flight_number: &str,
    ) -> Result<Option<&SpecificFlight>, StoreError>;
    fn destination(
        &self,
        destination_code: &str,
        airline_iata: &str,
    ) -> Result<Option<&Destination>, StoreError>;
}

pub struct ConfigStore {
    airlines: HashMap<AirlineIata, Airline>,
    specific_flights: HashMap<FlightNumber, SpecificFlight>,
    destinations: HashMap<(DestinationCode, AirlineIata), Destination>,
    pub flights: Vec<Flight>,
}

impl ConfigStore {
    pub fn new() -> ConfigStore {
        ConfigStore {
            airlines: HashMap::new(),
            specific_flights: HashMap::new(),
            destinations: HashMap::new(),
            flights: Vec::new(),
        }
    }

    pub fn load_from_file(path: &str) -> Result<Self, StoreError> {
        let data = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, StoreError> {
        #[derive(Deserialize)]
        struct RawFlight {
            flight_number: FlightNumber,
            airline_iata: AirlineIata,
            destination_code: DestinationCode,
            #[serde(default)]
            scheduled_time: String,
            #[serde(default)]
            status: String,
            /// Upstream feed joins desks into one comma-separated string.
            #[serde(default)]
            check_in_desk: String,
        }
        #[derive(Deserialize)]
        struct RawData {
            #[serde(default)]
            airlines: Vec<Airline>,
            #[serde(default)]
            specific_flights: Vec<SpecificFlight>,
            #[serde(default)]
            destinations: Vec<Destination>,
            #[serde(default)]
            flights: Vec<RawFlight>,
        }
        let raw: RawData = serde_json::from_str(data)?;

        let airlines = raw
            .airlines
            .into_iter()
            .map(|a| (a.iata_code.clone(), a))
            .collect();
        let specific_flights = raw
            .specific_flights
            .into_iter()
            .map(|f| (f.flight_number.clone(), f))
            .collect();
        let destinations = raw
            .destinations
            .into_iter()
            .map(|d| ((d.destination_code.clone(), d.airline_iata.clone()), d))
            .collect();
        let flights = raw
            .flights
            .into_iter()
            .map(|f| Flight {
                flight_number: f.flight_number,
                airline_iata: f.airline_iata,
                destination_code: f.destination_code,
                scheduled_time: f.scheduled_time,
                status: f.status,
                check_in_desks: split_desks(&f.check_in_desk),
            })
            .collect();

        Ok(ConfigStore {
            airlines,
            specific_flights,
            destinations,
            flights,
        })
    }

    pub fn airlines(&self) -> impl Iterator<Item = &Airline> {
        let mut all: Vec<&Airline> = self.airlines.values().collect();
        all.sort_by(|a, b| a.iata_code.cmp(&b.iata_code));
        all.into_iter()
    }

    pub fn specific_flights(&self) -> impl Iterator<Item = &SpecificFlight> {
        let mut all: Vec<&SpecificFlight> = self.specific_flights.values().collect();
        all.sort_by(|a, b| a.flight_number.cmp(&b.flight_number));
        all.into_iter()
    }

    pub fn destinations(&self) -> impl Iterator<Item = &Destination> {
        let mut all: Vec<&Destination> = self.destinations.values().collect();
        all.sort_by(|a, b| {
            (&a.destination_code, &a.airline_iata).cmp(&(&b.destination_code, &b.airline_iata))
        });
        all.into_iter()
    }

    /// One-time bootstrap with two example carriers. A no-op as soon as any
    /// airline exists, so repeated calls never duplicate records. Returns
    /// whether anything was inserted.
    pub fn seed_defaults(&mut self) -> bool {
        if !self.airlines.is_empty() {
            return false;
        }

        let ju: AirlineIata = Arc::from("JU");
        let tk: AirlineIata = Arc::from("TK");

        self.insert_airline(Airline {
            iata_code: ju.clone(),
            airline_name: "Air Serbia".to_string(),
            has_business_class: false,
            winter_schedule: SeasonalSchedule::default(),
            summer_schedule: SeasonalSchedule {
                has_business_class: true,
                specific_flights: vec![Arc::from("JU683")],
                days_of_week: vec![1, 2, 3, 4, 5],
                start_date: None,
                end_date: None,
            },
        });
        self.insert_airline(Airline {
            iata_code: tk.clone(),
            airline_name: "Turkish Airlines".to_string(),
            has_business_class: true,
            winter_schedule: SeasonalSchedule::default(),
            summer_schedule: SeasonalSchedule::default(),
        });

        self.insert_specific_flight(SpecificFlight {
            flight_number: Arc::from("JU683"),
            airline_iata: ju.clone(),
            always_business_class: true,
            winter_only: false,
            summer_only: true,
            days_of_week: vec![],
            valid_from: None,
            valid_until: None,
        });
        self.insert_specific_flight(SpecificFlight {
            flight_number: Arc::from("TK1082"),
            airline_iata: tk.clone(),
            always_business_class: true,
            winter_only: false,
            summer_only: false,
            days_of_week: vec![],
            valid_from: None,
            valid_until: None,
        });

        self.insert_destination(Destination {
            destination_code: Arc::from("BEG"),
            airline_iata: ju,
            destination_name: "Belgrade".to_string(),
            has_business_class: false,
            winter_schedule: DestinationSchedule::default(),
            summer_schedule: DestinationSchedule {
                has_business_class: true,
                start_date: NaiveDate::from_ymd_opt(2025, 6, 1),
                end_date: NaiveDate::from_ymd_opt(2025, 9, 30),
            },
        });
        self.insert_destination(Destination {
            destination_code: Arc::from("IST"),
            airline_iata: tk,
            destination_name: "Istanbul".to_string(),
            has_business_class: true,
            winter_schedule: DestinationSchedule::default(),
            summer_schedule: DestinationSchedule::default(),
        });

        true
    }

    pub fn insert_airline(&mut self, airline: Airline) {
        self.airlines.insert(airline.iata_code.clone(), airline);
    }

    pub fn insert_specific_flight(&mut self, flight: SpecificFlight) {
        self.specific_flights
            .insert(flight.flight_number.clone(), flight);
    }

    pub fn insert_destination(&mut self, destination: Destination) {
        self.destinations.insert(
            (
                destination.destination_code.clone(),
                destination.airline_iata.clone(),
            ),
            destination,
        );
    }

    pub fn airline_count(&self) -> usize {
        self.airlines.len()
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        ConfigStore::new()
    }
}

impl ConfigSource for ConfigStore {
    fn airline(&self, iata: &str) -> Result<Option<&Airline>, StoreError> {
        Ok(self.airlines.get(iata))
    }

    fn specific_flight(
        &self,
        airline_iata: &str,
        flight_number: &str,
    ) -> Result<Option<&SpecificFlight>, StoreError> {
        Ok(self
            .specific_flights
            .get(flight_number)
            .filter(|f| f.airline_iata.as_ref() == airline_iata))
    }

    fn destination(
        &self,
        destination_code: &str,
        airline_iata: &str,
    ) -> Result<Option<&Destination>, StoreError> {
        // keyed by (code, airline); scan instead of allocating a probe key
        Ok(self
            .destinations
            .values()
            .find(|d| {
                d.destination_code.as_ref() == destination_code
                    && d.airline_iata.as_ref() == airline_iata
            }))
    }
}
