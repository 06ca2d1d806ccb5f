use crate::season::Season;
use crate::store::{ConfigSource, StoreError};
use chrono::NaiveDate;

/// Precedence order of the eligibility rules. The first rule that reaches a
/// Grant or Deny wins; Pass hands over to the next tier.
const PRECEDENCE: [Rule; 3] = [Rule::SpecificFlight, Rule::Destination, Rule::Airline];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    SpecificFlight,
    Destination,
    Airline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    Grant,
    Deny,
    Pass,
}

/// Business-class eligibility resolution over an injected configuration
/// source. Holds no state of its own, so one resolver can serve any number
/// of concurrent display clients.
pub struct Resolver<'a, S: ConfigSource> {
    config: &'a S,
}

impl<'a, S: ConfigSource> Resolver<'a, S> {
    pub fn new(config: &'a S) -> Resolver<'a, S> {
        Resolver { config }
    }

    /// Whether business-class check-in applies for the given airline, and
    /// optionally a flight number and destination, on the given date.
    ///
    /// Lookup failures surface as Err; a plain "no" is Ok(false).
    pub fn has_business_class(
        &self,
        airline_iata: &str,
        flight_number: Option<&str>,
        destination_code: Option<&str>,
        on: NaiveDate,
    ) -> Result<bool, StoreError> {
        for rule in PRECEDENCE {
            let decision = match rule {
                Rule::SpecificFlight => self.flight_rule(airline_iata, flight_number, on)?,
                Rule::Destination => self.destination_rule(airline_iata, destination_code, on)?,
                Rule::Airline => self.airline_rule(airline_iata, flight_number, on)?,
            };
            match decision {
                Decision::Grant => return Ok(true),
                Decision::Deny => return Ok(false),
                Decision::Pass => {}
            }
        }
        Ok(false)
    }

    /// A per-flight record, when present, is terminal: it grants or denies
    /// on its own and never falls through.
    fn flight_rule(
        &self,
        airline_iata: &str,
        flight_number: Option<&str>,
        on: NaiveDate,
    ) -> Result<Decision, StoreError> {
        let Some(number) = flight_number else {
            return Ok(Decision::Pass);
        };
        let Some(record) = self.config.specific_flight(airline_iata, number)? else {
            return Ok(Decision::Pass);
        };

        let season = Season::on(on);
        if record.winter_only && season != Season::Winter {
            return Ok(Decision::Deny);
        }
        if record.summer_only && season != Season::Summer {
            return Ok(Decision::Deny);
        }
        if !record.runs_on(on) {
            return Ok(Decision::Deny);
        }
        if !record.valid_on(on) {
            return Ok(Decision::Deny);
        }
        if record.always_business_class {
            Ok(Decision::Grant)
        } else {
            Ok(Decision::Deny)
        }
    }

    /// A destination record can only grant. One that matched but does not
    /// apply for the date falls through to the airline rule.
    fn destination_rule(
        &self,
        airline_iata: &str,
        destination_code: Option<&str>,
        on: NaiveDate,
    ) -> Result<Decision, StoreError> {
        let Some(code) = destination_code else {
            return Ok(Decision::Pass);
        };
        let Some(destination) = self.config.destination(code, airline_iata)? else {
            return Ok(Decision::Pass);
        };

        if destination.has_business_class {
            return Ok(Decision::Grant);
        }
        let schedule = destination.schedule_for(Season::on(on));
        if schedule.has_business_class && schedule.covers(on) {
            Ok(Decision::Grant)
        } else {
            Ok(Decision::Pass)
        }
    }

    /// Last tier. A missing airline record is a terminal "not eligible".
    /// The schedule's specific-flight list grants before the day mask and
    /// the date bounds are consulted.
    fn airline_rule(
        &self,
        airline_iata: &str,
        flight_number: Option<&str>,
        on: NaiveDate,
    ) -> Result<Decision, StoreError> {
        let Some(airline) = self.config.airline(airline_iata)? else {
            return Ok(Decision::Deny);
        };

        if airline.has_business_class {
            return Ok(Decision::Grant);
        }
        let schedule = airline.schedule_for(Season::on(on));
        if !schedule.has_business_class {
            return Ok(Decision::Deny);
        }
        if flight_number.is_some_and(|number| schedule.lists_flight(number)) {
            return Ok(Decision::Grant);
        }
        if !schedule.runs_on(on) {
            return Ok(Decision::Deny);
        }
        if schedule.covers(on) {
            Ok(Decision::Grant)
        } else {
            Ok(Decision::Deny)
        }
    }
}
