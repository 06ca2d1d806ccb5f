use crate::cache::TtlCache;
use crate::desk::{DeskClass, desk_class};
use crate::eligibility::resolver::Resolver;
use crate::flight::Flight;
use crate::season::Season;
use crate::store::{ConfigStore, StoreError};
use chrono::{Local, NaiveDate};
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use tabled::Tabled;
use tabled::settings::Style;

mod airline;
mod cache;
mod desk;
mod destination;
mod eligibility;
mod flight;
mod season;
mod store;

#[derive(Parser)]
struct Args {
    /// Path to the JSON scenario file (config + board flights)
    #[arg(short, long, value_name = "FILE", default_value = "data/default.json")]
    scenario: PathBuf,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let mut candidates = Vec::new();

        for cmd in &self.commands {
            if cmd.starts_with(line) {
                candidates.push(Pair {
                    display: cmd.clone(),
                    replacement: format!("{} ", cmd),
                });
            }
        }

        Ok((0, candidates))
    }
}

fn paginate(content: String) {
    let mut pager = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn())
        .expect("Failed to spawn pager");

    let mut stdin = pager.stdin.take().expect("Failed to open stdin for pager");

    if let Err(e) = stdin.write_all(content.as_bytes()) {
        // Broken pipe is common if the user quits the pager early
        if e.kind() != std::io::ErrorKind::BrokenPipe {
            eprintln!("Error writing to pager: {}", e);
        }
    }

    // Wait for the user to close the pager before returning to the ">> " prompt
    let _ = pager.wait();
}

#[derive(Tabled)]
struct AirlineRow {
    iata: String,
    airline: String,
    business: bool,
    winter: String,
    summer: String,
}

#[derive(Tabled)]
struct SpecificFlightRow {
    flight: String,
    airline: String,
    business: bool,
    seasons: String,
    days: String,
    valid: String,
}

#[derive(Tabled)]
struct DestinationRow {
    code: String,
    airline: String,
    destination: String,
    business: bool,
    winter: String,
    summer: String,
}

#[derive(Tabled)]
struct FlightRow {
    flight: String,
    airline: String,
    destination: String,
    time: String,
    status: String,
    desks: String,
}

fn print_table<T: Tabled>(rows: Vec<T>) {
    if rows.is_empty() {
        println!("Nothing to show.");
        return;
    }
    let paged = rows.len() > 20;
    let mut table = tabled::Table::new(&rows);
    table.with(Style::rounded());
    table.with(tabled::settings::Alignment::left());
    if paged {
        paginate(table.to_string());
    } else {
        println!("{}", table);
    }
}

fn opt_date(bound: Option<NaiveDate>) -> String {
    bound.map_or("*".to_string(), |d| d.to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Optional trailing date argument; anything unparsable defaults to today
/// so desk screens keep working on malformed input.
fn date_arg(raw: Option<&&str>) -> NaiveDate {
    raw.and_then(|s| parse_date(s))
        .unwrap_or_else(|| Local::now().date_naive())
}

/// Board fetch goes through the TTL cache so display polling cannot hammer
/// the upstream scenario more than once per window.
fn fetch_board(
    path: &str,
    cache: &mut TtlCache<Vec<Flight>>,
    now: Instant,
) -> Result<(Vec<Flight>, bool), StoreError> {
    if let Some(flights) = cache.get(now) {
        return Ok((flights.clone(), false));
    }
    let fresh = ConfigStore::load_from_file(path)?;
    cache.put(fresh.flights.clone(), now);
    Ok((fresh.flights, true))
}

fn yes_no(answer: bool) -> colored::ColoredString {
    if answer { "yes".green() } else { "no".red() }
}

fn class_label(class: DeskClass) -> colored::ColoredString {
    match class {
        DeskClass::Business => "business".yellow().bold(),
        DeskClass::Economy => "economy".normal(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let scenario = args.scenario.to_str().ok_or("scenario path is not valid UTF-8")?.to_string();

    let mut store = match ConfigStore::load_from_file(&scenario) {
        Ok(store) => store,
        Err(StoreError::Io { path, .. }) => {
            println!("No scenario at {}; starting empty. Use 'seed' to bootstrap.", path);
            ConfigStore::new()
        },
        Err(e) => return Err(e.into()),
    };
    let mut board_cache: TtlCache<Vec<Flight>> = TtlCache::new(Duration::from_secs(30));
    board_cache.put(store.flights.clone(), Instant::now());
    println!(
        "Display controller online. {} airlines, {} board flights from {}.",
        store.airline_count(),
        store.flights.len(),
        scenario
    );

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: vec![
            "ls".to_string(),
            "check".to_string(),
            "desk".to_string(),
            "season".to_string(),
            "seed".to_string(),
            "reload".to_string(),
            "help".to_string(),
            "exit".to_string(),
        ],
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                match parts[0] {
                    "ls" => {
                        let sub = parts.get(1).map(|s| *s).unwrap_or("b");
                        match sub {
                            "a" | "airlines" => {
                                let rows = store.airlines().map(|a| AirlineRow {
                                    iata: a.iata_code.to_string(),
                                    airline: a.airline_name.clone(),
                                    business: a.has_business_class,
                                    winter: a.winter_schedule.to_string(),
                                    summer: a.summer_schedule.to_string(),
                                }).collect();
                                print_table(rows);
                            },
                            "f" | "flights" => {
                                let rows = store.specific_flights().map(|f| SpecificFlightRow {
                                    flight: f.flight_number.to_string(),
                                    airline: f.airline_iata.to_string(),
                                    business: f.always_business_class,
                                    seasons: match (f.winter_only, f.summer_only) {
                                        (true, true) => "winter+summer".to_string(),
                                        (true, false) => "winter".to_string(),
                                        (false, true) => "summer".to_string(),
                                        (false, false) => "any".to_string(),
                                    },
                                    days: if f.days_of_week.is_empty() {
                                        "all".to_string()
                                    } else {
                                        format!("{:?}", f.days_of_week)
                                    },
                                    valid: format!("{}..{}", opt_date(f.valid_from), opt_date(f.valid_until)),
                                }).collect();
                                print_table(rows);
                            },
                            "d" | "destinations" => {
                                let rows = store.destinations().map(|d| DestinationRow {
                                    code: d.destination_code.to_string(),
                                    airline: d.airline_iata.to_string(),
                                    destination: d.destination_name.clone(),
                                    business: d.has_business_class,
                                    winter: d.winter_schedule.to_string(),
                                    summer: d.summer_schedule.to_string(),
                                }).collect();
                                print_table(rows);
                            },
                            _ => {
                                // 'ls' or 'ls b': the live departure board
                                let rows = store.flights.iter().map(|f| FlightRow {
                                    flight: f.flight_number.to_string(),
                                    airline: f.airline_iata.to_string(),
                                    destination: f.destination_code.to_string(),
                                    time: f.scheduled_time.clone(),
                                    status: f.status.clone(),
                                    desks: f.check_in_desks.join(", "),
                                }).collect();
                                print_table(rows);
                            },
                        }
                    },
                    "check" => {
                        if let Some(iata) = parts.get(1) {
                            let flight = parts.get(2).copied().filter(|s| *s != "-");
                            let dest = parts.get(3).copied().filter(|s| *s != "-");
                            let on = date_arg(parts.get(4));
                            let resolver = Resolver::new(&store);
                            match resolver.has_business_class(iata, flight, dest, on) {
                                Ok(answer) => println!(
                                    "Business class for {}{}{} on {}: {}",
                                    iata,
                                    flight.map(|f| format!(" flight {}", f)).unwrap_or_default(),
                                    dest.map(|d| format!(" to {}", d)).unwrap_or_default(),
                                    on,
                                    yes_no(answer)
                                ),
                                Err(e) => println!("{} {}", "Could not determine:".red(), e),
                            }
                        } else {
                            println!("Usage: check <iata> [flight|-] [dest|-] [YYYY-MM-DD]");
                        }
                    },
                    "desk" => {
                        if let Some(query) = parts.get(1) {
                            let on = date_arg(parts.get(2));
                            let resolver = Resolver::new(&store);
                            let mut found = false;
                            for f in &store.flights {
                                let Some(class) = desk_class(&f.airline_iata, &f.check_in_desks, query) else {
                                    continue;
                                };
                                found = true;
                                let eligible = resolver.has_business_class(
                                    &f.airline_iata,
                                    Some(&f.flight_number),
                                    Some(&f.destination_code),
                                    on,
                                );
                                match eligible {
                                    Ok(answer) => {
                                        // a business desk only shows as business
                                        // while the flight is actually entitled
                                        let shown = if answer { class } else { DeskClass::Economy };
                                        println!(
                                            "Desk {}: {} {} -> {} (entitled on {}: {})",
                                            query,
                                            f.flight_number,
                                            f.destination_code,
                                            class_label(shown),
                                            on,
                                            yes_no(answer)
                                        );
                                    },
                                    Err(e) => println!("{} {}", "Could not determine:".red(), e),
                                }
                            }
                            if !found {
                                println!("Desk {} is not serving any tracked business-cabin flight.", query);
                            }
                        } else {
                            println!("Usage: desk <number> [YYYY-MM-DD]");
                        }
                    },
                    "season" => {
                        let on = date_arg(parts.get(1));
                        println!("{} is a {} timetable day.", on, Season::on(on));
                    },
                    "seed" => {
                        if store.seed_defaults() {
                            println!("Seeded {} example airlines with flights and destinations.", store.airline_count());
                        } else {
                            println!("Airlines already configured; nothing seeded.");
                        }
                    },
                    "reload" => {
                        if let Some("force" | "f") = parts.get(1).copied() {
                            board_cache.invalidate();
                        }
                        match fetch_board(&scenario, &mut board_cache, Instant::now()) {
                            Ok((flights, refreshed)) => {
                                let n = flights.len();
                                store.flights = flights;
                                if refreshed {
                                    println!("Reloaded {} board flights.", n);
                                } else {
                                    println!("Board data is still fresh; serving {} cached flights.", n);
                                }
                            },
                            Err(e) => println!("{} {}", "Reload failed:".red(), e),
                        }
                    },
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  ls [what]             - List board flights (default) or a|airlines, f|flights, d|destinations");
                        println!("  check <iata> [f] [d]  - Business-class eligibility for an airline, optional flight/destination/date");
                        println!("  desk <n> [date]       - Which class a physical check-in desk is serving");
                        println!("  season [date]         - Winter or summer timetable for a date (default today)");
                        println!("  seed                  - Populate example config if no airline exists yet");
                        println!("  reload [force]        - Re-fetch board flights (rate-limited by the cache TTL)");
                        println!("  help / ?              - Show this help menu");
                        println!("  exit / quit           - Exit the console\n");
                    },
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", parts[0]),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
