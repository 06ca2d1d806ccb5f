use std::cmp::Ordering;
use std::fmt;

/// Carriers known to run a business cabin at this airport. Desk arithmetic
/// is meaningless for anyone else; the mapper short-circuits to None.
pub const BUSINESS_CARRIERS: [&str; 6] = ["JU", "TK", "OS", "LH", "QR", "EK"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeskClass {
    Business,
    Economy,
}

impl fmt::Display for DeskClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeskClass::Business => write!(f, "business"),
            DeskClass::Economy => write!(f, "economy"),
        }
    }
}

/// Strip a desk identifier down to its digits without leading zeros, so
/// "01", "1" and " 1 " all compare equal. An all-zero identifier keeps its
/// digits; a digit-free one keeps the trimmed original.
pub fn normalize_desk(desk: &str) -> String {
    let digits: String = desk.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return desk.trim().to_string();
    }
    let stripped = digits.trim_start_matches('0');
    if stripped.is_empty() {
        digits
    } else {
        stripped.to_string()
    }
}

// Numeric desks ascending, non-numeric ones after them by string. Total
// order, so sort + dedup stay deterministic.
fn cmp_desks(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Decide which cabin a physical check-in desk is serving for a flight.
///
/// The lowest-numbered desk assigned to the flight serves business, the
/// rest economy; a flight with a single desk serves business at it. Returns
/// None when the desk is not among the flight's desks or the carrier has no
/// business cabin at all.
pub fn desk_class(airline_iata: &str, assigned_desks: &[String], query_desk: &str) -> Option<DeskClass> {
    if !BUSINESS_CARRIERS.contains(&airline_iata) {
        return None;
    }

    let mut desks: Vec<String> = assigned_desks.iter().map(|d| normalize_desk(d)).collect();
    desks.sort_by(|a, b| cmp_desks(a, b));
    desks.dedup();
    if desks.is_empty() {
        return None;
    }

    let digits: String = query_desk.chars().filter(|c| c.is_ascii_digit()).collect();
    let mut variants = vec![query_desk.trim().to_string(), normalize_desk(query_desk)];
    if !digits.is_empty() {
        variants.push(format!("{:0>2}", digits));
        variants.push(digits);
    }

    let position = variants
        .iter()
        .find_map(|v| desks.iter().position(|d| d == v))?;

    if desks.len() == 1 || position == 0 {
        Some(DeskClass::Business)
    } else {
        Some(DeskClass::Economy)
    }
}

/// Legacy adapter for upstream feeds that join several desks into one
/// comma-separated string.
pub fn split_desks(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .collect()
}
