use crate::airline::SeasonalSchedule;
use crate::eligibility::tests::utils::{
    add_airline, date, id, resolve, schedule_off, schedule_on,
};
use crate::store::ConfigStore;

#[test]
fn test_unknown_airline_not_eligible() {
    let store = ConfigStore::new();
    assert!(!resolve(&store, "XX", None, None, date(2025, 7, 10)));
    assert!(!resolve(&store, "XX", Some("XX123"), Some("BEG"), date(2025, 7, 10)));
}

#[test]
fn test_global_flag_grants_regardless_of_schedules() {
    let mut store = ConfigStore::new();
    add_airline(&mut store, "TK", true, schedule_off(), schedule_off());

    assert!(resolve(&store, "TK", None, None, date(2025, 7, 10)));
    assert!(resolve(&store, "TK", None, None, date(2025, 1, 10)));
}

#[test]
fn test_disabled_season_schedule_denies() {
    let mut store = ConfigStore::new();
    add_airline(&mut store, "JU", false, schedule_off(), schedule_on());

    assert!(resolve(&store, "JU", None, None, date(2025, 7, 10)));
    assert!(!resolve(&store, "JU", None, None, date(2025, 1, 10)));
}

#[test]
fn test_day_mask_denies_unlisted_flight() {
    let mut store = ConfigStore::new();
    let summer = SeasonalSchedule {
        has_business_class: true,
        days_of_week: vec![1, 2, 3, 4, 5],
        ..Default::default()
    };
    add_airline(&mut store, "JU", false, schedule_off(), summer);

    // 2025-07-05 is a Saturday
    assert!(!resolve(&store, "JU", Some("JU999"), None, date(2025, 7, 5)));
    assert!(resolve(&store, "JU", Some("JU999"), None, date(2025, 7, 7)));
}

#[test]
fn test_listed_flight_bypasses_day_mask() {
    // end-to-end: JU summer schedule on weekdays only, JU683 listed; a
    // Saturday query is still eligible because the list wins over the mask
    let mut store = ConfigStore::new();
    let summer = SeasonalSchedule {
        has_business_class: true,
        specific_flights: vec![id("JU683")],
        days_of_week: vec![1, 2, 3, 4, 5],
        ..Default::default()
    };
    add_airline(&mut store, "JU", false, schedule_off(), summer);

    assert!(resolve(&store, "JU", Some("JU683"), None, date(2025, 7, 5)));
}

#[test]
fn test_listed_flight_bypasses_date_bounds() {
    let mut store = ConfigStore::new();
    let summer = SeasonalSchedule {
        has_business_class: true,
        specific_flights: vec![id("JU683")],
        start_date: Some(date(2030, 6, 1)),
        end_date: None,
        ..Default::default()
    };
    add_airline(&mut store, "JU", false, schedule_off(), summer);

    // window opens years from the query date, listed flight still eligible
    assert!(resolve(&store, "JU", Some("JU683"), None, date(2025, 7, 10)));
    assert!(!resolve(&store, "JU", Some("JU684"), None, date(2025, 7, 10)));
}

#[test]
fn test_date_bounds_decide_for_unlisted_flights() {
    let mut store = ConfigStore::new();
    let summer = SeasonalSchedule {
        has_business_class: true,
        start_date: Some(date(2025, 6, 1)),
        end_date: Some(date(2025, 8, 31)),
        ..Default::default()
    };
    add_airline(&mut store, "JU", false, schedule_off(), summer);

    assert!(resolve(&store, "JU", None, None, date(2025, 6, 1)));
    assert!(resolve(&store, "JU", None, None, date(2025, 8, 31)));
    assert!(!resolve(&store, "JU", None, None, date(2025, 9, 1)));
}

#[test]
fn test_unbounded_schedule_grants_every_covered_day() {
    let mut store = ConfigStore::new();
    add_airline(&mut store, "JU", false, schedule_on(), schedule_on());

    assert!(resolve(&store, "JU", None, None, date(2025, 7, 10)));
    assert!(resolve(&store, "JU", None, None, date(2025, 12, 25)));
}
