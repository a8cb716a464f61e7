use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use examsync_core::models::{AvailabilityWindow, EventWindow};
use examsync_core::scheduling::filter_availability;
use pretty_assertions::assert_eq;
use uuid::Uuid;

fn day(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
}

fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, hour, minute, 0).unwrap()
}

fn record(examiner_id: Uuid, date: NaiveDate, slots: &[&str]) -> AvailabilityWindow {
    AvailabilityWindow {
        examiner_id,
        module: "CS101".to_string(),
        date,
        slots: slots.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn records_outside_the_date_range_are_dropped() {
    let examiner = Uuid::new_v4();
    let event = EventWindow {
        start: at(10, 8, 0),
        end: at(12, 18, 0),
    };
    let records = vec![
        record(examiner, day(9), &["9:00AM-10:00AM"]),
        record(examiner, day(13), &["9:00AM-10:00AM"]),
    ];

    let filtered = filter_availability(&records, &event).unwrap();

    assert!(filtered.is_empty());
    assert!(!filtered.has_open_slots());
}

#[test]
fn date_boundaries_are_inclusive() {
    let examiner = Uuid::new_v4();
    let event = EventWindow {
        start: at(10, 8, 0),
        end: at(12, 18, 0),
    };
    let records = vec![
        record(examiner, day(10), &["9:00AM-10:00AM"]),
        record(examiner, day(12), &["9:00AM-10:00AM"]),
    ];

    let filtered = filter_availability(&records, &event).unwrap();

    assert_eq!(filtered.examiners().len(), 1);
    assert_eq!(filtered.examiners()[0].windows.len(), 2);
}

#[test]
fn slots_reaching_outside_the_event_instants_are_dropped() {
    let examiner = Uuid::new_v4();
    // Event covers 08:00 to 10:30 on a single day.
    let event = EventWindow {
        start: at(10, 8, 0),
        end: at(10, 10, 30),
    };
    let records = vec![record(
        examiner,
        day(10),
        &["7:00AM-8:00AM", "9:00AM-10:00AM", "10:00AM-11:00AM"],
    )];

    let filtered = filter_availability(&records, &event).unwrap();

    let windows = &filtered.examiners()[0].windows;
    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].start, at(10, 9, 0));
    assert_eq!(windows[0].end, at(10, 10, 0));
}

#[test]
fn window_matching_event_bounds_exactly_is_kept() {
    let examiner = Uuid::new_v4();
    let event = EventWindow {
        start: at(10, 9, 0),
        end: at(10, 10, 0),
    };
    let records = vec![record(examiner, day(10), &["9:00AM-10:00AM"])];

    let filtered = filter_availability(&records, &event).unwrap();

    assert!(filtered.has_open_slots());
}

#[test]
fn examiner_with_no_contained_slots_still_appears_empty() {
    let examiner = Uuid::new_v4();
    let event = EventWindow {
        start: at(10, 8, 0),
        end: at(10, 8, 30),
    };
    let records = vec![record(examiner, day(10), &["9:00AM-10:00AM"])];

    let filtered = filter_availability(&records, &event).unwrap();

    assert!(!filtered.is_empty());
    assert!(!filtered.has_open_slots());
    assert_eq!(filtered.examiners()[0].windows.len(), 0);
    assert!(filtered.with_open_slots().is_empty());
}

#[test]
fn examiner_order_and_slot_order_are_preserved() {
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();
    let event = EventWindow {
        start: at(10, 0, 0),
        end: at(12, 23, 0),
    };
    let records = vec![
        record(first, day(10), &["1:00PM-2:00PM", "9:00AM-10:00AM"]),
        record(second, day(10), &["9:00AM-10:00AM"]),
        // A second in-range record of the first examiner appends.
        record(first, day(11), &["9:00AM-10:00AM"]),
    ];

    let filtered = filter_availability(&records, &event).unwrap();

    let examiners = filtered.examiners();
    assert_eq!(examiners.len(), 2);
    assert_eq!(examiners[0].examiner_id, first);
    assert_eq!(examiners[1].examiner_id, second);

    let first_windows = &examiners[0].windows;
    assert_eq!(first_windows.len(), 3);
    assert_eq!(first_windows[0].start, at(10, 13, 0));
    assert_eq!(first_windows[1].start, at(10, 9, 0));
    assert_eq!(first_windows[2].start, at(11, 9, 0));
}

#[test]
fn with_open_slots_skips_empty_examiners_but_keeps_order() {
    let empty = Uuid::new_v4();
    let busy = Uuid::new_v4();
    let event = EventWindow {
        start: at(10, 8, 0),
        end: at(10, 10, 0),
    };
    let records = vec![
        record(empty, day(10), &["11:00AM-12:00PM"]),
        record(busy, day(10), &["9:00AM-10:00AM"]),
    ];

    let filtered = filter_availability(&records, &event).unwrap();

    let open = filtered.with_open_slots();
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].examiner_id, busy);
}
