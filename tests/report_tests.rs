use travelsum::core::aggregate::aggregate;
use travelsum::core::calendar::{RangeMode, walk};
use travelsum::core::ledger::ActivityLedger;
use travelsum::core::report::{HEADERS, NO_RECORD_MARKER, Report, ReportCell};
use travelsum::models::activity::Activity;
use travelsum::models::bucket::Bucket;
use travelsum::models::day_group::DayGroup;

mod common;
use common::ymd;

fn act(mode: &str, duration: i64, distance: f64) -> Activity {
    Activity::new(Some(mode), duration, distance)
}

#[test]
fn test_classify_mode_table() {
    assert_eq!(Bucket::classify("walk"), Bucket::Walk);
    assert_eq!(Bucket::classify("BICYCLE"), Bucket::Bicycle);
    assert_eq!(Bucket::classify("Electric Bicycle"), Bucket::Bicycle);
    for m in ["car", "Moped", "electric scooter"] {
        assert_eq!(Bucket::classify(m), Bucket::Drive, "{m}");
    }
    for m in [
        "bus",
        "Car Passenger",
        "train",
        "metro",
        "taxi",
        "tram",
        "Airplane",
        "ferry/boat",
    ] {
        assert_eq!(Bucket::classify(m), Bucket::Passenger, "{m}");
    }
}

#[test]
fn test_classify_is_exact() {
    assert_eq!(Bucket::classify("unknown-thing"), Bucket::Unclassified);
    assert_eq!(Bucket::classify(" walk"), Bucket::Unclassified);
    assert_eq!(Bucket::classify("ferry"), Bucket::Unclassified);
    assert_eq!(Bucket::classify(""), Bucket::Unclassified);
    assert_eq!(Activity::new(None, 5, 1.0).bucket(), Bucket::Unclassified);
}

#[test]
fn test_aggregate_bicycle_counts_as_active() {
    let mut group = DayGroup::new(ymd(2024, 1, 1));
    group.activities.push(act("BICYCLE", 30, 5.2));
    group.activities.push(act("unknown-thing", 99, 9.9));

    let agg = aggregate(Some(&group));
    assert!(agg.has_activity);
    assert_eq!(agg.bicycle.minutes, 30);
    assert_eq!(agg.bicycle.distance, 5.2);
    assert_eq!(agg.active().minutes, 30);
    assert_eq!(agg.active().distance, 5.2);
    assert_eq!(agg.walk.minutes, 0);
    assert_eq!(agg.passive().minutes, 0);
    assert_eq!(agg.passive().distance, 0.0);
    assert_eq!(agg.unclassified, 1);
}

#[test]
fn test_aggregate_composite_sums_are_exact() {
    let mut group = DayGroup::new(ymd(2024, 1, 1));
    group.activities.push(act("walk", 12, 0.7));
    group.activities.push(act("walk", 8, 0.4));
    group.activities.push(act("electric bicycle", 25, 6.1));
    group.activities.push(act("car", 40, 23.3));
    group.activities.push(act("train", 55, 61.9));
    group.activities.push(act("bus", 10, 3.2));

    let agg = aggregate(Some(&group));
    assert_eq!(agg.walk.minutes, 20);
    assert_eq!(agg.active().minutes, agg.walk.minutes + agg.bicycle.minutes);
    assert_eq!(agg.active().distance, agg.walk.distance + agg.bicycle.distance);
    assert_eq!(agg.passive().minutes, agg.drive.minutes + agg.passenger.minutes);
    assert_eq!(
        agg.passive().distance,
        agg.drive.distance + agg.passenger.distance
    );
    assert_eq!(agg.passenger.minutes, 65);
}

#[test]
fn test_aggregate_unmatched_only_still_has_activity() {
    let mut group = DayGroup::new(ymd(2024, 1, 1));
    group.activities.push(act("rollerblades", 30, 4.0));

    let agg = aggregate(Some(&group));
    assert!(agg.has_activity);
    assert_eq!(agg.active().minutes, 0);
    assert_eq!(agg.passive().minutes, 0);
}

#[test]
fn test_aggregate_absent_day_is_zero() {
    let agg = aggregate(None);
    assert!(!agg.has_activity);
    assert_eq!(agg.active().minutes, 0);
    assert_eq!(agg.passive().distance, 0.0);
}

fn sample_ledger() -> ActivityLedger {
    let mut ledger = ActivityLedger::new();
    ledger.insert(ymd(2024, 3, 1), act("Walk", 15, 2.0));
    ledger.insert(ymd(2024, 3, 3), act("Car", 40, 10.0));
    ledger
}

#[test]
fn test_report_rows_and_activity_days() {
    let ledger = sample_ledger();
    let report = Report::build(walk(&ledger, RangeMode::Insertion).unwrap());

    assert_eq!(report.activity_days, 2);
    assert_eq!(report.days.len(), 3);

    let d1 = &report.days[0];
    assert_eq!(d1.day, 1);
    assert!(!d1.no_record);
    assert_eq!(d1.walk.minutes, 15);
    assert_eq!(d1.walk.distance, 2.0);

    let d2 = &report.days[1];
    assert!(d2.no_record);
    assert_eq!(d2.active.minutes + d2.passive.minutes, 0);

    let d3 = &report.days[2];
    assert_eq!(d3.drive.minutes, 40);
    assert_eq!(d3.passive.distance, 10.0);
}

#[test]
fn test_report_cells_column_order() {
    let ledger = sample_ledger();
    let report = Report::build(walk(&ledger, RangeMode::Insertion).unwrap());

    let cells = report.days[0].cells();
    assert_eq!(cells.len(), HEADERS.len());
    assert_eq!(cells[0], ReportCell::Integer(1));
    assert_eq!(cells[1], ReportCell::Date(ymd(2024, 3, 1)));
    assert_eq!(cells[2], ReportCell::Text(String::new()));
    assert_eq!(cells[3], ReportCell::Text("0:15".into()));
    assert_eq!(cells[4], ReportCell::Decimal(2.0));
    assert_eq!(cells[7], ReportCell::Text("0:15".into()));
    assert_eq!(cells[8], ReportCell::Decimal(2.0));
    assert_eq!(cells[13], ReportCell::Text("0:00".into()));

    let absent = report.days[1].cells();
    assert_eq!(absent[1].to_text(), "02.03.2024");
    assert_eq!(absent[2], ReportCell::Text(NO_RECORD_MARKER.into()));

    let car = report.days[2].cells();
    assert_eq!(car[9], ReportCell::Text("0:40".into()));
    assert_eq!(car[10], ReportCell::Decimal(10.0));
    assert_eq!(car[13], ReportCell::Text("0:40".into()));
    assert_eq!(car[14], ReportCell::Decimal(10.0));
}

#[test]
fn test_headers_layout() {
    assert_eq!(HEADERS[0], "Tag");
    assert_eq!(HEADERS[2], "Ohne Aufzeichnung");
    assert_eq!(HEADERS[7], "Summe_Dauer_AT");
    assert_eq!(HEADERS[14], "Summe_Distanz_ PT");
}
