mod common;
use common::{approx, trip};
use sparktracker::core::aggregate::{aggregate, totals};
use sparktracker::models::period::{Period, PeriodKey};
use sparktracker::models::trip_log::TripLog;

fn sample_log() -> TripLog {
    [
        trip("2025-09-02 09:00", 0.0, 10.0, 0.0, 30),
        trip("2024-12-30 12:00", 0.0, 5.0, 0.0, 30),
        trip("2025-09-01 10:00", 100.0, 50.0, 10.0, 60),
        trip("2025-09-01 18:00", 0.0, 30.0, 10.0, 45),
        trip("2025-10-03 12:00", 0.0, 8.0, 0.0, 40),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_empty_log() {
    let log = TripLog::new();
    for period in [Period::Daily, Period::Weekly, Period::Monthly, Period::Yearly] {
        assert!(aggregate(&log, period).is_empty());
    }
    assert_eq!(totals(&log), (0.0, 0.0));
}

#[test]
fn test_same_day_trips_merge() {
    let log: TripLog = [
        trip("2025-09-01 10:00", 100.0, 50.0, 10.0, 60),
        trip("2025-09-01 18:00", 0.0, 30.0, 10.0, 45),
    ]
    .into_iter()
    .collect();

    let buckets = aggregate(&log, Period::Daily);
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].label(), "2025-09-01");
    assert!(approx(buckets[0].total_gross, 100.0));
    assert!(approx(buckets[0].net_pay, 87.5));
    assert_eq!(buckets[0].trips, 2);
    assert_eq!(buckets[0].trip_minutes, 105);
}

#[test]
fn test_buckets_partition_the_log() {
    let log = sample_log();
    let (gross, net) = totals(&log);

    for period in [Period::Daily, Period::Weekly, Period::Monthly, Period::Yearly] {
        let buckets = aggregate(&log, period);
        let trips: usize = buckets.iter().map(|b| b.trips).sum();
        let bucket_gross: f64 = buckets.iter().map(|b| b.total_gross).sum();
        let bucket_net: f64 = buckets.iter().map(|b| b.net_pay).sum();

        assert_eq!(trips, log.len(), "{period}");
        assert!((bucket_gross - gross).abs() < 1e-6, "{period}");
        assert!((bucket_net - net).abs() < 1e-6, "{period}");
    }
}

#[test]
fn test_daily_buckets_are_chronological() {
    let labels: Vec<String> = aggregate(&sample_log(), Period::Daily)
        .iter()
        .map(|b| b.label())
        .collect();

    assert_eq!(
        labels,
        ["2024-12-30", "2025-09-01", "2025-09-02", "2025-10-03"]
    );
}

#[test]
fn test_weekly_uses_iso_weeks() {
    let buckets = aggregate(&sample_log(), Period::Weekly);
    let labels: Vec<String> = buckets.iter().map(|b| b.label()).collect();

    // 2024-12-30 is a Monday in ISO week 1 of 2025.
    assert_eq!(labels, ["2025-W01", "2025-W36", "2025-W40"]);
    assert_eq!(buckets[0].key, PeriodKey::Week { year: 2025, week: 1 });
    assert_eq!(buckets[1].trips, 3);
}

#[test]
fn test_monthly_and_yearly() {
    let log = sample_log();

    let monthly: Vec<String> = aggregate(&log, Period::Monthly)
        .iter()
        .map(|b| b.label())
        .collect();
    assert_eq!(monthly, ["2024-12", "2025-09", "2025-10"]);

    let yearly = aggregate(&log, Period::Yearly);
    assert_eq!(yearly.len(), 2);
    assert_eq!(yearly[0].label(), "2024");
    assert_eq!(yearly[1].label(), "2025");
    assert_eq!(yearly[1].trips, 4);
}

#[test]
fn test_totals() {
    let (gross, net) = totals(&sample_log());
    assert!(approx(gross, 123.0));
    assert!(approx(net, 110.5));
}
