use crate::models::period::{Period, PeriodKey};
use crate::models::summary::PeriodBucket;
use crate::models::trip_log::TripLog;
use std::collections::BTreeMap;

/// Bucket the log by `period`, in ascending key order.
///
/// Every record lands in exactly one bucket; an empty log yields no buckets.
pub fn aggregate(log: &TripLog, period: Period) -> Vec<PeriodBucket> {
    let mut buckets: BTreeMap<PeriodKey, PeriodBucket> = BTreeMap::new();

    for trip in log {
        let key = period.key_for(trip.timestamp());
        *buckets
            .entry(key)
            .or_insert_with(|| PeriodBucket::empty(key)) += trip;
    }

    buckets.into_values().collect()
}

/// (sum of total gross, sum of net pay) over the whole log.
pub fn totals(log: &TripLog) -> (f64, f64) {
    log.iter().fold((0.0, 0.0), |(gross, net), trip| {
        (gross + trip.total_gross(), net + trip.net_pay())
    })
}
