use super::period::PeriodKey;
use super::trip::TripRecord;
use serde::Serialize;
use std::ops;

/// Sums of one period bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodBucket {
    pub key: PeriodKey,
    pub total_gross: f64,
    pub net_pay: f64,
    pub trip_minutes: u64,
    pub miles_driven: f64,
    pub trips: usize,
}

impl PeriodBucket {
    pub fn empty(key: PeriodKey) -> Self {
        Self {
            key,
            total_gross: 0.0,
            net_pay: 0.0,
            trip_minutes: 0,
            miles_driven: 0.0,
            trips: 0,
        }
    }

    pub fn label(&self) -> String {
        self.key.to_string()
    }
}

impl ops::AddAssign<&TripRecord> for PeriodBucket {
    fn add_assign(&mut self, trip: &TripRecord) {
        self.total_gross += trip.total_gross();
        self.net_pay += trip.net_pay();
        self.trip_minutes += u64::from(trip.trip_minutes());
        self.miles_driven += trip.miles_driven();
        self.trips += 1;
    }
}
