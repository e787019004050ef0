use crate::db::log::ttlog_lenient;
use crate::db::pool::DbPool;
use crate::db::queries::{clear_trips, insert_trip, load_trips};
use crate::errors::AppResult;
use crate::models::trip::TripRecord;
use crate::models::trip_log::TripLog;

/// One command's view of the trip log: the in-memory log plus the store it
/// was loaded from. `append` and `clear` keep both in step.
pub struct Session {
    pool: DbPool,
    log: TripLog,
}

impl Session {
    pub fn open(db_path: &str) -> AppResult<Self> {
        let mut pool = DbPool::new(db_path)?;
        let log = load_trips(&mut pool)?;
        Ok(Self { pool, log })
    }

    pub fn log(&self) -> &TripLog {
        &self.log
    }

    pub fn append(&mut self, trip: TripRecord) -> AppResult<()> {
        let id = insert_trip(&self.pool.conn, &trip)?;

        ttlog_lenient(
            &self.pool.conn,
            "add",
            &trip.timestamp_str(),
            &format!(
                "Trip #{id}: {:.1} mi, {} min, gross {:.2}, net {:.2}, quality {}",
                trip.miles_driven(),
                trip.trip_minutes(),
                trip.total_gross(),
                trip.net_pay(),
                trip.quality()
            ),
        );

        self.log.append(trip);
        Ok(())
    }

    /// Drop every trip; returns how many were removed.
    pub fn clear(&mut self) -> AppResult<usize> {
        let removed = clear_trips(&self.pool.conn)?;
        self.log.clear();

        ttlog_lenient(
            &self.pool.conn,
            "clear",
            "trips",
            &format!("Cleared {removed} trips"),
        );

        Ok(removed)
    }
}
