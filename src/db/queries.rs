use crate::core::builder;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::quality::QualityTier;
use crate::models::trip::{TripInputs, TripRecord};
use crate::models::trip_log::TripLog;
use crate::models::vehicle::{EngineType, FuelType, VehicleType};
use chrono::{Local, NaiveDate, NaiveDateTime};
use rusqlite::{Connection, Result, Row, params};

const TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SELECT_TRIPS: &str = "SELECT id, timestamp, vehicle_type, engine_type, fuel_type, mpg,
        fuel_price, zip_code, miles_driven, stops, shopping, shopping_items,
        shopping_minutes, trip_minutes, gross_pay, tips, quality_override
   FROM trips";

/// Append one trip. Only recorded inputs are stored; derived fields are
/// recomputed from them on load.
pub fn insert_trip(conn: &Connection, trip: &TripRecord) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO trips (timestamp, vehicle_type, engine_type, fuel_type, mpg, fuel_price,
                            zip_code, miles_driven, stops, shopping, shopping_items,
                            shopping_minutes, trip_minutes, gross_pay, tips,
                            quality_override, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)",
        params![
            trip.timestamp().format(TS_FORMAT).to_string(),
            trip.vehicle_type().to_db_str(),
            trip.engine_type().to_db_str(),
            trip.fuel_type().to_db_str(),
            trip.mpg(),
            trip.fuel_price(),
            trip.zip_code(),
            trip.miles_driven(),
            trip.stops(),
            trip.shopping_included(),
            trip.shopping_items(),
            trip.shopping_minutes(),
            trip.trip_minutes(),
            trip.gross_pay(),
            trip.tips(),
            trip.quality_override().map(|q| q.to_db_str()),
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Load the whole log in insertion order.
pub fn load_trips(pool: &mut DbPool) -> AppResult<TripLog> {
    let mut stmt = pool
        .conn
        .prepare(&format!("{SELECT_TRIPS} ORDER BY id ASC"))?;

    let rows = stmt.query_map([], map_row)?;

    let mut log = TripLog::new();
    for r in rows {
        log.append(r?);
    }
    Ok(log)
}

/// Load trips whose date falls within `[start, end]`, in insertion order.
pub fn load_trips_between(
    pool: &mut DbPool,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<TripLog> {
    let from = format!("{} 00:00:00", start.format("%Y-%m-%d"));
    let to = format!("{} 23:59:59", end.format("%Y-%m-%d"));

    let mut stmt = pool.conn.prepare(&format!(
        "{SELECT_TRIPS} WHERE timestamp BETWEEN ?1 AND ?2 ORDER BY id ASC"
    ))?;

    let rows = stmt.query_map(params![from, to], map_row)?;

    let mut log = TripLog::new();
    for r in rows {
        log.append(r?);
    }
    Ok(log)
}

/// Either the whole log or the slice selected by `bounds`.
pub fn load_trips_in(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<TripLog> {
    match bounds {
        Some((start, end)) => load_trips_between(pool, start, end),
        None => load_trips(pool),
    }
}

/// Remove every trip; returns how many rows were deleted.
pub fn clear_trips(conn: &Connection) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM trips", [])?;
    Ok(n)
}

pub fn count_trips(conn: &Connection) -> AppResult<i64> {
    let n = conn.query_row("SELECT COUNT(*) FROM trips", [], |row| row.get(0))?;
    Ok(n)
}

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

/// Mapping DB → TripRecord, re-running the builder on the stored inputs.
pub fn map_row(row: &Row) -> Result<TripRecord> {
    let ts_str: String = row.get("timestamp")?;
    let timestamp = NaiveDateTime::parse_from_str(&ts_str, TS_FORMAT)
        .map_err(|_| conversion_error(1, AppError::InvalidDate(ts_str.clone())))?;

    let vehicle_str: String = row.get("vehicle_type")?;
    let vehicle_type = VehicleType::from_db_str(&vehicle_str).ok_or_else(|| {
        conversion_error(
            2,
            AppError::InvalidInput(format!("Invalid vehicle type: {vehicle_str}")),
        )
    })?;

    let engine_str: String = row.get("engine_type")?;
    let engine_type = EngineType::from_db_str(&engine_str).ok_or_else(|| {
        conversion_error(
            3,
            AppError::InvalidInput(format!("Invalid engine type: {engine_str}")),
        )
    })?;

    let fuel_str: String = row.get("fuel_type")?;
    let fuel_type = FuelType::from_db_str(&fuel_str).ok_or_else(|| {
        conversion_error(
            4,
            AppError::InvalidInput(format!("Invalid fuel type: {fuel_str}")),
        )
    })?;

    let quality_override = match row.get::<_, Option<String>>("quality_override")? {
        Some(q) => Some(QualityTier::from_db_str(&q).ok_or_else(|| {
            conversion_error(16, AppError::InvalidInput(format!("Invalid quality: {q}")))
        })?),
        None => None,
    };

    let inputs = TripInputs {
        vehicle_type,
        engine_type,
        fuel_type,
        mpg: Some(row.get("mpg")?),
        fuel_price: row.get("fuel_price")?,
        zip_code: row.get("zip_code")?,
        miles_driven: row.get("miles_driven")?,
        stops: row.get("stops")?,
        shopping_included: row.get("shopping")?,
        shopping_items: row.get("shopping_items")?,
        shopping_minutes: row.get("shopping_minutes")?,
        trip_minutes: row.get("trip_minutes")?,
        gross_pay: row.get("gross_pay")?,
        tips: row.get("tips")?,
        quality_override,
    };

    builder::build(&inputs, timestamp).map_err(|e| conversion_error(0, e))
}
