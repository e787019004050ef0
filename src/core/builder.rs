//! Trip record builder: raw inputs + creation time → immutable TripRecord.

use crate::errors::{AppError, AppResult};
use crate::models::quality::QualityTier;
use crate::models::trip::{TripInputs, TripRecord};
use crate::models::vehicle::MpgTable;
use chrono::NaiveDateTime;

/// Build a trip using the standard MPG table for default resolution.
pub fn build(inputs: &TripInputs, now: NaiveDateTime) -> AppResult<TripRecord> {
    build_with_table(inputs, now, MpgTable::standard())
}

/// Build a trip resolving the default MPG from `table`.
///
/// Ranges are the collection layer's business (see `core::validate`); here
/// only sign and finiteness are enforced.
pub fn build_with_table(
    inputs: &TripInputs,
    now: NaiveDateTime,
    table: &MpgTable,
) -> AppResult<TripRecord> {
    let mpg = match inputs.mpg {
        Some(m) => m,
        None => table.lookup(inputs.vehicle_type, inputs.engine_type)?,
    };

    non_negative("mpg", mpg)?;
    non_negative("fuel price", inputs.fuel_price)?;
    non_negative("miles driven", inputs.miles_driven)?;
    non_negative("gross pay", inputs.gross_pay)?;
    non_negative("tips", inputs.tips)?;

    if inputs.stops == 0 {
        return Err(AppError::InvalidInput(
            "stops must be at least 1".to_string(),
        ));
    }

    let (shopping_items, shopping_minutes) = if inputs.shopping_included {
        (inputs.shopping_items, inputs.shopping_minutes)
    } else {
        (0, 0)
    };

    let total_gross = inputs.gross_pay + inputs.tips;
    let fuel_cost = fuel_cost(inputs.miles_driven, mpg, inputs.fuel_price);
    let net_pay = total_gross - fuel_cost;
    let earnings_per_hour = earnings_per_hour(total_gross, inputs.trip_minutes);

    Ok(TripRecord {
        timestamp: now,
        vehicle_type: inputs.vehicle_type,
        engine_type: inputs.engine_type,
        fuel_type: inputs.fuel_type,
        mpg,
        fuel_price: inputs.fuel_price,
        zip_code: inputs
            .zip_code
            .as_ref()
            .map(|z| z.trim().to_string())
            .filter(|z| !z.is_empty()),
        miles_driven: inputs.miles_driven,
        stops: inputs.stops,
        shopping_included: inputs.shopping_included,
        shopping_items,
        shopping_minutes,
        trip_minutes: inputs.trip_minutes,
        gross_pay: inputs.gross_pay,
        tips: inputs.tips,
        total_gross,
        fuel_cost,
        net_pay,
        earnings_per_hour,
        suggested_quality: QualityTier::suggest(earnings_per_hour),
        quality_override: inputs.quality_override,
    })
}

/// Fuel spent on the trip; zero when nothing was driven or MPG is unknown (0).
pub fn fuel_cost(miles: f64, mpg: f64, fuel_price: f64) -> f64 {
    if miles > 0.0 && mpg > 0.0 {
        miles / mpg * fuel_price
    } else {
        0.0
    }
}

pub fn earnings_per_hour(total_gross: f64, trip_minutes: u32) -> f64 {
    if trip_minutes > 0 {
        total_gross / (f64::from(trip_minutes) / 60.0)
    } else {
        0.0
    }
}

fn non_negative(field: &str, value: f64) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::InvalidInput(format!(
            "{field} must be a finite number"
        )));
    }
    if value < 0.0 {
        return Err(AppError::InvalidInput(format!(
            "{field} cannot be negative (got {value})"
        )));
    }
    Ok(())
}
