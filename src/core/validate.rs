//! Range checks applied by the input collection layer before a trip is built.

use crate::errors::{AppError, AppResult};
use crate::models::trip::TripInputs;

pub const MPG_RANGE: (f64, f64) = (5.0, 50.0);
pub const FUEL_PRICE_RANGE: (f64, f64) = (0.50, 10.00);
pub const STOPS_RANGE: (u32, u32) = (1, 99);
pub const TRIP_MINUTES_RANGE: (u32, u32) = (1, 999);
pub const SHOPPING_RANGE: (u32, u32) = (0, 999);

/// Reject raw form values outside the ranges the form accepts.
pub fn validate_ranges(inputs: &TripInputs) -> AppResult<()> {
    if let Some(mpg) = inputs.mpg {
        check_real("mpg", mpg, MPG_RANGE)?;
    }
    check_real("fuel price", inputs.fuel_price, FUEL_PRICE_RANGE)?;
    check_non_negative("miles driven", inputs.miles_driven)?;
    check_int("stops", inputs.stops, STOPS_RANGE)?;
    check_int("trip minutes", inputs.trip_minutes, TRIP_MINUTES_RANGE)?;

    if inputs.shopping_included {
        check_int("shopping items", inputs.shopping_items, SHOPPING_RANGE)?;
        check_int("shopping minutes", inputs.shopping_minutes, SHOPPING_RANGE)?;
    }

    check_non_negative("gross pay", inputs.gross_pay)?;
    check_non_negative("tips", inputs.tips)?;
    Ok(())
}

fn check_real(field: &str, value: f64, (min, max): (f64, f64)) -> AppResult<()> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!(
            "{field} must be between {min:.2} and {max:.2} (got {value})"
        )))
    }
}

fn check_int(field: &str, value: u32, (min, max): (u32, u32)) -> AppResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!(
            "{field} must be between {min} and {max} (got {value})"
        )))
    }
}

fn check_non_negative(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!(
            "{field} must be zero or more (got {value})"
        )))
    }
}
