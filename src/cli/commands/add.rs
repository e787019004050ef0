use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::models::quality::QualityTier;
use crate::models::trip::{TripInputs, TripRecord};
use crate::models::vehicle::{EngineType, FuelType, VehicleType};
use crate::ui::messages::{info, success};
use crate::utils::colors::{color_for_quality, paint};
use crate::utils::date;
use crate::utils::money;

/// Record a trip.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        vehicle,
        engine,
        fuel,
        mpg,
        fuel_price,
        zip,
        miles,
        stops,
        shopping,
        items,
        shopping_minutes,
        minutes,
        gross,
        tips,
        quality,
        at,
    } = cmd
    {
        //
        // 1. Vehicle (defaults from config)
        //
        let vehicle_code = vehicle.as_deref().unwrap_or(&cfg.default_vehicle);
        let vehicle_type = VehicleType::from_code(vehicle_code).ok_or_else(|| {
            AppError::InvalidInput(format!(
                "Invalid vehicle '{vehicle_code}'. Use one of: sedan, suv, pickup, van"
            ))
        })?;

        let engine_code = engine.as_deref().unwrap_or(&cfg.default_engine);
        let engine_type = EngineType::from_code(engine_code).ok_or_else(|| {
            AppError::InvalidInput(format!(
                "Invalid engine '{engine_code}'. Use one of: 4-cylinder, 6-cylinder, 8-cylinder"
            ))
        })?;

        let fuel_code = fuel.as_deref().unwrap_or(&cfg.default_fuel);
        let fuel_type = FuelType::from_code(fuel_code).ok_or_else(|| {
            AppError::InvalidInput(format!(
                "Invalid fuel '{fuel_code}'. Use one of: gas, hybrid, electric"
            ))
        })?;

        //
        // 2. Quality override (optional)
        //
        let quality_override = match quality {
            Some(code) => Some(QualityTier::from_code(code).ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "Invalid quality '{code}'. Use one of: trash, bad, fair, good, great"
                ))
            })?),
            None => None,
        };

        //
        // 3. Timestamp (default = now)
        //
        let timestamp = match at {
            Some(s) => date::parse_timestamp(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::now(),
        };

        let inputs = TripInputs {
            vehicle_type,
            engine_type,
            fuel_type,
            mpg: *mpg,
            fuel_price: fuel_price.unwrap_or(cfg.default_fuel_price),
            zip_code: zip.clone(),
            miles_driven: *miles,
            stops: *stops,
            shopping_included: *shopping,
            shopping_items: *items,
            shopping_minutes: *shopping_minutes,
            trip_minutes: *minutes,
            gross_pay: *gross,
            tips: *tips,
            quality_override,
        };

        //
        // 4. Build and append
        //
        let mut session = Session::open(&cfg.database)?;
        let trip = AddLogic::apply(&mut session, &inputs, timestamp)?;

        print_trip_added(&trip, cfg);
    }

    Ok(())
}

fn print_trip_added(trip: &TripRecord, cfg: &Config) {
    let quality = trip.quality();
    let shown = paint(
        &format!("{} {}", quality.icon(), quality),
        color_for_quality(quality),
    );

    success(format!(
        "Trip added! Quality: {} | Net: {}",
        shown,
        money(trip.net_pay(), &cfg.currency)
    ));

    info(format!(
        "Earnings/hour: {} | Fuel cost: {} ({:.0} MPG)",
        money(trip.earnings_per_hour(), &cfg.currency),
        money(trip.fuel_cost(), &cfg.currency),
        trip.mpg()
    ));

    if trip.quality_overridden() {
        info(format!(
            "Auto-suggested quality was {} {}",
            trip.suggested_quality().icon(),
            trip.suggested_quality()
        ));
    }
}
