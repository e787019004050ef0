use crate::core::builder::build;
use crate::core::session::Session;
use crate::core::validate::validate_ranges;
use crate::errors::AppResult;
use crate::models::trip::{TripInputs, TripRecord};
use chrono::NaiveDateTime;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Range-check the raw inputs, build the record at `at`, append it.
    pub fn apply(
        session: &mut Session,
        inputs: &TripInputs,
        at: NaiveDateTime,
    ) -> AppResult<TripRecord> {
        validate_ranges(inputs)?;

        let trip = build(inputs, at)?;
        session.append(trip.clone())?;

        Ok(trip)
    }
}
