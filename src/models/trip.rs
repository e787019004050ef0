use super::quality::QualityTier;
use super::vehicle::{EngineType, FuelType, VehicleType};
use chrono::NaiveDateTime;

/// Raw form values for one trip, as collected from the user.
///
/// `mpg: None` means "use the default for vehicle/engine".
/// `quality_override: None` means "accept the suggested tier".
#[derive(Debug, Clone, PartialEq)]
pub struct TripInputs {
    pub vehicle_type: VehicleType,
    pub engine_type: EngineType,
    pub fuel_type: FuelType,
    pub mpg: Option<f64>,
    pub fuel_price: f64,
    pub zip_code: Option<String>,
    pub miles_driven: f64,
    pub stops: u32,
    pub shopping_included: bool,
    pub shopping_items: u32,
    pub shopping_minutes: u32,
    pub trip_minutes: u32,
    pub gross_pay: f64,
    pub tips: f64,
    pub quality_override: Option<QualityTier>,
}

impl Default for TripInputs {
    fn default() -> Self {
        Self {
            vehicle_type: VehicleType::Sedan,
            engine_type: EngineType::FourCylinder,
            fuel_type: FuelType::Gas,
            mpg: None,
            fuel_price: 3.50,
            zip_code: None,
            miles_driven: 0.0,
            stops: 1,
            shopping_included: false,
            shopping_items: 0,
            shopping_minutes: 0,
            trip_minutes: 30,
            gross_pay: 0.0,
            tips: 0.0,
            quality_override: None,
        }
    }
}

/// One completed trip with its recorded inputs and derived economics.
///
/// Only `core::builder` constructs records, so the derived fields always
/// match the inputs they were computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub(crate) timestamp: NaiveDateTime,
    pub(crate) vehicle_type: VehicleType,
    pub(crate) engine_type: EngineType,
    pub(crate) fuel_type: FuelType,
    pub(crate) mpg: f64,
    pub(crate) fuel_price: f64,
    pub(crate) zip_code: Option<String>,
    pub(crate) miles_driven: f64,
    pub(crate) stops: u32,
    pub(crate) shopping_included: bool,
    pub(crate) shopping_items: u32,
    pub(crate) shopping_minutes: u32,
    pub(crate) trip_minutes: u32,
    pub(crate) gross_pay: f64,
    pub(crate) tips: f64,

    // derived
    pub(crate) total_gross: f64,
    pub(crate) fuel_cost: f64,
    pub(crate) net_pay: f64,
    pub(crate) earnings_per_hour: f64,
    pub(crate) suggested_quality: QualityTier,
    pub(crate) quality_override: Option<QualityTier>,
}

impl TripRecord {
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }
    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }
    pub fn engine_type(&self) -> EngineType {
        self.engine_type
    }
    pub fn fuel_type(&self) -> FuelType {
        self.fuel_type
    }
    pub fn mpg(&self) -> f64 {
        self.mpg
    }
    pub fn fuel_price(&self) -> f64 {
        self.fuel_price
    }
    pub fn zip_code(&self) -> Option<&str> {
        self.zip_code.as_deref()
    }
    pub fn miles_driven(&self) -> f64 {
        self.miles_driven
    }
    pub fn stops(&self) -> u32 {
        self.stops
    }
    pub fn shopping_included(&self) -> bool {
        self.shopping_included
    }
    pub fn shopping_items(&self) -> u32 {
        self.shopping_items
    }
    pub fn shopping_minutes(&self) -> u32 {
        self.shopping_minutes
    }
    pub fn trip_minutes(&self) -> u32 {
        self.trip_minutes
    }
    pub fn gross_pay(&self) -> f64 {
        self.gross_pay
    }
    pub fn tips(&self) -> f64 {
        self.tips
    }
    pub fn total_gross(&self) -> f64 {
        self.total_gross
    }
    pub fn fuel_cost(&self) -> f64 {
        self.fuel_cost
    }
    pub fn net_pay(&self) -> f64 {
        self.net_pay
    }
    pub fn earnings_per_hour(&self) -> f64 {
        self.earnings_per_hour
    }

    /// Tier computed from earnings per hour, always available.
    pub fn suggested_quality(&self) -> QualityTier {
        self.suggested_quality
    }

    /// Tier chosen by the user, if it was overridden at creation time.
    pub fn quality_override(&self) -> Option<QualityTier> {
        self.quality_override
    }

    /// Tier shown for the trip: the override when present, else the suggestion.
    pub fn quality(&self) -> QualityTier {
        self.quality_override.unwrap_or(self.suggested_quality)
    }

    pub fn quality_overridden(&self) -> bool {
        self.quality_override
            .is_some_and(|q| q != self.suggested_quality)
    }

    pub fn date_str(&self) -> String {
        self.timestamp.format("%Y-%m-%d").to_string()
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
