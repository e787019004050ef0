// src/export/model.rs

use crate::models::trip::TripRecord;
use serde::Serialize;

/// Flat, one-row-per-trip view used by every export format.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TripExport {
    pub timestamp: String,
    pub vehicle_type: String,
    pub engine_type: String,
    pub fuel_type: String,
    pub mpg: f64,
    pub fuel_price: f64,
    pub zip_code: String,
    pub miles_driven: f64,
    pub stops: u32,
    pub shopping: bool,
    pub shopping_items: u32,
    pub shopping_minutes: u32,
    pub trip_minutes: u32,
    pub gross_pay: f64,
    pub tips: f64,
    pub total_gross: f64,
    pub fuel_cost: f64,
    pub net_pay: f64,
    pub earnings_per_hour: f64,
    pub suggested_quality: String,
    pub quality: String,
}

impl From<&TripRecord> for TripExport {
    fn from(t: &TripRecord) -> Self {
        Self {
            timestamp: t.timestamp_str(),
            vehicle_type: t.vehicle_type().to_string(),
            engine_type: t.engine_type().to_string(),
            fuel_type: t.fuel_type().to_string(),
            mpg: t.mpg(),
            fuel_price: t.fuel_price(),
            zip_code: t.zip_code().unwrap_or_default().to_string(),
            miles_driven: t.miles_driven(),
            stops: t.stops(),
            shopping: t.shopping_included(),
            shopping_items: t.shopping_items(),
            shopping_minutes: t.shopping_minutes(),
            trip_minutes: t.trip_minutes(),
            gross_pay: t.gross_pay(),
            tips: t.tips(),
            total_gross: t.total_gross(),
            fuel_cost: t.fuel_cost(),
            net_pay: t.net_pay(),
            earnings_per_hour: t.earnings_per_hour(),
            suggested_quality: t.suggested_quality().to_string(),
            quality: t.quality().to_string(),
        }
    }
}

/// One typed spreadsheet cell.
pub(crate) enum Cell {
    Text(String),
    Number(f64),
    DateTime(String),
}

/// Header for CSV / XLSX, same order as the struct fields.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "timestamp",
        "vehicle_type",
        "engine_type",
        "fuel_type",
        "mpg",
        "fuel_price",
        "zip_code",
        "miles_driven",
        "stops",
        "shopping",
        "shopping_items",
        "shopping_minutes",
        "trip_minutes",
        "gross_pay",
        "tips",
        "total_gross",
        "fuel_cost",
        "net_pay",
        "earnings_per_hour",
        "suggested_quality",
        "quality",
    ]
}

pub(crate) fn trip_to_cells(t: &TripExport) -> Vec<Cell> {
    vec![
        Cell::DateTime(t.timestamp.clone()),
        Cell::Text(t.vehicle_type.clone()),
        Cell::Text(t.engine_type.clone()),
        Cell::Text(t.fuel_type.clone()),
        Cell::Number(t.mpg),
        Cell::Number(t.fuel_price),
        Cell::Text(t.zip_code.clone()),
        Cell::Number(t.miles_driven),
        Cell::Number(f64::from(t.stops)),
        Cell::Text(if t.shopping { "yes" } else { "no" }.to_string()),
        Cell::Number(f64::from(t.shopping_items)),
        Cell::Number(f64::from(t.shopping_minutes)),
        Cell::Number(f64::from(t.trip_minutes)),
        Cell::Number(t.gross_pay),
        Cell::Number(t.tips),
        Cell::Number(t.total_gross),
        Cell::Number(t.fuel_cost),
        Cell::Number(t.net_pay),
        Cell::Number(t.earnings_per_hour),
        Cell::Text(t.suggested_quality.clone()),
        Cell::Text(t.quality.clone()),
    ]
}

impl Cell {
    /// Display width estimate for column sizing.
    pub(crate) fn display(&self) -> String {
        match self {
            Cell::Text(s) | Cell::DateTime(s) => s.clone(),
            Cell::Number(n) => format!("{n:.2}"),
        }
    }
}
