use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VehicleType {
    Sedan,
    Suv,
    Pickup,
    Van,
}

impl VehicleType {
    pub const ALL: [VehicleType; 4] = [
        VehicleType::Sedan,
        VehicleType::Suv,
        VehicleType::Pickup,
        VehicleType::Van,
    ];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            VehicleType::Sedan => "Sedan",
            VehicleType::Suv => "SUV",
            VehicleType::Pickup => "Pickup",
            VehicleType::Van => "Van",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.to_db_str() == s)
    }

    /// Helper: convert input code from CLI or config (any case)
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.to_db_str().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EngineType {
    FourCylinder,
    SixCylinder,
    EightCylinder,
}

impl EngineType {
    pub const ALL: [EngineType; 3] = [
        EngineType::FourCylinder,
        EngineType::SixCylinder,
        EngineType::EightCylinder,
    ];

    pub fn to_db_str(&self) -> &'static str {
        match self {
            EngineType::FourCylinder => "4-cylinder",
            EngineType::SixCylinder => "6-cylinder",
            EngineType::EightCylinder => "8-cylinder",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.to_db_str() == s)
    }

    /// Accepts "4-cylinder", "4cyl", "4" (and the same for 6 and 8).
    pub fn from_code(code: &str) -> Option<Self> {
        let c = code.trim().to_ascii_lowercase();
        match c.as_str() {
            "4" | "4cyl" | "4-cyl" | "4-cylinder" => Some(EngineType::FourCylinder),
            "6" | "6cyl" | "6-cyl" | "6-cylinder" => Some(EngineType::SixCylinder),
            "8" | "8cyl" | "8-cyl" | "8-cylinder" => Some(EngineType::EightCylinder),
            _ => None,
        }
    }
}

impl fmt::Display for EngineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FuelType {
    Gas,
    Hybrid,
    Electric,
}

impl FuelType {
    pub const ALL: [FuelType; 3] = [FuelType::Gas, FuelType::Hybrid, FuelType::Electric];

    pub fn to_db_str(&self) -> &'static str {
        match self {
            FuelType::Gas => "Gas",
            FuelType::Hybrid => "Hybrid",
            FuelType::Electric => "Electric",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.to_db_str() == s)
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.to_db_str().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

/// Immutable (vehicle, engine) → default MPG mapping.
#[derive(Debug, Clone, Default)]
pub struct MpgTable {
    entries: HashMap<(VehicleType, EngineType), f64>,
}

impl MpgTable {
    /// Built-in averages, constructed once per process.
    pub fn standard() -> &'static MpgTable {
        static TABLE: OnceLock<MpgTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            use EngineType::*;
            use VehicleType::*;

            MpgTable::from_entries([
                ((Sedan, FourCylinder), 28.0),
                ((Sedan, SixCylinder), 24.0),
                ((Sedan, EightCylinder), 20.0),
                ((Suv, FourCylinder), 25.0),
                ((Suv, SixCylinder), 22.0),
                ((Suv, EightCylinder), 18.0),
                ((Pickup, FourCylinder), 22.0),
                ((Pickup, SixCylinder), 20.0),
                ((Pickup, EightCylinder), 16.0),
                ((Van, FourCylinder), 24.0),
                ((Van, SixCylinder), 20.0),
                ((Van, EightCylinder), 17.0),
            ])
        })
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = ((VehicleType, EngineType), f64)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn lookup(&self, vehicle: VehicleType, engine: EngineType) -> AppResult<f64> {
        self.entries
            .get(&(vehicle, engine))
            .copied()
            .ok_or_else(|| AppError::UnknownVehicleConfig {
                vehicle: vehicle.to_string(),
                engine: engine.to_string(),
            })
    }
}
