//! Standard-atmosphere temperature model and density altitude.
//!
//! Uses the pilot's rule-of-thumb approximation: ISA is 15 °C at sea level
//! falling 2 °C per 1000 ft, and every degree of deviation from ISA shifts
//! density altitude by about 120 ft.

use serde::{Deserialize, Serialize};

/// ISA temperature at sea level (°C).
pub const ISA_SEA_LEVEL_TEMP_C: f64 = 15.0;
/// Standard temperature lapse (°C per 1000 ft).
pub const LAPSE_RATE_C_PER_1000FT: f64 = 2.0;
/// Density-altitude change per degree of ISA deviation (ft/°C).
pub const DENSITY_ALT_FT_PER_DEG_C: f64 = 120.0;

/// ISA temperature (°C) at a pressure altitude.
pub fn isa_temperature_c(pressure_altitude_ft: f64) -> f64 {
    ISA_SEA_LEVEL_TEMP_C - LAPSE_RATE_C_PER_1000FT * (pressure_altitude_ft / 1000.0)
}

/// Deviation of the outside air temperature from ISA (°C).
pub fn isa_deviation_c(pressure_altitude_ft: f64, temperature_c: f64) -> f64 {
    temperature_c - isa_temperature_c(pressure_altitude_ft)
}

/// Density altitude (ft). Unbounded; may be negative on cold days.
pub fn density_altitude_ft(pressure_altitude_ft: f64, temperature_c: f64) -> f64 {
    pressure_altitude_ft
        + DENSITY_ALT_FT_PER_DEG_C * isa_deviation_c(pressure_altitude_ft, temperature_c)
}

/// Temperature at `to_altitude_ft` assuming the standard lapse from a known
/// temperature at `from_altitude_ft`.
pub fn lapse_temperature_c(from_altitude_ft: f64, temperature_c: f64, to_altitude_ft: f64) -> f64 {
    temperature_c - LAPSE_RATE_C_PER_1000FT * ((to_altitude_ft - from_altitude_ft) / 1000.0)
}

/// Atmospheric conditions at a pressure altitude, unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmosphericState {
    pub pressure_altitude_ft: f64,
    pub temperature_c: f64,
    pub isa_temp_c: f64,
    pub isa_deviation_c: f64,
    pub density_altitude_ft: f64,
}

impl AtmosphericState {
    pub fn at(pressure_altitude_ft: f64, temperature_c: f64) -> Self {
        Self {
            pressure_altitude_ft,
            temperature_c,
            isa_temp_c: isa_temperature_c(pressure_altitude_ft),
            isa_deviation_c: isa_deviation_c(pressure_altitude_ft, temperature_c),
            density_altitude_ft: density_altitude_ft(pressure_altitude_ft, temperature_c),
        }
    }
}
