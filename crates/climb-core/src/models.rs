//! Value types produced by the performance engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Uncorrected performance read straight from the tables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StandardPerformance {
    /// Indicated airspeed (mph), 1 decimal
    pub ias_mph: f64,
    /// Rate of climb (ft/min), 1 decimal
    pub roc_fpm: f64,
    /// Fuel to reach altitude (gal), 2 decimals
    pub fuel_gal: f64,
}

/// Temperature-corrected performance at a pressure altitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSample {
    pub ias_mph: f64,
    pub roc_fpm: f64,
    pub fuel_gal: f64,
    pub pressure_altitude_ft: f64,
    /// Rounded to the nearest foot
    pub density_altitude_ft: f64,
    pub temperature_c: f64,
    pub isa_temp_c: f64,
    pub isa_deviation_c: f64,
    /// Corrected ROC over the ROC at pressure altitude (0 if the latter is not positive)
    pub performance_factor: f64,
    /// Uncorrected minus corrected ROC (ft/min)
    pub roc_loss_fpm: f64,
}

/// Time to fly a climb segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClimbTime {
    /// Minutes, 1 decimal
    Minutes(f64),
    /// Average rate of climb is zero or negative; the end altitude is never reached.
    Unreachable,
}

impl ClimbTime {
    pub fn minutes(&self) -> Option<f64> {
        match self {
            ClimbTime::Minutes(minutes) => Some(*minutes),
            ClimbTime::Unreachable => None,
        }
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, ClimbTime::Unreachable)
    }
}

impl fmt::Display for ClimbTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClimbTime::Minutes(minutes) => write!(f, "{minutes} min"),
            ClimbTime::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Climb performance between two pressure altitudes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimbSegment {
    pub start_altitude_ft: f64,
    pub end_altitude_ft: f64,
    pub altitude_gain_ft: f64,
    pub avg_roc_fpm: f64,
    pub segment_fuel_gal: f64,
    pub climb_time: ClimbTime,
    pub start_ias_mph: f64,
    pub end_ias_mph: f64,
    pub start_density_alt_ft: f64,
    pub end_density_alt_ft: f64,
    /// Temperature at the start of the segment
    pub temperature_c: f64,
}

/// Inclusive extremes of the tabulated grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataBounds {
    pub altitude_range_ft: (f64, f64),
    pub weight_range_lbs: (f64, f64),
}

impl DataBounds {
    pub fn contains_altitude(&self, altitude_ft: f64) -> bool {
        self.altitude_range_ft.0 <= altitude_ft && altitude_ft <= self.altitude_range_ft.1
    }

    pub fn contains_weight(&self, weight_lbs: f64) -> bool {
        self.weight_range_lbs.0 <= weight_lbs && weight_lbs <= self.weight_range_lbs.1
    }
}

/// Round to `places` decimals.
///
/// Rounds the exact binary value, ties to even: 77.35 is stored just below
/// the tie and gives 77.3, while 75.25 is exact and gives 75.2.
pub(crate) fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}
