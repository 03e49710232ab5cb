//! Explanations for climb segments that cannot be computed.

use crate::atmosphere::{density_altitude_ft, lapse_temperature_c};
use crate::performance::ClimbPerformance;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Why [`ClimbPerformance::climb_segment`] returned no segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum SegmentIssue {
    /// Start altitude is not below the end altitude.
    InvalidOrdering {
        start_altitude_ft: f64,
        end_altitude_ft: f64,
    },
    /// Cold air pushes density altitude below the data.
    DensityAltitudeTooLow {
        start_da_ft: f64,
        end_da_ft: f64,
        min_ft: f64,
    },
    /// Hot air pushes density altitude above the data.
    DensityAltitudeTooHigh {
        start_da_ft: f64,
        end_da_ft: f64,
        max_ft: f64,
    },
    WeightOutOfRange {
        weight_lbs: f64,
        range: (f64, f64),
    },
    /// The uncorrected baseline at pressure altitude is off the grid.
    PressureAltitudeOutOfRange {
        altitude_ft: f64,
        range: (f64, f64),
    },
}

impl SegmentIssue {
    /// Suggested change to the inputs.
    pub fn hint(&self) -> &'static str {
        match self {
            SegmentIssue::InvalidOrdering { .. } => "end altitude must be above start altitude",
            SegmentIssue::DensityAltitudeTooLow { .. } => {
                "try a warmer temperature (>= 10 C) or a higher starting altitude"
            }
            SegmentIssue::DensityAltitudeTooHigh { .. } => {
                "try a cooler temperature or break the climb into segments"
            }
            SegmentIssue::WeightOutOfRange { .. } => "use a weight within the tabulated range",
            SegmentIssue::PressureAltitudeOutOfRange { .. } => {
                "keep both altitudes within the tabulated range"
            }
        }
    }
}

impl fmt::Display for SegmentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentIssue::InvalidOrdering {
                start_altitude_ft,
                end_altitude_ft,
            } => write!(
                f,
                "segment {start_altitude_ft} ft -> {end_altitude_ft} ft does not climb"
            ),
            SegmentIssue::DensityAltitudeTooLow { start_da_ft, end_da_ft, min_ft } => write!(
                f,
                "cold temperature puts density altitude below {min_ft} ft \
                 (start {start_da_ft:.0} ft, end {end_da_ft:.0} ft)"
            ),
            SegmentIssue::DensityAltitudeTooHigh { start_da_ft, end_da_ft, max_ft } => write!(
                f,
                "hot temperature puts density altitude above {max_ft} ft \
                 (start {start_da_ft:.0} ft, end {end_da_ft:.0} ft)"
            ),
            SegmentIssue::WeightOutOfRange { weight_lbs, range } => write!(
                f,
                "weight {weight_lbs} lbs is outside {} - {} lbs",
                range.0, range.1
            ),
            SegmentIssue::PressureAltitudeOutOfRange { altitude_ft, range } => write!(
                f,
                "pressure altitude {altitude_ft} ft is outside {} - {} ft",
                range.0, range.1
            ),
        }
    }
}

impl ClimbPerformance {
    /// Explain why a segment with these inputs is absent.
    ///
    /// Returns `None` when [`ClimbPerformance::climb_segment`] would succeed.
    pub fn diagnose_segment(
        &self,
        start_altitude_ft: f64,
        end_altitude_ft: f64,
        weight_lbs: f64,
        start_temperature_c: f64,
    ) -> Option<SegmentIssue> {
        if start_altitude_ft.partial_cmp(&end_altitude_ft) != Some(Ordering::Less) {
            return Some(SegmentIssue::InvalidOrdering {
                start_altitude_ft,
                end_altitude_ft,
            });
        }

        let bounds = self.data_bounds();
        let (min_ft, max_ft) = bounds.altitude_range_ft;
        let end_temperature_c =
            lapse_temperature_c(start_altitude_ft, start_temperature_c, end_altitude_ft);
        let start_da_ft = density_altitude_ft(start_altitude_ft, start_temperature_c);
        let end_da_ft = density_altitude_ft(end_altitude_ft, end_temperature_c);

        if start_da_ft < min_ft || end_da_ft < min_ft {
            return Some(SegmentIssue::DensityAltitudeTooLow {
                start_da_ft,
                end_da_ft,
                min_ft,
            });
        }
        if start_da_ft > max_ft || end_da_ft > max_ft {
            return Some(SegmentIssue::DensityAltitudeTooHigh {
                start_da_ft,
                end_da_ft,
                max_ft,
            });
        }
        if !bounds.contains_weight(weight_lbs) {
            return Some(SegmentIssue::WeightOutOfRange {
                weight_lbs,
                range: bounds.weight_range_lbs,
            });
        }
        for altitude_ft in [start_altitude_ft, end_altitude_ft] {
            if !bounds.contains_altitude(altitude_ft) {
                return Some(SegmentIssue::PressureAltitudeOutOfRange {
                    altitude_ft,
                    range: bounds.altitude_range_ft,
                });
            }
        }
        None
    }
}
