//! Climb segments between two pressure altitudes.

use crate::atmosphere::lapse_temperature_c;
use crate::models::{round_to, ClimbSegment, ClimbTime};
use crate::performance::ClimbPerformance;
use std::cmp::Ordering;
use tracing::debug;

impl ClimbPerformance {
    /// Climb performance from `start_altitude_ft` to `end_altitude_ft`.
    ///
    /// The temperature at the end of the segment is derived from
    /// `start_temperature_c` with the standard lapse rate. Returns `None` if
    /// the altitudes are not strictly increasing or either end is off the grid;
    /// [`ClimbPerformance::diagnose_segment`] explains which.
    #[must_use]
    pub fn climb_segment(
        &self,
        start_altitude_ft: f64,
        end_altitude_ft: f64,
        weight_lbs: f64,
        start_temperature_c: f64,
    ) -> Option<ClimbSegment> {
        if start_altitude_ft.partial_cmp(&end_altitude_ft) != Some(Ordering::Less) {
            debug!(start_altitude_ft, end_altitude_ft, "segment does not climb");
            return None;
        }

        let end_temperature_c =
            lapse_temperature_c(start_altitude_ft, start_temperature_c, end_altitude_ft);

        let start = self.performance_with_temperature(
            start_altitude_ft,
            weight_lbs,
            start_temperature_c,
        )?;
        let end =
            self.performance_with_temperature(end_altitude_ft, weight_lbs, end_temperature_c)?;

        let altitude_gain_ft = end_altitude_ft - start_altitude_ft;
        let avg_roc_fpm = (start.roc_fpm + end.roc_fpm) / 2.0;
        let climb_time = if avg_roc_fpm > 0.0 {
            ClimbTime::Minutes(round_to(altitude_gain_ft / avg_roc_fpm, 1))
        } else {
            ClimbTime::Unreachable
        };

        Some(ClimbSegment {
            start_altitude_ft,
            end_altitude_ft,
            altitude_gain_ft,
            avg_roc_fpm: round_to(avg_roc_fpm, 1),
            segment_fuel_gal: round_to(end.fuel_gal - start.fuel_gal, 2),
            climb_time,
            start_ias_mph: start.ias_mph,
            end_ias_mph: end.ias_mph,
            start_density_alt_ft: start.density_altitude_ft,
            end_density_alt_ft: end.density_altitude_ft,
            temperature_c: start_temperature_c,
        })
    }
}
