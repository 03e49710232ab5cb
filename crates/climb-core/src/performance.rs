//! Temperature-corrected performance lookups.

use crate::atmosphere::{self, AtmosphericState};
use crate::error::{GridError, TableError};
use crate::grid::{bilinear, Table};
use crate::models::{round_to, DataBounds, PerformanceSample, StandardPerformance};
use crate::tables::PerformanceTables;
use tracing::{debug, warn};

/// Climb performance engine over an immutable set of tables.
///
/// Every query is a pure function of its arguments and the tables, so one
/// engine can be shared freely across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct ClimbPerformance {
    tables: PerformanceTables,
}

impl Default for ClimbPerformance {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ClimbPerformance {
    /// Create an engine after checking the tables are complete.
    pub fn new(tables: PerformanceTables) -> Result<Self, TableError> {
        tables.validate()?;
        let weights = tables.non_monotonic_fuel_weights();
        if !weights.is_empty() {
            warn!(
                ?weights,
                "fuel-to-altitude decreases with altitude; segment fuel may go negative"
            );
        }
        Ok(Self { tables })
    }

    /// Engine over the built-in light-aircraft tables.
    pub fn builtin() -> Self {
        Self {
            tables: PerformanceTables::default(),
        }
    }

    pub fn tables(&self) -> &PerformanceTables {
        &self.tables
    }

    pub fn data_bounds(&self) -> DataBounds {
        self.tables.bounds()
    }

    /// Tabulated performance at `(altitude_ft, weight_lbs)` with no
    /// temperature correction.
    ///
    /// IAS and ROC are rounded to 1 decimal, fuel to 2.
    pub fn standard_performance(
        &self,
        altitude_ft: f64,
        weight_lbs: f64,
    ) -> Result<StandardPerformance, GridError> {
        let ias = self.lookup(&self.tables.ias_mph, altitude_ft, weight_lbs)?;
        let roc = self.lookup(&self.tables.roc_fpm, altitude_ft, weight_lbs)?;
        let fuel = self.lookup(&self.tables.fuel_gal, altitude_ft, weight_lbs)?;

        Ok(StandardPerformance {
            ias_mph: round_to(ias, 1),
            roc_fpm: round_to(roc, 1),
            fuel_gal: round_to(fuel, 2),
        })
    }

    /// Density altitude (ft), unrounded.
    pub fn density_altitude(&self, pressure_altitude_ft: f64, temperature_c: f64) -> f64 {
        atmosphere::density_altitude_ft(pressure_altitude_ft, temperature_c)
    }

    /// Performance at a pressure altitude corrected for outside air temperature.
    ///
    /// Returns `None` when the density altitude, the weight, or the pressure
    /// altitude used for the uncorrected baseline falls outside the grid.
    #[must_use]
    pub fn performance_with_temperature(
        &self,
        pressure_altitude_ft: f64,
        weight_lbs: f64,
        temperature_c: f64,
    ) -> Option<PerformanceSample> {
        let state = AtmosphericState::at(pressure_altitude_ft, temperature_c);
        let bounds = self.data_bounds();

        if !bounds.contains_altitude(state.density_altitude_ft) {
            debug!(
                pressure_altitude_ft,
                temperature_c,
                density_altitude_ft = state.density_altitude_ft,
                "density altitude outside performance data"
            );
            return None;
        }
        if !bounds.contains_weight(weight_lbs) {
            debug!(weight_lbs, "weight outside performance data");
            return None;
        }

        let corrected = self
            .standard_performance(state.density_altitude_ft, weight_lbs)
            .ok()?;
        let baseline = match self.standard_performance(pressure_altitude_ft, weight_lbs) {
            Ok(baseline) => baseline,
            Err(err) => {
                debug!(%err, "no uncorrected baseline at pressure altitude");
                return None;
            }
        };

        let performance_factor = if baseline.roc_fpm > 0.0 {
            corrected.roc_fpm / baseline.roc_fpm
        } else {
            0.0
        };

        Some(PerformanceSample {
            ias_mph: corrected.ias_mph,
            roc_fpm: corrected.roc_fpm,
            fuel_gal: corrected.fuel_gal,
            pressure_altitude_ft,
            density_altitude_ft: round_to(state.density_altitude_ft, 0),
            temperature_c,
            isa_temp_c: round_to(state.isa_temp_c, 1),
            isa_deviation_c: round_to(state.isa_deviation_c, 1),
            performance_factor: round_to(performance_factor, 3),
            roc_loss_fpm: round_to(baseline.roc_fpm - corrected.roc_fpm, 1),
        })
    }

    fn lookup(&self, table: &Table, altitude_ft: f64, weight_lbs: f64) -> Result<f64, GridError> {
        bilinear(
            altitude_ft,
            weight_lbs,
            &self.tables.altitudes_ft,
            &self.tables.weights_lbs,
            table,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ClimbPerformance {
        ClimbPerformance::builtin()
    }

    #[test]
    fn exact_grid_points_reproduce_tables() {
        let perf = engine();
        let tables = perf.tables().clone();
        for (i, &altitude) in tables.altitudes_ft.values().iter().enumerate() {
            for (j, &weight) in tables.weights_lbs.values().iter().enumerate() {
                let std = perf.standard_performance(altitude, weight).unwrap();
                assert_eq!(std.ias_mph, tables.ias_mph.value(i, j));
                assert_eq!(std.roc_fpm, tables.roc_fpm.value(i, j));
                assert_eq!(std.fuel_gal, tables.fuel_gal.value(i, j));
            }
        }
    }

    #[test]
    fn interpolated_values_fall_between_neighbours() {
        let perf = engine();
        let cases = [
            (2500.0, 1850.0, (73.0, 77.0), (800.0, 1000.0), (1.0, 2.0)),
            (7500.0, 2000.0, (74.0, 76.0), (380.0, 610.0), (2.2, 3.6)),
            (10000.0, 2150.0, (74.0, 77.0), (230.0, 380.0), (3.6, 4.8)),
        ];
        for (altitude, weight, ias, roc, fuel) in cases {
            let std = perf.standard_performance(altitude, weight).unwrap();
            assert!((ias.0..=ias.1).contains(&std.ias_mph), "{std:?}");
            assert!((roc.0..=roc.1).contains(&std.roc_fpm), "{std:?}");
            assert!((fuel.0..=fuel.1).contains(&std.fuel_gal), "{std:?}");
        }
    }

    #[test]
    fn standard_performance_rounds_results() {
        let std = engine().standard_performance(2500.0, 1850.0).unwrap();
        // 75.25 before rounding, ties to even
        assert_eq!(std.ias_mph, 75.2);
        assert_eq!(std.roc_fpm, 840.0);
        assert_eq!(std.fuel_gal, 1.52);
    }

    #[test]
    fn rounding_follows_the_interpolated_binary_value() {
        let perf = engine();
        // Interpolated IAS lands on 77.35 and 77.45, neither of which is an
        // exact tie once stored as f64.
        let below = perf.standard_performance(0.0, 2035.0).unwrap();
        let above = perf.standard_performance(0.0, 2045.0).unwrap();
        assert_eq!((below.ias_mph, above.ias_mph), (77.3, 77.5));
        assert_eq!((below.roc_fpm, above.roc_fpm), (817.2, 810.8));
    }

    #[test]
    fn out_of_grid_points_raise_out_of_bounds() {
        let perf = engine();
        for (altitude, weight) in [(-1000.0, 2000.0), (20000.0, 2000.0), (5000.0, 1500.0), (5000.0, 2500.0)] {
            let err = perf.standard_performance(altitude, weight).unwrap_err();
            assert!(matches!(err, GridError::OutOfBounds { .. }));
        }
    }

    #[test]
    fn isa_conditions_leave_performance_unchanged() {
        let perf = engine();
        for (altitude, isa_temp) in [(0.0, 15.0), (5000.0, 5.0), (10000.0, -5.0), (15000.0, -15.0)] {
            let sample = perf
                .performance_with_temperature(altitude, 2000.0, isa_temp)
                .unwrap();
            assert_eq!(sample.density_altitude_ft, altitude);
            assert_eq!(sample.isa_temp_c, isa_temp);
            assert_eq!(sample.isa_deviation_c, 0.0);
            assert_eq!(sample.performance_factor, 1.0);
            assert_eq!(sample.roc_loss_fpm, 0.0);
        }
    }

    #[test]
    fn hot_day_degrades_and_cold_day_improves_climb() {
        let perf = engine();
        let hot = perf.performance_with_temperature(5000.0, 2000.0, 25.0).unwrap();
        let cold = perf.performance_with_temperature(5000.0, 2000.0, -5.0).unwrap();

        assert_eq!(hot.density_altitude_ft, 7400.0);
        assert_eq!(cold.density_altitude_ft, 3800.0);
        assert_eq!(hot.isa_deviation_c, 20.0);
        assert_eq!(cold.isa_deviation_c, -10.0);

        assert_eq!(hot.roc_fpm, 499.6);
        assert_eq!(cold.roc_fpm, 665.2);
        assert_eq!(hot.performance_factor, 0.819);
        assert_eq!(cold.performance_factor, 1.09);
        assert_eq!(hot.roc_loss_fpm, 110.4);
        assert_eq!(cold.roc_loss_fpm, -55.2);
    }

    #[test]
    fn rising_temperature_never_improves_climb() {
        let perf = engine();
        let mut last_da = f64::NEG_INFINITY;
        let mut last_roc = f64::INFINITY;
        for temp in -10..=30 {
            let Some(sample) = perf.performance_with_temperature(5000.0, 2000.0, temp as f64) else {
                continue;
            };
            assert!(sample.density_altitude_ft > last_da);
            assert!(sample.roc_fpm <= last_roc);
            if sample.isa_deviation_c > 0.0 {
                assert!(sample.performance_factor < 1.0);
            } else if sample.isa_deviation_c < 0.0 {
                assert!(sample.performance_factor > 1.0);
            }
            last_da = sample.density_altitude_ft;
            last_roc = sample.roc_fpm;
        }
    }

    #[test]
    fn out_of_range_conditions_are_absent() {
        let perf = engine();
        for temp in [-60.0, -20.0, 0.0, 20.0, 45.0] {
            assert!(perf.performance_with_temperature(-1000.0, 2000.0, temp).is_none());
            assert!(perf.performance_with_temperature(20000.0, 2000.0, temp).is_none());
            assert!(perf.performance_with_temperature(5000.0, 1500.0, temp).is_none());
            assert!(perf.performance_with_temperature(5000.0, 2500.0, temp).is_none());
        }
    }

    #[test]
    fn cold_high_pressure_altitude_without_baseline_is_absent() {
        // Density altitude 14600 ft is on the grid, 20000 ft pressure altitude is not.
        let perf = engine();
        assert_eq!(perf.density_altitude(20000.0, -70.0), 14600.0);
        assert!(perf.performance_with_temperature(20000.0, 2000.0, -70.0).is_none());
    }

    #[test]
    fn sample_records_inputs() {
        let sample = engine()
            .performance_with_temperature(5000.0, 2000.0, 20.0)
            .unwrap();
        assert_eq!(sample.pressure_altitude_ft, 5000.0);
        assert_eq!(sample.temperature_c, 20.0);
        assert_eq!(sample.density_altitude_ft, 6800.0);
        assert!(sample.ias_mph > 0.0 && sample.roc_fpm > 0.0 && sample.fuel_gal > 0.0);
    }

    #[test]
    fn non_positive_baseline_gives_zero_factor() {
        let mut tables = PerformanceTables::default();
        tables.roc_fpm = Table::new(vec![
            vec![1085.0, 840.0, 645.0],
            vec![825.0, 610.0, 435.0],
            vec![570.0, 380.0, 230.0],
            vec![0.0, 0.0, 0.0],
        ]);
        let perf = ClimbPerformance::new(tables).unwrap();
        let sample = perf
            .performance_with_temperature(15000.0, 2000.0, -20.0)
            .unwrap();
        assert_eq!(sample.performance_factor, 0.0);
        assert!(sample.roc_fpm > 0.0);
    }

    #[test]
    fn incomplete_tables_are_rejected() {
        let mut tables = PerformanceTables::default();
        tables.ias_mph = Table::new(vec![vec![75.0, 77.0, 80.0]]);
        assert!(ClimbPerformance::new(tables).is_err());
    }
}
