//! Performance tables for an aircraft type.

use crate::error::TableError;
use crate::grid::{Axis, Table};
use crate::models::DataBounds;
use serde::{Deserialize, Serialize};

/// Tabulated climb performance over an altitude x weight grid.
///
/// Rows of every table follow `altitudes_ft`, columns follow `weights_lbs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceTables {
    /// Pressure altitude grid (ft)
    pub altitudes_ft: Axis,
    /// Gross weight grid (lbs)
    pub weights_lbs: Axis,
    /// Climb indicated airspeed (mph)
    pub ias_mph: Table,
    /// Rate of climb (ft/min)
    pub roc_fpm: Table,
    /// Fuel used from sea level to altitude (gal)
    pub fuel_gal: Table,
}

impl Default for PerformanceTables {
    fn default() -> Self {
        Self {
            altitudes_ft: Axis(vec![0.0, 5000.0, 10000.0, 15000.0]),
            weights_lbs: Axis(vec![1700.0, 2000.0, 2300.0]),
            ias_mph: Table::new(vec![
                vec![75.0, 77.0, 80.0],
                vec![73.0, 76.0, 78.0],
                vec![71.0, 74.0, 77.0],
                vec![70.0, 73.0, 76.0],
            ]),
            roc_fpm: Table::new(vec![
                vec![1085.0, 840.0, 645.0],
                vec![825.0, 610.0, 435.0],
                vec![570.0, 380.0, 230.0],
                vec![315.0, 155.0, 22.0],
            ]),
            fuel_gal: Table::new(vec![
                vec![1.0, 1.0, 1.0],
                vec![1.9, 2.2, 2.6],
                vec![2.9, 3.6, 4.8],
                vec![4.4, 6.3, 11.5],
            ]),
        }
    }
}

impl PerformanceTables {
    /// Check that every table covers every altitude/weight pair.
    pub fn validate(&self) -> Result<(), TableError> {
        self.ias_mph
            .check_shape("ias", &self.altitudes_ft, &self.weights_lbs)?;
        self.roc_fpm
            .check_shape("roc", &self.altitudes_ft, &self.weights_lbs)?;
        self.fuel_gal
            .check_shape("fuel", &self.altitudes_ft, &self.weights_lbs)?;
        Ok(())
    }

    pub fn bounds(&self) -> DataBounds {
        DataBounds {
            altitude_range_ft: self.altitudes_ft.range(),
            weight_range_lbs: self.weights_lbs.range(),
        }
    }

    /// Weights whose fuel-to-altitude column decreases somewhere with altitude.
    ///
    /// Segment fuel is a difference of fuel-to-altitude values, so such a
    /// column can yield negative segment fuel. Not enforced.
    pub fn non_monotonic_fuel_weights(&self) -> Vec<f64> {
        let rows = self.fuel_gal.rows();
        self.weights_lbs
            .values()
            .iter()
            .enumerate()
            .filter(|(col, _)| rows.windows(2).any(|pair| pair[1][*col] < pair[0][*col]))
            .map(|(_, &weight)| weight)
            .collect()
    }
}
