//! Bilinear interpolation over rectangular lookup tables.
//!
//! A table is defined over the Cartesian product of two axes. Queries inside
//! the grid are blended from the four enclosing grid values; queries outside
//! it fail with [`GridError::OutOfBounds`]. Nothing is extrapolated.

use crate::error::{GridError, TableError};
use serde::{Deserialize, Serialize};

/// Ordered grid coordinates along one dimension of a table.
///
/// Always non-empty, finite and strictly increasing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Axis(pub(crate) Vec<f64>);

impl Axis {
    pub fn new(values: Vec<f64>) -> Result<Self, TableError> {
        if values.is_empty() {
            return Err(TableError::EmptyAxis);
        }
        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(TableError::NonFiniteAxis { index, value });
            }
            if index > 0 && values[index - 1] >= value {
                return Err(TableError::UnorderedAxis {
                    index,
                    previous: values[index - 1],
                    value,
                });
            }
        }
        Ok(Self(values))
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn min(&self) -> f64 {
        self.0[0]
    }

    pub fn max(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    /// Inclusive `(min, max)` of the axis.
    pub fn range(&self) -> (f64, f64) {
        (self.min(), self.max())
    }

    /// Inclusive bounds check. NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        self.min() <= value && value <= self.max()
    }

    /// Indices of the tightest bracketing coordinates `(i0, i1)`.
    ///
    /// `i0` is the largest coordinate `<= value`, `i1` the smallest `>= value`.
    /// Both are equal when `value` sits exactly on a grid coordinate.
    /// Returns `None` when `value` is outside the axis.
    pub fn bracket(&self, value: f64) -> Option<(usize, usize)> {
        if !self.contains(value) {
            return None;
        }
        let upper = self.0.partition_point(|&coord| coord < value);
        if self.0[upper] == value {
            Some((upper, upper))
        } else {
            Some((upper - 1, upper))
        }
    }
}

impl TryFrom<Vec<f64>> for Axis {
    type Error = TableError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<Axis> for Vec<f64> {
    fn from(axis: Axis) -> Self {
        axis.0
    }
}

/// Scalar values over the product of two axes, one row per x coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    rows: Vec<Vec<f64>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Value at `(x_index, y_index)`.
    ///
    /// # Panics
    /// If the indices fall outside the table. Shapes are checked once when a
    /// table set is validated, not on every lookup.
    pub fn value(&self, x_index: usize, y_index: usize) -> f64 {
        self.rows[x_index][y_index]
    }

    /// Check that the table covers every coordinate pair of the two axes.
    pub fn check_shape(
        &self,
        name: &'static str,
        x_axis: &Axis,
        y_axis: &Axis,
    ) -> Result<(), TableError> {
        let mismatch = |found_rows: usize, found_cols: usize| TableError::ShapeMismatch {
            table: name,
            expected_rows: x_axis.len(),
            expected_cols: y_axis.len(),
            found_rows,
            found_cols,
        };

        if self.rows.len() != x_axis.len() {
            let cols = self.rows.first().map(Vec::len).unwrap_or(0);
            return Err(mismatch(self.rows.len(), cols));
        }
        for (row, values) in self.rows.iter().enumerate() {
            if values.len() != y_axis.len() {
                return Err(mismatch(self.rows.len(), values.len()));
            }
            if let Some(col) = values.iter().position(|v| !v.is_finite()) {
                return Err(TableError::NonFiniteValue {
                    table: name,
                    row,
                    col,
                });
            }
        }
        Ok(())
    }
}

/// Bilinearly interpolate `table` at `(x, y)`.
///
/// Bounds are inclusive. A query sitting exactly on a grid point returns the
/// tabulated value untouched. The result is not rounded.
pub fn bilinear(
    x: f64,
    y: f64,
    x_axis: &Axis,
    y_axis: &Axis,
    table: &Table,
) -> Result<f64, GridError> {
    let out_of_bounds = || GridError::OutOfBounds {
        x,
        y,
        x_range: x_axis.range(),
        y_range: y_axis.range(),
    };
    let (ix0, ix1) = x_axis.bracket(x).ok_or_else(out_of_bounds)?;
    let (iy0, iy1) = y_axis.bracket(y).ok_or_else(out_of_bounds)?;

    if ix0 == ix1 && iy0 == iy1 {
        return Ok(table.value(ix0, iy0));
    }

    let tx = offset(x, x_axis.values()[ix0], x_axis.values()[ix1]);
    let ty = offset(y, y_axis.values()[iy0], y_axis.values()[iy1]);

    let v00 = table.value(ix0, iy0);
    let v10 = table.value(ix1, iy0);
    let v01 = table.value(ix0, iy1);
    let v11 = table.value(ix1, iy1);

    Ok((1.0 - tx) * (1.0 - ty) * v00
        + tx * (1.0 - ty) * v10
        + (1.0 - tx) * ty * v01
        + tx * ty * v11)
}

/// Normalized position of `value` between two bracketing coordinates.
/// Zero when the bracket has collapsed onto a single coordinate.
fn offset(value: f64, lo: f64, hi: f64) -> f64 {
    if hi == lo {
        0.0
    } else {
        (value - lo) / (hi - lo)
    }
}
