//! Error types for grid lookups and table construction.

use thiserror::Error;

/// Failure of a raw grid lookup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// The query point lies outside the rectangular domain of the table.
    #[error(
        "point ({x}, {y}) is outside the data grid bounds \
         [{}, {}] x [{}, {}]",
        x_range.0, x_range.1, y_range.0, y_range.1
    )]
    OutOfBounds {
        x: f64,
        y: f64,
        x_range: (f64, f64),
        y_range: (f64, f64),
    },
}

/// A performance table set that cannot be used by the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("axis has no grid coordinates")]
    EmptyAxis,

    #[error("axis coordinate {value} at index {index} is not finite")]
    NonFiniteAxis { index: usize, value: f64 },

    #[error("axis is not strictly increasing at index {index} ({previous} then {value})")]
    UnorderedAxis {
        index: usize,
        previous: f64,
        value: f64,
    },

    #[error("{table} table is {found_rows}x{found_cols}, expected {expected_rows}x{expected_cols}")]
    ShapeMismatch {
        table: &'static str,
        expected_rows: usize,
        expected_cols: usize,
        found_rows: usize,
        found_cols: usize,
    },

    #[error("{table} table has a non-finite value at row {row}, column {col}")]
    NonFiniteValue {
        table: &'static str,
        row: usize,
        col: usize,
    },
}
