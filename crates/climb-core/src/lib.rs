//! Climb performance for light aircraft from tabulated data.
//!
//! Interpolates IAS, rate of climb and fuel-to-altitude from a sparse
//! altitude x weight grid, corrected for non-standard temperature through
//! density altitude, and chains two such lookups into a climb segment.

pub mod atmosphere;
pub mod diagnostics;
pub mod error;
pub mod grid;
pub mod models;
pub mod performance;
pub mod segment;
pub mod tables;

pub use atmosphere::{density_altitude_ft, isa_deviation_c, isa_temperature_c, AtmosphericState};
pub use diagnostics::SegmentIssue;
pub use error::{GridError, TableError};
pub use grid::{bilinear, Axis, Table};
pub use models::{ClimbSegment, ClimbTime, DataBounds, PerformanceSample, StandardPerformance};
pub use performance::ClimbPerformance;
pub use tables::PerformanceTables;
