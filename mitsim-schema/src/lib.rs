//! MITSIM Time-Series Schema
//!
//! Defines the per-timestep record and time-series types shared by the
//! simulation engine and the export path.

mod series;

pub use series::{CsvError, TimeSeries, TimestepRecord, CSV_HEADER};
