//! MITSIM Simulation Engine
//!
//! Discrete one-second-resolution simulation of traffic arriving at a single
//! network target under combined legitimate load and distributed volumetric
//! attack, evaluated against an admission-control pipeline and a fixed
//! downstream processing capacity.
//!
//! Per-timestep pipeline:
//!
//! ```text
//! TrafficGenerator ──► AdmissionController ──► capacity::shape ──► MetricsRecorder
//!                      (blacklist gate →
//!                       rate limit →
//!                       challenge filter →
//!                       reputation accrual →
//!                       blacklist promotion →
//!                       reputation decay)
//! ```
//!
//! Admission state (reputation scores, blacklist entries) is owned by the
//! [`AdmissionController`] instance, constructed fresh per run, and carries
//! across timesteps. Timesteps run strictly in order; the whole run is
//! deterministic given the configured seed.

pub mod admission;
pub mod capacity;
pub mod config;
pub mod metrics;
pub mod runner;
pub mod traffic;

pub use admission::{AdmissionController, AdmissionOutcome, AdmissionPolicy};
pub use capacity::{shape, Shaped};
pub use config::{ConfigError, SimConfig};
pub use metrics::MetricsRecorder;
pub use runner::run_simulation;
pub use traffic::{TrafficGenerator, TrafficSample};
