//! Simulation runner.
//!
//! Wires the traffic generator, admission controller, capacity shaper, and
//! metrics recorder into a strictly ordered timestep loop.

use std::collections::BTreeMap;

use mitsim_schema::TimeSeries;

use crate::admission::{AdmissionController, AdmissionPolicy};
use crate::capacity;
use crate::config::{ConfigError, SimConfig};
use crate::metrics::MetricsRecorder;
use crate::traffic::TrafficGenerator;

/// Run a complete simulation, returning the per-timestep time series.
///
/// The configuration is validated up front; nothing fails mid-run.
/// Timesteps `0..duration` execute strictly in order — each timestep's
/// admission-control state mutation (including decay) completes before the
/// next begins, because reputation and blacklist state carry forward. The
/// run is deterministic given `config.seed`.
pub fn run_simulation(config: &SimConfig) -> Result<TimeSeries, ConfigError> {
    config.validate()?;

    let mut generator = TrafficGenerator::new(config.seed, config.num_sources);
    let mut controller = AdmissionController::new();
    let mut recorder = MetricsRecorder::new();
    let policy = AdmissionPolicy {
        per_identity_limit: config.per_identity_limit,
        blacklist_threshold: config.blacklist_threshold,
        blacklist_duration: config.blacklist_duration,
    };

    for t in 0..config.duration {
        let sample = generator.sample(t);

        // All attack volume funnels to the single target identity; the
        // controller interface stays mapping-keyed.
        let mut offered = BTreeMap::new();
        offered.insert(config.target.clone(), sample.attacker);

        let outcome = controller.process(t, &offered, &policy);

        let inbound = sample.legitimate + outcome.admitted;
        let shaped = capacity::shape(inbound, config.capacity);

        recorder.record(
            t,
            inbound,
            shaped.processed,
            shaped.capacity_dropped + outcome.blacklist_dropped,
            controller.active_blacklist_count(t),
        );
    }

    Ok(recorder.into_series())
}
