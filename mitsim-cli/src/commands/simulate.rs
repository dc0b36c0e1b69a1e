//! Simulate command: run the simulation and export the series.

use std::path::PathBuf;

use mitsim_engine::run_simulation;
use mitsim_fs::{Clock, Filesystem, SeriesWriter};
use mitsim_schema::TimeSeries;

use super::CommandResult;
use crate::cli::Args;
use crate::logger::Logger;

/// Result of simulate command execution.
#[derive(Debug)]
pub struct SimulateResult {
    /// The complete in-memory time series.
    pub series: TimeSeries,
    /// Path of the exported CSV artifact.
    pub csv_path: PathBuf,
    /// Total inbound volume over the run.
    pub total_inbound: f64,
    /// Total processed volume over the run.
    pub total_processed: f64,
    /// Total dropped volume over the run.
    pub total_dropped: f64,
}

/// Execute the simulate command.
///
/// Validates arguments, runs the full simulation, and writes the CSV
/// artifact into the output directory. The series is computed entirely
/// before the export write, so an export failure never invalidates the
/// simulation result itself.
pub fn execute_simulate<C, F, L>(
    args: &Args,
    clock: &C,
    fs: &F,
    logger: &L,
) -> CommandResult<SimulateResult>
where
    C: Clock,
    F: Filesystem,
    L: Logger,
{
    args.validate()?;
    let config = args.to_sim_config();

    logger.verbose(&format!(
        "simulating {} timesteps: {} sources against {} (limit {}, threshold {}, blacklist {} steps, capacity {})",
        config.duration,
        config.num_sources,
        config.target,
        config.per_identity_limit,
        config.blacklist_threshold,
        config.blacklist_duration,
        config.capacity,
    ));

    let series = run_simulation(&config)?;

    let total_inbound = series.iter().map(|r| r.inbound).sum();
    let total_processed = series.iter().map(|r| r.processed).sum();
    let total_dropped = series.iter().map(|r| r.dropped).sum();

    let writer = SeriesWriter::new(fs, clock, args.out_dir.clone());
    let csv_path = writer.write(&series)?;

    logger.info(&format!("saved simulation to {}", csv_path.display()));

    Ok(SimulateResult {
        series,
        csv_path,
        total_inbound,
        total_processed,
        total_dropped,
    })
}
