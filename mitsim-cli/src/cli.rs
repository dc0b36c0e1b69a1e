//! CLI argument parsing for the mitsim binary.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use mitsim_engine::config::{
    DEFAULT_BLACKLIST_DURATION, DEFAULT_BLACKLIST_THRESHOLD, DEFAULT_CAPACITY, DEFAULT_DURATION,
    DEFAULT_NUM_SOURCES, DEFAULT_PER_IDENTITY_LIMIT, DEFAULT_SEED, DEFAULT_TARGET,
};
use mitsim_engine::SimConfig;

/// Default output directory for the CSV artifact.
pub const DEFAULT_OUT_DIR: &str = ".";

/// Errors from CLI argument validation.
#[derive(Debug, Error, PartialEq)]
pub enum CliError {
    #[error("capacity must not be negative, got {0}")]
    NegativeCapacity(f64),

    #[error("blacklist-duration must be at least 1 timestep, got {0}")]
    InvalidBlacklistDuration(u64),

    #[error("per-identity-limit must not be negative, got {0}")]
    NegativeRateLimit(f64),

    #[error("duration must be at least 1 timestep, got {0}")]
    InvalidDuration(u64),
}

/// MITSIM - Single-target volumetric attack mitigation simulator.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "mitsim")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Number of simulated attack sources.
    #[arg(long, default_value_t = DEFAULT_NUM_SOURCES)]
    pub num_sources: u32,

    /// Target identity label receiving all attack traffic.
    #[arg(long, default_value = DEFAULT_TARGET)]
    pub target: String,

    /// Per-identity rate limit (volume per timestep).
    #[arg(long, default_value_t = DEFAULT_PER_IDENTITY_LIMIT, allow_negative_numbers = true)]
    pub per_identity_limit: f64,

    /// Reputation score at which an identity is blacklisted.
    #[arg(long, default_value_t = DEFAULT_BLACKLIST_THRESHOLD, allow_negative_numbers = true)]
    pub blacklist_threshold: f64,

    /// Timesteps a blacklist entry remains active.
    #[arg(long, default_value_t = DEFAULT_BLACKLIST_DURATION)]
    pub blacklist_duration: u64,

    /// Maximum volume processed downstream per timestep.
    #[arg(long, default_value_t = DEFAULT_CAPACITY, allow_negative_numbers = true)]
    pub capacity: f64,

    /// Total simulated duration in timesteps.
    #[arg(long, default_value_t = DEFAULT_DURATION)]
    pub duration: u64,

    /// RNG seed; a fixed seed reproduces the run exactly.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output directory for the CSV artifact.
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Validate the arguments.
    pub fn validate(&self) -> Result<(), CliError> {
        if self.capacity < 0.0 {
            return Err(CliError::NegativeCapacity(self.capacity));
        }
        if self.blacklist_duration == 0 {
            return Err(CliError::InvalidBlacklistDuration(self.blacklist_duration));
        }
        if self.per_identity_limit < 0.0 {
            return Err(CliError::NegativeRateLimit(self.per_identity_limit));
        }
        if self.duration == 0 {
            return Err(CliError::InvalidDuration(self.duration));
        }
        Ok(())
    }

    /// Convert to the engine configuration.
    pub fn to_sim_config(&self) -> SimConfig {
        SimConfig::new()
            .with_num_sources(self.num_sources)
            .with_target(self.target.clone())
            .with_per_identity_limit(self.per_identity_limit)
            .with_blacklist_threshold(self.blacklist_threshold)
            .with_blacklist_duration(self.blacklist_duration)
            .with_capacity(self.capacity)
            .with_duration(self.duration)
            .with_seed(self.seed)
    }
}

/// Parse CLI arguments from an iterator of strings.
/// Useful for testing.
pub fn parse_from<I, T>(iter: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Args::try_parse_from(iter)
}
