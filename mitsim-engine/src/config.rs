//! Simulation configuration and validation.

use thiserror::Error;

/// Default number of simulated attack sources.
pub const DEFAULT_NUM_SOURCES: u32 = 800;

/// Default target identity label (documentation-range address).
pub const DEFAULT_TARGET: &str = "203.0.113.79";

/// Default per-identity rate limit (volume per timestep).
pub const DEFAULT_PER_IDENTITY_LIMIT: f64 = 20.0;

/// Default reputation score at which an identity is blacklisted.
pub const DEFAULT_BLACKLIST_THRESHOLD: f64 = 50.0;

/// Default number of timesteps a blacklist entry remains active.
pub const DEFAULT_BLACKLIST_DURATION: u64 = 30;

/// Default downstream processing capacity (volume per timestep).
pub const DEFAULT_CAPACITY: f64 = 2000.0;

/// Default simulated duration in timesteps.
pub const DEFAULT_DURATION: u64 = 300;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

/// Simulation configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub num_sources: u32,
    pub target: String,
    pub per_identity_limit: f64,
    pub blacklist_threshold: f64,
    pub blacklist_duration: u64,
    pub capacity: f64,
    pub duration: u64,
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_sources: DEFAULT_NUM_SOURCES,
            target: DEFAULT_TARGET.to_string(),
            per_identity_limit: DEFAULT_PER_IDENTITY_LIMIT,
            blacklist_threshold: DEFAULT_BLACKLIST_THRESHOLD,
            blacklist_duration: DEFAULT_BLACKLIST_DURATION,
            capacity: DEFAULT_CAPACITY,
            duration: DEFAULT_DURATION,
            seed: DEFAULT_SEED,
        }
    }
}

impl SimConfig {
    /// Create a config with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set num_sources.
    pub fn with_num_sources(mut self, num_sources: u32) -> Self {
        self.num_sources = num_sources;
        self
    }

    /// Builder: set the target identity label.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Builder: set per_identity_limit.
    pub fn with_per_identity_limit(mut self, limit: f64) -> Self {
        self.per_identity_limit = limit;
        self
    }

    /// Builder: set blacklist_threshold.
    pub fn with_blacklist_threshold(mut self, threshold: f64) -> Self {
        self.blacklist_threshold = threshold;
        self
    }

    /// Builder: set blacklist_duration.
    pub fn with_blacklist_duration(mut self, duration: u64) -> Self {
        self.blacklist_duration = duration;
        self
    }

    /// Builder: set capacity.
    pub fn with_capacity(mut self, capacity: f64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builder: set duration.
    pub fn with_duration(mut self, duration: u64) -> Self {
        self.duration = duration;
        self
    }

    /// Builder: set seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate the configuration.
    ///
    /// Rejected before any timestep runs, never mid-simulation. Zero capacity
    /// is accepted: it models a saturated or offline downstream and every
    /// timestep then drops its full inbound volume. Zero blacklist duration
    /// is rejected because it would create entries that are never active.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity < 0.0 {
            return Err(ConfigError::NegativeCapacity(self.capacity));
        }
        if self.blacklist_duration == 0 {
            return Err(ConfigError::ZeroBlacklistDuration);
        }
        if self.per_identity_limit < 0.0 {
            return Err(ConfigError::NegativeRateLimit(self.per_identity_limit));
        }
        if self.duration == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        Ok(())
    }
}

/// Errors from configuration validation.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("capacity must not be negative, got {0}")]
    NegativeCapacity(f64),

    #[error("blacklist duration must be at least 1 timestep")]
    ZeroBlacklistDuration,

    #[error("per-identity limit must not be negative, got {0}")]
    NegativeRateLimit(f64),

    #[error("duration must be at least 1 timestep")]
    ZeroDuration,
}
