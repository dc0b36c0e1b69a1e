//! Synthetic traffic generation.
//!
//! Produces, per timestep, a legitimate-volume sample (smooth periodic
//! baseline plus bounded noise) and an aggregate attacker volume summed over
//! a population of independent sources with heterogeneous behavior classes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

/// Legitimate traffic baseline (volume per timestep).
const BASELINE: f64 = 120.0;

/// Amplitude of the periodic swing around the baseline.
const AMPLITUDE: f64 = 12.0;

/// Period of the swing, in timesteps.
const PERIOD: f64 = 180.0;

/// Half-width of the uniform noise band on the legitimate sample.
const NOISE_SPAN: f64 = 5.0;

/// One attacker behavior class: selection weight and per-timestep
/// contribution range.
#[derive(Debug, Clone, Copy)]
struct SourceClass {
    weight: f64,
    min: f64,
    max: f64,
}

/// Mixture of attacker behavior classes; weights sum to 1.
const SOURCE_CLASSES: &[SourceClass] = &[
    // low-rate background
    SourceClass { weight: 0.60, min: 0.2, max: 1.2 },
    // moderate
    SourceClass { weight: 0.25, min: 2.0, max: 8.0 },
    // burst / high-rate
    SourceClass { weight: 0.11, min: 8.0, max: 32.0 },
    // stealth / low-and-slow
    SourceClass { weight: 0.04, min: 0.1, max: 1.6 },
];

/// Volumes offered during one timestep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrafficSample {
    /// Legitimate volume, clamped to be non-negative.
    pub legitimate: f64,
    /// Aggregate attacker-offered volume over the whole population.
    pub attacker: f64,
}

/// Seeded synthetic traffic source.
///
/// `sample` is a pure function of the timestep and the generator's RNG
/// state; the same seed and call sequence reproduce the same volumes.
#[derive(Debug)]
pub struct TrafficGenerator {
    rng: StdRng,
    num_sources: u32,
}

impl TrafficGenerator {
    /// Create a generator for a population of `num_sources` attack sources.
    pub fn new(seed: u64, num_sources: u32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            num_sources,
        }
    }

    /// Sample both volumes for timestep `t`.
    pub fn sample(&mut self, t: u64) -> TrafficSample {
        TrafficSample {
            legitimate: self.legitimate(t),
            attacker: self.attacker(),
        }
    }

    fn legitimate(&mut self, t: u64) -> f64 {
        let phase = TAU * t as f64 / PERIOD;
        let noise = self.rng.gen_range(-NOISE_SPAN..NOISE_SPAN);
        (BASELINE + AMPLITUDE * phase.sin() + noise).max(0.0)
    }

    /// Sum of per-source contributions. A population of 0 offers exactly
    /// zero volume and consumes no RNG draws.
    fn attacker(&mut self) -> f64 {
        let mut total = 0.0;
        for _ in 0..self.num_sources {
            total += self.source_contribution();
        }
        total
    }

    fn source_contribution(&mut self) -> f64 {
        let r: f64 = self.rng.gen();
        let mut cumulative = 0.0;
        let mut selected = SOURCE_CLASSES[SOURCE_CLASSES.len() - 1];
        for class in SOURCE_CLASSES {
            cumulative += class.weight;
            if r < cumulative {
                selected = *class;
                break;
            }
        }
        self.rng.gen_range(selected.min..selected.max)
    }
}
