//! Per-timestep metrics accumulation.

use mitsim_schema::{TimeSeries, TimestepRecord};

/// Accumulates one immutable record per timestep and hands the ordered
/// series to the persistence collaborator at the end of the run.
///
/// The recorder does not define storage format; export is the concern of
/// the filesystem collaborator.
#[derive(Debug, Default)]
pub struct MetricsRecorder {
    series: TimeSeries,
}

impl MetricsRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the observation for one timestep.
    pub fn record(
        &mut self,
        time: u64,
        inbound: f64,
        processed: f64,
        dropped: f64,
        blacklisted_count: usize,
    ) {
        self.series.push(TimestepRecord {
            time,
            inbound,
            processed,
            dropped,
            blacklisted_count,
        });
    }

    /// Number of recorded timesteps.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Consume the recorder, yielding the accumulated series.
    pub fn into_series(self) -> TimeSeries {
        self.series
    }
}
