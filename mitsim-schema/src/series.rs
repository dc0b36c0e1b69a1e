//! TimestepRecord and TimeSeries types for MITSIM.

use serde::{Deserialize, Serialize};

/// CSV header row for exported time series.
///
/// Column order is part of the export contract: files written by one version
/// must parse back into the same tabular shape.
pub const CSV_HEADER: &str = "time,inbound,processed,dropped,blacklisted_count";

/// One immutable per-timestep observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimestepRecord {
    /// Timestep index (0-based).
    pub time: u64,
    /// Combined volume that reached capacity shaping (legitimate + admitted attacker).
    pub inbound: f64,
    /// Volume processed downstream, capped at capacity.
    pub processed: f64,
    /// Total dropped volume: capacity-dropped plus blacklist-dropped.
    pub dropped: f64,
    /// Identities with an active blacklist entry at this timestep.
    pub blacklisted_count: usize,
}

/// Ordered sequence of timestep records for one simulation run.
///
/// Records are appended once per timestep and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    records: Vec<TimestepRecord>,
}

impl TimeSeries {
    /// Create an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Records arrive in timestep order.
    pub fn push(&mut self, record: TimestepRecord) {
        self.records.push(record);
    }

    /// Number of recorded timesteps.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the series has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in timestep order.
    pub fn records(&self) -> &[TimestepRecord] {
        &self.records
    }

    /// Iterate records in timestep order.
    pub fn iter(&self) -> impl Iterator<Item = &TimestepRecord> {
        self.records.iter()
    }

    /// Render the series as CSV: header row, then one row per timestep.
    ///
    /// Floats use Rust's shortest round-trip formatting, so
    /// `from_csv(to_csv(s))` reproduces the series exactly.
    pub fn to_csv(&self) -> String {
        let mut out = String::with_capacity(64 * (self.records.len() + 1));
        out.push_str(CSV_HEADER);
        out.push('\n');
        for r in &self.records {
            out.push_str(&format!(
                "{},{},{},{},{}\n",
                r.time, r.inbound, r.processed, r.dropped, r.blacklisted_count
            ));
        }
        out
    }

    /// Parse a series back from CSV produced by [`TimeSeries::to_csv`].
    pub fn from_csv(csv: &str) -> Result<Self, CsvError> {
        let mut lines = csv.lines();

        let header = lines.next().ok_or(CsvError::MissingHeader)?;
        if header != CSV_HEADER {
            return Err(CsvError::HeaderMismatch {
                found: header.to_string(),
            });
        }

        let mut series = TimeSeries::new();
        for (idx, line) in lines.enumerate() {
            // 1-based data line numbers; the header is line 0.
            let line_no = idx + 1;
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != 5 {
                return Err(CsvError::FieldCount {
                    line: line_no,
                    found: fields.len(),
                });
            }

            series.push(TimestepRecord {
                time: parse_field(fields[0], line_no, "time")?,
                inbound: parse_field(fields[1], line_no, "inbound")?,
                processed: parse_field(fields[2], line_no, "processed")?,
                dropped: parse_field(fields[3], line_no, "dropped")?,
                blacklisted_count: parse_field(fields[4], line_no, "blacklisted_count")?,
            });
        }

        Ok(series)
    }
}

fn parse_field<T: std::str::FromStr>(
    value: &str,
    line: usize,
    column: &'static str,
) -> Result<T, CsvError> {
    value.parse().map_err(|_| CsvError::InvalidField {
        line,
        column,
        value: value.to_string(),
    })
}

/// Errors from CSV parsing.
#[derive(Debug, thiserror::Error)]
pub enum CsvError {
    #[error("missing header row")]
    MissingHeader,

    #[error("unexpected header {found:?} (expected \"time,inbound,processed,dropped,blacklisted_count\")")]
    HeaderMismatch { found: String },

    #[error("line {line}: expected 5 fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: invalid {column} value {value:?}")]
    InvalidField {
        line: usize,
        column: &'static str,
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===========================================
    // Test Category A — Schema / CSV Codec
    // ===========================================

    fn make_record(time: u64) -> TimestepRecord {
        TimestepRecord {
            time,
            inbound: 130.5,
            processed: 130.5,
            dropped: 0.0,
            blacklisted_count: 0,
        }
    }

    // -------------------------------------------
    // Round-trip
    // -------------------------------------------

    #[test]
    fn test_roundtrip_empty_series() {
        let series = TimeSeries::new();

        let csv = series.to_csv();
        let restored = TimeSeries::from_csv(&csv).expect("parse");

        assert_eq!(series, restored);
        assert!(restored.is_empty());
    }

    #[test]
    fn test_roundtrip_single_record() {
        let mut series = TimeSeries::new();
        series.push(TimestepRecord {
            time: 0,
            inbound: 131.25,
            processed: 131.25,
            dropped: 7.5,
            blacklisted_count: 1,
        });

        let csv = series.to_csv();
        let restored = TimeSeries::from_csv(&csv).expect("parse");

        assert_eq!(series, restored);
    }

    #[test]
    fn test_roundtrip_multiple_records() {
        let mut series = TimeSeries::new();
        for t in 0..5 {
            series.push(make_record(t));
        }

        let csv = series.to_csv();
        let restored = TimeSeries::from_csv(&csv).expect("parse");

        assert_eq!(series, restored);
        assert_eq!(restored.len(), 5);
    }

    #[test]
    fn test_roundtrip_awkward_floats() {
        // Values with no short decimal representation must still round-trip
        // exactly via shortest round-trip formatting.
        let mut series = TimeSeries::new();
        series.push(TimestepRecord {
            time: 42,
            inbound: 0.1 + 0.2,
            processed: 1.0 / 3.0,
            dropped: 1234.5678901234567,
            blacklisted_count: 3,
        });

        let csv = series.to_csv();
        let restored = TimeSeries::from_csv(&csv).expect("parse");

        assert_eq!(series, restored);
    }

    #[test]
    fn test_roundtrip_integral_floats() {
        // Integral f64 values print without a decimal point ("0", "2000")
        // and must parse back as floats.
        let mut series = TimeSeries::new();
        series.push(TimestepRecord {
            time: 0,
            inbound: 2000.0,
            processed: 2000.0,
            dropped: 0.0,
            blacklisted_count: 0,
        });

        let csv = series.to_csv();
        let restored = TimeSeries::from_csv(&csv).expect("parse");

        assert_eq!(series, restored);
    }

    // -------------------------------------------
    // Output shape
    // -------------------------------------------

    #[test]
    fn test_csv_header_first_line() {
        let series = TimeSeries::new();
        let csv = series.to_csv();
        assert_eq!(csv.lines().next(), Some(CSV_HEADER));
    }

    #[test]
    fn test_csv_one_row_per_record() {
        let mut series = TimeSeries::new();
        for t in 0..3 {
            series.push(make_record(t));
        }

        let csv = series.to_csv();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4); // header + 3 rows
    }

    #[test]
    fn test_csv_rows_in_timestep_order() {
        let mut series = TimeSeries::new();
        for t in 0..3 {
            series.push(make_record(t));
        }

        let csv = series.to_csv();
        let rows: Vec<&str> = csv.lines().skip(1).collect();

        assert!(rows[0].starts_with("0,"));
        assert!(rows[1].starts_with("1,"));
        assert!(rows[2].starts_with("2,"));
    }

    #[test]
    fn test_csv_ends_with_newline() {
        let mut series = TimeSeries::new();
        series.push(make_record(0));
        assert!(series.to_csv().ends_with('\n'));
    }

    #[test]
    fn test_header_constant_column_order() {
        assert_eq!(CSV_HEADER, "time,inbound,processed,dropped,blacklisted_count");
    }

    // -------------------------------------------
    // Parse errors
    // -------------------------------------------

    #[test]
    fn test_from_csv_empty_input() {
        let result = TimeSeries::from_csv("");
        assert!(matches!(result, Err(CsvError::MissingHeader)));
    }

    #[test]
    fn test_from_csv_header_mismatch() {
        let result = TimeSeries::from_csv("time,inbound,processed\n");
        assert!(matches!(result, Err(CsvError::HeaderMismatch { .. })));
    }

    #[test]
    fn test_from_csv_header_only_is_empty_series() {
        let series = TimeSeries::from_csv("time,inbound,processed,dropped,blacklisted_count\n")
            .expect("parse");
        assert!(series.is_empty());
    }

    #[test]
    fn test_from_csv_wrong_field_count() {
        let csv = format!("{}\n1,2,3\n", CSV_HEADER);
        let result = TimeSeries::from_csv(&csv);
        assert!(matches!(
            result,
            Err(CsvError::FieldCount { line: 1, found: 3 })
        ));
    }

    #[test]
    fn test_from_csv_invalid_float() {
        let csv = format!("{}\n0,abc,0,0,0\n", CSV_HEADER);
        let result = TimeSeries::from_csv(&csv);
        match result {
            Err(CsvError::InvalidField { line, column, value }) => {
                assert_eq!(line, 1);
                assert_eq!(column, "inbound");
                assert_eq!(value, "abc");
            }
            other => panic!("expected InvalidField, got {:?}", other),
        }
    }

    #[test]
    fn test_from_csv_invalid_time() {
        let csv = format!("{}\n-1,0,0,0,0\n", CSV_HEADER);
        let result = TimeSeries::from_csv(&csv);
        assert!(matches!(
            result,
            Err(CsvError::InvalidField { column: "time", .. })
        ));
    }

    #[test]
    fn test_from_csv_error_reports_later_line() {
        let csv = format!("{}\n0,1,1,0,0\n1,2,2,0,zero\n", CSV_HEADER);
        let result = TimeSeries::from_csv(&csv);
        assert!(matches!(
            result,
            Err(CsvError::InvalidField {
                line: 2,
                column: "blacklisted_count",
                ..
            })
        ));
    }

    #[test]
    fn test_csv_error_display() {
        let err = CsvError::FieldCount { line: 3, found: 2 };
        assert_eq!(err.to_string(), "line 3: expected 5 fields, found 2");
    }

    // -------------------------------------------
    // Series accessors
    // -------------------------------------------

    #[test]
    fn test_push_preserves_order() {
        let mut series = TimeSeries::new();
        series.push(make_record(0));
        series.push(make_record(1));

        let times: Vec<u64> = series.iter().map(|r| r.time).collect();
        assert_eq!(times, vec![0, 1]);
    }

    #[test]
    fn test_records_slice() {
        let mut series = TimeSeries::new();
        series.push(make_record(7));

        let records = series.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].time, 7);
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut series = TimeSeries::new();
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);

        series.push(make_record(0));
        assert!(!series.is_empty());
        assert_eq!(series.len(), 1);
    }

    // -------------------------------------------
    // Serde derives
    // -------------------------------------------

    #[test]
    fn test_record_serde_roundtrip() {
        let record = TimestepRecord {
            time: 5,
            inbound: 120.5,
            processed: 120.5,
            dropped: 0.0,
            blacklisted_count: 2,
        };

        let json = serde_json::to_string(&record).expect("serialize");
        let restored: TimestepRecord = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(record, restored);
    }

    #[test]
    fn test_record_serde_field_names() {
        let record = make_record(1);
        let json = serde_json::to_string(&record).expect("serialize");

        assert!(json.contains("\"time\""));
        assert!(json.contains("\"inbound\""));
        assert!(json.contains("\"blacklisted_count\""));
    }
}
