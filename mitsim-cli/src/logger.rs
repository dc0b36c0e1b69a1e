//! Logging for the CLI layer.
//!
//! Trait-based so command tests can assert on log output without global
//! state; the engine itself stays silent.

use std::io::Write;
use std::sync::{Arc, RwLock};

/// Verbosity level for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Normal output (always shown).
    Normal,
    /// Verbose output (-v flag).
    Verbose,
    /// Debug output (-vv flag).
    Debug,
}

impl Verbosity {
    /// Create verbosity from CLI flag count.
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }
}

/// Trait for logging output.
pub trait Logger: Send + Sync {
    /// Log a message at the given verbosity level.
    fn log(&self, level: Verbosity, message: &str);

    /// Log at normal level (always visible).
    fn info(&self, message: &str) {
        self.log(Verbosity::Normal, message);
    }

    /// Log at verbose level (requires -v).
    fn verbose(&self, message: &str) {
        self.log(Verbosity::Verbose, message);
    }
}

/// Logger that writes to stderr, filtered by level.
#[derive(Debug)]
pub struct StderrLogger {
    level: Verbosity,
}

impl StderrLogger {
    /// Create a stderr logger showing messages up to `level`.
    pub fn new(level: Verbosity) -> Self {
        Self { level }
    }
}

impl Logger for StderrLogger {
    fn log(&self, level: Verbosity, message: &str) {
        if level <= self.level {
            let _ = writeln!(std::io::stderr(), "{}", message);
        }
    }
}

/// Mock logger for tests: captures every message regardless of level.
#[derive(Debug, Clone, Default)]
pub struct MockLogger {
    messages: Arc<RwLock<Vec<(Verbosity, String)>>>,
}

impl MockLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured messages, in logging order.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .read()
            .unwrap()
            .iter()
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Whether any captured message contains `substring`.
    pub fn contains(&self, substring: &str) -> bool {
        self.messages().iter().any(|m| m.contains(substring))
    }

    /// Count of captured messages.
    pub fn count(&self) -> usize {
        self.messages.read().unwrap().len()
    }
}

impl Logger for MockLogger {
    fn log(&self, level: Verbosity, message: &str) {
        self.messages
            .write()
            .unwrap()
            .push((level, message.to_string()));
    }
}

/// Logger that discards all messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&self, _level: Verbosity, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===========================================
    // Test Category J — Logging
    // ===========================================

    #[test]
    fn test_verbosity_from_count() {
        assert_eq!(Verbosity::from_count(0), Verbosity::Normal);
        assert_eq!(Verbosity::from_count(1), Verbosity::Verbose);
        assert_eq!(Verbosity::from_count(2), Verbosity::Debug);
        assert_eq!(Verbosity::from_count(200), Verbosity::Debug);
    }

    #[test]
    fn test_verbosity_ordering() {
        assert!(Verbosity::Normal < Verbosity::Verbose);
        assert!(Verbosity::Verbose < Verbosity::Debug);
    }

    #[test]
    fn test_mock_logger_captures() {
        let logger = MockLogger::new();
        logger.info("starting");
        logger.verbose("detail");

        assert_eq!(logger.count(), 2);
        assert_eq!(logger.messages(), vec!["starting", "detail"]);
        assert!(logger.contains("start"));
        assert!(!logger.contains("finished"));
    }

    #[test]
    fn test_mock_logger_clone_shares_messages() {
        let logger = MockLogger::new();
        let clone = logger.clone();

        clone.info("from clone");

        assert!(logger.contains("from clone"));
    }

    #[test]
    fn test_null_logger_discards() {
        let logger = NullLogger;
        logger.info("nothing happens");
        logger.verbose("still nothing");
    }

    #[test]
    fn test_stderr_logger_construction() {
        let logger = StderrLogger::new(Verbosity::Verbose);
        // Writes go to stderr; only verify no panic.
        logger.info("info");
        logger.verbose("verbose");
    }
}
