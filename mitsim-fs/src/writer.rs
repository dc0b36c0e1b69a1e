//! Series export: atomic CSV writes with timestamped filenames.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use chrono::{TimeZone, Utc};
use thiserror::Error;

use mitsim_schema::TimeSeries;

use crate::clock::Clock;

/// Errors from filesystem operations.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("path error: {0}")]
    Path(String),
}

/// Filesystem operations behind the export path.
/// Abstracted for testing with mock implementations.
pub trait Filesystem: Send + Sync {
    /// Write data atomically to a path (write to temp, then rename).
    fn write_atomic(&self, path: &Path, data: &[u8]) -> Result<(), FsError>;

    /// Read file contents as a string.
    fn read_file(&self, path: &Path) -> Result<String, FsError>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create directory and parents if needed.
    fn create_dir_all(&self, path: &Path) -> Result<(), FsError>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFilesystem;

impl Filesystem for RealFilesystem {
    fn write_atomic(&self, path: &Path, data: &[u8]) -> Result<(), FsError> {
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, data)?;
        // Rename is atomic on most filesystems.
        fs::rename(&temp_path, path)?;
        Ok(())
    }

    fn read_file(&self, path: &Path) -> Result<String, FsError> {
        Ok(fs::read_to_string(path)?)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), FsError> {
        fs::create_dir_all(path)?;
        Ok(())
    }
}

/// Mock filesystem for testing.
/// Cloning creates a new handle to the same underlying data.
#[derive(Debug, Clone, Default)]
pub struct MockFilesystem {
    files: Arc<RwLock<HashMap<PathBuf, Vec<u8>>>>,
    dirs: Arc<RwLock<HashSet<PathBuf>>>,
}

impl MockFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get content of a specific file.
    pub fn get_file(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.read().unwrap().get(path).cloned()
    }

    /// All stored file paths, unordered.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.read().unwrap().keys().cloned().collect()
    }

    /// Add a file directly (for test setup).
    pub fn add_file(&self, path: PathBuf, data: Vec<u8>) {
        self.files.write().unwrap().insert(path, data);
    }
}

impl Filesystem for MockFilesystem {
    fn write_atomic(&self, path: &Path, data: &[u8]) -> Result<(), FsError> {
        self.files
            .write()
            .unwrap()
            .insert(path.to_path_buf(), data.to_vec());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> Result<String, FsError> {
        let files = self.files.read().unwrap();
        match files.get(path) {
            Some(data) => String::from_utf8(data.clone())
                .map_err(|e| FsError::Path(format!("invalid utf8: {}", e))),
            None => Err(FsError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found: {}", path.display()),
            ))),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.read().unwrap().contains_key(path) || self.dirs.read().unwrap().contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), FsError> {
        self.dirs.write().unwrap().insert(path.to_path_buf());
        Ok(())
    }
}

/// Generate the export filename for a series written at `timestamp`.
/// Format: mitigation_sim_YYYYMMDD_HHMMSS.csv
pub fn export_filename(timestamp: u64) -> String {
    Utc.timestamp_opt(timestamp as i64, 0)
        .single()
        .map(|dt| format!("mitigation_sim_{}.csv", dt.format("%Y%m%d_%H%M%S")))
        .unwrap_or_else(|| format!("mitigation_sim_{}.csv", timestamp))
}

/// Writes a time series as a CSV artifact into an output directory.
///
/// The filename embeds the clock's timestamp at write time; the series
/// content itself is wall-clock independent.
pub struct SeriesWriter<'a, F: Filesystem, C: Clock> {
    fs: &'a F,
    clock: &'a C,
    out_dir: PathBuf,
}

impl<'a, F: Filesystem, C: Clock> SeriesWriter<'a, F, C> {
    pub fn new(fs: &'a F, clock: &'a C, out_dir: PathBuf) -> Self {
        Self { fs, clock, out_dir }
    }

    /// Get the output directory.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Write the series; returns the artifact path.
    pub fn write(&self, series: &TimeSeries) -> Result<PathBuf, FsError> {
        self.fs.create_dir_all(&self.out_dir)?;

        let filename = export_filename(self.clock.now_unix_sec());
        let path = self.out_dir.join(filename);

        self.fs.write_atomic(&path, series.to_csv().as_bytes())?;

        Ok(path)
    }
}
