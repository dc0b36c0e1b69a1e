//! MITSIM Export Path
//!
//! Filesystem and clock abstractions behind the CSV export, with real and
//! mock implementations for deterministic testing. The simulation itself
//! runs on logical timesteps; wall-clock time only stamps the artifact
//! filename.

mod clock;
mod writer;

pub use clock::{Clock, MockClock, SystemClock};
pub use writer::{
    export_filename, Filesystem, FsError, MockFilesystem, RealFilesystem, SeriesWriter,
};
