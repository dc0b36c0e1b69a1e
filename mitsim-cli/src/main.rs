//! mitsim binary entry point.

use std::process::ExitCode;

use clap::Parser;

use mitsim_cli::exit::{codes, exit_code};
use mitsim_cli::logger::{StderrLogger, Verbosity};
use mitsim_cli::{execute_simulate, Args};
use mitsim_fs::{RealFilesystem, SystemClock};

fn main() -> ExitCode {
    let args = Args::parse();

    let logger = StderrLogger::new(Verbosity::from_count(args.verbose));
    let clock = SystemClock;
    let fs = RealFilesystem;

    match execute_simulate(&args, &clock, &fs, &logger) {
        Ok(result) => {
            println!("Simulated {} timesteps", result.series.len());
            println!("  Inbound total:   {:.1}", result.total_inbound);
            println!("  Processed total: {:.1}", result.total_processed);
            println!("  Dropped total:   {:.1}", result.total_dropped);
            println!("Saved simulation to {}", result.csv_path.display());
            ExitCode::from(codes::SUCCESS as u8)
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(exit_code(&e) as u8)
        }
    }
}
