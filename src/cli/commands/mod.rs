//! Command implementations for the HURDAT processor CLI
//!
//! This module contains the main command execution logic, progress
//! reporting, and error handling for the CLI interface. Each command is
//! implemented in its own module.

pub mod process;
pub mod shared;
pub mod summarize;

// Re-export the main types for easy access
pub use shared::ProcessingStats;

use crate::cli::args::{Args, Commands};
use crate::Result;

/// Main command runner for the HURDAT processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `process`: parse basin track files and emit GeoJSON artifacts
/// - `summarize`: aggregate emitted artifacts into per-year summaries
pub fn run(args: Args) -> Result<ProcessingStats> {
    match args.get_command() {
        Commands::Process(process_args) => process::run_process(process_args),
        Commands::Summarize(summarize_args) => summarize::run_summarize(summarize_args),
    }
}
