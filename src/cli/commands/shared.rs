//! Shared components for CLI commands
//!
//! Common types and helpers used by both the process and summarize
//! command implementations.

use crate::cli::args::ProcessArgs;
use crate::config::Config;
use crate::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::{debug, info};

/// Processing statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Number of basins processed
    pub basins_processed: usize,
    /// Number of storms parsed from track files
    pub storms_parsed: usize,
    /// Number of track entries parsed
    pub entries_parsed: usize,
    /// Number of per-storm files written
    pub storm_files_written: usize,
    /// Number of storms skipped from geometry emission
    pub storms_skipped: usize,
    /// Number of (basin, year) summary files written
    pub years_summarized: usize,
    /// Number of storms classified during summarization
    pub storms_classified: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
    /// Paths of written artifact files
    pub output_files: Vec<PathBuf>,
}

/// Set up structured logging for CLI commands
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hurdat_processor={}", log_level)));

    // Set up subscriber based on output format preference
    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Build the runtime configuration from process command arguments
pub fn load_configuration(args: &ProcessArgs) -> Result<Config> {
    info!("Loading configuration");

    let mut config = Config::default();

    // Apply CLI argument overrides
    if let Some(input_path) = &args.input_path {
        config.input_path = input_path.clone();
    }
    if let Some(output_path) = &args.output_path {
        config.output_path = output_path.clone();
    }
    config.basins = args.get_basins();
    config.pretty = !args.compact;

    // Final validation
    config.validate()?;

    Ok(config)
}

/// Validate and prepare output directories
pub fn prepare_directories(config: &Config) -> Result<()> {
    info!("Preparing output directories");

    config.ensure_output_directory()?;

    info!(
        "Output directory prepared: {}",
        config.output_path.display()
    );
    Ok(())
}

/// Create a configured progress bar for file writing
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}
