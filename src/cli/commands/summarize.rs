//! Summarize command implementation
//!
//! Runs the read-back aggregation pass standalone: walks a previously
//! written output tree, classifies each storm from its emitted artifact,
//! and writes per-year summary collections.

use super::shared::{setup_logging, ProcessingStats};
use crate::app::services::year_summary::YearAggregator;
use crate::cli::args::SummarizeArgs;
use crate::Result;
use colored::Colorize;
use indicatif::HumanDuration;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// Summarize command runner
pub fn run_summarize(args: SummarizeArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting summary pass");
    debug!("Command line arguments: {:?}", args);

    let output_root = args
        .output_path
        .clone()
        .unwrap_or_else(|| PathBuf::from("output"));

    let mut stats = ProcessingStats::default();
    let aggregator = YearAggregator::new(&output_root, !args.compact);

    for basin in args.get_basins() {
        let summary_stats = aggregator.summarize_basin(basin)?;
        stats.years_summarized += summary_stats.years_summarized;
        stats.storms_classified += summary_stats.storms_classified;
        stats.basins_processed += 1;
    }

    stats.processing_time = start_time.elapsed();

    generate_final_report(&args, &stats);

    Ok(stats)
}

/// Print the human-readable completion report
fn generate_final_report(args: &SummarizeArgs, stats: &ProcessingStats) {
    if args.quiet {
        return;
    }

    let duration = HumanDuration(stats.processing_time);

    println!();
    println!("{}", "Summary Pass Complete".bright_green().bold());
    println!("{}", "=====================".bright_green());
    println!("  Basins summarized:   {}", stats.basins_processed);
    println!("  Years summarized:    {}", stats.years_summarized);
    println!("  Storms classified:   {}", stats.storms_classified);
    println!("  Processing time:     {}", duration);
    println!();
}
