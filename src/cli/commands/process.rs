//! Process command implementation
//!
//! This module contains the complete track processing workflow:
//! configuration loading, basin parsing, per-storm GeoJSON emission,
//! manifest writing, the optional chained summary pass, and report
//! generation.

use super::shared::{
    create_progress_bar, load_configuration, prepare_directories, setup_logging, ProcessingStats,
};
use crate::app::models::{Basin, Storm};
use crate::app::services::geojson_writer::{GeojsonWriter, Manifest};
use crate::app::services::track_parser::BasinParser;
use crate::app::services::year_summary::YearAggregator;
use crate::cli::args::ProcessArgs;
use crate::config::Config;
use crate::Result;
use colored::Colorize;
use indicatif::HumanDuration;
use std::time::Instant;
use tracing::{debug, info};

/// Process command runner
///
/// Orchestrates the full pipeline:
/// 1. Set up logging and configuration
/// 2. Parse each selected basin's track file (validation before emission)
/// 3. Write per-storm GeoJSON files with progress reporting
/// 4. Write the manifest index covering all parsed storms
/// 5. Optionally chain the per-year summary pass
pub fn run_process(args: ProcessArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting HURDAT processor");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    prepare_directories(&config)?;

    let mut stats = ProcessingStats::default();
    let writer = GeojsonWriter::new(&config.output_path, config.pretty);

    // Storms per basin, kept for the manifest after all basins parse
    let mut atlantic_storms: Vec<Storm> = Vec::new();
    let mut pacific_storms: Vec<Storm> = Vec::new();

    for basin in config.basins.clone() {
        let storms = process_basin(&config, &writer, basin, args.show_progress(), &mut stats)?;
        match basin {
            Basin::Atlantic => atlantic_storms = storms,
            Basin::Pacific => pacific_storms = storms,
        }
        stats.basins_processed += 1;
    }

    // Manifest lists every parsed storm, including those skipped from
    // geometry emission
    let manifest = Manifest::build(&atlantic_storms, &pacific_storms);
    let manifest_path = writer.write_manifest(&manifest)?;
    stats.output_files.push(manifest_path);

    if args.summarize {
        info!("Running chained summary pass");
        let aggregator = YearAggregator::new(&config.output_path, config.pretty);
        for basin in &config.basins {
            let summary_stats = aggregator.summarize_basin(*basin)?;
            stats.years_summarized += summary_stats.years_summarized;
            stats.storms_classified += summary_stats.storms_classified;
        }
    }

    stats.processing_time = start_time.elapsed();

    generate_final_report(&args, &stats);

    Ok(stats)
}

/// Parse one basin's track file and write its per-storm artifacts
fn process_basin(
    config: &Config,
    writer: &GeojsonWriter,
    basin: Basin,
    show_progress: bool,
    stats: &mut ProcessingStats,
) -> Result<Vec<Storm>> {
    let track_file = config.basin_input_path(basin);
    let parser = BasinParser::new(basin);
    let result = parser.parse_file(&track_file)?;

    stats.storms_parsed += result.stats.headers_parsed;
    stats.entries_parsed += result.stats.entries_parsed;

    let progress_bar = if show_progress {
        Some(create_progress_bar(
            result.storms.len() as u64,
            &format!("Writing {} storm files...", basin),
        ))
    } else {
        None
    };

    for storm in &result.storms {
        match writer.write_storm(basin, storm)? {
            Some(path) => {
                stats.storm_files_written += 1;
                stats.output_files.push(path);
            }
            None => stats.storms_skipped += 1,
        }
        if let Some(pb) = &progress_bar {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress_bar {
        pb.finish_and_clear();
    }

    info!(
        "Completed {} basin: {} storms, {} entries",
        basin, result.stats.headers_parsed, result.stats.entries_parsed
    );

    Ok(result.storms)
}

/// Print the human-readable completion report
fn generate_final_report(args: &ProcessArgs, stats: &ProcessingStats) {
    if args.quiet {
        return;
    }

    let duration = HumanDuration(stats.processing_time);

    println!();
    println!("{}", "HURDAT Processing Complete".bright_green().bold());
    println!("{}", "==========================".bright_green());
    println!("  Basins processed:    {}", stats.basins_processed);
    println!("  Storms parsed:       {}", stats.storms_parsed);
    println!("  Entries parsed:      {}", stats.entries_parsed);
    println!("  Storm files written: {}", stats.storm_files_written);
    if stats.storms_skipped > 0 {
        println!(
            "  Storms skipped:      {} {}",
            stats.storms_skipped,
            "(Central Pacific, manifest only)".bright_yellow()
        );
    }
    if args.summarize {
        println!("  Years summarized:    {}", stats.years_summarized);
        println!("  Storms classified:   {}", stats.storms_classified);
    }
    println!("  Processing time:     {}", duration);
    println!();
}
