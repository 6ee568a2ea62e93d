use clap::Parser;
use hurdat_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("HURDAT Processor - Storm Track GeoJSON Converter");
    println!("================================================");
    println!();
    println!("Convert HURDAT-style historical storm track records into per-storm");
    println!("GeoJSON feature collections, a manifest index, and per-year summary");
    println!("collections with intensity classifications.");
    println!();
    println!("USAGE:");
    println!("    hurdat-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process      Parse basin track files and emit GeoJSON artifacts (main command)");
    println!("    summarize    Aggregate emitted artifacts into per-year summaries");
    println!("    help         Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Process both basins from the current directory:");
    println!("    hurdat-processor process");
    println!();
    println!("    # Process with custom paths and a chained summary pass:");
    println!("    hurdat-processor process --input /path/to/tracks --output /path/to/output \\");
    println!("                             --summarize");
    println!();
    println!("    # Summarize a previously written output tree:");
    println!("    hurdat-processor summarize --output /path/to/output");
    println!();
    println!("For detailed help on any command, use:");
    println!("    hurdat-processor <COMMAND> --help");
}
