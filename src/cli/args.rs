//! Command-line argument definitions for HURDAT processor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::models::Basin;
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the HURDAT storm track processor
///
/// Converts HURDAT-style historical storm track records into per-storm
/// GeoJSON artifacts, a manifest index, and per-year summary collections.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hurdat-processor",
    version,
    about = "Convert HURDAT-style storm track records into GeoJSON artifacts",
    long_about = "A batch tool that parses fixed-format HURDAT-style storm track text for the \
                  Atlantic and Pacific basins, groups track points into storms, emits per-storm \
                  GeoJSON feature collections and a manifest index, and aggregates per-year \
                  summary collections with Saffir-Simpson-like intensity classifications."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the HURDAT processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse basin track files and emit per-storm GeoJSON plus the manifest
    Process(ProcessArgs),
    /// Aggregate emitted per-storm files into per-year summary collections
    Summarize(SummarizeArgs),
}

/// Arguments for the process command (main parsing and emission)
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Input directory containing the per-basin track files
    ///
    /// Expected to contain atlantic.txt and/or pacific.txt depending on
    /// the selected basins. Defaults to the current directory.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Directory containing atlantic.txt and pacific.txt"
    )]
    pub input_path: Option<PathBuf>,

    /// Output root for generated GeoJSON artifacts
    ///
    /// Storm files land under {output}/{basin}/{year}/ and the manifest at
    /// {output}/manifest.json. Defaults to ./output
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output root for generated GeoJSON artifacts"
    )]
    pub output_path: Option<PathBuf>,

    /// Specific basins to process (comma-separated list)
    ///
    /// If not specified, processes both: atlantic, pacific
    #[arg(
        short = 'b',
        long = "basins",
        value_name = "LIST",
        help = "Comma-separated list of basins to process (atlantic, pacific)"
    )]
    pub basins: Option<BasinList>,

    /// Emit compact JSON instead of pretty-printed output
    #[arg(long = "compact", help = "Emit compact JSON instead of pretty-printed")]
    pub compact: bool,

    /// Run the per-year summary pass after processing
    ///
    /// Chains the summarize command over the freshly written output tree.
    #[arg(
        long = "summarize",
        help = "Run the per-year summary pass after processing"
    )]
    pub summarize: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the summarize command (read-back aggregation)
#[derive(Debug, Clone, Parser)]
pub struct SummarizeArgs {
    /// Output root holding previously emitted per-storm files
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output root holding previously emitted per-storm files"
    )]
    pub output_path: Option<PathBuf>,

    /// Specific basins to summarize (comma-separated list)
    #[arg(
        short = 'b',
        long = "basins",
        value_name = "LIST",
        help = "Comma-separated list of basins to summarize (atlantic, pacific)"
    )]
    pub basins: Option<BasinList>,

    /// Emit compact JSON instead of pretty-printed output
    #[arg(long = "compact", help = "Emit compact JSON instead of pretty-printed")]
    pub compact: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Wrapper for parsing comma-separated basin lists
#[derive(Debug, Clone)]
pub struct BasinList {
    pub basins: Vec<Basin>,
}

impl FromStr for BasinList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let basins: Vec<Basin> = s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Basin::from_str)
            .collect::<Result<_>>()?;

        if basins.is_empty() {
            return Err(Error::configuration(
                "Basin list cannot be empty".to_string(),
            ));
        }

        Ok(BasinList { basins })
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ProcessArgs {
    /// Validate the process command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input_path) = &self.input_path {
            if !input_path.exists() {
                return Err(Error::configuration(format!(
                    "Input path does not exist: {}",
                    input_path.display()
                )));
            }
            if !input_path.is_dir() {
                return Err(Error::configuration(format!(
                    "Input path is not a directory: {}",
                    input_path.display()
                )));
            }
        }
        Ok(())
    }

    /// Get the list of basins to process
    pub fn get_basins(&self) -> Vec<Basin> {
        match &self.basins {
            Some(list) => list.basins.clone(),
            None => Basin::ALL.to_vec(),
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl SummarizeArgs {
    /// Get the list of basins to summarize
    pub fn get_basins(&self) -> Vec<Basin> {
        match &self.basins {
            Some(list) => list.basins.clone(),
            None => Basin::ALL.to_vec(),
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl Default for ProcessArgs {
    fn default() -> Self {
        Self {
            input_path: None,
            output_path: None,
            basins: None,
            compact: false,
            summarize: false,
            verbose: 0,
            quiet: false,
        }
    }
}
