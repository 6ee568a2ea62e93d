//! HURDAT Processor Library
//!
//! A Rust library for converting HURDAT-style historical storm track records
//! into per-storm and per-year GeoJSON artifacts.
//!
//! This library provides tools for:
//! - Parsing fixed-format basin track files with header/data line handling
//! - Grouping track entries into storm entities with count validation
//! - Emitting per-storm GeoJSON feature collections and a manifest index
//! - Classifying storms on a Saffir-Simpson-like scale from peak wind speed
//! - Aggregating per-storm artifacts into per-year summary collections

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod geojson_writer;
        pub mod track_parser;
        pub mod year_summary;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Basin, Classification, Entry, Storm};
pub use config::Config;

/// Result type alias for the HURDAT processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for HURDAT processing operations
///
/// All errors are fatal to the run: the core propagates them to the CLI
/// driver, which decides termination. There is no partial-success mode.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed track line (wrong field count, non-numeric value)
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Line sequencing violation (data line with no preceding header)
    #[error("structural error at line {line}: {message}")]
    Structure { line: usize, message: String },

    /// Data validation failure (entry count mismatch, bad geometry)
    #[error("validation error: {message}")]
    Validation { message: String },

    /// JSON serialization or deserialization failure
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a parse error for a numbered input line
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create a structural error for a numbered input line
    pub fn structure(line: usize, message: impl Into<String>) -> Self {
        Self::Structure {
            line,
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a JSON error with context
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}
