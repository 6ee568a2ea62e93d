//! Parsing statistics and result structures for basin track files

use crate::app::models::Storm;

/// Parsing result with completed storms and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Storms in file order, each validated against its declared count
    pub storms: Vec<Storm>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of non-blank lines scanned
    pub total_lines: usize,

    /// Number of header lines parsed
    pub headers_parsed: usize,

    /// Number of track entries parsed
    pub entries_parsed: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }
}
