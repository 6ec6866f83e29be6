//! Encoding identifiers and analysis statistics

use serde::{Deserialize, Serialize};

/// Encoding strategy identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncodingType {
    /// One value repeated for every row
    Constant,

    /// Values produced by a generator on every materialization
    Function,

    /// Distinct values table plus one index per row
    /// Best for: low-cardinality strings, categorical data
    Dictionary,

    /// (value, run length) pairs
    /// Best for: sorted data, repeated values
    RunLength,

    /// Non-null values plus their row positions
    /// Best for: mostly-null columns
    Sparse,
}

impl EncodingType {
    /// Returns human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            EncodingType::Constant => "Constant",
            EncodingType::Function => "Function",
            EncodingType::Dictionary => "Dictionary",
            EncodingType::RunLength => "RLE",
            EncodingType::Sparse => "Sparse",
        }
    }

    /// Whether the column length can be changed without touching the payload
    pub fn is_resizable(&self) -> bool {
        matches!(self, EncodingType::Constant | EncodingType::Function)
    }
}

/// Statistics gathered over raw values before choosing an encoding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodingAnalysis {
    /// Number of values analyzed
    pub len: usize,

    /// Number of null values
    pub null_count: usize,

    /// Number of maximal runs of equal adjacent values
    pub run_count: usize,

    /// Number of distinct values, null included
    pub distinct_count: usize,
}

impl EncodingAnalysis {
    /// Fraction of values that are null (0.0 for empty input)
    pub fn null_ratio(&self) -> f64 {
        if self.len == 0 {
            0.0
        } else {
            self.null_count as f64 / self.len as f64
        }
    }

    /// Runs per value (1.0 for empty input)
    pub fn run_ratio(&self) -> f64 {
        if self.len == 0 {
            1.0
        } else {
            self.run_count as f64 / self.len as f64
        }
    }
}
