//! Encoding selection
//!
//! This module analyzes raw values and picks the storage strategy: sparse for
//! mostly-null data, run-length for data with long runs and dictionary for
//! everything else.

use crate::common::config::EncodingConfig;
use crate::common::error::SchemaResult;
use crate::storage::encoding::dictionary::DictionaryEncoding;
use crate::storage::encoding::rle::RunLengthEncoding;
use crate::storage::encoding::sparse::SparseEncoding;
use crate::storage::encoding::types::{EncodingAnalysis, EncodingType};
use crate::storage::encoding::Encoding;
use crate::types::Value;
use std::collections::HashSet;
use tracing::debug;

/// Encoding selector driven by null and run ratios
#[derive(Debug, Clone, Default)]
pub struct EncodingSelector {
    config: EncodingConfig,
}

impl EncodingSelector {
    /// Creates a new encoding selector with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an encoding selector with custom settings
    pub fn with_settings(config: EncodingConfig) -> Self {
        Self { config }
    }

    /// Gathers the statistics the selection is based on
    pub fn analyze(&self, values: &[Value]) -> EncodingAnalysis {
        let null_count = values.iter().filter(|v| v.is_null()).count();
        let run_count = if values.is_empty() {
            0
        } else {
            1 + values.windows(2).filter(|pair| pair[0] != pair[1]).count()
        };
        let distinct_count = values.iter().collect::<HashSet<_>>().len();
        EncodingAnalysis {
            len: values.len(),
            null_count,
            run_count,
            distinct_count,
        }
    }

    /// Chooses the encoding for `values`
    pub fn select_encoding(&self, values: &[Value]) -> EncodingType {
        if values.is_empty() {
            return EncodingType::Dictionary;
        }
        let analysis = self.analyze(values);
        let selected = if analysis.null_ratio() >= self.config.sparse_null_ratio {
            EncodingType::Sparse
        } else if analysis.run_ratio() <= self.config.max_run_ratio {
            EncodingType::RunLength
        } else {
            EncodingType::Dictionary
        };
        debug!(
            len = analysis.len,
            nulls = analysis.null_count,
            runs = analysis.run_count,
            distinct = analysis.distinct_count,
            encoding = selected.name(),
            "selected encoding"
        );
        selected
    }

    /// Encodes `values` with the selected strategy
    pub fn encode(&self, values: &[Value]) -> SchemaResult<Encoding> {
        Ok(match self.select_encoding(values) {
            EncodingType::Sparse => Encoding::Sparse(SparseEncoding::encode(values)),
            EncodingType::RunLength => Encoding::RunLength(RunLengthEncoding::encode(values)),
            _ => Encoding::Dictionary(DictionaryEncoding::encode(values)?),
        })
    }
}

/// Convenience function for encoding with default settings
pub fn auto_encode(values: &[Value]) -> SchemaResult<Encoding> {
    EncodingSelector::new().encode(values)
}

/// Convenience function for selecting an encoding with default settings
pub fn select_encoding_type(values: &[Value]) -> EncodingType {
    EncodingSelector::new().select_encoding(values)
}
