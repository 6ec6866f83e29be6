//! Run-length encoding
//!
//! RLE encodes consecutive runs of identical values as (value, length) pairs.
//! This is highly effective for sorted or repeated data.
//!
//! Invariants:
//! 1. Run lengths sum to the encoding length
//! 2. Every run length is at least one
//! 3. No two adjacent runs hold the same value
//!
//! Point access binary searches the cumulative run ends.

use crate::common::error::SchemaResult;
use crate::construction_err;
use crate::storage::encoding::traits::{apply_transform, ColumnEncoding, ValueTransform};
use crate::storage::encoding::types::EncodingType;
use crate::types::Value;

/// A single run in RLE encoding
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub value: Value,
    pub length: usize,
}

impl Run {
    pub fn new(value: Value, length: usize) -> Self {
        Self { value, length }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunLengthEncoding {
    runs: Vec<Run>,
    /// Exclusive end row of each run
    ends: Vec<usize>,
}

impl RunLengthEncoding {
    /// Encodes `values`, merging adjacent equal values into runs
    pub fn encode(values: &[Value]) -> Self {
        Self::with_runs(Self::count_runs(values.iter().cloned()))
    }

    /// Builds an encoding from existing runs, checking every invariant
    pub fn from_parts(runs: Vec<Run>, length: usize) -> SchemaResult<Self> {
        if let Some(position) = runs.iter().position(|run| run.length == 0) {
            return Err(construction_err!("run {} has zero length", position));
        }
        if let Some(position) = runs.windows(2).position(|pair| pair[0].value == pair[1].value) {
            return Err(construction_err!(
                "runs {} and {} hold the same value",
                position,
                position + 1
            ));
        }
        let total: usize = runs.iter().map(|run| run.length).sum();
        if total != length {
            return Err(construction_err!(
                "run lengths sum to {} but length is {}",
                total,
                length
            ));
        }
        Ok(Self::with_runs(runs))
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Run values in order
    pub fn values(&self) -> Vec<&Value> {
        self.runs.iter().map(|run| &run.value).collect()
    }

    /// Run lengths in order
    pub fn lengths(&self) -> Vec<usize> {
        self.runs.iter().map(|run| run.length).collect()
    }

    fn with_runs(runs: Vec<Run>) -> Self {
        let ends = runs
            .iter()
            .scan(0usize, |end, run| {
                *end += run.length;
                Some(*end)
            })
            .collect();
        Self { runs, ends }
    }

    /// Counts runs of equal adjacent values
    fn count_runs(values: impl IntoIterator<Item = Value>) -> Vec<Run> {
        let mut runs: Vec<Run> = Vec::new();
        for value in values {
            match runs.last_mut() {
                Some(last) if last.value == value => last.length += 1,
                _ => runs.push(Run::new(value, 1)),
            }
        }
        runs
    }

    /// Merges neighbours that became equal
    fn coalesce(runs: Vec<Run>) -> Vec<Run> {
        let mut merged: Vec<Run> = Vec::with_capacity(runs.len());
        for run in runs {
            match merged.last_mut() {
                Some(last) if last.value == run.value => last.length += run.length,
                _ => merged.push(run),
            }
        }
        merged
    }
}

impl ColumnEncoding for RunLengthEncoding {
    fn len(&self) -> usize {
        self.ends.last().copied().unwrap_or(0)
    }

    fn materialize(&self) -> SchemaResult<Vec<Value>> {
        let mut values = Vec::with_capacity(self.len());
        for run in &self.runs {
            values.extend(std::iter::repeat(run.value.clone()).take(run.length));
        }
        Ok(values)
    }

    fn value_at(&self, index: usize) -> SchemaResult<Option<Value>> {
        if index >= self.len() {
            return Ok(None);
        }
        // first run whose end lies past the index
        let run = self.ends.partition_point(|&end| end <= index);
        Ok(Some(self.runs[run].value.clone()))
    }

    fn encoding_type(&self) -> EncodingType {
        EncodingType::RunLength
    }

    fn map_values(&mut self, transform: ValueTransform) -> SchemaResult<()> {
        let mapped = self
            .runs
            .iter()
            .map(|run| Ok(Run::new(apply_transform(&transform, &run.value)?, run.length)))
            .collect::<SchemaResult<Vec<_>>>()?;
        *self = Self::with_runs(Self::coalesce(mapped));
        Ok(())
    }
}
