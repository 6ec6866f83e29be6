//! Function encoding: values produced by a generator on every materialization

use crate::common::error::SchemaResult;
use crate::storage::encoding::traits::{apply_transform, ColumnEncoding, ValueTransform};
use crate::storage::encoding::types::EncodingType;
use crate::types::Value;
use std::fmt;
use std::sync::Arc;

/// Zero-argument value generator
pub type ValueGenerator = Arc<dyn Fn() -> SchemaResult<Value> + Send + Sync>;

#[derive(Clone)]
pub struct FunctionEncoding {
    generator: ValueGenerator,
    length: usize,
}

impl FunctionEncoding {
    pub fn new(generator: ValueGenerator, length: usize) -> Self {
        Self { generator, length }
    }

    pub fn set_len(&mut self, length: usize) {
        self.length = length;
    }
}

impl fmt::Debug for FunctionEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionEncoding")
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

impl ColumnEncoding for FunctionEncoding {
    fn len(&self) -> usize {
        self.length
    }

    fn materialize(&self) -> SchemaResult<Vec<Value>> {
        (0..self.length).map(|_| (self.generator)()).collect()
    }

    fn value_at(&self, index: usize) -> SchemaResult<Option<Value>> {
        if index >= self.length {
            return Ok(None);
        }
        (self.generator)().map(Some)
    }

    fn encoding_type(&self) -> EncodingType {
        EncodingType::Function
    }

    fn map_values(&mut self, transform: ValueTransform) -> SchemaResult<()> {
        let inner = Arc::clone(&self.generator);
        self.generator = Arc::new(move || {
            let value = inner()?;
            apply_transform(&transform, &value)
        });
        Ok(())
    }
}
