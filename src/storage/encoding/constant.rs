//! Constant encoding: one value broadcast to every row

use crate::common::error::SchemaResult;
use crate::storage::encoding::traits::{apply_transform, ColumnEncoding, ValueTransform};
use crate::storage::encoding::types::EncodingType;
use crate::types::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct ConstantEncoding {
    value: Value,
    length: usize,
}

impl ConstantEncoding {
    pub fn new(value: Value, length: usize) -> Self {
        Self { value, length }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn set_len(&mut self, length: usize) {
        self.length = length;
    }
}

impl ColumnEncoding for ConstantEncoding {
    fn len(&self) -> usize {
        self.length
    }

    fn materialize(&self) -> SchemaResult<Vec<Value>> {
        Ok(vec![self.value.clone(); self.length])
    }

    fn value_at(&self, index: usize) -> SchemaResult<Option<Value>> {
        Ok((index < self.length).then(|| self.value.clone()))
    }

    fn encoding_type(&self) -> EncodingType {
        EncodingType::Constant
    }

    fn map_values(&mut self, transform: ValueTransform) -> SchemaResult<()> {
        self.value = apply_transform(&transform, &self.value)?;
        Ok(())
    }
}
