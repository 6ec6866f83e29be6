//! Sparse encoding: only non-null values are stored, with their row positions

use crate::common::error::SchemaResult;
use crate::construction_err;
use crate::storage::encoding::traits::{ColumnEncoding, ValueTransform};
use crate::storage::encoding::types::EncodingType;
use crate::types::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct SparseEncoding {
    values: Vec<Value>,
    /// Strictly ascending row positions, one per stored value
    indices: Vec<usize>,
    length: usize,
}

impl SparseEncoding {
    /// Keeps the non-null entries of `values`
    pub fn encode(values: &[Value]) -> Self {
        let (indices, stored) = values
            .iter()
            .enumerate()
            .filter(|(_, value)| !value.is_null())
            .map(|(index, value)| (index, value.clone()))
            .unzip();
        Self {
            values: stored,
            indices,
            length: values.len(),
        }
    }

    /// Builds an encoding from stored values and their positions
    pub fn from_parts(values: Vec<Value>, indices: Vec<usize>, length: usize) -> SchemaResult<Self> {
        if values.len() != indices.len() {
            return Err(construction_err!(
                "{} values but {} indices",
                values.len(),
                indices.len()
            ));
        }
        if let Some(position) = indices.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(construction_err!(
                "indices must be strictly ascending, found {} then {}",
                indices[position],
                indices[position + 1]
            ));
        }
        if let Some(&last) = indices.last() {
            if last >= length {
                return Err(construction_err!(
                    "index {} is outside a column of length {}",
                    last,
                    length
                ));
            }
        }
        if values.iter().any(Value::is_null) {
            return Err(construction_err!("sparse values cannot contain nulls"));
        }
        Ok(Self {
            values,
            indices,
            length,
        })
    }

    /// Stored non-null values
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Row position of each stored value
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}

impl ColumnEncoding for SparseEncoding {
    fn len(&self) -> usize {
        self.length
    }

    fn materialize(&self) -> SchemaResult<Vec<Value>> {
        let mut values = vec![Value::Null; self.length];
        for (&index, value) in self.indices.iter().zip(&self.values) {
            values[index] = value.clone();
        }
        Ok(values)
    }

    fn value_at(&self, index: usize) -> SchemaResult<Option<Value>> {
        if index >= self.length {
            return Ok(None);
        }
        Ok(Some(match self.indices.binary_search(&index) {
            Ok(position) => self.values[position].clone(),
            Err(_) => Value::Null,
        }))
    }

    fn encoding_type(&self) -> EncodingType {
        EncodingType::Sparse
    }

    fn map_values(&mut self, transform: ValueTransform) -> SchemaResult<()> {
        let mapped = self
            .values
            .iter()
            .map(|value| transform(value))
            .collect::<SchemaResult<Vec<_>>>()?;

        // entries mapped to null stop being stored
        let (indices, values) = self
            .indices
            .iter()
            .copied()
            .zip(mapped)
            .filter(|(_, value)| !value.is_null())
            .unzip();
        self.indices = indices;
        self.values = values;
        Ok(())
    }
}
