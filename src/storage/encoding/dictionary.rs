//! Dictionary encoding
//!
//! Dictionary encoding maps values to integer indices, storing the unique values
//! in a table (first-occurrence order) and replacing each row with its index.
//!
//! Best for:
//! - Low-cardinality strings (e.g., country codes, status values)
//! - Categorical data (e.g., product categories)

use crate::common::error::SchemaResult;
use crate::construction_err;
use crate::storage::encoding::traits::{apply_transform, ColumnEncoding, ValueTransform};
use crate::storage::encoding::types::EncodingType;
use crate::types::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryEncoding {
    table: Vec<Value>,
    indices: Vec<u32>,
}

impl DictionaryEncoding {
    /// Builds the table and index array for `values`
    pub fn encode(values: &[Value]) -> SchemaResult<Self> {
        let mut table = Vec::new();
        let mut positions: HashMap<&Value, u32> = HashMap::new();
        let mut indices = Vec::with_capacity(values.len());

        for value in values {
            let index = match positions.get(value) {
                Some(&index) => index,
                None => {
                    let index = u32::try_from(table.len()).map_err(|_| {
                        construction_err!("dictionary exceeds {} distinct values", u32::MAX)
                    })?;
                    positions.insert(value, index);
                    table.push(value.clone());
                    index
                }
            };
            indices.push(index);
        }

        Ok(Self { table, indices })
    }

    /// Builds an encoding from an existing table and index array
    pub fn from_parts(table: Vec<Value>, indices: Vec<u32>) -> SchemaResult<Self> {
        if let Some((row, index)) = indices
            .iter()
            .enumerate()
            .find(|(_, index)| **index as usize >= table.len())
        {
            return Err(construction_err!(
                "index {} at row {} is outside a dictionary of {} values",
                index,
                row,
                table.len()
            ));
        }
        Ok(Self { table, indices })
    }

    /// Distinct values in first-occurrence order
    pub fn table(&self) -> &[Value] {
        &self.table
    }

    /// One table index per row
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Collapses equal table entries, returning the old-to-new slot mapping
    fn deduplicate(table: Vec<Value>) -> (Vec<Value>, Vec<u32>) {
        let mut positions: HashMap<Value, u32> = HashMap::with_capacity(table.len());
        let mut distinct = Vec::with_capacity(table.len());
        let mut remap = Vec::with_capacity(table.len());
        for value in table {
            let slot = match positions.get(&value) {
                Some(&slot) => slot,
                None => {
                    // never more slots than the table we started from
                    let slot = distinct.len() as u32;
                    positions.insert(value.clone(), slot);
                    distinct.push(value);
                    slot
                }
            };
            remap.push(slot);
        }
        (distinct, remap)
    }
}

impl ColumnEncoding for DictionaryEncoding {
    fn len(&self) -> usize {
        self.indices.len()
    }

    fn materialize(&self) -> SchemaResult<Vec<Value>> {
        Ok(self
            .indices
            .iter()
            .map(|&index| self.table[index as usize].clone())
            .collect())
    }

    fn value_at(&self, index: usize) -> SchemaResult<Option<Value>> {
        Ok(self
            .indices
            .get(index)
            .map(|&slot| self.table[slot as usize].clone()))
    }

    fn encoding_type(&self) -> EncodingType {
        EncodingType::Dictionary
    }

    fn map_values(&mut self, transform: ValueTransform) -> SchemaResult<()> {
        let mapped = self
            .table
            .iter()
            .map(|value| apply_transform(&transform, value))
            .collect::<SchemaResult<Vec<_>>>()?;

        let (table, remap) = Self::deduplicate(mapped);
        for index in self.indices.iter_mut() {
            *index = remap[*index as usize];
        }
        self.table = table;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::ErrorKind;
    use std::sync::Arc;

    fn strings(values: &[&str]) -> Vec<Value> {
        values.iter().map(|s| Value::varchar(*s)).collect()
    }

    #[test]
    fn test_dictionary_month_lengths() {
        let months = strings(&[
            "31", "28", "31", "30", "31", "30", "31", "31", "30", "31", "30", "31",
        ]);
        let encoding = DictionaryEncoding::encode(&months).unwrap();

        assert_eq!(encoding.table(), strings(&["31", "28", "30"]).as_slice());
        assert_eq!(encoding.indices(), &[0, 1, 0, 2, 0, 2, 0, 0, 2, 0, 2, 0]);
        assert_eq!(encoding.materialize().unwrap(), months);
        assert_eq!(encoding.value_at(1).unwrap(), Some(Value::varchar("28")));
        assert_eq!(encoding.value_at(12).unwrap(), None);
    }

    #[test]
    fn test_dictionary_with_nulls() {
        let values = vec![Value::Null, Value::Int64(1), Value::Null];
        let encoding = DictionaryEncoding::encode(&values).unwrap();
        assert_eq!(encoding.table().len(), 2);
        assert_eq!(encoding.materialize().unwrap(), values);
    }

    #[test]
    fn test_from_parts_validates_indices() {
        let err = DictionaryEncoding::from_parts(strings(&["a"]), vec![0, 1]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConstructionError);

        let ok = DictionaryEncoding::from_parts(strings(&["a", "b"]), vec![1, 0, 1]).unwrap();
        assert_eq!(ok.materialize().unwrap(), strings(&["b", "a", "b"]));
    }

    #[test]
    fn test_transform_multiplies() {
        let original: Vec<Value> = [1, 3, 2, 2, 3, 1].iter().map(|&v| Value::Int64(v)).collect();
        let mut encoding = DictionaryEncoding::encode(&original).unwrap();
        encoding
            .map_values(Arc::new(|v: &Value| -> SchemaResult<Value> {
                Ok(Value::Int64(v.try_as_i64()? * 2))
            }))
            .unwrap();

        let expected: Vec<Value> = [2, 6, 4, 4, 6, 2].iter().map(|&v| Value::Int64(v)).collect();
        assert_eq!(encoding.materialize().unwrap(), expected);
    }

    #[test]
    fn test_transform_rededuplicates() {
        let original = vec![Value::Int64(1), Value::Int64(-1), Value::Int64(2)];
        let mut encoding = DictionaryEncoding::encode(&original).unwrap();
        encoding
            .map_values(Arc::new(|v: &Value| -> SchemaResult<Value> {
                Ok(Value::Int64(v.try_as_i64()?.abs()))
            }))
            .unwrap();

        assert_eq!(encoding.table(), &[Value::Int64(1), Value::Int64(2)]);
        assert_eq!(encoding.indices(), &[0, 0, 1]);
    }

    #[test]
    fn test_failed_transform_leaves_encoding_unchanged() {
        let original = strings(&["a", "b"]);
        let mut encoding = DictionaryEncoding::encode(&original).unwrap();
        let result = encoding.map_values(Arc::new(|v: &Value| -> SchemaResult<Value> {
            Ok(Value::Int64(v.try_as_i64()?))
        }));
        assert!(result.is_err());
        assert_eq!(encoding.materialize().unwrap(), original);
    }
}
