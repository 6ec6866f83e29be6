//! Column storage
//!
//! A column pairs a name and logical type with one encoding. The name and type
//! are fixed once built; the payload can be transformed or replaced as long as
//! the row count is kept.

use crate::common::config::{CastConfig, EncodingConfig, SchemaConfig};
use crate::common::error::SchemaResult;
use crate::construction_err;
use crate::storage::encoding::{
    ColumnEncoding, ConstantEncoding, DictionaryEncoding, Encoding, EncodingSelector, EncodingType,
    FunctionEncoding, RunLengthEncoding, SparseEncoding,
};
use crate::types::{cast_with, LogicalType, Value};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Column {
    name: String,
    logical_type: LogicalType,
    nullable: bool,
    encoding: Encoding,
}

impl Column {
    /// Create a column around an existing encoding
    pub fn new(name: impl Into<String>, logical_type: LogicalType, encoding: Encoding) -> Self {
        let column = Self {
            name: name.into(),
            logical_type,
            nullable: true,
            encoding,
        };
        debug!(
            column = %column.name,
            logical_type = %column.logical_type,
            encoding = column.encoding.encoding_type().name(),
            length = column.encoding.len(),
            "built column"
        );
        column
    }

    /// Column holding one value for `length` rows
    pub fn constant(
        name: impl Into<String>,
        logical_type: LogicalType,
        value: Value,
        length: usize,
    ) -> Self {
        Self::new(name, logical_type, ConstantEncoding::new(value, length).into())
    }

    /// Column whose values come from `generator` on every materialization
    pub fn function<F>(
        name: impl Into<String>,
        logical_type: LogicalType,
        generator: F,
        length: usize,
    ) -> Self
    where
        F: Fn() -> SchemaResult<Value> + Send + Sync + 'static,
    {
        Self::new(
            name,
            logical_type,
            FunctionEncoding::new(Arc::new(generator), length).into(),
        )
    }

    /// Dictionary-encoded column
    pub fn dictionary(
        name: impl Into<String>,
        logical_type: LogicalType,
        values: &[Value],
    ) -> SchemaResult<Self> {
        let encoding = DictionaryEncoding::encode(values)?;
        Ok(Self::new(name, logical_type, encoding.into()))
    }

    /// Run-length encoded column
    pub fn run_length(name: impl Into<String>, logical_type: LogicalType, values: &[Value]) -> Self {
        Self::new(name, logical_type, RunLengthEncoding::encode(values).into())
    }

    /// Sparse column
    pub fn sparse(name: impl Into<String>, logical_type: LogicalType, values: &[Value]) -> Self {
        Self::new(name, logical_type, SparseEncoding::encode(values).into())
    }

    /// Column with the encoding chosen for `values`
    pub fn from_values(
        name: impl Into<String>,
        logical_type: LogicalType,
        values: &[Value],
        config: &EncodingConfig,
    ) -> SchemaResult<Self> {
        let encoding = EncodingSelector::with_settings(config.clone()).encode(values)?;
        Ok(Self::new(name, logical_type, encoding))
    }

    /// Cast raw values to the column type, then encode them
    ///
    /// Cast failures name the column they occurred in.
    pub fn from_raw(
        name: impl Into<String>,
        logical_type: LogicalType,
        raw: &[Value],
        config: &SchemaConfig,
    ) -> SchemaResult<Self> {
        let name = name.into();
        let values = raw
            .iter()
            .map(|value| cast_with(value, &logical_type, &config.cast))
            .collect::<SchemaResult<Vec<_>>>()
            .map_err(|e| e.in_column(name.as_str()))?;
        Self::from_values(name, logical_type, &values, &config.encoding)
    }

    /// Set whether the column accepts nulls
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn logical_type(&self) -> &LogicalType {
        &self.logical_type
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn encoding(&self) -> &Encoding {
        &self.encoding
    }

    pub fn encoding_type(&self) -> EncodingType {
        self.encoding.encoding_type()
    }

    pub fn len(&self) -> usize {
        self.encoding.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encoding.is_empty()
    }

    /// Expand to one value per row
    pub fn materialize(&self) -> SchemaResult<Vec<Value>> {
        self.encoding
            .materialize()
            .map_err(|e| e.in_column(self.name.as_str()))
    }

    /// Value at a single row
    pub fn value_at(&self, index: usize) -> SchemaResult<Option<Value>> {
        self.encoding
            .value_at(index)
            .map_err(|e| e.in_column(self.name.as_str()))
    }

    /// Change the row count of a constant or function column
    pub fn set_length(&mut self, length: usize) -> SchemaResult<()> {
        match &mut self.encoding {
            Encoding::Constant(encoding) => encoding.set_len(length),
            Encoding::Function(encoding) => encoding.set_len(length),
            other => {
                return Err(construction_err!(
                    "column '{}' uses {} encoding, its length follows its values",
                    self.name,
                    other.encoding_type().name()
                ))
            }
        }
        Ok(())
    }

    /// Apply `transform` to every stored non-null value
    pub fn map_values<F>(&mut self, transform: F) -> SchemaResult<()>
    where
        F: Fn(&Value) -> SchemaResult<Value> + Send + Sync + 'static,
    {
        self.encoding
            .map_values(Arc::new(transform))
            .map_err(|e| e.in_column(self.name.as_str()))
    }

    /// Swap in a different encoding holding the same number of rows
    pub fn replace_encoding(&mut self, encoding: Encoding) -> SchemaResult<()> {
        if encoding.len() != self.len() {
            return Err(construction_err!(
                "column '{}' has {} rows, replacement encoding has {}",
                self.name,
                self.len(),
                encoding.len()
            ));
        }
        debug!(
            column = %self.name,
            from = self.encoding.encoding_type().name(),
            to = encoding.encoding_type().name(),
            "replaced column encoding"
        );
        self.encoding = encoding;
        Ok(())
    }

    /// Cast a raw value to this column's type
    pub fn cast_value(&self, raw: &Value, config: &CastConfig) -> SchemaResult<Value> {
        cast_with(raw, &self.logical_type, config).map_err(|e| e.in_column(self.name.as_str()))
    }
}
