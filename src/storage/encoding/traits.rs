//! Column encoding trait
//!
//! All encoding strategies implement this trait to provide a uniform interface
//! for length, materialization and bulk transformation.

use crate::common::error::SchemaResult;
use crate::storage::encoding::types::EncodingType;
use crate::types::Value;
use std::sync::Arc;

/// Fallible elementwise transform applied to stored values
pub type ValueTransform = Arc<dyn Fn(&Value) -> SchemaResult<Value> + Send + Sync>;

/// Column encoding trait
///
/// Defines the interface that all encoding strategies must implement.
pub trait ColumnEncoding: Send + Sync {
    /// Number of logical rows
    fn len(&self) -> usize;

    /// Whether the encoding holds no rows
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Expands the encoding into one value per row
    fn materialize(&self) -> SchemaResult<Vec<Value>>;

    /// Value at a single row, `None` past the end
    fn value_at(&self, index: usize) -> SchemaResult<Option<Value>>;

    /// Returns the strategy identifier
    fn encoding_type(&self) -> EncodingType;

    /// Applies `transform` to every stored non-null value, keeping the length
    ///
    /// On error the encoding is left unchanged.
    fn map_values(&mut self, transform: ValueTransform) -> SchemaResult<()>;
}

/// Applies a transform unless the value is null
pub(crate) fn apply_transform(transform: &ValueTransform, value: &Value) -> SchemaResult<Value> {
    if value.is_null() {
        Ok(Value::Null)
    } else {
        transform(value)
    }
}
