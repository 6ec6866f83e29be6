//! Mapping between logical types and external columnar type systems
//!
//! A bridge converts a [`LogicalType`] into the type another columnar library
//! uses and back. The Arrow bridge is available with the `arrow` feature.

use crate::common::error::SchemaResult;
use crate::types::LogicalType;

#[cfg(feature = "arrow")]
pub mod arrow_bridge;

#[cfg(feature = "arrow")]
pub use self::arrow_bridge::ArrowTypeBridge;

/// Two-way mapping to an external column type
pub trait ColumnarTypeBridge {
    /// The external type representation
    type External;

    /// External type used to store a column of `logical_type`
    fn to_external(&self, logical_type: &LogicalType) -> SchemaResult<Self::External>;

    /// Logical type describing a column stored as `external`
    fn from_external(&self, external: &Self::External) -> SchemaResult<LogicalType>;
}
