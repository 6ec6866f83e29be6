//! PrismDB types - schema type catalog and column encodings
//!
//! Turns declared column types and raw ingested values into canonical values,
//! resolves a common type across conflicting declarations, and stores column
//! payloads in compact encodings.
//!
pub mod common;
pub mod interop;
pub mod storage;
pub mod types;

// Re-export common types for convenience
pub use common::{
    CastConfig, DeprecationNotice, DiagnosticSink, EncodingConfig, ErrorKind, SchemaConfig,
    SchemaError, SchemaResult,
};

// Re-export type system for convenience
pub use types::{
    cast, cast_with, find_compatible_type, find_compatible_type_or, parse_declaration,
    parse_optional_declaration, LogicalType, ParsedType, Value,
};

// Re-export storage system for convenience
pub use storage::{
    auto_encode, Column, ColumnEncoding, ConstantEncoding, DictionaryEncoding, Encoding,
    EncodingSelector, EncodingType, FunctionEncoding, RunLengthEncoding, SparseEncoding,
};

// Re-export interop for convenience
pub use interop::ColumnarTypeBridge;
#[cfg(feature = "arrow")]
pub use interop::ArrowTypeBridge;
