//! Column encoding module
//!
//! Compact storage strategies for column values. Every strategy shares the
//! [`ColumnEncoding`] contract, and [`Encoding`] is the closed set a column
//! holds.
//!
//! ## Strategies:
//!
//! - **Constant**: one value broadcast to every row
//! - **Function**: values produced by a generator, re-evaluated on every materialize
//! - **Dictionary**: distinct values table plus one index per row
//! - **RunLength**: (value, length) pairs for sorted/repeated data
//! - **Sparse**: non-null values plus their row positions
//!
//! ## Automatic Selection:
//!
//! Use `EncodingSelector` or `auto_encode()` to choose between dictionary,
//! run-length and sparse storage for raw values.
//!
//! ## Usage Example:
//!
//! ```ignore
//! use prism_types::storage::encoding::*;
//!
//! let values = vec![Value::varchar("a"), Value::varchar("a"), Value::Null];
//! let encoding = auto_encode(&values)?;
//! assert_eq!(encoding.materialize()?, values);
//! ```

pub mod analyze;
pub mod constant;
pub mod dictionary;
pub mod function;
pub mod rle;
pub mod sparse;
pub mod traits;
pub mod types;

pub use analyze::{auto_encode, select_encoding_type, EncodingSelector};
pub use constant::ConstantEncoding;
pub use dictionary::DictionaryEncoding;
pub use function::{FunctionEncoding, ValueGenerator};
pub use rle::{Run, RunLengthEncoding};
pub use sparse::SparseEncoding;
pub use traits::{ColumnEncoding, ValueTransform};
pub use types::{EncodingAnalysis, EncodingType};

use crate::common::error::SchemaResult;
use crate::types::Value;

/// The encoding a column holds
#[derive(Debug, Clone)]
pub enum Encoding {
    Constant(ConstantEncoding),
    Function(FunctionEncoding),
    Dictionary(DictionaryEncoding),
    RunLength(RunLengthEncoding),
    Sparse(SparseEncoding),
}

impl Encoding {
    fn inner(&self) -> &dyn ColumnEncoding {
        match self {
            Encoding::Constant(e) => e,
            Encoding::Function(e) => e,
            Encoding::Dictionary(e) => e,
            Encoding::RunLength(e) => e,
            Encoding::Sparse(e) => e,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn ColumnEncoding {
        match self {
            Encoding::Constant(e) => e,
            Encoding::Function(e) => e,
            Encoding::Dictionary(e) => e,
            Encoding::RunLength(e) => e,
            Encoding::Sparse(e) => e,
        }
    }
}

impl ColumnEncoding for Encoding {
    fn len(&self) -> usize {
        self.inner().len()
    }

    fn materialize(&self) -> SchemaResult<Vec<Value>> {
        self.inner().materialize()
    }

    fn value_at(&self, index: usize) -> SchemaResult<Option<Value>> {
        self.inner().value_at(index)
    }

    fn encoding_type(&self) -> EncodingType {
        self.inner().encoding_type()
    }

    fn map_values(&mut self, transform: ValueTransform) -> SchemaResult<()> {
        self.inner_mut().map_values(transform)
    }
}

impl From<ConstantEncoding> for Encoding {
    fn from(encoding: ConstantEncoding) -> Self {
        Encoding::Constant(encoding)
    }
}

impl From<FunctionEncoding> for Encoding {
    fn from(encoding: FunctionEncoding) -> Self {
        Encoding::Function(encoding)
    }
}

impl From<DictionaryEncoding> for Encoding {
    fn from(encoding: DictionaryEncoding) -> Self {
        Encoding::Dictionary(encoding)
    }
}

impl From<RunLengthEncoding> for Encoding {
    fn from(encoding: RunLengthEncoding) -> Self {
        Encoding::RunLength(encoding)
    }
}

impl From<SparseEncoding> for Encoding {
    fn from(encoding: SparseEncoding) -> Self {
        Encoding::Sparse(encoding)
    }
}
