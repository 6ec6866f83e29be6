use crate::common::config::{CastConfig, MAX_DECIMAL_PRECISION};
use crate::common::error::{SchemaError, SchemaResult};
use crate::types::cast;
use crate::types::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::mem;

/// Logical types represent the schema-level types that columns are declared with.
/// Parameters live inside the variants that need them, so a type is fully
/// described by its value and never shares state with another declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalType {
    /// NULL type
    Null,
    /// Boolean type (TRUE/FALSE)
    Boolean,
    /// 8-bit signed integer
    Int8,
    /// 8-bit unsigned integer
    UInt8,
    /// 16-bit signed integer
    Int16,
    /// 16-bit unsigned integer
    UInt16,
    /// 32-bit signed integer
    Int32,
    /// 32-bit unsigned integer
    UInt32,
    /// 64-bit signed integer
    Int64,
    /// 64-bit unsigned integer
    UInt64,
    /// 16-bit floating point
    Float16,
    /// 32-bit floating point
    Float32,
    /// 64-bit floating point
    Float64,
    /// Decimal, optionally with precision and scale (both or neither)
    Decimal {
        precision: Option<u8>,
        scale: Option<u8>,
    },
    /// Calendar date
    Date,
    /// Time of day
    Time,
    /// Date and time without timezone
    Timestamp,
    /// Duration
    Interval,
    /// Variable length text, optionally bounded in bytes
    Varchar { length: Option<usize> },
    /// Variable length binary, optionally bounded in bytes
    Varbinary { length: Option<usize> },
    /// Array, optionally with a scalar element type
    Array(Option<Box<LogicalType>>),
    /// Structured value without declared fields
    Struct,
    /// Opaque binary holding serialized structured data
    Jsonb,
    /// Placeholder for a column whose type is not known yet
    Missing,
}

impl LogicalType {
    /// Unbounded VARCHAR
    pub fn varchar() -> Self {
        LogicalType::Varchar { length: None }
    }

    /// Unbounded VARBINARY
    pub fn varbinary() -> Self {
        LogicalType::Varbinary { length: None }
    }

    /// DECIMAL without precision or scale
    pub fn decimal_default() -> Self {
        LogicalType::Decimal {
            precision: None,
            scale: None,
        }
    }

    /// Validate if a decimal precision and scale are valid
    pub fn validate_decimal(precision: u32, scale: u32) -> SchemaResult<()> {
        if precision > MAX_DECIMAL_PRECISION {
            return Err(SchemaError::InvalidParameter(format!(
                "Invalid precision '{}' for DECIMAL type",
                precision
            )));
        }
        if scale > precision {
            return Err(SchemaError::InvalidParameter(format!(
                "Decimal scale ({}) cannot be greater than precision ({})",
                scale, precision
            )));
        }
        Ok(())
    }

    /// Create a decimal type with validation
    pub fn decimal(precision: u32, scale: u32) -> SchemaResult<LogicalType> {
        Self::validate_decimal(precision, scale)?;
        Ok(LogicalType::Decimal {
            precision: Some(precision as u8),
            scale: Some(scale as u8),
        })
    }

    /// Create a bounded VARCHAR
    pub fn varchar_with_length(length: usize) -> SchemaResult<LogicalType> {
        Self::validate_length("VARCHAR", length)?;
        Ok(LogicalType::Varchar {
            length: Some(length),
        })
    }

    /// Create a bounded VARBINARY
    pub fn varbinary_with_length(length: usize) -> SchemaResult<LogicalType> {
        Self::validate_length("VARBINARY", length)?;
        Ok(LogicalType::Varbinary {
            length: Some(length),
        })
    }

    fn validate_length(name: &str, length: usize) -> SchemaResult<()> {
        if length == 0 {
            return Err(SchemaError::InvalidParameter(format!(
                "Length for {} must be greater than zero",
                name
            )));
        }
        Ok(())
    }

    /// Create an array of a scalar element type
    pub fn array_of(element: LogicalType) -> SchemaResult<LogicalType> {
        if element.is_complex() || matches!(element, LogicalType::Null | LogicalType::Missing) {
            return Err(SchemaError::InvalidParameter(format!(
                "Invalid element type '{}' for ARRAY type",
                element
            )));
        }
        Ok(LogicalType::Array(Some(Box::new(element))))
    }

    /// Base name of the type, without parameters
    pub fn name(&self) -> &'static str {
        match self {
            LogicalType::Null => "NULL",
            LogicalType::Boolean => "BOOLEAN",
            LogicalType::Int8 => "INT8",
            LogicalType::UInt8 => "UINT8",
            LogicalType::Int16 => "INT16",
            LogicalType::UInt16 => "UINT16",
            LogicalType::Int32 => "INT32",
            LogicalType::UInt32 => "UINT32",
            LogicalType::Int64 => "INT64",
            LogicalType::UInt64 => "UINT64",
            LogicalType::Float16 => "FLOAT16",
            LogicalType::Float32 => "FLOAT32",
            LogicalType::Float64 => "FLOAT64",
            LogicalType::Decimal { .. } => "DECIMAL",
            LogicalType::Date => "DATE",
            LogicalType::Time => "TIME",
            LogicalType::Timestamp => "TIMESTAMP",
            LogicalType::Interval => "INTERVAL",
            LogicalType::Varchar { .. } => "VARCHAR",
            LogicalType::Varbinary { .. } => "VARBINARY",
            LogicalType::Array(_) => "ARRAY",
            LogicalType::Struct => "STRUCT",
            LogicalType::Jsonb => "JSONB",
            LogicalType::Missing => "MISSING",
        }
    }

    /// Whether both types share a tag, ignoring parameters
    pub fn same_kind(&self, other: &LogicalType) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }

    /// Check if this type is numeric (booleans count as numeric)
    pub fn is_numeric(&self) -> bool {
        matches!(self, LogicalType::Boolean | LogicalType::Decimal { .. })
            || self.is_integral()
            || self.is_floating_point()
    }

    /// Check if this type is a fixed-width integer
    pub fn is_integral(&self) -> bool {
        matches!(
            self,
            LogicalType::Int8
                | LogicalType::UInt8
                | LogicalType::Int16
                | LogicalType::UInt16
                | LogicalType::Int32
                | LogicalType::UInt32
                | LogicalType::Int64
                | LogicalType::UInt64
        )
    }

    /// Check if this type is floating point
    pub fn is_floating_point(&self) -> bool {
        matches!(
            self,
            LogicalType::Float16 | LogicalType::Float32 | LogicalType::Float64
        )
    }

    /// Check if this type is temporal (date/time related)
    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            LogicalType::Date | LogicalType::Time | LogicalType::Timestamp
        )
    }

    /// Check if this type is an arbitrary length string or binary
    pub fn is_large_object(&self) -> bool {
        matches!(
            self,
            LogicalType::Varchar { .. } | LogicalType::Varbinary { .. }
        )
    }

    /// Check if this type is complex (cannot be an array element)
    pub fn is_complex(&self) -> bool {
        matches!(
            self,
            LogicalType::Array(_) | LogicalType::Struct | LogicalType::Jsonb | LogicalType::Interval
        )
    }

    /// Element type of an array type
    pub fn element_type(&self) -> Option<&LogicalType> {
        match self {
            LogicalType::Array(Some(element)) => Some(element),
            _ => None,
        }
    }

    /// Declared byte length of a bounded VARCHAR/VARBINARY
    pub fn length(&self) -> Option<usize> {
        match self {
            LogicalType::Varchar { length } | LogicalType::Varbinary { length } => *length,
            _ => None,
        }
    }

    /// Declared (precision, scale) of a DECIMAL
    pub fn precision_scale(&self) -> Option<(u8, u8)> {
        match self {
            LogicalType::Decimal {
                precision: Some(precision),
                scale: Some(scale),
            } => Some((*precision, *scale)),
            _ => None,
        }
    }

    /// Cast a raw value into the canonical value for this type
    pub fn cast(&self, value: &Value) -> SchemaResult<Value> {
        cast::cast(value, self)
    }

    /// Cast a raw value with explicit settings
    pub fn cast_with(&self, value: &Value, config: &CastConfig) -> SchemaResult<Value> {
        cast::cast_with(value, self, config)
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalType::Decimal {
                precision: Some(precision),
                scale: Some(scale),
            } => write!(f, "DECIMAL({},{})", precision, scale),
            LogicalType::Varchar {
                length: Some(length),
            } => write!(f, "VARCHAR[{}]", length),
            LogicalType::Varbinary {
                length: Some(length),
            } => write!(f, "VARBINARY[{}]", length),
            LogicalType::Array(Some(element)) => write!(f, "ARRAY<{}>", element),
            other => write!(f, "{}", other.name()),
        }
    }
}
