use crate::common::error::{SchemaError, SchemaResult};
use crate::types::logical_type::LogicalType;
use base64::engine::general_purpose::STANDARD;
use bigdecimal::BigDecimal;
use base64::Engine;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use half::f16;
use ordered_float::OrderedFloat;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single raw or canonical column value.
///
/// Raw values arrive from ingestion in whatever shape the source produced;
/// casting through a [`LogicalType`] yields the canonical variant for that
/// type. Floats compare and hash by their ordered representation, so values
/// can be used as dictionary keys.
#[derive(Debug, Clone)]
pub enum Value {
    /// Null value (the type is stored on the column)
    Null,
    Boolean(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float16(f16),
    Float32(f32),
    Float64(f64),
    /// Arbitrary-precision decimal, scale carried by the value
    Decimal(BigDecimal),
    Date(NaiveDate),
    /// Time of day, no timezone
    Time(NaiveTime),
    /// Date and time, no timezone
    Timestamp(NaiveDateTime),
    Interval(Duration),
    Varchar(String),
    Varbinary(Vec<u8>),
    /// Ordered sequence of values
    Array(Vec<Value>),
    /// Named fields in insertion order
    Struct(Vec<(String, Value)>),
}

impl Value {
    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Create a varchar value
    pub fn varchar(value: impl Into<String>) -> Self {
        Value::Varchar(value.into())
    }

    /// Create a varbinary value
    pub fn varbinary(value: impl Into<Vec<u8>>) -> Self {
        Value::Varbinary(value.into())
    }

    /// Create an array value
    pub fn array(values: Vec<Value>) -> Self {
        Value::Array(values)
    }

    /// Create a struct value
    pub fn struct_(fields: Vec<(String, Value)>) -> Self {
        Value::Struct(fields)
    }

    /// Get the logical type that describes this value
    pub fn logical_type(&self) -> LogicalType {
        match self {
            Value::Null => LogicalType::Null,
            Value::Boolean(_) => LogicalType::Boolean,
            Value::Int8(_) => LogicalType::Int8,
            Value::Int16(_) => LogicalType::Int16,
            Value::Int32(_) => LogicalType::Int32,
            Value::Int64(_) => LogicalType::Int64,
            Value::UInt8(_) => LogicalType::UInt8,
            Value::UInt16(_) => LogicalType::UInt16,
            Value::UInt32(_) => LogicalType::UInt32,
            Value::UInt64(_) => LogicalType::UInt64,
            Value::Float16(_) => LogicalType::Float16,
            Value::Float32(_) => LogicalType::Float32,
            Value::Float64(_) => LogicalType::Float64,
            Value::Decimal(_) => LogicalType::decimal_default(),
            Value::Date(_) => LogicalType::Date,
            Value::Time(_) => LogicalType::Time,
            Value::Timestamp(_) => LogicalType::Timestamp,
            Value::Interval(_) => LogicalType::Interval,
            Value::Varchar(_) => LogicalType::varchar(),
            Value::Varbinary(_) => LogicalType::varbinary(),
            Value::Array(_) => LogicalType::Array(None),
            Value::Struct(_) => LogicalType::Struct,
        }
    }

    /// Try to get the value as a boolean
    pub fn try_as_boolean(&self) -> SchemaResult<bool> {
        match self {
            Value::Boolean(b) => Ok(*b),
            _ => Err(self.mismatch("BOOLEAN")),
        }
    }

    /// Try to get the value as an i64, widening smaller integers
    pub fn try_as_i64(&self) -> SchemaResult<i64> {
        match self {
            Value::Int8(v) => Ok(*v as i64),
            Value::Int16(v) => Ok(*v as i64),
            Value::Int32(v) => Ok(*v as i64),
            Value::Int64(v) => Ok(*v),
            Value::UInt8(v) => Ok(*v as i64),
            Value::UInt16(v) => Ok(*v as i64),
            Value::UInt32(v) => Ok(*v as i64),
            Value::UInt64(v) => i64::try_from(*v).map_err(|_| SchemaError::Range {
                type_name: "INT64",
                value: v.to_string(),
            }),
            _ => Err(self.mismatch("INT64")),
        }
    }

    /// Try to get the value as an f64
    pub fn try_as_f64(&self) -> SchemaResult<f64> {
        match self {
            Value::Float16(v) => Ok(v.to_f64()),
            Value::Float32(v) => Ok(*v as f64),
            Value::Float64(v) => Ok(*v),
            _ => self.try_as_i64().map(|v| v as f64),
        }
    }

    /// Try to get the value as a string slice
    pub fn try_as_str(&self) -> SchemaResult<&str> {
        match self {
            Value::Varchar(s) => Ok(s),
            _ => Err(self.mismatch("VARCHAR")),
        }
    }

    /// Try to get the value as an array
    pub fn try_as_array(&self) -> SchemaResult<&[Value]> {
        match self {
            Value::Array(values) => Ok(values),
            _ => Err(self.mismatch("ARRAY")),
        }
    }

    fn mismatch(&self, expected: &str) -> SchemaError {
        SchemaError::InvalidValue {
            value: self.to_string(),
            reason: format!("expected {}, found {}", expected, self.logical_type()),
        }
    }

    /// Render as JSON. Decimals become strings to keep their digits, binary
    /// becomes base64 and intervals become seconds.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value as Json;
        match self {
            Value::Null => Json::Null,
            Value::Boolean(b) => Json::Bool(*b),
            Value::Int8(v) => Json::from(*v),
            Value::Int16(v) => Json::from(*v),
            Value::Int32(v) => Json::from(*v),
            Value::Int64(v) => Json::from(*v),
            Value::UInt8(v) => Json::from(*v),
            Value::UInt16(v) => Json::from(*v),
            Value::UInt32(v) => Json::from(*v),
            Value::UInt64(v) => Json::from(*v),
            Value::Float16(v) => float_json(v.to_f64()),
            Value::Float32(v) => float_json(*v as f64),
            Value::Float64(v) => float_json(*v),
            Value::Decimal(d) => Json::String(d.to_plain_string()),
            Value::Date(d) => Json::String(d.format("%Y-%m-%d").to_string()),
            Value::Time(t) => Json::String(t.to_string()),
            Value::Timestamp(ts) => Json::String(ts.format("%Y-%m-%dT%H:%M:%S%.f").to_string()),
            Value::Interval(d) => float_json(interval_seconds(d)),
            Value::Varchar(s) => Json::String(s.clone()),
            Value::Varbinary(b) => Json::String(STANDARD.encode(b)),
            Value::Array(values) => Json::Array(values.iter().map(Value::to_json).collect()),
            Value::Struct(fields) => Json::Object(
                fields
                    .iter()
                    .map(|(name, value)| (name.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }

    /// Build a raw value from decoded JSON
    pub fn from_json(json: &serde_json::Value) -> Value {
        use serde_json::Value as Json;
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Boolean(*b),
            Json::Number(n) => {
                if let Some(v) = n.as_i64() {
                    Value::Int64(v)
                } else if let Some(v) = n.as_u64() {
                    Value::UInt64(v)
                } else {
                    n.as_f64().map(Value::Float64).unwrap_or(Value::Null)
                }
            }
            Json::String(s) => Value::Varchar(s.clone()),
            Json::Array(items) => Value::Array(items.iter().map(Value::from_json).collect()),
            Json::Object(map) => Value::Struct(
                map.iter()
                    .map(|(name, value)| (name.clone(), Value::from_json(value)))
                    .collect(),
            ),
        }
    }
}

fn float_json(value: f64) -> serde_json::Value {
    serde_json::Number::from_f64(value)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

fn interval_seconds(duration: &Duration) -> f64 {
    match duration.num_microseconds() {
        Some(micros) => micros as f64 / 1_000_000.0,
        None => duration.num_milliseconds() as f64 / 1_000.0,
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Int8(a), Value::Int8(b)) => a == b,
            (Value::Int16(a), Value::Int16(b)) => a == b,
            (Value::Int32(a), Value::Int32(b)) => a == b,
            (Value::Int64(a), Value::Int64(b)) => a == b,
            (Value::UInt8(a), Value::UInt8(b)) => a == b,
            (Value::UInt16(a), Value::UInt16(b)) => a == b,
            (Value::UInt32(a), Value::UInt32(b)) => a == b,
            (Value::UInt64(a), Value::UInt64(b)) => a == b,
            (Value::Float16(a), Value::Float16(b)) => {
                OrderedFloat(a.to_f32()) == OrderedFloat(b.to_f32())
            }
            (Value::Float32(a), Value::Float32(b)) => OrderedFloat(*a) == OrderedFloat(*b),
            (Value::Float64(a), Value::Float64(b)) => OrderedFloat(*a) == OrderedFloat(*b),
            (Value::Decimal(a), Value::Decimal(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Time(a), Value::Time(b)) => a == b,
            (Value::Timestamp(a), Value::Timestamp(b)) => a == b,
            (Value::Interval(a), Value::Interval(b)) => a == b,
            (Value::Varchar(a), Value::Varchar(b)) => a == b,
            (Value::Varbinary(a), Value::Varbinary(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Struct(a), Value::Struct(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Boolean(v) => v.hash(state),
            Value::Int8(v) => v.hash(state),
            Value::Int16(v) => v.hash(state),
            Value::Int32(v) => v.hash(state),
            Value::Int64(v) => v.hash(state),
            Value::UInt8(v) => v.hash(state),
            Value::UInt16(v) => v.hash(state),
            Value::UInt32(v) => v.hash(state),
            Value::UInt64(v) => v.hash(state),
            Value::Float16(v) => OrderedFloat(v.to_f32()).hash(state),
            Value::Float32(v) => OrderedFloat(*v).hash(state),
            Value::Float64(v) => OrderedFloat(*v).hash(state),
            Value::Decimal(v) => v.hash(state),
            Value::Date(v) => v.hash(state),
            Value::Time(v) => v.hash(state),
            Value::Timestamp(v) => v.hash(state),
            Value::Interval(v) => v.hash(state),
            Value::Varchar(v) => v.hash(state),
            Value::Varbinary(v) => v.hash(state),
            Value::Array(v) => v.hash(state),
            Value::Struct(v) => v.hash(state),
        }
    }
}

/// Plain textual rendering, as used when a value is stored as VARCHAR
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Int8(v) => write!(f, "{}", v),
            Value::Int16(v) => write!(f, "{}", v),
            Value::Int32(v) => write!(f, "{}", v),
            Value::Int64(v) => write!(f, "{}", v),
            Value::UInt8(v) => write!(f, "{}", v),
            Value::UInt16(v) => write!(f, "{}", v),
            Value::UInt32(v) => write!(f, "{}", v),
            Value::UInt64(v) => write!(f, "{}", v),
            Value::Float16(v) => write!(f, "{}", v),
            Value::Float32(v) => write!(f, "{}", v),
            Value::Float64(v) => write!(f, "{}", v),
            Value::Decimal(d) => write!(f, "{}", d.to_plain_string()),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::Time(t) => write!(f, "{}", t),
            Value::Timestamp(ts) => write!(f, "{}", ts),
            Value::Interval(d) => write!(f, "{}", d),
            Value::Varchar(s) => write!(f, "{}", s),
            Value::Varbinary(b) => write!(f, "{}", String::from_utf8_lossy(b)),
            Value::Array(_) | Value::Struct(_) => write!(f, "{}", self.to_json()),
        }
    }
}

macro_rules! impl_from {
    ($($source:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$source> for Value {
                fn from(value: $source) -> Self {
                    Value::$variant(value)
                }
            }
        )*
    };
}

impl_from! {
    bool => Boolean,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
    f16 => Float16,
    f32 => Float32,
    f64 => Float64,
    BigDecimal => Decimal,
    NaiveDate => Date,
    NaiveTime => Time,
    NaiveDateTime => Timestamp,
    Duration => Interval,
    String => Varchar,
    Vec<u8> => Varbinary,
    Vec<Value> => Array,
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Varchar(value.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}
