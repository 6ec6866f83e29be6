//! Arrow type mapping

use crate::common::error::{SchemaError, SchemaResult};
use crate::interop::ColumnarTypeBridge;
use crate::types::LogicalType;
use arrow::datatypes::{DataType as ArrowDataType, Field, IntervalUnit, TimeUnit};
use std::sync::Arc;

/// Precision used for decimals declared without one
pub const DEFAULT_ARROW_DECIMAL_PRECISION: u8 = 28;

/// Scale used for decimals declared without one
pub const DEFAULT_ARROW_DECIMAL_SCALE: i8 = 10;

/// Maps logical types to and from `arrow::datatypes::DataType`
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrowTypeBridge;

impl ArrowTypeBridge {
    pub fn new() -> Self {
        Self
    }

    /// Named, typed fields of an Arrow struct
    pub fn struct_fields(&self, arrow_type: &ArrowDataType) -> SchemaResult<Vec<(String, LogicalType)>> {
        match arrow_type {
            ArrowDataType::Struct(fields) => fields
                .iter()
                .map(|field| Ok((field.name().clone(), self.from_external(field.data_type())?)))
                .collect(),
            other => Err(SchemaError::InvalidParameter(format!(
                "Arrow type {} is not a struct",
                other
            ))),
        }
    }

    fn list_element(&self, field: &Field) -> SchemaResult<LogicalType> {
        let element = self.from_external(field.data_type())?;
        // nested or structured elements stay undeclared
        Ok(match LogicalType::array_of(element) {
            Ok(array) => array,
            Err(_) => LogicalType::Array(None),
        })
    }

    fn decimal(&self, precision: u8, scale: i8) -> SchemaResult<LogicalType> {
        let scale = u32::try_from(scale).map_err(|_| {
            SchemaError::InvalidParameter(format!("Invalid scale '{}' for DECIMAL type", scale))
        })?;
        LogicalType::decimal(u32::from(precision), scale)
    }
}

impl ColumnarTypeBridge for ArrowTypeBridge {
    type External = ArrowDataType;

    fn to_external(&self, logical_type: &LogicalType) -> SchemaResult<ArrowDataType> {
        Ok(match logical_type {
            LogicalType::Null => ArrowDataType::Null,
            LogicalType::Boolean => ArrowDataType::Boolean,
            LogicalType::Int8 => ArrowDataType::Int8,
            LogicalType::Int16 => ArrowDataType::Int16,
            LogicalType::Int32 => ArrowDataType::Int32,
            LogicalType::Int64 => ArrowDataType::Int64,
            LogicalType::UInt8 => ArrowDataType::UInt8,
            LogicalType::UInt16 => ArrowDataType::UInt16,
            LogicalType::UInt32 => ArrowDataType::UInt32,
            LogicalType::UInt64 => ArrowDataType::UInt64,
            LogicalType::Float16 => ArrowDataType::Float16,
            LogicalType::Float32 => ArrowDataType::Float32,
            LogicalType::Float64 => ArrowDataType::Float64,
            LogicalType::Decimal { precision, scale } => ArrowDataType::Decimal128(
                precision.unwrap_or(DEFAULT_ARROW_DECIMAL_PRECISION),
                scale
                    .map(|s| s as i8)
                    .unwrap_or(DEFAULT_ARROW_DECIMAL_SCALE),
            ),
            LogicalType::Date => ArrowDataType::Date64,
            LogicalType::Time => ArrowDataType::Time32(TimeUnit::Millisecond),
            LogicalType::Timestamp => ArrowDataType::Timestamp(TimeUnit::Microsecond, None),
            LogicalType::Interval => ArrowDataType::Interval(IntervalUnit::MonthDayNano),
            LogicalType::Varchar { .. } | LogicalType::Missing => ArrowDataType::Utf8,
            LogicalType::Varbinary { .. } | LogicalType::Jsonb | LogicalType::Struct => {
                ArrowDataType::Binary
            }
            LogicalType::Array(element) => {
                let element = match element {
                    Some(element) => self.to_external(element)?,
                    None => ArrowDataType::Utf8,
                };
                ArrowDataType::List(Arc::new(Field::new("item", element, true)))
            }
        })
    }

    fn from_external(&self, arrow_type: &ArrowDataType) -> SchemaResult<LogicalType> {
        match arrow_type {
            ArrowDataType::Null => Ok(LogicalType::Null),
            ArrowDataType::Boolean => Ok(LogicalType::Boolean),
            ArrowDataType::Int8 => Ok(LogicalType::Int8),
            ArrowDataType::Int16 => Ok(LogicalType::Int16),
            ArrowDataType::Int32 => Ok(LogicalType::Int32),
            ArrowDataType::Int64 => Ok(LogicalType::Int64),
            ArrowDataType::UInt8 => Ok(LogicalType::UInt8),
            ArrowDataType::UInt16 => Ok(LogicalType::UInt16),
            ArrowDataType::UInt32 => Ok(LogicalType::UInt32),
            ArrowDataType::UInt64 => Ok(LogicalType::UInt64),
            ArrowDataType::Float16 => Ok(LogicalType::Float16),
            ArrowDataType::Float32 => Ok(LogicalType::Float32),
            ArrowDataType::Float64 => Ok(LogicalType::Float64),
            ArrowDataType::Decimal128(precision, scale)
            | ArrowDataType::Decimal256(precision, scale) => self.decimal(*precision, *scale),
            ArrowDataType::Date32 | ArrowDataType::Date64 => Ok(LogicalType::Date),
            ArrowDataType::Time32(_) | ArrowDataType::Time64(_) => Ok(LogicalType::Time),
            ArrowDataType::Timestamp(_, _) => Ok(LogicalType::Timestamp),
            ArrowDataType::Interval(_) | ArrowDataType::Duration(_) => Ok(LogicalType::Interval),
            ArrowDataType::Utf8 | ArrowDataType::LargeUtf8 | ArrowDataType::Utf8View => {
                Ok(LogicalType::varchar())
            }
            ArrowDataType::Binary
            | ArrowDataType::LargeBinary
            | ArrowDataType::BinaryView
            | ArrowDataType::FixedSizeBinary(_) => Ok(LogicalType::varbinary()),
            ArrowDataType::List(field)
            | ArrowDataType::LargeList(field)
            | ArrowDataType::FixedSizeList(field, _) => self.list_element(field),
            ArrowDataType::Struct(fields) if !fields.is_empty() => Ok(LogicalType::Struct),
            ArrowDataType::Struct(_) | ArrowDataType::Map(_, _) => Ok(LogicalType::Jsonb),
            other => Err(SchemaError::UnknownType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::datatypes::Fields;

    #[test]
    fn test_scalar_mappings() {
        let bridge = ArrowTypeBridge::new();
        assert_eq!(
            bridge.to_external(&LogicalType::Int32).unwrap(),
            ArrowDataType::Int32
        );
        assert_eq!(
            bridge.to_external(&LogicalType::decimal(10, 2).unwrap()).unwrap(),
            ArrowDataType::Decimal128(10, 2)
        );
        assert_eq!(
            bridge.to_external(&LogicalType::decimal_default()).unwrap(),
            ArrowDataType::Decimal128(28, 10)
        );
        assert_eq!(
            bridge.to_external(&LogicalType::Jsonb).unwrap(),
            ArrowDataType::Binary
        );
        assert_eq!(
            bridge.to_external(&LogicalType::Missing).unwrap(),
            ArrowDataType::Utf8
        );
    }

    #[test]
    fn test_round_trip_of_declared_types() {
        let bridge = ArrowTypeBridge::new();
        for ty in [
            LogicalType::Boolean,
            LogicalType::UInt16,
            LogicalType::Float16,
            LogicalType::decimal(12, 3).unwrap(),
            LogicalType::Date,
            LogicalType::Time,
            LogicalType::Timestamp,
            LogicalType::Interval,
            LogicalType::varchar(),
            LogicalType::varbinary(),
            LogicalType::array_of(LogicalType::Int64).unwrap(),
        ] {
            let external = bridge.to_external(&ty).unwrap();
            assert_eq!(bridge.from_external(&external).unwrap(), ty);
        }
    }

    #[test]
    fn test_structs_and_maps() {
        let bridge = ArrowTypeBridge::new();
        let fields = Fields::from(vec![
            Field::new("id", ArrowDataType::Int64, false),
            Field::new("name", ArrowDataType::Utf8, true),
        ]);
        let struct_type = ArrowDataType::Struct(fields);
        assert_eq!(bridge.from_external(&struct_type).unwrap(), LogicalType::Struct);
        assert_eq!(
            bridge.struct_fields(&struct_type).unwrap(),
            vec![
                ("id".to_string(), LogicalType::Int64),
                ("name".to_string(), LogicalType::varchar()),
            ]
        );

        assert_eq!(
            bridge
                .from_external(&ArrowDataType::Struct(Fields::empty()))
                .unwrap(),
            LogicalType::Jsonb
        );
    }

    #[test]
    fn test_other_encodings() {
        let bridge = ArrowTypeBridge::new();
        assert_eq!(
            bridge.from_external(&ArrowDataType::LargeUtf8).unwrap(),
            LogicalType::varchar()
        );
        assert_eq!(
            bridge
                .from_external(&ArrowDataType::Duration(TimeUnit::Second))
                .unwrap(),
            LogicalType::Interval
        );
        let nested = ArrowDataType::List(Arc::new(Field::new(
            "item",
            ArrowDataType::List(Arc::new(Field::new("item", ArrowDataType::Int8, true))),
            true,
        )));
        assert_eq!(bridge.from_external(&nested).unwrap(), LogicalType::Array(None));
        assert!(bridge
            .from_external(&ArrowDataType::Decimal128(10, -2))
            .is_err());
    }
}
