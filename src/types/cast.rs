//! Conversion of raw ingested values into canonical values of a logical type
//!
//! Casting never looks at the column a value belongs to; callers attach the
//! column name to errors (see [`SchemaError::in_column`]).

use crate::common::config::{CastConfig, MAX_DECIMAL_SCALE};
use crate::common::error::{SchemaError, SchemaResult};
use crate::invalid_value_err;
use crate::types::logical_type::LogicalType;
use crate::types::temporal::parse_iso;
use crate::types::value::Value;
use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive};
use chrono::Duration;
use half::f16;
use std::str::FromStr;

/// Text spellings (compared case-insensitively) that read as `true`
const BOOLEAN_STRINGS: [&str; 7] = ["TRUE", "ON", "YES", "1", "1.0", "T", "Y"];

const MICROS_PER_DAY: f64 = 86_400_000_000.0;

/// Cast with the default configuration
pub fn cast(value: &Value, target: &LogicalType) -> SchemaResult<Value> {
    cast_with(value, target, &CastConfig::default())
}

/// Cast a raw value into the canonical value for `target`
pub fn cast_with(value: &Value, target: &LogicalType, config: &CastConfig) -> SchemaResult<Value> {
    if value.is_null() {
        return Ok(Value::Null);
    }

    match target {
        LogicalType::Null => Ok(Value::Null),
        LogicalType::Missing => Ok(value.clone()),
        LogicalType::Boolean => Ok(Value::Boolean(parse_boolean(value))),
        LogicalType::Int8
        | LogicalType::Int16
        | LogicalType::Int32
        | LogicalType::Int64
        | LogicalType::UInt8
        | LogicalType::UInt16
        | LogicalType::UInt32
        | LogicalType::UInt64 => cast_integer(value, target),
        LogicalType::Float16 => cast_float16(value),
        LogicalType::Float32 => cast_float32(value),
        LogicalType::Float64 => parse_float(value).map(Value::Float64),
        LogicalType::Decimal { precision, scale } => {
            let precision = precision
                .map(u32::from)
                .unwrap_or(config.default_decimal_precision);
            let scale = scale.map(u32::from).unwrap_or(config.default_decimal_scale);
            let parsed = parse_decimal(value)?;
            Ok(Value::Decimal(quantize(parsed, precision, scale)))
        }
        LogicalType::Date => parse_iso(value)
            .map(|ts| Value::Date(ts.date()))
            .ok_or_else(|| invalid_value_err!(value, "invalid date")),
        LogicalType::Time => parse_iso(value)
            .map(|ts| Value::Time(ts.time()))
            .ok_or_else(|| invalid_value_err!(value, "invalid time")),
        LogicalType::Timestamp => parse_iso(value)
            .map(Value::Timestamp)
            .ok_or_else(|| invalid_value_err!(value, "invalid timestamp")),
        LogicalType::Interval => cast_interval(value),
        LogicalType::Varchar { length } => {
            let bytes = to_bytes(value, *length)?;
            String::from_utf8(bytes)
                .map(Value::Varchar)
                .map_err(|_| invalid_value_err!(value, "invalid UTF-8 text"))
        }
        LogicalType::Varbinary { length } => to_bytes(value, *length).map(Value::Varbinary),
        LogicalType::Jsonb | LogicalType::Struct => to_bytes(value, None).map(Value::Varbinary),
        LogicalType::Array(element) => cast_array(value, element.as_deref(), config),
    }
}

/// Truthiness of a raw value; never fails
pub fn parse_boolean(value: &Value) -> bool {
    match value {
        Value::Boolean(b) => *b,
        Value::Varchar(text) => is_true_spelling(text),
        Value::Varbinary(bytes) => std::str::from_utf8(bytes)
            .map(is_true_spelling)
            .unwrap_or(false),
        Value::Decimal(d) => *d == BigDecimal::from(1),
        other => other.try_as_f64().map(|v| v == 1.0).unwrap_or(false),
    }
}

fn is_true_spelling(text: &str) -> bool {
    BOOLEAN_STRINGS
        .iter()
        .any(|spelling| spelling.eq_ignore_ascii_case(text))
}

fn cast_integer(value: &Value, target: &LogicalType) -> SchemaResult<Value> {
    let type_name = target.name();
    let wide = integer_value(value, type_name)?;
    let out_of_range = || SchemaError::Range {
        type_name,
        value: wide.to_string(),
    };
    let cast = match target {
        LogicalType::Int8 => i8::try_from(wide).map(Value::Int8),
        LogicalType::Int16 => i16::try_from(wide).map(Value::Int16),
        LogicalType::Int32 => i32::try_from(wide).map(Value::Int32),
        LogicalType::Int64 => i64::try_from(wide).map(Value::Int64),
        LogicalType::UInt8 => u8::try_from(wide).map(Value::UInt8),
        LogicalType::UInt16 => u16::try_from(wide).map(Value::UInt16),
        LogicalType::UInt32 => u32::try_from(wide).map(Value::UInt32),
        LogicalType::UInt64 => u64::try_from(wide).map(Value::UInt64),
        _ => return Err(invalid_value_err!(value, "{} is not an integer type", target)),
    };
    cast.map_err(|_| out_of_range())
}

/// Integer reading of a raw value; floats and decimals truncate toward zero
fn integer_value(value: &Value, type_name: &'static str) -> SchemaResult<i128> {
    match value {
        Value::Boolean(b) => Ok(i128::from(*b)),
        Value::Int8(v) => Ok(i128::from(*v)),
        Value::Int16(v) => Ok(i128::from(*v)),
        Value::Int32(v) => Ok(i128::from(*v)),
        Value::Int64(v) => Ok(i128::from(*v)),
        Value::UInt8(v) => Ok(i128::from(*v)),
        Value::UInt16(v) => Ok(i128::from(*v)),
        Value::UInt32(v) => Ok(i128::from(*v)),
        Value::UInt64(v) => Ok(i128::from(*v)),
        Value::Float16(v) => truncate_float(value, f16::to_f64(*v), type_name),
        Value::Float32(v) => truncate_float(value, *v as f64, type_name),
        Value::Float64(v) => truncate_float(value, *v, type_name),
        Value::Decimal(d) => {
            let (whole, _) = d.with_scale(0).into_bigint_and_exponent();
            i128::try_from(whole).map_err(|_| SchemaError::Range {
                type_name,
                value: value.to_string(),
            })
        }
        Value::Varchar(text) => parse_integer_text(value, text),
        Value::Varbinary(bytes) => std::str::from_utf8(bytes)
            .map_err(|_| invalid_value_err!(value, "invalid UTF-8 text"))
            .and_then(|text| parse_integer_text(value, text)),
        other => Err(invalid_value_err!(
            other,
            "cannot read {} as an integer",
            other.logical_type()
        )),
    }
}

fn truncate_float(value: &Value, float: f64, type_name: &'static str) -> SchemaResult<i128> {
    if !float.is_finite() {
        return Err(invalid_value_err!(value, "cannot convert non-finite float to integer"));
    }
    let whole = float.trunc();
    if whole < i128::MIN as f64 || whole >= i128::MAX as f64 {
        return Err(SchemaError::Range {
            type_name,
            value: value.to_string(),
        });
    }
    Ok(whole as i128)
}

fn parse_integer_text(value: &Value, text: &str) -> SchemaResult<i128> {
    text.trim()
        .parse::<i128>()
        .map_err(|_| invalid_value_err!(value, "invalid literal for an integer"))
}

/// Text carried by a raw value, if it is textual
fn text_of(value: &Value) -> SchemaResult<Option<&str>> {
    match value {
        Value::Varchar(text) => Ok(Some(text)),
        Value::Varbinary(bytes) => std::str::from_utf8(bytes)
            .map(Some)
            .map_err(|_| invalid_value_err!(value, "invalid UTF-8 text")),
        _ => Ok(None),
    }
}

fn parse_float(value: &Value) -> SchemaResult<f64> {
    if let Some(text) = text_of(value)? {
        return parse_float_text(value, text);
    }
    match value {
        Value::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::Decimal(d) => d
            .to_f64()
            .ok_or_else(|| invalid_value_err!(value, "decimal cannot be read as a float")),
        other => other
            .try_as_f64()
            .map_err(|_| invalid_value_err!(other, "cannot read {} as a float", other.logical_type())),
    }
}

fn parse_float_text<T: FromStr>(value: &Value, text: &str) -> SchemaResult<T> {
    text.trim()
        .parse::<T>()
        .map_err(|_| invalid_value_err!(value, "could not convert string to float"))
}

// text is parsed at the narrowest width str parsing supports, so the nearest
// value is picked without a detour through f64
fn cast_float32(value: &Value) -> SchemaResult<Value> {
    match text_of(value)? {
        Some(text) => parse_float_text::<f32>(value, text).map(Value::Float32),
        None => parse_float(value).map(|v| Value::Float32(v as f32)),
    }
}

fn cast_float16(value: &Value) -> SchemaResult<Value> {
    match text_of(value)? {
        Some(text) => parse_float_text::<f32>(value, text).map(|v| Value::Float16(f16::from_f32(v))),
        None => parse_float(value).map(|v| Value::Float16(f16::from_f64(v))),
    }
}

/// Exact decimal reading of a raw value
pub fn parse_decimal(value: &Value) -> SchemaResult<BigDecimal> {
    if let Some(text) = text_of(value)? {
        return BigDecimal::from_str(text.trim())
            .map_err(|_| invalid_value_err!(value, "invalid decimal literal"));
    }
    match value {
        Value::Decimal(d) => Ok(d.clone()),
        Value::Boolean(b) => Ok(BigDecimal::from(u8::from(*b))),
        Value::Int8(v) => Ok(BigDecimal::from(*v)),
        Value::Int16(v) => Ok(BigDecimal::from(*v)),
        Value::Int32(v) => Ok(BigDecimal::from(*v)),
        Value::Int64(v) => Ok(BigDecimal::from(*v)),
        Value::UInt8(v) => Ok(BigDecimal::from(*v)),
        Value::UInt16(v) => Ok(BigDecimal::from(*v)),
        Value::UInt32(v) => Ok(BigDecimal::from(*v)),
        Value::UInt64(v) => Ok(BigDecimal::from(*v)),
        Value::Float16(v) => decimal_from_float(value, f16::to_f64(*v)),
        Value::Float32(v) => decimal_from_float(value, *v as f64),
        Value::Float64(v) => decimal_from_float(value, *v),
        other => Err(invalid_value_err!(
            other,
            "cannot read {} as a decimal",
            other.logical_type()
        )),
    }
}

/// Decimal expansion of a float to 99 significant digits
fn decimal_from_float(value: &Value, float: f64) -> SchemaResult<BigDecimal> {
    if !float.is_finite() {
        return Err(invalid_value_err!(value, "float cannot be represented as a decimal"));
    }
    BigDecimal::from_str(&format!("{:.98e}", float))
        .map(|d| d.normalized())
        .map_err(|_| invalid_value_err!(value, "float cannot be represented as a decimal"))
}

/// Round half to even at `min(scale, 28)` digits. The unrounded value is
/// returned when the result would need more than `precision` digits.
pub fn quantize(value: BigDecimal, precision: u32, scale: u32) -> BigDecimal {
    let precision = u64::from(precision);
    let scale = i64::from(scale.min(MAX_DECIMAL_SCALE));

    // integer digits alone already exceed the precision
    let (_, exponent) = value.as_bigint_and_exponent();
    if value.digits() as i64 - exponent > precision as i64 {
        return value;
    }

    let rounded = value.with_scale_round(scale, RoundingMode::HalfEven);
    if rounded.digits() > precision {
        return value;
    }
    rounded
}

fn to_bytes(value: &Value, length: Option<usize>) -> SchemaResult<Vec<u8>> {
    let mut bytes = match value {
        Value::Varbinary(bytes) => bytes.clone(),
        Value::Array(_) | Value::Struct(_) => serde_json::to_vec(&value.to_json())
            .map_err(|e| invalid_value_err!(value, "cannot serialize: {}", e))?,
        other => other.to_string().into_bytes(),
    };
    if let Some(length) = length {
        bytes.truncate(length);
    }
    Ok(bytes)
}

fn cast_array(value: &Value, element: Option<&LogicalType>, config: &CastConfig) -> SchemaResult<Value> {
    let items = match value {
        Value::Array(items) => items.clone(),
        Value::Varchar(text) => decode_json_array(value, text.as_bytes())?,
        Value::Varbinary(bytes) => decode_json_array(value, bytes)?,
        other => return Err(invalid_value_err!(other, "expected an array")),
    };
    match element {
        Some(element) => items
            .iter()
            .map(|item| cast_with(item, element, config))
            .collect::<SchemaResult<Vec<_>>>()
            .map(Value::Array),
        None => Ok(Value::Array(items)),
    }
}

fn decode_json_array(value: &Value, bytes: &[u8]) -> SchemaResult<Vec<Value>> {
    let json: serde_json::Value = serde_json::from_slice(bytes)
        .map_err(|e| invalid_value_err!(value, "invalid JSON: {}", e))?;
    match Value::from_json(&json) {
        Value::Array(items) => Ok(items),
        _ => Err(invalid_value_err!(value, "JSON value is not an array")),
    }
}

fn cast_interval(value: &Value) -> SchemaResult<Value> {
    let out_of_range = || SchemaError::Range {
        type_name: "INTERVAL",
        value: value.to_string(),
    };
    match value {
        Value::Interval(duration) => Ok(Value::Interval(*duration)),
        Value::Float16(_) | Value::Float32(_) | Value::Float64(_) | Value::Decimal(_) => {
            let days = parse_float(value)?;
            let micros = (days * MICROS_PER_DAY).round();
            if !micros.is_finite() || micros.abs() >= i64::MAX as f64 {
                return Err(out_of_range());
            }
            Ok(Value::Interval(Duration::microseconds(micros as i64)))
        }
        Value::Varchar(_) | Value::Varbinary(_) => Err(invalid_value_err!(
            value,
            "interval requires a numeric day count"
        )),
        _ => {
            let days = integer_value(value, "INTERVAL")?;
            i64::try_from(days)
                .ok()
                .and_then(Duration::try_days)
                .map(Value::Interval)
                .ok_or_else(out_of_range)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::ErrorKind;
    use chrono::{NaiveDate, NaiveTime};

    fn dec(text: &str) -> BigDecimal {
        BigDecimal::from_str(text).unwrap()
    }

    #[test]
    fn test_null_is_preserved() {
        assert_eq!(cast(&Value::Null, &LogicalType::Int32).unwrap(), Value::Null);
        assert_eq!(cast(&Value::Null, &LogicalType::Date).unwrap(), Value::Null);
    }

    #[test]
    fn test_boolean_spellings() {
        for truthy in ["true", "On", "YES", "1", "1.0", "t", "y"] {
            assert!(parse_boolean(&Value::varchar(truthy)), "{}", truthy);
        }
        for falsy in ["false", "no", "0", " true", "2"] {
            assert!(!parse_boolean(&Value::varchar(falsy)), "{}", falsy);
        }
        assert!(parse_boolean(&Value::Int64(1)));
        assert!(parse_boolean(&Value::Float64(1.0)));
        assert!(!parse_boolean(&Value::Int64(2)));
        assert!(parse_boolean(&Value::varbinary(b"yes".to_vec())));
    }

    #[test]
    fn test_integer_boundaries() {
        assert_eq!(
            cast(&Value::varchar("127"), &LogicalType::Int8).unwrap(),
            Value::Int8(127)
        );
        assert_eq!(
            cast(&Value::Int64(-128), &LogicalType::Int8).unwrap(),
            Value::Int8(-128)
        );

        let err = cast(&Value::Int64(128), &LogicalType::Int8).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RangeError);
        assert_eq!(err.offending_value(), Some("128"));

        assert_eq!(
            cast(&Value::Int64(-1), &LogicalType::UInt32).unwrap_err().kind(),
            ErrorKind::RangeError
        );
        assert_eq!(
            cast(&Value::UInt64(u64::MAX), &LogicalType::UInt64).unwrap(),
            Value::UInt64(u64::MAX)
        );
    }

    #[test]
    fn test_integer_coercion() {
        assert_eq!(
            cast(&Value::Float64(-3.9), &LogicalType::Int16).unwrap(),
            Value::Int16(-3)
        );
        assert_eq!(
            cast(&Value::Boolean(true), &LogicalType::UInt8).unwrap(),
            Value::UInt8(1)
        );
        assert_eq!(
            cast(&Value::varchar(" 42 "), &LogicalType::Int32).unwrap(),
            Value::Int32(42)
        );
        assert_eq!(
            cast(&Value::Decimal(dec("9.99")), &LogicalType::Int64).unwrap(),
            Value::Int64(9)
        );
        assert_eq!(
            cast(&Value::varchar("abc"), &LogicalType::Int32).unwrap_err().kind(),
            ErrorKind::ValueError
        );
        assert_eq!(
            cast(&Value::Float64(f64::INFINITY), &LogicalType::Int64)
                .unwrap_err()
                .kind(),
            ErrorKind::ValueError
        );
    }

    #[test]
    fn test_decimal_quantization() {
        let ty = LogicalType::decimal(10, 2).unwrap();
        let value = cast(&Value::varchar("8.700"), &ty).unwrap();
        assert_eq!(value, Value::Decimal(dec("8.70")));
        assert_eq!(value.to_string(), "8.70");

        // half to even
        assert_eq!(
            cast(&Value::varchar("2.345"), &ty).unwrap().to_string(),
            "2.34"
        );
        assert_eq!(
            cast(&Value::varchar("2.355"), &ty).unwrap().to_string(),
            "2.36"
        );

        // too many digits for the precision keeps the unrounded value
        let narrow = LogicalType::decimal(5, 2).unwrap();
        assert_eq!(
            cast(&Value::varchar("123456.789"), &narrow).unwrap().to_string(),
            "123456.789"
        );

        assert_eq!(
            cast(&Value::varchar("1.5e3"), &ty).unwrap().to_string(),
            "1500.00"
        );
        assert_eq!(
            cast(&Value::varchar("nope"), &ty).unwrap_err().kind(),
            ErrorKind::ValueError
        );
    }

    #[test]
    fn test_decimal_beyond_28_digits() {
        let wide = LogicalType::decimal(38, 0).unwrap();
        assert_eq!(
            cast(&Value::varchar("123456789012345678901234567890"), &wide)
                .unwrap()
                .to_string(),
            "123456789012345678901234567890"
        );

        let cents = LogicalType::decimal(38, 2).unwrap();
        assert_eq!(
            cast(&Value::varchar("1234567890123456789012345678901234.56"), &cents)
                .unwrap()
                .to_string(),
            "1234567890123456789012345678901234.56"
        );
        // out of range for the precision: kept as parsed
        assert_eq!(
            cast(&Value::varchar("1e40"), &cents).unwrap(),
            Value::Decimal(dec("1e40"))
        );

        // rounding stops at 28 fractional digits
        let fine = LogicalType::decimal(38, 30).unwrap();
        assert_eq!(
            cast(&Value::varchar("0.123456789012345678901234567890123"), &fine)
                .unwrap()
                .to_string(),
            "0.1234567890123456789012345679"
        );
    }

    #[test]
    fn test_decimal_from_float_uses_binary_expansion() {
        let ty = LogicalType::decimal(10, 2).unwrap();
        assert_eq!(
            cast(&Value::Float64(0.1 + 0.2), &ty).unwrap(),
            Value::Decimal(dec("0.30"))
        );
        // 2.675 is stored just below the midpoint
        assert_eq!(
            cast(&Value::Float64(2.675), &ty).unwrap().to_string(),
            "2.67"
        );
        assert_eq!(
            cast(&Value::Float64(f64::NAN), &ty).unwrap_err().kind(),
            ErrorKind::ValueError
        );
        assert_eq!(
            cast(&Value::Decimal(dec("1e40")), &LogicalType::Int64)
                .unwrap_err()
                .kind(),
            ErrorKind::RangeError
        );
    }

    #[test]
    fn test_decimal_default_scale() {
        let value = cast(&Value::varchar("8.7"), &LogicalType::decimal_default()).unwrap();
        match value {
            Value::Decimal(d) => {
                assert_eq!(d, dec("8.7"));
                assert_eq!(d.as_bigint_and_exponent().1, 21);
            }
            other => panic!("expected decimal, got {:?}", other),
        }

        let config = CastConfig {
            default_decimal_precision: 38,
            default_decimal_scale: 1,
        };
        let value = cast_with(&Value::Int64(3), &LogicalType::decimal_default(), &config).unwrap();
        assert_eq!(value.to_string(), "3.0");
    }

    #[test]
    fn test_float_widths() {
        assert_eq!(
            cast(&Value::varchar("8.7"), &LogicalType::Float64).unwrap(),
            Value::Float64(8.7)
        );
        assert_eq!(
            cast(&Value::varchar("8.7"), &LogicalType::Float32).unwrap(),
            Value::Float32(8.7)
        );
        assert_eq!(
            cast(&Value::Int64(2), &LogicalType::Float16).unwrap(),
            Value::Float16(f16::from_f32(2.0))
        );
        assert_eq!(
            cast(&Value::varchar("x"), &LogicalType::Float64).unwrap_err().kind(),
            ErrorKind::ValueError
        );
    }

    #[test]
    fn test_narrow_floats_parse_text_at_their_width() {
        assert_eq!(
            cast(&Value::varbinary(b"0.1".to_vec()), &LogicalType::Float32).unwrap(),
            Value::Float32(0.1f32)
        );
        assert_eq!(
            cast(&Value::varchar(" 0.1 "), &LogicalType::Float16).unwrap(),
            Value::Float16(f16::from_f32(0.1f32))
        );
        assert_eq!(
            cast(&Value::varbinary(vec![0xff]), &LogicalType::Float32)
                .unwrap_err()
                .kind(),
            ErrorKind::ValueError
        );
    }

    #[test]
    fn test_text_and_binary() {
        let short = LogicalType::varchar_with_length(3).unwrap();
        assert_eq!(
            cast(&Value::varchar("abcdef"), &short).unwrap(),
            Value::varchar("abc")
        );
        assert_eq!(
            cast(&Value::Int64(12345), &short).unwrap(),
            Value::varchar("123")
        );
        assert_eq!(
            cast(&Value::Boolean(true), &LogicalType::varchar()).unwrap(),
            Value::varchar("true")
        );

        // truncation is in bytes and may split a character
        let two = LogicalType::varchar_with_length(2).unwrap();
        assert_eq!(
            cast(&Value::varchar("é!"), &two).unwrap(),
            Value::varchar("é")
        );
        let one = LogicalType::varchar_with_length(1).unwrap();
        assert_eq!(
            cast(&Value::varchar("é"), &one).unwrap_err().kind(),
            ErrorKind::ValueError
        );

        let structured = Value::struct_(vec![("a".to_string(), Value::Int64(1))]);
        assert_eq!(
            cast(&structured, &LogicalType::Jsonb).unwrap(),
            Value::varbinary(br#"{"a":1}"#.to_vec())
        );
        assert_eq!(
            cast(&Value::varchar("hi"), &LogicalType::varbinary()).unwrap(),
            Value::varbinary(b"hi".to_vec())
        );
    }

    #[test]
    fn test_temporal() {
        assert_eq!(
            cast(&Value::varchar("2023-01-02T03:04:05"), &LogicalType::Date).unwrap(),
            Value::Date(NaiveDate::from_ymd_opt(2023, 1, 2).unwrap())
        );
        assert_eq!(
            cast(&Value::varchar("2023-01-02 03:04"), &LogicalType::Time).unwrap(),
            Value::Time(NaiveTime::from_hms_opt(3, 4, 0).unwrap())
        );
        let err = cast(&Value::varchar("2023/01/02"), &LogicalType::Date).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueError);
        assert!(err.to_string().contains("invalid date"));
    }

    #[test]
    fn test_arrays() {
        let ty = LogicalType::array_of(LogicalType::Int16).unwrap();
        assert_eq!(
            cast(&Value::varchar("[1, 2, null]"), &ty).unwrap(),
            Value::array(vec![Value::Int16(1), Value::Int16(2), Value::Null])
        );
        assert_eq!(
            cast(&Value::array(vec![Value::varchar("7")]), &ty).unwrap(),
            Value::array(vec![Value::Int16(7)])
        );
        assert_eq!(
            cast(&Value::varchar(r#"{"a": 1}"#), &ty).unwrap_err().kind(),
            ErrorKind::ValueError
        );
        assert_eq!(
            cast(&Value::varchar("[1, 99999]"), &ty).unwrap_err().kind(),
            ErrorKind::RangeError
        );

        let untyped = LogicalType::Array(None);
        assert_eq!(
            cast(&Value::varchar(r#"["x", 1]"#), &untyped).unwrap(),
            Value::array(vec![Value::varchar("x"), Value::Int64(1)])
        );
    }

    #[test]
    fn test_interval() {
        assert_eq!(
            cast(&Value::Int64(2), &LogicalType::Interval).unwrap(),
            Value::Interval(Duration::days(2))
        );
        assert_eq!(
            cast(&Value::Float64(0.5), &LogicalType::Interval).unwrap(),
            Value::Interval(Duration::hours(12))
        );
        assert_eq!(
            cast(&Value::varchar("2"), &LogicalType::Interval).unwrap_err().kind(),
            ErrorKind::ValueError
        );
    }

    #[test]
    fn test_missing_passes_through() {
        let raw = Value::varchar("anything");
        assert_eq!(cast(&raw, &LogicalType::Missing).unwrap(), raw);
        assert_eq!(cast(&raw, &LogicalType::Null).unwrap(), Value::Null);
    }
}
