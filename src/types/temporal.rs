//! Lenient ISO-8601 timestamp parsing
//!
//! Accepts the small set of timestamp shapes seen in ingested data: plain
//! dates, date-times with minute or second precision, numeric epoch seconds
//! and already-typed temporal values. Anything else yields `None` so that the
//! caller decides how to report it. Fractional seconds and offsets are
//! discarded, never applied.

use crate::types::value::Value;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

const MIN_TEXT_LEN: usize = 10;
const MAX_TEXT_LEN: usize = 33;
const MAX_LEN_BEFORE_OFFSET: usize = 28;

/// Parse a raw value into a second-precision timestamp
pub fn parse_iso(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::Varchar(text) => parse_text_or_epoch(text),
        Value::Varbinary(bytes) => std::str::from_utf8(bytes)
            .ok()
            .and_then(parse_text_or_epoch),
        Value::Int8(v) => from_epoch_seconds(*v as i64),
        Value::Int16(v) => from_epoch_seconds(*v as i64),
        Value::Int32(v) => from_epoch_seconds(*v as i64),
        Value::Int64(v) => from_epoch_seconds(*v),
        Value::UInt8(v) => from_epoch_seconds(*v as i64),
        Value::UInt16(v) => from_epoch_seconds(*v as i64),
        Value::UInt32(v) => from_epoch_seconds(*v as i64),
        Value::UInt64(v) => i64::try_from(*v).ok().and_then(from_epoch_seconds),
        Value::Float16(v) => from_epoch_float(v.to_f64()),
        Value::Float32(v) => from_epoch_float(*v as f64),
        Value::Float64(v) => from_epoch_float(*v),
        Value::Timestamp(ts) => ts.with_nanosecond(0),
        Value::Date(date) => Some(date.and_time(NaiveTime::MIN)),
        _ => None,
    }
}

/// Timestamp for whole seconds since the Unix epoch, in UTC
pub fn from_epoch_seconds(seconds: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(seconds, 0)
        .map(|dt| dt.naive_utc())
        .filter(|dt| in_calendar_range(dt.date()))
}

/// Timestamp for nanoseconds since the Unix epoch, in UTC, truncated to seconds
pub fn from_epoch_nanos(nanos: i64) -> Option<NaiveDateTime> {
    from_epoch_seconds(nanos / 1_000_000_000)
}

fn from_epoch_float(seconds: f64) -> Option<NaiveDateTime> {
    if !seconds.is_finite() {
        return None;
    }
    let whole = seconds.trunc();
    if whole < i64::MIN as f64 || whole >= i64::MAX as f64 {
        return None;
    }
    from_epoch_seconds(whole as i64)
}

fn parse_text_or_epoch(text: &str) -> Option<NaiveDateTime> {
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        return text.parse::<i64>().ok().and_then(from_epoch_seconds);
    }
    parse_iso_text(text)
}

fn parse_iso_text(text: &str) -> Option<NaiveDateTime> {
    if !text.is_ascii() || !(MIN_TEXT_LEN..=MAX_TEXT_LEN).contains(&text.len()) {
        return None;
    }

    let mut value = text.strip_suffix('Z').unwrap_or(text);
    if let Some(pos) = value.find('+') {
        value = &value[..pos];
        if !(MIN_TEXT_LEN..=MAX_LEN_BEFORE_OFFSET).contains(&value.len()) {
            return None;
        }
    }

    let bytes = value.as_bytes();
    if bytes.len() < MIN_TEXT_LEN || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }

    let date = calendar_date(
        field::<i32>(value, 0, 4)?,
        field(value, 5, 7)?,
        field(value, 8, 10)?,
    )?;

    match bytes.len() {
        10 => Some(date.and_time(NaiveTime::MIN)),
        len if len >= 16 => {
            if !matches!(bytes[10], b'T' | b' ') || bytes[13] != b':' {
                return None;
            }
            let hour = field(value, 11, 13)?;
            let minute = field(value, 14, 16)?;
            let second = if len >= 19 && bytes[16] == b':' {
                field(value, 17, 19)?
            } else if len == 16 {
                0
            } else {
                return None;
            };
            NaiveTime::from_hms_opt(hour, minute, second).map(|time| date.and_time(time))
        }
        _ => None,
    }
}

fn field<T: std::str::FromStr>(value: &str, start: usize, end: usize) -> Option<T> {
    value.get(start..end)?.parse().ok()
}

fn calendar_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).filter(|date| in_calendar_range(*date))
}

fn in_calendar_range(date: NaiveDate) -> bool {
    (1..=9999).contains(&date.year())
}
