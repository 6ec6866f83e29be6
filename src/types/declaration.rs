//! Parsing of textual column type declarations
//!
//! Grammar: `BASE`, `BASE(p,s)`, `BASE[n]` and `BASE<ELEM>`. Matching is
//! case-insensitive and ignores surrounding whitespace. Deprecated spellings
//! still parse and return a [`DeprecationNotice`] alongside the type.

use crate::common::diagnostics::{DeprecationNotice, DiagnosticSink};
use crate::common::error::{SchemaError, SchemaResult};
use crate::types::logical_type::LogicalType;
use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;

/// Prefixes an array element declaration must start with
const ELEMENT_FAMILIES: [&str; 9] = [
    "INT",
    "UINT",
    "FLOAT",
    "VARCHAR",
    "VARBINARY",
    "BOOLEAN",
    "DATE",
    "TIMESTAMP",
    "TIME",
];

/// Spellings that denote a column whose type is not known yet
const MISSING_SPELLINGS: [&str; 3] = ["0", "VARIANT", "MISSING"];

/// Spellings that are no longer accepted at all
const REMOVED_SPELLINGS: [&str; 4] = ["NUMERIC", "STRUCT", "LIST", "BSON"];

fn array_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^ARRAY<(.*)>$").expect("valid array regex"))
}

fn decimal_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^DECIMAL\(\s*(\d+)\s*,\s*(\d+)\s*\)$").expect("valid decimal regex")
    })
}

fn sized_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(VARCHAR|VARBINARY|BLOB)\[\s*(\d+)\s*\]$").expect("valid length regex")
    })
}

/// Result of parsing a declaration
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedType {
    pub logical_type: LogicalType,
    /// Set when a deprecated spelling was canonicalized
    pub notice: Option<DeprecationNotice>,
}

impl ParsedType {
    fn plain(logical_type: LogicalType) -> Self {
        Self {
            logical_type,
            notice: None,
        }
    }

    fn deprecated(logical_type: LogicalType, spelling: &str) -> Self {
        let notice = DeprecationNotice::new(spelling, logical_type.to_string());
        Self {
            logical_type,
            notice: Some(notice),
        }
    }

    pub fn into_type(self) -> LogicalType {
        self.logical_type
    }
}

/// Parse a declaration such as `DECIMAL(10,2)` or `ARRAY<INT32>`
pub fn parse_declaration(declaration: &str) -> SchemaResult<ParsedType> {
    let text = declaration.trim().to_uppercase();
    if text.is_empty() {
        return Err(SchemaError::UnknownType(declaration.to_string()));
    }

    if let Some(caps) = array_regex().captures(&text) {
        return parse_array(&caps[1]);
    }

    if let Some(caps) = decimal_regex().captures(&text) {
        let precision = parse_parameter(&caps[1], "precision")?;
        let scale = parse_parameter(&caps[2], "scale")?;
        return LogicalType::decimal(precision, scale).map(ParsedType::plain);
    }

    if let Some(caps) = sized_regex().captures(&text) {
        let length = caps[2].parse::<usize>().map_err(|_| {
            SchemaError::InvalidParameter(format!("Invalid length '{}' for {}", &caps[2], &caps[1]))
        })?;
        return match &caps[1] {
            "VARCHAR" => LogicalType::varchar_with_length(length).map(ParsedType::plain),
            "VARBINARY" => LogicalType::varbinary_with_length(length).map(ParsedType::plain),
            _ => LogicalType::varbinary_with_length(length)
                .map(|ty| ParsedType::deprecated(ty, "BLOB")),
        };
    }

    parse_bare(&text)
}

/// Parse an optional declaration; an absent one means the type is not known yet
pub fn parse_optional_declaration(declaration: Option<&str>) -> SchemaResult<ParsedType> {
    match declaration {
        Some(text) => parse_declaration(text),
        None => Ok(ParsedType::plain(LogicalType::Missing)),
    }
}

/// Parse a declaration and hand any deprecation notice to `sink`
pub fn parse_with_sink(declaration: &str, sink: &dyn DiagnosticSink) -> SchemaResult<LogicalType> {
    let parsed = parse_declaration(declaration)?;
    if let Some(notice) = &parsed.notice {
        sink.deprecated(notice);
    }
    Ok(parsed.logical_type)
}

fn parse_parameter(digits: &str, what: &str) -> SchemaResult<u32> {
    digits.parse::<u32>().map_err(|_| {
        SchemaError::InvalidParameter(format!("Invalid {} '{}' for DECIMAL type", what, digits))
    })
}

fn parse_array(element: &str) -> SchemaResult<ParsedType> {
    let element = element.trim();
    if element.is_empty() {
        return Err(SchemaError::InvalidParameter(
            "ARRAY type requires an element type".to_string(),
        ));
    }
    if !ELEMENT_FAMILIES
        .iter()
        .any(|family| element.starts_with(family))
    {
        return Err(invalid_element(element));
    }

    let parsed = parse_bare(element)?;
    if parsed.logical_type.is_complex() {
        return Err(invalid_element(element));
    }

    let ty = LogicalType::Array(Some(Box::new(parsed.logical_type)));
    Ok(match parsed.notice {
        Some(_) => ParsedType::deprecated(ty, &format!("ARRAY<{}>", element)),
        None => ParsedType::plain(ty),
    })
}

fn invalid_element(element: &str) -> SchemaError {
    SchemaError::InvalidParameter(format!("Invalid element type '{}' for ARRAY type", element))
}

fn parse_bare(name: &str) -> SchemaResult<ParsedType> {
    let ty = match name {
        "BOOLEAN" => LogicalType::Boolean,
        "INT8" => LogicalType::Int8,
        "INT16" => LogicalType::Int16,
        "INT32" => LogicalType::Int32,
        "INT64" => LogicalType::Int64,
        "UINT8" => LogicalType::UInt8,
        "UINT16" => LogicalType::UInt16,
        "UINT32" => LogicalType::UInt32,
        "UINT64" => LogicalType::UInt64,
        "FLOAT16" => LogicalType::Float16,
        "FLOAT32" => LogicalType::Float32,
        "FLOAT64" => LogicalType::Float64,
        "DECIMAL" => LogicalType::decimal_default(),
        "DATE" => LogicalType::Date,
        "TIME" => LogicalType::Time,
        "TIMESTAMP" => LogicalType::Timestamp,
        "INTERVAL" => LogicalType::Interval,
        "VARCHAR" => LogicalType::varchar(),
        "VARBINARY" => LogicalType::varbinary(),
        "JSONB" => LogicalType::Jsonb,
        "NULL" => LogicalType::Null,
        "ARRAY" => {
            return Ok(ParsedType::deprecated(
                LogicalType::Array(Some(Box::new(LogicalType::varchar()))),
                "ARRAY",
            ))
        }
        "INTEGER" => return Ok(ParsedType::deprecated(LogicalType::Int64, name)),
        "DOUBLE" => return Ok(ParsedType::deprecated(LogicalType::Float64, name)),
        "BLOB" => return Ok(ParsedType::deprecated(LogicalType::varbinary(), name)),
        removed if REMOVED_SPELLINGS.contains(&removed) => {
            return Err(SchemaError::DeprecatedType(removed.to_string()))
        }
        missing if MISSING_SPELLINGS.contains(&missing) => LogicalType::Missing,
        unknown => return Err(SchemaError::UnknownType(unknown.to_string())),
    };
    Ok(ParsedType::plain(ty))
}

impl FromStr for LogicalType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_declaration(s).map(ParsedType::into_type)
    }
}
