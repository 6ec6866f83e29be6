//! Error handling for the PrismDB type system

use thiserror::Error;

/// Main error type for type catalog, casting and column encoding operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("Unknown column type '{0}'")]
    UnknownType(String),

    #[error("Column type {0} is deprecated")]
    DeprecatedType(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("{type_name} value out of range: {value}")]
    Range {
        type_name: &'static str,
        value: String,
    },

    #[error("Invalid value '{value}': {reason}")]
    InvalidValue { value: String, reason: String },

    #[error("Construction error: {0}")]
    Construction(String),

    #[error("Column '{column}': {source}")]
    InColumn {
        column: String,
        #[source]
        source: Box<SchemaError>,
    },
}

/// Distinguishable failure kinds exposed to validation collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnknownType,
    DeprecatedType,
    InvalidParameter,
    RangeError,
    ValueError,
    ConstructionError,
}

impl SchemaError {
    /// Kind of the underlying failure; column annotations are looked through
    pub fn kind(&self) -> ErrorKind {
        match self {
            SchemaError::UnknownType(_) => ErrorKind::UnknownType,
            SchemaError::DeprecatedType(_) => ErrorKind::DeprecatedType,
            SchemaError::InvalidParameter(_) => ErrorKind::InvalidParameter,
            SchemaError::Range { .. } => ErrorKind::RangeError,
            SchemaError::InvalidValue { .. } => ErrorKind::ValueError,
            SchemaError::Construction(_) => ErrorKind::ConstructionError,
            SchemaError::InColumn { source, .. } => source.kind(),
        }
    }

    /// Name of the column the failure was attributed to, if any
    pub fn column(&self) -> Option<&str> {
        match self {
            SchemaError::InColumn { column, .. } => Some(column),
            _ => None,
        }
    }

    /// The offending raw value rendered as text, for cast failures
    pub fn offending_value(&self) -> Option<&str> {
        match self {
            SchemaError::Range { value, .. } | SchemaError::InvalidValue { value, .. } => {
                Some(value)
            }
            SchemaError::InColumn { source, .. } => source.offending_value(),
            _ => None,
        }
    }

    /// Attribute this error to a column
    pub fn in_column(self, column: impl Into<String>) -> Self {
        match self {
            already @ SchemaError::InColumn { .. } => already,
            other => SchemaError::InColumn {
                column: column.into(),
                source: Box::new(other),
            },
        }
    }
}

/// Result type alias for type system operations
pub type SchemaResult<T> = std::result::Result<T, SchemaError>;

/// Macro for creating value errors
#[macro_export]
macro_rules! invalid_value_err {
    ($value:expr, $reason:expr) => {
        $crate::common::error::SchemaError::InvalidValue {
            value: $value.to_string(),
            reason: $reason.to_string(),
        }
    };
    ($value:expr, $fmt:expr, $($arg:tt)*) => {
        $crate::common::error::SchemaError::InvalidValue {
            value: $value.to_string(),
            reason: format!($fmt, $($arg)*),
        }
    };
}

/// Macro for creating construction errors
#[macro_export]
macro_rules! construction_err {
    ($msg:expr) => {
        $crate::common::error::SchemaError::Construction($msg.to_string())
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::common::error::SchemaError::Construction(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            SchemaError::UnknownType("LEFT".into()).kind(),
            ErrorKind::UnknownType
        );
        let range = SchemaError::Range {
            type_name: "INT8",
            value: "128".into(),
        };
        assert_eq!(range.kind(), ErrorKind::RangeError);
        assert_eq!(format!("{}", range), "INT8 value out of range: 128");
    }

    #[test]
    fn test_column_attribution() {
        let err = invalid_value_err!("2023/01/01", "invalid date").in_column("born");
        assert_eq!(err.column(), Some("born"));
        assert_eq!(err.kind(), ErrorKind::ValueError);
        assert_eq!(err.offending_value(), Some("2023/01/01"));

        // re-attribution keeps the innermost column
        let again = err.in_column("other");
        assert_eq!(again.column(), Some("born"));
    }

    #[test]
    fn test_construction_macro() {
        let err = construction_err!("run lengths sum to {} but length is {}", 3, 4);
        assert_eq!(
            format!("{}", err),
            "Construction error: run lengths sum to 3 but length is 4"
        );
    }
}
