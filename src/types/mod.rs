//! Type system module
//!
//! This module contains the type catalog and everything needed to turn raw
//! ingested data into canonical column values:
//! - LogicalType: schema-level type with its parameters
//! - declaration: parsing of textual type declarations
//! - Value: raw and canonical value container
//! - cast: per-type value parsing and casting
//! - temporal: lenient ISO-8601 timestamp recognizer
//! - promotion: compatible type resolution across declarations

pub mod cast;
pub mod declaration;
pub mod logical_type;
pub mod promotion;
pub mod temporal;
pub mod value;

// Re-export main types for convenience
pub use cast::{cast, cast_with};
pub use declaration::{parse_declaration, parse_optional_declaration, parse_with_sink, ParsedType};
pub use logical_type::LogicalType;
pub use promotion::{find_compatible_type, find_compatible_type_or};
pub use temporal::{from_epoch_nanos, parse_iso};
pub use value::Value;
