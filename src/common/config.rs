//! Configuration for casting and encoding selection
//!
//! Mirrors the database configuration layout: plain structs with `Default`
//! values and a couple of convenience constructors. Configurations can also be
//! loaded from JSON.

use crate::common::error::{SchemaError, SchemaResult};
use serde::{Deserialize, Serialize};

/// Largest number of fractional digits a decimal can be quantized to
pub const MAX_DECIMAL_SCALE: u32 = 28;

/// Largest declarable decimal precision
pub const MAX_DECIMAL_PRECISION: u32 = 38;

/// Settings for the value caster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CastConfig {
    /// Precision used when a DECIMAL column declares none
    pub default_decimal_precision: u32,
    /// Scale used when a DECIMAL column declares none
    pub default_decimal_scale: u32,
}

impl Default for CastConfig {
    fn default() -> Self {
        CastConfig {
            default_decimal_precision: MAX_DECIMAL_PRECISION,
            default_decimal_scale: 21,
        }
    }
}

/// Settings for choosing an encoding for raw column values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodingConfig {
    /// Null fraction at or above which values are stored sparsely
    pub sparse_null_ratio: f64,
    /// Runs-per-value ratio at or below which run-length encoding is used
    pub max_run_ratio: f64,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        EncodingConfig {
            sparse_null_ratio: 0.5,
            max_run_ratio: 0.5,
        }
    }
}

impl EncodingConfig {
    /// Configuration that never chooses sparse or run-length encoding
    pub fn dictionary_only() -> Self {
        Self {
            sparse_null_ratio: f64::INFINITY,
            max_run_ratio: -1.0,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    pub cast: CastConfig,
    pub encoding: EncodingConfig,
}

impl SchemaConfig {
    /// Load a configuration from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> SchemaResult<Self> {
        let config: SchemaConfig = serde_json::from_str(json)
            .map_err(|e| SchemaError::InvalidParameter(format!("invalid configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configured values are usable
    pub fn validate(&self) -> SchemaResult<()> {
        let cast = &self.cast;
        if cast.default_decimal_precision > MAX_DECIMAL_PRECISION {
            return Err(SchemaError::InvalidParameter(format!(
                "default decimal precision must be at most {}, got {}",
                MAX_DECIMAL_PRECISION, cast.default_decimal_precision
            )));
        }
        if cast.default_decimal_scale > cast.default_decimal_precision {
            return Err(SchemaError::InvalidParameter(format!(
                "default decimal scale ({}) cannot be greater than precision ({})",
                cast.default_decimal_scale, cast.default_decimal_precision
            )));
        }
        if self.encoding.sparse_null_ratio.is_nan() || self.encoding.max_run_ratio.is_nan() {
            return Err(SchemaError::InvalidParameter(
                "encoding ratios must be numbers".to_string(),
            ));
        }
        Ok(())
    }
}
