//! Storage module
//!
//! This module provides column storage:
//! - Column: name, logical type and encoding
//! - Encodings (Constant, Function, Dictionary, RLE, Sparse) and their selection

pub mod column;
pub mod encoding;

pub use column::*;
pub use encoding::*;
