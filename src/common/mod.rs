//! Common utilities and shared components

pub mod config;
pub mod diagnostics;
pub mod error;

pub use config::*;
pub use diagnostics::*;
pub use error::*;
