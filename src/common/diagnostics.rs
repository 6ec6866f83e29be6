//! Deprecation diagnostics
//!
//! Declarations using deprecated spellings still parse, but produce a
//! [`DeprecationNotice`]. Callers either inspect the notice returned with the
//! parsed type or hand the parser a [`DiagnosticSink`].

use std::fmt;
use std::sync::Mutex;

/// A non-fatal notice that a deprecated type spelling was canonicalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecationNotice {
    /// The spelling found in the declaration
    pub deprecated: String,
    /// The canonical spelling it was replaced with
    pub replacement: String,
}

impl DeprecationNotice {
    pub fn new(deprecated: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            deprecated: deprecated.into(),
            replacement: replacement.into(),
        }
    }
}

impl fmt::Display for DeprecationNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Column type {} is deprecated; treating as {}",
            self.deprecated, self.replacement
        )
    }
}

/// Receiver for deprecation notices
pub trait DiagnosticSink: Send + Sync {
    fn deprecated(&self, notice: &DeprecationNotice);
}

/// Sink that reports notices through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn deprecated(&self, notice: &DeprecationNotice) {
        tracing::warn!(
            deprecated = %notice.deprecated,
            replacement = %notice.replacement,
            "{}",
            notice
        );
    }
}

/// Sink that keeps every notice it receives
#[derive(Debug, Default)]
pub struct CollectingSink {
    notices: Mutex<Vec<DeprecationNotice>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices received so far
    pub fn notices(&self) -> Vec<DeprecationNotice> {
        match self.notices.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl DiagnosticSink for CollectingSink {
    fn deprecated(&self, notice: &DeprecationNotice) {
        match self.notices.lock() {
            Ok(mut guard) => guard.push(notice.clone()),
            Err(poisoned) => poisoned.into_inner().push(notice.clone()),
        }
    }
}
