//! Advisory, per-resource warnings.
//!
//! A diagnostic never aborts the run: the affected resource is skipped or the
//! affected usage field keeps its default, and processing continues.

use thiserror::Error;
use tracing::warn;

use crate::usage::UsageValueType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// Configuration has no pricing mapping, the resource is left out
    #[error("Skipping resource {address}. {reason}")]
    UnsupportedConfiguration {
        address: String,
        attribute: String,
        value: String,
        reason: String,
    },

    /// Usage value could not be converted to the declared field type
    #[error("Ignoring usage key {key} for {address}: expected {expected}, found {found}")]
    FieldProjection {
        address: String,
        key: String,
        expected: UsageValueType,
        found: String,
    },
}

impl Diagnostic {
    pub fn address(&self) -> &str {
        match self {
            Diagnostic::UnsupportedConfiguration { address, .. } => address,
            Diagnostic::FieldProjection { address, .. } => address,
        }
    }

    /// Log this diagnostic at warn level
    pub fn emit(&self) {
        match self {
            Diagnostic::UnsupportedConfiguration {
                address,
                attribute,
                value,
                ..
            } => warn!(
                address = %address,
                attribute = %attribute,
                value = %value,
                "{}", self
            ),
            Diagnostic::FieldProjection {
                address,
                key,
                expected,
                ..
            } => warn!(
                address = %address,
                key = %key,
                expected = %expected,
                "{}", self
            ),
        }
    }
}
