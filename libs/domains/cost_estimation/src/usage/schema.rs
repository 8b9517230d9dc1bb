//! Usage schema declaration and projection of usage data onto resources.
//!
//! Each resource kind registers a static table of `(key, type, setter)`
//! entries. Projection walks that table, so keys in the usage data that no
//! entry declares are never looked at.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use strum::Display;

use super::data::{
    UsageData, value_as_decimal, value_as_i64, value_as_string, value_as_string_array,
};
use crate::diagnostics::Diagnostic;

/// Declared type of a usage field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum UsageValueType {
    Int64,
    Float64,
    String,
    StringArray,
}

impl UsageValueType {
    /// Value documented for a field nobody estimated
    pub fn default_value(&self) -> Value {
        match self {
            UsageValueType::Int64 => json!(0),
            UsageValueType::Float64 => json!(0.0),
            UsageValueType::String => json!(""),
            UsageValueType::StringArray => json!([]),
        }
    }
}

/// One entry of a resource kind's usage schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageItem {
    pub key: String,
    pub value_type: UsageValueType,
    pub default_value: Value,
}

/// Usage value converted to its declared type
#[derive(Debug, Clone, PartialEq)]
pub enum UsageValue {
    Int(i64),
    Float(Decimal),
    String(String),
    StringArray(Vec<String>),
}

impl UsageValue {
    /// Convert a raw value to `value_type`, None if it does not fit
    pub fn convert(raw: &Value, value_type: UsageValueType) -> Option<Self> {
        match value_type {
            UsageValueType::Int64 => value_as_i64(raw).map(UsageValue::Int),
            UsageValueType::Float64 => value_as_decimal(raw).map(UsageValue::Float),
            UsageValueType::String => value_as_string(raw).map(UsageValue::String),
            UsageValueType::StringArray => {
                value_as_string_array(raw).map(UsageValue::StringArray)
            }
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            UsageValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric value as a decimal, integers included
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            UsageValue::Int(i) => Some(Decimal::from(*i)),
            UsageValue::Float(d) => Some(*d),
            _ => None,
        }
    }

    pub fn into_string(self) -> Option<String> {
        match self {
            UsageValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn into_string_array(self) -> Option<Vec<String>> {
        match self {
            UsageValue::StringArray(v) => Some(v),
            _ => None,
        }
    }
}

/// Setter registration for one usage key
pub struct UsageField<R> {
    pub key: &'static str,
    pub value_type: UsageValueType,
    pub apply: fn(&mut R, UsageValue),
}

/// Resource kinds that accept usage estimates
pub trait UsageFields: Sized + 'static {
    const USAGE_FIELDS: &'static [UsageField<Self>];
}

/// Usage schema derived from a kind's field table, in declaration order
pub fn usage_schema<R: UsageFields>() -> Vec<UsageItem> {
    R::USAGE_FIELDS
        .iter()
        .map(|field| UsageItem {
            key: field.key.to_string(),
            value_type: field.value_type,
            default_value: field.value_type.default_value(),
        })
        .collect()
}

/// Assign every declared usage field present in `usage` onto `resource`.
///
/// Unknown keys are ignored, absent or null keys leave the field untouched.
/// A value that does not convert to the declared type produces a diagnostic
/// and the remaining fields are still projected.
pub fn populate_usage<R: UsageFields>(resource: &mut R, usage: &UsageData) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for field in R::USAGE_FIELDS {
        let Some(raw) = usage.get(field.key).filter(|v| !v.is_null()) else {
            continue;
        };

        match UsageValue::convert(raw, field.value_type) {
            Some(value) => (field.apply)(resource, value),
            None => {
                let diagnostic = Diagnostic::FieldProjection {
                    address: usage.address.clone(),
                    key: field.key.to_string(),
                    expected: field.value_type,
                    found: raw.to_string(),
                };
                diagnostic.emit();
                diagnostics.push(diagnostic);
            }
        }
    }

    diagnostics
}
