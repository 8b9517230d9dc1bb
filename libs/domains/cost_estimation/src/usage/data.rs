use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::str::FromStr;

/// Usage estimates keyed by resource address
pub type UsageMap = HashMap<String, UsageData>;

/// Untyped usage attributes declared for one resource.
///
/// Values keep whatever shape the usage file gave them; each resource kind
/// only reads the keys its usage schema declares.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsageData {
    pub address: String,
    pub attributes: Map<String, Value>,
}

impl UsageData {
    pub fn new(address: impl Into<String>, attributes: Map<String, Value>) -> Self {
        Self {
            address: address.into(),
            attributes,
        }
    }

    /// Build from an arbitrary value; anything but a mapping yields no attributes
    pub fn from_value(address: impl Into<String>, value: Value) -> Self {
        let attributes = match value {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self::new(address, attributes)
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(value_as_i64)
    }

    pub fn get_float(&self, key: &str) -> Option<Decimal> {
        self.get(key).and_then(value_as_decimal)
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(value_as_string)
    }

    pub fn get_string_array(&self, key: &str) -> Option<Vec<String>> {
        self.get(key).and_then(value_as_string_array)
    }
}

pub(crate) fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn value_as_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s.trim()),
        _ => None,
    }
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

pub(crate) fn value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub(crate) fn value_as_string_array(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect()
}
