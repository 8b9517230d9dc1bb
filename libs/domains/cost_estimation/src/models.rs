use regex::RegexBuilder;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::usage::UsageItem;

/// Single attribute constraint on a catalog product.
///
/// `value` is an exact match, `value_regex` a pattern in the catalog's
/// `/pattern/flags` notation. When neither is set the attribute is
/// unconstrained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeFilter {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_regex: Option<String>,
}

impl AttributeFilter {
    /// Exact-match filter
    pub fn value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
            value_regex: None,
        }
    }

    /// Case-insensitive regex filter, stored as `/pattern/i`
    pub fn regex(key: impl Into<String>, pattern: &str) -> Self {
        Self {
            key: key.into(),
            value: None,
            value_regex: Some(format!("/{pattern}/i")),
        }
    }

    /// Check a catalog attribute value against this filter.
    ///
    /// A regex that does not compile never matches.
    pub fn matches(&self, candidate: &str) -> bool {
        let value_ok = self.value.as_deref().is_none_or(|v| v == candidate);

        let regex_ok = match self.value_regex.as_deref() {
            None => true,
            Some(raw) => {
                let (pattern, flags) = split_regex_literal(raw);
                RegexBuilder::new(pattern)
                    .case_insensitive(flags.contains('i'))
                    .build()
                    .map(|re| re.is_match(candidate))
                    .unwrap_or(false)
            }
        };

        value_ok && regex_ok
    }
}

// "/Class 1 Operations$/i" -> ("Class 1 Operations$", "i")
fn split_regex_literal(raw: &str) -> (&str, &str) {
    if let Some(rest) = raw.strip_prefix('/') {
        if let Some(end) = rest.rfind('/') {
            return (&rest[..end], &rest[end + 1..]);
        }
    }
    (raw, "")
}

/// Identifies a product in the external price catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    pub vendor_name: Option<String>,
    pub region: Option<String>,
    pub service: Option<String>,
    pub product_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default)]
    pub attribute_filters: Vec<AttributeFilter>,
}

impl ProductFilter {
    /// Find the filter for an attribute key
    pub fn attribute(&self, key: &str) -> Option<&AttributeFilter> {
        self.attribute_filters.iter().find(|f| f.key == key)
    }
}

/// Selects one price among those attached to a matched product
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceFilter {
    pub purchase_option: Option<String>,
    pub unit: Option<String>,
    pub description: Option<String>,
    pub description_regex: Option<String>,
    pub term_length: Option<String>,
    pub term_purchase_option: Option<String>,
    pub term_offering_class: Option<String>,
    pub start_usage_amount: Option<String>,
    pub end_usage_amount: Option<String>,
}

/// One billable line item, resolved to a unit price by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostComponent {
    pub name: String,
    pub unit: String,
    pub unit_multiplier: Decimal,
    /// Monthly quantity in `unit`s; None when usage was not estimated
    pub monthly_quantity: Option<Decimal>,
    pub hourly_quantity: Option<Decimal>,
    pub product_filter: ProductFilter,
    pub price_filter: PriceFilter,
}

/// Priced resource handed to the aggregation stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Resource address, e.g. `azurerm_storage_queue.example`
    pub name: String,
    pub resource_type: String,
    pub usage_schema: Vec<UsageItem>,
    pub cost_components: Vec<CostComponent>,
}

impl Resource {
    /// Names of the cost components, in order
    pub fn component_names(&self) -> Vec<&str> {
        self.cost_components.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn cost_component(&self, name: &str) -> Option<&CostComponent> {
        self.cost_components.iter().find(|c| c.name == name)
    }
}
