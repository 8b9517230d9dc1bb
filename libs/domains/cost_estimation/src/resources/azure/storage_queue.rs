//! Azure Queue Storage
//!
//! Pricing: https://azure.microsoft.com/en-gb/pricing/details/storage/queues/

use rust_decimal::Decimal;

use super::{AccountReplicationType, consumption_price_filter, storage_product_filter};
use crate::diagnostics::Diagnostic;
use crate::models::{AttributeFilter, CostComponent, Resource};
use crate::resources::ResourceCostModel;
use crate::usage::{
    UsageData, UsageField, UsageFields, UsageItem, UsageValueType, populate_usage, usage_schema,
};

const CORE_TYPE: &str = "StorageQueue";
const PRODUCT_NAME: &str = "Queues v2";
const OPERATIONS_UNIT: &str = "10k operations";
const OPERATIONS_PER_UNIT: i64 = 10_000;

/// Which components a replication type is billed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueuePricingRule {
    replication: AccountReplicationType,
    /// GZRS accounts fold class 1 operations into another meter
    class_1_operations: bool,
    geo_replication_data_transfer: bool,
}

const QUEUE_PRICING_RULES: [QueuePricingRule; 6] = [
    QueuePricingRule {
        replication: AccountReplicationType::Lrs,
        class_1_operations: true,
        geo_replication_data_transfer: false,
    },
    QueuePricingRule {
        replication: AccountReplicationType::Zrs,
        class_1_operations: true,
        geo_replication_data_transfer: false,
    },
    QueuePricingRule {
        replication: AccountReplicationType::Grs,
        class_1_operations: true,
        geo_replication_data_transfer: true,
    },
    QueuePricingRule {
        replication: AccountReplicationType::RaGrs,
        class_1_operations: true,
        geo_replication_data_transfer: true,
    },
    QueuePricingRule {
        replication: AccountReplicationType::Gzrs,
        class_1_operations: false,
        geo_replication_data_transfer: true,
    },
    QueuePricingRule {
        replication: AccountReplicationType::RaGzrs,
        class_1_operations: false,
        geo_replication_data_transfer: true,
    },
];

/// Azure storage queue as declared by the IaC provider, plus usage estimates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StorageQueue {
    pub address: String,
    pub region: String,
    /// Replication type of the owning storage account, any case
    pub account_replication_type: String,

    pub storage_gb: Option<Decimal>,
    pub monthly_class_1_operations: Option<i64>,
    pub monthly_class_2_operations: Option<i64>,
    pub monthly_geo_replication_data_transfer_gb: Option<Decimal>,
}

impl UsageFields for StorageQueue {
    const USAGE_FIELDS: &'static [UsageField<Self>] = &[
        UsageField {
            key: "storage_gb",
            value_type: UsageValueType::Float64,
            apply: |r, v| r.storage_gb = v.as_decimal(),
        },
        UsageField {
            key: "monthly_class_1_operations",
            value_type: UsageValueType::Int64,
            apply: |r, v| r.monthly_class_1_operations = v.as_i64(),
        },
        UsageField {
            key: "monthly_class_2_operations",
            value_type: UsageValueType::Int64,
            apply: |r, v| r.monthly_class_2_operations = v.as_i64(),
        },
        UsageField {
            key: "monthly_geo_replication_data_transfer_gb",
            value_type: UsageValueType::Float64,
            apply: |r, v| r.monthly_geo_replication_data_transfer_gb = v.as_decimal(),
        },
    ];
}

impl StorageQueue {
    pub fn new(
        address: impl Into<String>,
        region: impl Into<String>,
        account_replication_type: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            region: region.into(),
            account_replication_type: account_replication_type.into(),
            ..Default::default()
        }
    }

    // Case folding is ASCII only; non-ASCII lookalikes such as "LRſ" are unsupported
    fn pricing_rule(&self) -> Option<&'static QueuePricingRule> {
        let replication = self
            .account_replication_type
            .parse::<AccountReplicationType>()
            .ok()?;
        QUEUE_PRICING_RULES
            .iter()
            .find(|rule| rule.replication == replication)
    }

    fn sku_name(replication: AccountReplicationType) -> String {
        format!("Standard {replication}")
    }

    fn data_storage_cost_component(&self, replication: AccountReplicationType) -> CostComponent {
        CostComponent {
            name: "Capacity".to_string(),
            unit: "GB".to_string(),
            unit_multiplier: Decimal::ONE,
            monthly_quantity: self.storage_gb,
            hourly_quantity: None,
            product_filter: storage_product_filter(
                &self.region,
                vec![
                    AttributeFilter::value("productName", PRODUCT_NAME),
                    AttributeFilter::value("skuName", Self::sku_name(replication)),
                    AttributeFilter::value("meterName", format!("{replication} Data Stored")),
                ],
            ),
            price_filter: consumption_price_filter(),
        }
    }

    fn operations_cost_components(&self, rule: &QueuePricingRule) -> Vec<CostComponent> {
        let mut cost_components = Vec::with_capacity(2);

        if rule.class_1_operations {
            cost_components.push(self.operations_cost_component(
                rule.replication,
                "Class 1 operations",
                "Class 1 Operations$",
                self.monthly_class_1_operations,
            ));
        }

        cost_components.push(self.operations_cost_component(
            rule.replication,
            "Class 2 operations",
            "Class 2 Operations$",
            self.monthly_class_2_operations,
        ));

        cost_components
    }

    fn operations_cost_component(
        &self,
        replication: AccountReplicationType,
        name: &str,
        meter_pattern: &str,
        monthly_operations: Option<i64>,
    ) -> CostComponent {
        CostComponent {
            name: name.to_string(),
            unit: OPERATIONS_UNIT.to_string(),
            unit_multiplier: Decimal::ONE,
            monthly_quantity: monthly_operations
                .map(|ops| Decimal::from(ops) / Decimal::from(OPERATIONS_PER_UNIT)),
            hourly_quantity: None,
            product_filter: storage_product_filter(
                &self.region,
                vec![
                    AttributeFilter::value("productName", PRODUCT_NAME),
                    AttributeFilter::value("skuName", Self::sku_name(replication)),
                    AttributeFilter::regex("meterName", meter_pattern),
                ],
            ),
            price_filter: consumption_price_filter(),
        }
    }

    fn geo_replication_data_transfer_cost_components(
        &self,
        rule: &QueuePricingRule,
    ) -> Vec<CostComponent> {
        if !rule.geo_replication_data_transfer {
            return Vec::new();
        }

        vec![CostComponent {
            name: "Geo-replication data transfer".to_string(),
            unit: "GB".to_string(),
            unit_multiplier: Decimal::ONE,
            monthly_quantity: self.monthly_geo_replication_data_transfer_gb,
            hourly_quantity: None,
            product_filter: storage_product_filter(
                &self.region,
                vec![
                    AttributeFilter::value("productName", "Storage - Bandwidth"),
                    AttributeFilter::value("skuName", "Geo-Replication v2"),
                    AttributeFilter::value("meterName", "Geo-Replication v2 Data Transfer"),
                ],
            ),
            price_filter: consumption_price_filter(),
        }]
    }
}

impl ResourceCostModel for StorageQueue {
    fn core_type(&self) -> &'static str {
        CORE_TYPE
    }

    fn address(&self) -> &str {
        &self.address
    }

    fn usage_schema(&self) -> Vec<UsageItem> {
        usage_schema::<Self>()
    }

    fn populate_usage(&mut self, usage: &UsageData) -> Vec<Diagnostic> {
        populate_usage(self, usage)
    }

    fn build_resource(&self) -> Result<Resource, Diagnostic> {
        let Some(rule) = self.pricing_rule() else {
            let diagnostic = Diagnostic::UnsupportedConfiguration {
                address: self.address.clone(),
                attribute: "account_replication_type".to_string(),
                value: self.account_replication_type.clone(),
                reason: format!(
                    "Storage queues don't support {} redundancy",
                    self.account_replication_type
                ),
            };
            diagnostic.emit();
            return Err(diagnostic);
        };

        let mut cost_components = vec![self.data_storage_cost_component(rule.replication)];
        cost_components.extend(self.operations_cost_components(rule));
        cost_components.extend(self.geo_replication_data_transfer_cost_components(rule));

        Ok(Resource {
            name: self.address.clone(),
            resource_type: CORE_TYPE.to_string(),
            usage_schema: self.usage_schema(),
            cost_components,
        })
    }
}
