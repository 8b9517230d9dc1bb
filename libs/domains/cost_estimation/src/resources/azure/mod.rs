//! Azure resource cost models

pub mod storage_queue;

use strum::{Display, EnumIter, EnumString};

use crate::models::{AttributeFilter, PriceFilter, ProductFilter};

pub use storage_queue::StorageQueue;

pub(crate) const VENDOR_NAME: &str = "azure";

/// Storage account redundancy.
///
/// Parsing ignores case; `Display` yields the catalog's upper-case token.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum AccountReplicationType {
    #[strum(serialize = "LRS")]
    Lrs,
    #[strum(serialize = "ZRS")]
    Zrs,
    #[strum(serialize = "GRS")]
    Grs,
    #[strum(serialize = "RA-GRS")]
    RaGrs,
    #[strum(serialize = "GZRS")]
    Gzrs,
    #[strum(serialize = "RA-GZRS")]
    RaGzrs,
}

/// Product filter for a meter in the Azure `Storage` service
pub(crate) fn storage_product_filter(
    region: &str,
    attribute_filters: Vec<AttributeFilter>,
) -> ProductFilter {
    ProductFilter {
        vendor_name: Some(VENDOR_NAME.to_string()),
        region: Some(region.to_string()),
        service: Some("Storage".to_string()),
        product_family: Some("Storage".to_string()),
        sku: None,
        attribute_filters,
    }
}

/// Pay-as-you-go price from the first tier
pub(crate) fn consumption_price_filter() -> PriceFilter {
    PriceFilter {
        purchase_option: Some("Consumption".to_string()),
        start_usage_amount: Some("0".to_string()),
        ..Default::default()
    }
}
