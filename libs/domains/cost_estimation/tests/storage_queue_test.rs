//! Cost model tests for Azure storage queues
//!
//! These tests drive the public API only:
//! - which components appear for each replication type
//! - component ordering
//! - filter text normalisation
//! - skip behaviour for unsupported replication types

use domain_cost_estimation::*;

const SUPPORTED: [&str; 6] = ["LRS", "ZRS", "GRS", "RA-GRS", "GZRS", "RA-GZRS"];

fn build(replication: &str) -> Result<Resource, Diagnostic> {
    StorageQueue::new("azurerm_storage_queue.example", "uksouth", replication).build_resource()
}

fn casings(value: &str) -> Vec<String> {
    let mut mixed = String::new();
    for (i, c) in value.chars().enumerate() {
        if i % 2 == 0 {
            mixed.push(c.to_ascii_lowercase());
        } else {
            mixed.push(c.to_ascii_uppercase());
        }
    }
    vec![value.to_uppercase(), value.to_lowercase(), mixed]
}

#[test]
fn test_supported_replication_types_build_in_any_case() {
    for replication in SUPPORTED {
        for input in casings(replication) {
            let resource = build(&input).unwrap_or_else(|d| panic!("{input}: {d}"));
            assert!(!resource.cost_components.is_empty());
            assert_eq!(resource.cost_components[0].name, "Capacity");
            assert_eq!(resource.name, "azurerm_storage_queue.example");
        }
    }
}

#[test]
fn test_build_is_deterministic() {
    for replication in SUPPORTED {
        assert_eq!(build(replication).unwrap(), build(replication).unwrap());
    }
}

#[test]
fn test_unsupported_replication_types_yield_one_diagnostic() {
    for replication in ["XYZ", "", "RAGRS", "PREMIUM_LRS"] {
        let report = Estimator::default().estimate(vec![
            StorageQueue::new("azurerm_storage_queue.example", "uksouth", replication).into(),
        ]);
        assert!(report.resources.is_empty(), "{replication} should be skipped");
        assert_eq!(report.diagnostics.len(), 1);
        assert!(matches!(
            &report.diagnostics[0],
            Diagnostic::UnsupportedConfiguration { value, .. } if value == replication
        ));
    }
}

#[test]
fn test_class_1_operations_omitted_for_gzrs() {
    for replication in SUPPORTED {
        let resource = build(replication).unwrap();
        let has_class_1 = resource.cost_component("Class 1 operations").is_some();
        let has_class_2 = resource.cost_component("Class 2 operations").is_some();

        assert_eq!(
            has_class_1,
            !matches!(replication, "GZRS" | "RA-GZRS"),
            "{replication}"
        );
        assert!(has_class_2, "{replication}");
    }
}

#[test]
fn test_geo_replication_only_for_geo_redundant_types() {
    for replication in SUPPORTED {
        let resource = build(replication).unwrap();
        let transfers = resource
            .cost_components
            .iter()
            .filter(|c| c.name == "Geo-replication data transfer")
            .count();

        let expected = if matches!(replication, "LRS" | "ZRS") { 0 } else { 1 };
        assert_eq!(transfers, expected, "{replication}");
    }
}

#[test]
fn test_replication_token_is_upper_cased_in_filters() {
    for replication in SUPPORTED {
        for input in casings(replication) {
            let resource = build(&input).unwrap();
            let capacity = resource.cost_component("Capacity").unwrap();
            let sku = capacity.product_filter.attribute("skuName").unwrap();
            let meter = capacity.product_filter.attribute("meterName").unwrap();
            assert_eq!(sku.value, Some(format!("Standard {replication}")));
            assert_eq!(meter.value, Some(format!("{replication} Data Stored")));

            let class_2 = resource.cost_component("Class 2 operations").unwrap();
            let sku = class_2.product_filter.attribute("skuName").unwrap();
            assert_eq!(sku.value, Some(format!("Standard {replication}")));
        }
    }
}

#[test]
fn test_end_to_end_lrs() {
    let resource = build("LRS").unwrap();
    assert_eq!(
        resource.component_names(),
        vec!["Capacity", "Class 1 operations", "Class 2 operations"]
    );
}

#[test]
fn test_end_to_end_ra_gzrs() {
    let resource = build("RA-GZRS").unwrap();
    assert_eq!(
        resource.component_names(),
        vec!["Capacity", "Class 2 operations", "Geo-replication data transfer"]
    );
}

#[test]
fn test_end_to_end_unsupported() {
    let err = build("XYZ").unwrap_err();
    assert_eq!(err.address(), "azurerm_storage_queue.example");
    assert!(err.to_string().contains("don't support XYZ redundancy"));
}

#[test]
fn test_filters_match_catalog_meter_names() {
    let resource = build("grs").unwrap();

    let class_1 = resource.cost_component("Class 1 operations").unwrap();
    let meter = class_1.product_filter.attribute("meterName").unwrap();
    assert!(meter.matches("GRS Class 1 Operations"));
    assert!(!meter.matches("GRS Class 2 Operations"));

    let capacity = resource.cost_component("Capacity").unwrap();
    let meter = capacity.product_filter.attribute("meterName").unwrap();
    assert!(meter.matches("GRS Data Stored"));
    assert!(!meter.matches("grs Data Stored"));
}

#[test]
fn test_resource_serializes_for_aggregation() {
    let resource = build("GZRS").unwrap();
    let json = serde_json::to_value(&resource).unwrap();

    assert_eq!(json["name"], "azurerm_storage_queue.example");
    assert_eq!(json["resource_type"], "StorageQueue");
    assert_eq!(json["cost_components"].as_array().unwrap().len(), 3);
    assert_eq!(
        json["cost_components"][1]["product_filter"]["attribute_filters"][2]["value_regex"],
        "/Class 2 Operations$/i"
    );
}
