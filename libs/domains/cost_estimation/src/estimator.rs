//! Estimation pipeline: usage overlay followed by cost component derivation.

use observability::EstimationMetrics;
use tracing::{debug, info, instrument};

use crate::config::EstimatorConfig;
use crate::diagnostics::Diagnostic;
use crate::error::UsageResult;
use crate::models::Resource;
use crate::resources::{CoreResource, ResourceCostModel};
use crate::usage::{UsageMap, load_from_file};

/// Outcome of estimating a batch of resources
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildReport {
    /// Built resources, in input order, skipped ones left out
    pub resources: Vec<Resource>,
    pub diagnostics: Vec<Diagnostic>,
}

impl BuildReport {
    pub fn skipped(&self) -> impl Iterator<Item = &str> {
        self.diagnostics.iter().filter_map(|d| match d {
            Diagnostic::UnsupportedConfiguration { address, .. } => Some(address.as_str()),
            Diagnostic::FieldProjection { .. } => None,
        })
    }
}

/// Applies one usage map to batches of resources
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    usage: UsageMap,
}

impl Estimator {
    pub fn new(usage: UsageMap) -> Self {
        Self { usage }
    }

    /// Load the configured usage file, if any
    pub fn from_config(config: &EstimatorConfig) -> UsageResult<Self> {
        let usage = match &config.usage_file {
            Some(path) => load_from_file(path)?,
            None => UsageMap::new(),
        };
        Ok(Self::new(usage))
    }

    pub fn usage(&self) -> &UsageMap {
        &self.usage
    }

    /// Project usage onto each resource once, then build it.
    ///
    /// Problems with one resource never stop the others.
    #[instrument(skip_all, fields(resources = resources.len()))]
    pub fn estimate(&self, resources: Vec<CoreResource>) -> BuildReport {
        let mut report = BuildReport::default();

        for mut resource in resources {
            if let Some(usage) = self.usage.get(resource.address()) {
                let diagnostics = resource.populate_usage(usage);
                for _ in &diagnostics {
                    EstimationMetrics::record_usage_projection_warning(resource.core_type());
                }
                report.diagnostics.extend(diagnostics);
            }

            match resource.build_resource() {
                Ok(built) => {
                    debug!(
                        address = %built.name,
                        components = built.cost_components.len(),
                        "Built resource"
                    );
                    EstimationMetrics::record_resource_built(
                        resource.core_type(),
                        built.cost_components.len(),
                    );
                    report.resources.push(built);
                }
                Err(diagnostic) => {
                    EstimationMetrics::record_resource_skipped(resource.core_type());
                    report.diagnostics.push(diagnostic);
                }
            }
        }

        info!(
            built = report.resources.len(),
            diagnostics = report.diagnostics.len(),
            "Estimated resources"
        );

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::StorageQueue;
    use crate::usage::UsageData;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn usage_map(entries: &[(&str, serde_json::Value)]) -> UsageMap {
        entries
            .iter()
            .map(|(address, value)| {
                (
                    address.to_string(),
                    UsageData::from_value(*address, value.clone()),
                )
            })
            .collect()
    }

    #[test]
    fn test_estimate_without_usage() {
        let report = Estimator::default().estimate(vec![
            StorageQueue::new("q.lrs", "eastus", "LRS").into(),
            StorageQueue::new("q.ragzrs", "eastus", "RA-GZRS").into(),
        ]);

        assert!(report.diagnostics.is_empty());
        assert_eq!(report.resources.len(), 2);
        assert_eq!(report.resources[0].name, "q.lrs");
        assert_eq!(report.resources[1].name, "q.ragzrs");
    }

    #[test]
    fn test_unsupported_resource_does_not_stop_siblings() {
        let report = Estimator::default().estimate(vec![
            StorageQueue::new("q.a", "eastus", "GRS").into(),
            StorageQueue::new("q.bad", "eastus", "XYZ").into(),
            StorageQueue::new("q.b", "eastus", "zrs").into(),
        ]);

        let names: Vec<&str> = report.resources.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["q.a", "q.b"]);
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.skipped().collect::<Vec<_>>(), vec!["q.bad"]);
    }

    #[test]
    fn test_usage_is_matched_by_address() {
        let estimator = Estimator::new(usage_map(&[
            ("q.a", json!({"storage_gb": 50})),
            ("q.other", json!({"storage_gb": 999})),
        ]));

        let report = estimator.estimate(vec![
            StorageQueue::new("q.a", "eastus", "LRS").into(),
            StorageQueue::new("q.b", "eastus", "LRS").into(),
        ]);

        let capacity = |i: usize| {
            report.resources[i]
                .cost_component("Capacity")
                .unwrap()
                .monthly_quantity
        };
        assert_eq!(capacity(0), Some(dec!(50)));
        assert_eq!(capacity(1), None);
    }

    #[test]
    fn test_projection_warning_is_reported_and_resource_still_built() {
        let estimator = Estimator::new(usage_map(&[(
            "q.a",
            json!({"storage_gb": "a lot", "monthly_class_2_operations": 20000}),
        )]));

        let report = estimator.estimate(vec![StorageQueue::new("q.a", "eastus", "LRS").into()]);

        assert_eq!(report.resources.len(), 1);
        assert_eq!(report.diagnostics.len(), 1);
        assert!(matches!(
            &report.diagnostics[0],
            Diagnostic::FieldProjection { key, .. } if key == "storage_gb"
        ));
        assert_eq!(report.skipped().count(), 0);

        let resource = &report.resources[0];
        assert_eq!(
            resource.cost_component("Capacity").unwrap().monthly_quantity,
            None
        );
        assert_eq!(
            resource
                .cost_component("Class 2 operations")
                .unwrap()
                .monthly_quantity,
            Some(dec!(2))
        );
    }

    #[test]
    fn test_from_config_without_usage_file() {
        let estimator = Estimator::from_config(&EstimatorConfig::default()).unwrap();
        assert!(estimator.usage().is_empty());
    }
}
