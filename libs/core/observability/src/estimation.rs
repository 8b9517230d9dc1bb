//! Metrics for usage loading and resource builds.

use metrics::{counter, histogram};

/// Estimation metrics recorder
pub struct EstimationMetrics;

impl EstimationMetrics {
    // =========================================================================
    // Usage File Metrics
    // =========================================================================

    /// Record an accepted usage file and how many addresses it carried
    pub fn record_usage_file_loaded(resources: usize) {
        counter!("usage_files_loaded_total").increment(1);
        histogram!("usage_file_resources").record(resources as f64);

        tracing::debug!(resources = resources, "Usage file loaded");
    }

    /// Record a rejected usage file. `reason` is one of read, parse or version.
    pub fn record_usage_file_rejected(reason: &str) {
        counter!("usage_files_rejected_total", "reason" => reason.to_string()).increment(1);

        tracing::debug!(reason = reason, "Usage file rejected");
    }

    // =========================================================================
    // Resource Build Metrics
    // =========================================================================

    /// Record a resource that produced cost components
    pub fn record_resource_built(resource_type: &str, components: usize) {
        counter!(
            "estimation_resources_built_total",
            "resource_type" => resource_type.to_string()
        )
        .increment(1);
        counter!(
            "estimation_cost_components_total",
            "resource_type" => resource_type.to_string()
        )
        .increment(components as u64);

        tracing::debug!(
            resource_type = resource_type,
            components = components,
            "Resource built"
        );
    }

    /// Record a resource skipped for an unsupported configuration
    pub fn record_resource_skipped(resource_type: &str) {
        counter!(
            "estimation_resources_skipped_total",
            "resource_type" => resource_type.to_string()
        )
        .increment(1);
    }

    /// Record a usage value dropped during projection
    pub fn record_usage_projection_warning(resource_type: &str) {
        counter!(
            "usage_projection_warnings_total",
            "resource_type" => resource_type.to_string()
        )
        .increment(1);
    }
}
