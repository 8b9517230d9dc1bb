//! Observability utilities for cost estimation.
//!
//! This crate provides:
//! - Prometheus metrics recording and rendering
//! - Estimation metrics for usage loading and resource builds
//!
//! # Example
//!
//! ```rust,ignore
//! use observability::{init_metrics, render_metrics, EstimationMetrics};
//!
//! // Initialize metrics recorder
//! init_metrics()?;
//!
//! // Record estimation events
//! EstimationMetrics::record_usage_file_loaded(12);
//! EstimationMetrics::record_resource_built("StorageQueue", 3);
//!
//! // Dump for a pushgateway or a CI artifact
//! println!("{}", render_metrics());
//! ```

pub mod estimation;

pub use estimation::EstimationMetrics;

// Re-export metrics macros for convenience
pub use metrics::{counter, gauge, histogram};

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing::info;

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Initialize the Prometheus metrics recorder.
///
/// Call once at startup. Later calls return the existing handle.
/// Fails when another global recorder is already installed.
pub fn init_metrics() -> Result<&'static PrometheusHandle, BuildError> {
    METRICS_HANDLE.get_or_try_init(|| {
        let handle = PrometheusBuilder::new().install_recorder()?;

        info!("Prometheus metrics recorder initialized");

        register_metric_descriptions();

        Ok(handle)
    })
}

/// Get the metrics handle (must call init_metrics first)
pub fn get_metrics_handle() -> Option<&'static PrometheusHandle> {
    METRICS_HANDLE.get()
}

/// Render all metrics in the Prometheus text format
pub fn render_metrics() -> String {
    match get_metrics_handle() {
        Some(handle) => handle.render(),
        None => "# Metrics not initialized\n".to_string(),
    }
}

/// Register metric descriptions for documentation
fn register_metric_descriptions() {
    use metrics::describe_counter;
    use metrics::describe_histogram;

    // Usage file metrics
    describe_counter!(
        "usage_files_loaded_total",
        "Usage files loaded and accepted"
    );
    describe_counter!(
        "usage_files_rejected_total",
        "Usage files rejected by reason (read, parse, version)"
    );
    describe_histogram!(
        "usage_file_resources",
        "Resource addresses carried by each loaded usage file"
    );

    // Resource build metrics
    describe_counter!(
        "estimation_resources_built_total",
        "Resources turned into cost components, by resource type"
    );
    describe_counter!(
        "estimation_resources_skipped_total",
        "Resources skipped for unsupported configuration, by resource type"
    );
    describe_counter!(
        "estimation_cost_components_total",
        "Cost components emitted, by resource type"
    );
    describe_counter!(
        "usage_projection_warnings_total",
        "Usage values ignored because they did not match the declared type"
    );
}
