//! Resource cost models.
//!
//! Every supported resource kind implements [`ResourceCostModel`] and is
//! wrapped in [`CoreResource`] so a batch of mixed kinds can be estimated
//! together.

pub mod azure;

use crate::diagnostics::Diagnostic;
use crate::models::Resource;
use crate::usage::{UsageData, UsageItem};

pub use azure::{AccountReplicationType, StorageQueue};

/// Capability contract shared by all resource kinds
pub trait ResourceCostModel {
    /// Name of the resource kind, e.g. `StorageQueue`
    fn core_type(&self) -> &'static str;

    fn address(&self) -> &str;

    /// Usage keys this kind accepts
    fn usage_schema(&self) -> Vec<UsageItem>;

    /// Overlay usage estimates onto this resource. Must run before
    /// [`build_resource`](Self::build_resource).
    fn populate_usage(&mut self, usage: &UsageData) -> Vec<Diagnostic>;

    /// Derive the ordered cost components.
    ///
    /// `Err` means the configuration has no pricing mapping and the resource
    /// should be skipped. It is not fatal for the rest of the run.
    fn build_resource(&self) -> Result<Resource, Diagnostic>;
}

/// All resource kinds known to the estimator
#[derive(Debug, Clone, PartialEq)]
pub enum CoreResource {
    StorageQueue(StorageQueue),
}

impl CoreResource {
    fn model(&self) -> &dyn ResourceCostModel {
        match self {
            CoreResource::StorageQueue(r) => r,
        }
    }

    fn model_mut(&mut self) -> &mut dyn ResourceCostModel {
        match self {
            CoreResource::StorageQueue(r) => r,
        }
    }
}

impl ResourceCostModel for CoreResource {
    fn core_type(&self) -> &'static str {
        self.model().core_type()
    }

    fn address(&self) -> &str {
        self.model().address()
    }

    fn usage_schema(&self) -> Vec<UsageItem> {
        self.model().usage_schema()
    }

    fn populate_usage(&mut self, usage: &UsageData) -> Vec<Diagnostic> {
        self.model_mut().populate_usage(usage)
    }

    fn build_resource(&self) -> Result<Resource, Diagnostic> {
        self.model().build_resource()
    }
}

impl From<StorageQueue> for CoreResource {
    fn from(resource: StorageQueue) -> Self {
        CoreResource::StorageQueue(resource)
    }
}
