//! Cost Estimation Domain
//!
//! Turns declared cloud resources into priced cost components and overlays
//! user-supplied usage estimates onto them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │ Usage file  │  ← versioned YAML, loaded once
//! └──────┬──────┘
//!        │ UsageMap
//! ┌──────▼──────┐
//! │  Estimator  │  ← projects usage, builds each resource, isolates failures
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Cost models │  ← one per resource kind (ResourceCostModel)
//! └──────┬──────┘
//!        │ CostComponent + ProductFilter/PriceFilter
//!        ▼
//!   price catalog (external)
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod estimator;
pub mod models;
pub mod resources;
pub mod usage;

pub use config::EstimatorConfig;
pub use diagnostics::Diagnostic;
pub use error::{UsageError, UsageResult};
pub use estimator::{BuildReport, Estimator};
pub use models::{AttributeFilter, CostComponent, PriceFilter, ProductFilter, Resource};
pub use resources::{AccountReplicationType, CoreResource, ResourceCostModel, StorageQueue};
pub use usage::{UsageData, UsageItem, UsageMap, UsageValueType};
