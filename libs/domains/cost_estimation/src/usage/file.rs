//! Usage file loading.
//!
//! ```yaml
//! version: 0.1
//! resource_usage:
//!   azurerm_storage_queue.example:
//!     storage_gb: 1000
//!     monthly_class_1_operations: 100000
//! ```

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

use observability::EstimationMetrics;

use super::data::{UsageData, UsageMap};
use crate::error::{UsageError, UsageResult};

pub const MIN_USAGE_FILE_VERSION: &str = "0.1";
pub const MAX_USAGE_FILE_VERSION: &str = "0.1";

/// Raw usage file contents
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsageFile {
    #[serde(default, deserialize_with = "deserialize_version")]
    pub version: String,
    #[serde(default, deserialize_with = "deserialize_resource_usage")]
    pub resource_usage: HashMap<String, Value>,
}

impl UsageFile {
    /// Reinterpret `resource_usage` as usage data keyed by address
    pub fn into_usage_map(self) -> UsageMap {
        self.resource_usage
            .into_iter()
            .map(|(address, value)| {
                let data = UsageData::from_value(address.clone(), value);
                (address, data)
            })
            .collect()
    }
}

// Plain scalars arrive as their raw text, so `version: 0.10` stays "0.10"
fn deserialize_version<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_resource_usage<'de, D>(deserializer: D) -> Result<HashMap<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<HashMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Load usage data from a file.
///
/// An empty path means no usage file was supplied and yields an empty map.
pub fn load_from_file(path: impl AsRef<Path>) -> UsageResult<UsageMap> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Ok(UsageMap::new());
    }

    debug!(path = %path.display(), "Loading usage data from usage file");

    let contents = std::fs::read(path).map_err(|source| {
        EstimationMetrics::record_usage_file_rejected("read");
        UsageError::FileRead {
            path: path.to_path_buf(),
            source,
        }
    })?;

    parse_yaml(&contents)
}

/// Parse usage YAML and check its version
pub fn parse_yaml(contents: &[u8]) -> UsageResult<UsageMap> {
    let usage_file: UsageFile = serde_yaml::from_slice(contents).inspect_err(|_| {
        EstimationMetrics::record_usage_file_rejected("parse");
    })?;

    if !check_version(&usage_file.version) {
        EstimationMetrics::record_usage_file_rejected("version");
        return Err(UsageError::UnsupportedVersion {
            found: usage_file.version,
            min: MIN_USAGE_FILE_VERSION,
            max: MAX_USAGE_FILE_VERSION,
        });
    }

    let usage_map = usage_file.into_usage_map();
    EstimationMetrics::record_usage_file_loaded(usage_map.len());
    debug!(resources = usage_map.len(), "Loaded usage data");

    Ok(usage_map)
}

/// Whether `version` falls within the supported range, bounds included.
///
/// A leading `v` is optional and build metadata (`0.1.0+build`) is ignored.
/// Malformed versions are never supported.
pub fn check_version(version: &str) -> bool {
    let (Some(v), Some(min), Some(max)) = (
        UsageFileVersion::parse(version),
        UsageFileVersion::parse(MIN_USAGE_FILE_VERSION),
        UsageFileVersion::parse(MAX_USAGE_FILE_VERSION),
    ) else {
        return false;
    };

    v >= min && v <= max
}

/// `vMAJOR[.MINOR[.PATCH]]`, missing components count as zero.
///
/// A full `MAJOR.MINOR.PATCH` may carry `+build` metadata, which takes no
/// part in ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UsageFileVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl UsageFileVersion {
    pub fn parse(version: &str) -> Option<Self> {
        let trimmed = version.strip_prefix('v').unwrap_or(version);
        let (core, build) = match trimmed.split_once('+') {
            Some((core, build)) => (core, Some(build)),
            None => (trimmed, None),
        };
        if core.is_empty() || build.is_some_and(|b| !is_build_metadata(b)) {
            return None;
        }

        let mut parts = [0u64; 3];
        let mut count = 0;
        for part in core.split('.') {
            if count == parts.len() || part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit())
            {
                return None;
            }
            // no leading zeros, same as semver
            if part.len() > 1 && part.starts_with('0') {
                return None;
            }
            parts[count] = part.parse().ok()?;
            count += 1;
        }

        // shorthand versions cannot carry build metadata
        if build.is_some() && count < parts.len() {
            return None;
        }

        Some(Self {
            major: parts[0],
            minor: parts[1],
            patch: parts[2],
        })
    }
}

fn is_build_metadata(build: &str) -> bool {
    build.split('.').all(|ident| {
        !ident.is_empty() && ident.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
    })
}
