use core_config::{ConfigError, FromEnv, env_or_default};
use std::path::PathBuf;

/// Estimator configuration
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EstimatorConfig {
    /// Usage file to overlay, None when no usage estimates are supplied
    pub usage_file: Option<PathBuf>,
}

impl EstimatorConfig {
    pub fn new(usage_file: Option<PathBuf>) -> Self {
        Self { usage_file }
    }
}

impl FromEnv for EstimatorConfig {
    /// Reads USAGE_FILE; unset or empty means no usage file
    fn from_env() -> Result<Self, ConfigError> {
        let usage_file = env_or_default("USAGE_FILE", "");
        Ok(Self {
            usage_file: (!usage_file.trim().is_empty()).then(|| PathBuf::from(usage_file)),
        })
    }
}
