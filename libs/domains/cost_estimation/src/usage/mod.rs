//! Usage overlay: loading usage files and projecting them onto resources.

pub mod data;
pub mod file;
pub mod schema;

pub use data::{UsageData, UsageMap};
pub use file::{
    MAX_USAGE_FILE_VERSION, MIN_USAGE_FILE_VERSION, UsageFile, UsageFileVersion, check_version,
    load_from_file, parse_yaml,
};
pub use schema::{
    UsageField, UsageFields, UsageItem, UsageValue, UsageValueType, populate_usage, usage_schema,
};
