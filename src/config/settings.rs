//! User settings for Spendwise
//!
//! Display and projection preferences. Budget data itself lives in the
//! input store, not here.

use serde::{Deserialize, Serialize};

use super::paths::SpendwisePaths;
use crate::error::SpendwiseError;
use crate::models::{ReturnRateProfile, DEFAULT_HORIZON_YEARS};
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings for Spendwise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Return profile used when `project` is run without `--profile`
    #[serde(default)]
    pub default_return_profile: ReturnRateProfile,

    /// Horizon used when `project` is run without `--years`
    #[serde(default = "default_horizon_years")]
    pub default_horizon_years: u32,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_horizon_years() -> u32 {
    DEFAULT_HORIZON_YEARS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_return_profile: ReturnRateProfile::default(),
            default_horizon_years: default_horizon_years(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &SpendwisePaths) -> Result<Self, SpendwiseError> {
        read_json(paths.settings_file()).map_err(|e| {
            SpendwiseError::Config(format!("Failed to load settings: {}", e))
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendwisePaths) -> Result<(), SpendwiseError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
