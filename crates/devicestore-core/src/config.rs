//! Runtime configuration read from the environment.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use crate::error::{Error, Result};

/// Environment variable naming a JSON seed file to load instead of the sample catalog.
pub const SEED_ENV: &str = "DEVICESTORE_SEED";
/// Environment variable holding the log filter used when `RUST_LOG` is unset.
pub const LOG_ENV: &str = "DEVICESTORE_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Top-level DeviceStore configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Seed file with a JSON array of devices. `None` means the built-in sample.
    pub seed_file: Option<PathBuf>,
    /// Fallback `tracing` filter directive.
    pub log_filter: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl StoreConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var(SEED_ENV).ok(),
            std::env::var(LOG_ENV).ok(),
        )
    }

    /// Build configuration from raw variable values. Empty values count as unset.
    pub fn from_vars(seed: Option<String>, log: Option<String>) -> Result<Self> {
        let seed_file = match non_empty(seed) {
            Some(raw) => {
                let path = PathBuf::from(raw);
                if !path.is_file() {
                    return Err(Error::Config(format!(
                        "{} points to {}, which is not a file",
                        SEED_ENV,
                        path.display()
                    )));
                }
                Some(path)
            }
            None => None,
        };

        let log_filter = non_empty(log).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        debug!(?seed_file, %log_filter, "Store configuration resolved");

        Ok(Self {
            seed_file,
            log_filter,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
