use serde::{Deserialize, Serialize};

use super::duration::parse_duration;
use crate::errors::DomainError;
use crate::retention::RetentionPolicy;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RetentionConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Record count that triggers a purge.
    #[serde(default = "default_max_cap")]
    pub max_cap: u64,

    /// Record count left behind after a purge.
    #[serde(default = "default_min_cap")]
    pub min_cap: u64,

    /// How often the store size is evaluated, e.g. `"30m"`.
    #[serde(default = "default_interval")]
    pub interval: String,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_cap: default_max_cap(),
            min_cap: default_min_cap(),
            interval: default_interval(),
        }
    }
}

impl RetentionConfig {
    pub fn to_policy(&self) -> Result<RetentionPolicy, DomainError> {
        let interval = parse_duration(&self.interval)
            .map_err(|e| DomainError::ConfigInvalid(e.to_string()))?;
        RetentionPolicy::new(self.max_cap, self.min_cap, interval)
    }
}

fn default_true() -> bool {
    true
}

fn default_max_cap() -> u64 {
    5_000
}

fn default_min_cap() -> u64 {
    4_000
}

fn default_interval() -> String {
    "30m".to_string()
}
