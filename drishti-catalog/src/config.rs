//! Configuration for drishti-catalog

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path};
use std::str::FromStr;

const MAX_INITIAL_CAPACITY: usize = 1_000_000;

/// How ids supplied by `train` interact with the id counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdPolicy {
    /// `train` never moves the counter. `create_empty_object` steps over ids
    /// that training already occupied.
    #[default]
    Sequential,
    /// `train` with an id at or past the counter advances the counter beyond it.
    Reconcile,
}

impl fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdPolicy::Sequential => f.write_str("sequential"),
            IdPolicy::Reconcile => f.write_str("reconcile"),
        }
    }
}

impl FromStr for IdPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(IdPolicy::Sequential),
            "reconcile" => Ok(IdPolicy::Reconcile),
            other => Err(ConfigError::Parse(format!("Unknown id policy: '{}'", other))),
        }
    }
}

/// Catalog configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Reconciliation between caller-supplied and counter-issued ids
    pub id_policy: IdPolicy,
    /// Number of objects to preallocate room for
    pub initial_capacity: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            id_policy: IdPolicy::Sequential,
            initial_capacity: 64,
        }
    }
}

impl CatalogConfig {
    /// Load configuration from a JSON or TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.components().any(|c| matches!(c, Component::ParentDir)) {
            return Err(ConfigError::Invalid(format!(
                "Path traversal detected: {:?}",
                path
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse configuration text: JSON when it starts with `{`, TOML otherwise
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        if content.trim_start().starts_with('{') {
            return serde_json::from_str::<CatalogConfig>(content)
                .map_err(|e| ConfigError::Parse(format!("Invalid JSON config: {}", e)));
        }

        toml::from_str::<CatalogConfig>(content)
            .map_err(|e| ConfigError::Parse(format!("Invalid TOML config: {}", e)))
    }

    /// Defaults overridden by `DRISHTI_ID_POLICY` and `DRISHTI_INITIAL_CAPACITY`
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(policy) = std::env::var("DRISHTI_ID_POLICY") {
            config.id_policy = policy.parse()?;
        }

        if let Ok(capacity) = std::env::var("DRISHTI_INITIAL_CAPACITY") {
            config.initial_capacity = capacity.trim().parse().map_err(|_| {
                ConfigError::Parse(format!("Invalid DRISHTI_INITIAL_CAPACITY: '{}'", capacity))
            })?;
        }

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(ConfigError::Invalid(format!(
                "Initial capacity {} exceeds maximum of {}",
                self.initial_capacity, MAX_INITIAL_CAPACITY
            )));
        }
        Ok(())
    }
}
