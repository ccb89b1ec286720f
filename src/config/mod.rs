//! Configuration management for the policy engine
//!
//! This module handles loading and validation of declarative policy
//! configuration.

pub mod models;
pub mod validation;

pub use models::{PolicyConfig, RoleConfig};
pub use validation::Validate;

use std::path::Path;

use tracing::{debug, info};

use crate::utils::error::{AccessError, Result};

impl PolicyConfig {
    /// Load a policy configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading policy configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            AccessError::config(format!("Failed to read policy config file: {}", e))
        })?;

        let config = Self::from_yaml(&content)?;

        debug!("Policy configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate a policy configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: PolicyConfig = serde_yaml::from_str(content)
            .map_err(|e| AccessError::config(format!("Failed to parse policy config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }
}
