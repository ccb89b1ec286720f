//! Configuration validation
//!
//! This module provides validation logic for policy configuration.

use std::collections::HashSet;

use tracing::debug;

use super::models::{PolicyConfig, RoleConfig};
use crate::utils::error::{AccessError, Result};

/// Validation of configuration structures
pub trait Validate {
    /// Validate the configuration
    fn validate(&self) -> Result<()>;
}

impl Validate for PolicyConfig {
    fn validate(&self) -> Result<()> {
        debug!("Validating policy configuration");

        if let Some(permissions) = &self.permissions {
            let mut seen = HashSet::new();
            for permission in permissions {
                if permission.name().is_empty() {
                    return Err(AccessError::config("Permission name cannot be empty"));
                }
                if !seen.insert(permission.name()) {
                    return Err(AccessError::config(format!(
                        "Permission `{}` is declared twice",
                        permission.name()
                    )));
                }
            }
        }

        let mut seen = HashSet::new();
        for role in &self.roles {
            role.validate()?;
            if !seen.insert(role.name.as_str()) {
                return Err(AccessError::DuplicateRole(role.name.clone()));
            }
        }

        Ok(())
    }
}

impl Validate for RoleConfig {
    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(AccessError::config("Role name cannot be empty"));
        }

        for grant in &self.grants {
            if grant.is_empty() {
                return Err(AccessError::config(format!(
                    "Role `{}` has an empty grant name",
                    self.name
                )));
            }
        }

        // Grants outside the declared permission set are fine: the set is
        // only consulted when a permission is checked or filtered on.
        Ok(())
    }
}
