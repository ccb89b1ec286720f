//! Policy configuration models

use serde::{Deserialize, Serialize};

use crate::policy::Permission;

/// Declarative description of a policy: the optional permission set and the
/// role definitions.
///
/// Capabilities are code, not data, so a configuration names the grants and
/// the application binds each one to a capability when the policy is built
/// (see `Policy::from_config`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Declared permission names. Absent means requested permission names
    /// are not validated; an empty list means no name is valid.
    #[serde(default)]
    pub permissions: Option<Vec<Permission>>,
    /// Role definitions
    #[serde(default)]
    pub roles: Vec<RoleConfig>,
}

/// A single role definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleConfig {
    /// Role name, unique within the policy
    pub name: String,
    /// Permission names this role grants
    #[serde(default)]
    pub grants: Vec<String>,
}
