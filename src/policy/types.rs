//! Policy type definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named capability token.
///
/// Permissions are pure value types: two permissions are equal exactly when
/// their names are equal, and a permission carries no behavior of its own.
/// The serde representation is the bare name string, so configuration files
/// can declare permissions as plain strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission {
    name: String,
}

impl Permission {
    /// Create a permission with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Permission name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Permission {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Permission {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Detailed outcome of a permission check
#[derive(Debug, Clone)]
pub struct AccessDecision {
    /// Whether the permission is granted
    pub granted: bool,
    /// Role that decided the outcome, if one was resolved
    pub role: Option<String>,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}

impl AccessDecision {
    /// A granted decision made by the given role
    pub(crate) fn granted_by(role: &str) -> Self {
        Self {
            granted: true,
            role: Some(role.to_string()),
            denial_reason: None,
        }
    }

    /// A denied decision with the given reason
    pub(crate) fn denied(role: Option<&str>, reason: String) -> Self {
        Self {
            granted: false,
            role: role.map(str::to_string),
            denial_reason: Some(reason),
        }
    }
}
