//! Error handling for the policy engine
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for the policy engine
pub type Result<T> = std::result::Result<T, AccessError>;

/// Main error type for the policy engine
#[derive(Error, Debug)]
pub enum AccessError {
    /// The requested permission is not part of the configured permission set
    #[error("permission `{0}` is not declared in the permission set")]
    PermissionNotFound(String),

    /// The resolved role name has no registered role
    #[error("no role named `{0}` is registered")]
    RoleNotFound(String),

    /// A role was asked to filter on a permission it does not grant
    #[error("role `{role}` does not grant permission `{permission}`")]
    PermissionNotGranted {
        /// Name of the role that lacks the grant
        role: String,
        /// Permission the caller asked for
        permission: String,
    },

    /// A role name was registered twice during policy construction
    #[error("role `{0}` is already registered")]
    DuplicateRole(String),

    /// Identity resolution failed in the identity provider
    #[error("identity resolution failed: {0}")]
    Identity(String),

    /// Role-name resolution failed in the role-name provider
    #[error("role resolution failed: {0}")]
    RoleResolution(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),
}

impl AccessError {
    /// Create an identity-resolution error
    pub fn identity(message: impl Into<String>) -> Self {
        Self::Identity(message.into())
    }

    /// Create a role-resolution error
    pub fn role_resolution(message: impl Into<String>) -> Self {
        Self::RoleResolution(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
