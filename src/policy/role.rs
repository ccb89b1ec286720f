//! Role definition and per-role dispatch

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::capability::Capability;
use super::context::AccessContext;
use crate::utils::error::{AccessError, Result};

/// A named bundle of granted capabilities.
///
/// A role maps permission names to the capability that implements them. The
/// grant map may be empty, and it may name permissions outside the policy's
/// declared permission set; the declared set is only consulted by the policy
/// at check/filter time. Roles are immutable once a policy owns them.
pub struct Role<I, O>
where
    I: Send + Sync + 'static,
    O: Send + 'static,
{
    name: String,
    grants: HashMap<String, Arc<dyn Capability<I, O>>>,
}

impl<I, O> Role<I, O>
where
    I: Send + Sync + 'static,
    O: Send + 'static,
{
    /// Create a role with no grants
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grants: HashMap::new(),
        }
    }

    /// Attach a capability for a permission, consuming and returning the role
    pub fn grant(
        self,
        permission: impl Into<String>,
        capability: impl Capability<I, O> + 'static,
    ) -> Self {
        self.grant_shared(permission, Arc::new(capability))
    }

    /// Attach an already-shared capability for a permission
    pub fn grant_shared(
        mut self,
        permission: impl Into<String>,
        capability: Arc<dyn Capability<I, O>>,
    ) -> Self {
        self.grants.insert(permission.into(), capability);
        self
    }

    /// Role name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this role has a capability registered for the permission
    pub fn has_grant(&self, permission: &str) -> bool {
        self.grants.contains_key(permission)
    }

    /// Names of all permissions this role grants
    pub fn grant_names(&self) -> impl Iterator<Item = &str> {
        self.grants.keys().map(String::as_str)
    }

    /// Check whether the identity holds the permission under this role.
    ///
    /// A permission with no registered capability is a plain deny: the role
    /// simply does not have it. This is not an error condition.
    pub async fn check(&self, identity: &I, permission: &str, ctx: &AccessContext) -> bool {
        match self.grants.get(permission) {
            Some(capability) => capability.check(identity, permission, ctx).await,
            None => {
                debug!("Role `{}` has no grant for `{}`, denying", self.name, permission);
                false
            }
        }
    }

    /// Filter objects down to those the identity may access.
    ///
    /// Unlike [`check`](Self::check), a missing grant is an error here:
    /// there is no boolean fallback for filtering, and callers must be able
    /// to tell "nothing is visible" apart from "this role cannot filter on
    /// this permission at all".
    pub async fn filter(
        &self,
        identity: &I,
        permission: &str,
        objects: Vec<O>,
        ctx: &AccessContext,
    ) -> Result<Vec<O>> {
        match self.grants.get(permission) {
            Some(capability) => Ok(capability.filter(identity, permission, objects, ctx).await),
            None => Err(AccessError::PermissionNotGranted {
                role: self.name.clone(),
                permission: permission.to_string(),
            }),
        }
    }
}

impl<I, O> Clone for Role<I, O>
where
    I: Send + Sync + 'static,
    O: Send + 'static,
{
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            grants: self.grants.clone(),
        }
    }
}

impl<I, O> fmt::Debug for Role<I, O>
where
    I: Send + Sync + 'static,
    O: Send + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Role")
            .field("name", &self.name)
            .field("grants", &self.grants.keys().collect::<Vec<_>>())
            .finish()
    }
}
